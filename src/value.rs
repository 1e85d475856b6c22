//! Member value types.
//!
//! Values are compared against loosely typed input (`&dyn Any`) by
//! [`EnhancedEnum::validate`](crate::EnhancedEnum::validate) and
//! [`EnhancedEnum::from_any_value`](crate::EnhancedEnum::from_any_value).
//! An input of an unrelated type never matches.

use std::any::Any;
use std::fmt::Debug;

/// A type usable as the value of an enumeration member.
pub trait EnumValue: Clone + PartialEq + Debug + 'static {
    /// Returns true if `input` denotes this value.
    ///
    /// The default accepts only an input of exactly `Self` that compares equal.
    fn matches_input(&self, input: &dyn Any) -> bool {
        input.downcast_ref::<Self>().is_some_and(|v| v == self)
    }
}

/// Widens any primitive integer input to `i128`.
///
/// `u128` inputs above `i128::MAX` have no `i128` form and are handled
/// separately by the `u128` impl.
fn integer_input(input: &dyn Any) -> Option<i128> {
    macro_rules! widen {
        ($($ty:ty),+ $(,)?) => {
            $(
                if let Some(v) = input.downcast_ref::<$ty>() {
                    return i128::try_from(*v).ok();
                }
            )+
        };
    }

    widen!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    None
}

macro_rules! impl_integer_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EnumValue for $ty {
                fn matches_input(&self, input: &dyn Any) -> bool {
                    match (i128::try_from(*self), integer_input(input)) {
                        (Ok(own), Some(other)) => own == other,
                        _ => input.downcast_ref::<$ty>().is_some_and(|v| v == self),
                    }
                }
            }
        )+
    };
}

impl_integer_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl EnumValue for bool {}

impl EnumValue for char {}

impl EnumValue for &'static str {
    fn matches_input(&self, input: &dyn Any) -> bool {
        if let Some(s) = input.downcast_ref::<&'static str>() {
            return s == self;
        }
        input.downcast_ref::<String>().is_some_and(|s| s == self)
    }
}

impl EnumValue for String {
    fn matches_input(&self, input: &dyn Any) -> bool {
        if let Some(s) = input.downcast_ref::<String>() {
            return s == self;
        }
        input
            .downcast_ref::<&'static str>()
            .is_some_and(|s| s == self)
    }
}
