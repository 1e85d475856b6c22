//! The `EnhancedEnum` trait.
//!
//! # Overview
//!
//! An implementor supplies its members in declaration order together with
//! each member's name, value and position. Everything else is provided:
//!
//! - listing: [`list_all`](EnhancedEnum::list_all), [`to_tuple`](EnhancedEnum::to_tuple)
//! - membership: [`validate`](EnhancedEnum::validate)
//! - navigation: [`next`](EnhancedEnum::next), [`previous`](EnhancedEnum::previous)
//! - lookup: [`from_string`](EnhancedEnum::from_string), [`from_value`](EnhancedEnum::from_value)
//!
//! Implementations are normally generated with `#[derive(EnhancedEnum)]`.
//!
//! # Example
//!
//! ```ignore
//! use enhanced_enums::EnhancedEnum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
//! #[repr(u8)]
//! enum Color {
//!     Red = 1,
//!     Green = 2,
//!     Blue = 3,
//! }
//!
//! assert_eq!(Color::list_all(), vec![Color::Red, Color::Green, Color::Blue]);
//! assert_eq!(Color::Red.next(), Color::Green);
//! assert_eq!(Color::Red.previous(), Color::Blue);
//! assert_eq!(Color::from_value(2)?, Color::Green);
//! ```

use std::any::Any;
use std::fmt::Debug;

use crate::error::EnumError;
use crate::value::EnumValue;

/// A closed, declaration-ordered set of named members.
///
/// # Panics
///
/// [`next`](Self::next) and [`previous`](Self::previous) panic if
/// [`MEMBERS`](Self::MEMBERS) is empty or [`position`](Self::position)
/// returns an index outside it. The derive rejects empty enums.
pub trait EnhancedEnum: Copy + Eq + Debug + 'static {
    /// Type of each member's value.
    type Value: EnumValue;

    /// Name of the enumeration type, used in errors and logs.
    const TYPE_NAME: &'static str;

    /// Every member in declaration order. Must not be empty.
    const MEMBERS: &'static [Self];

    /// Declared name of this member.
    fn name(&self) -> &'static str;

    /// Declared value of this member.
    fn value(&self) -> Self::Value;

    /// Zero-based index of this member in [`MEMBERS`](Self::MEMBERS).
    fn position(&self) -> usize;

    /// Human-readable form: exactly the declared name.
    fn to_display_string(&self) -> String {
        self.name().to_owned()
    }

    /// Number of members.
    fn count() -> usize {
        Self::MEMBERS.len()
    }

    /// All members in declaration order, as an owned list.
    fn list_all() -> Vec<Self> {
        Self::MEMBERS.to_vec()
    }

    /// All members in declaration order, as an immutable fixed-size slice.
    fn to_tuple() -> &'static [Self] {
        Self::MEMBERS
    }

    /// Returns true if `input` denotes a member of this type.
    ///
    /// Accepted inputs are a member of `Self` (owned or `&'static`), a value
    /// equal to some member's value, or a `String`/`&'static str` naming a
    /// member. Inputs of any other type, including members of a different
    /// enumeration, are false.
    fn validate(input: &dyn Any) -> bool {
        if input.is::<Self>() || input.is::<&'static Self>() {
            return true;
        }
        if Self::MEMBERS.iter().any(|m| m.value().matches_input(input)) {
            return true;
        }
        name_input(input).is_some_and(Self::is_valid_name)
    }

    /// Returns true if some member is named exactly `name`.
    fn is_valid_name(name: &str) -> bool {
        Self::MEMBERS.iter().any(|m| m.name() == name)
    }

    /// Returns true if some member's value equals `value`.
    fn is_valid_value(value: &Self::Value) -> bool {
        Self::MEMBERS.iter().any(|m| m.value() == *value)
    }

    /// The member after this one, wrapping from the last to the first.
    fn next(&self) -> Self {
        let members = Self::MEMBERS;
        debug_assert!(!members.is_empty(), "{} has no members", Self::TYPE_NAME);
        members[(self.position() + 1) % members.len()]
    }

    /// The member before this one, wrapping from the first to the last.
    fn previous(&self) -> Self {
        let members = Self::MEMBERS;
        debug_assert!(!members.is_empty(), "{} has no members", Self::TYPE_NAME);
        let len = members.len();
        members[(self.position() + len - 1) % len]
    }

    /// Looks up a member by exact, case-sensitive name.
    fn from_string(name: &str) -> Result<Self, EnumError> {
        match Self::MEMBERS.iter().find(|m| m.name() == name) {
            Some(member) => Ok(*member),
            None => {
                tracing::trace!(
                    type_name = Self::TYPE_NAME,
                    member_name = name,
                    "no member with name"
                );
                Err(EnumError::NameNotFound {
                    type_name: Self::TYPE_NAME,
                    name: name.to_owned(),
                })
            }
        }
    }

    /// Looks up a member by value.
    ///
    /// When several members share the value, the first in declaration order
    /// is returned.
    fn from_value(value: Self::Value) -> Result<Self, EnumError> {
        match Self::MEMBERS.iter().find(|m| m.value() == value) {
            Some(member) => Ok(*member),
            None => {
                tracing::trace!(type_name = Self::TYPE_NAME, value = ?value, "no member with value");
                Err(EnumError::ValueNotFound {
                    type_name: Self::TYPE_NAME,
                    value: format!("{:?}", value),
                })
            }
        }
    }

    /// Looks up a member by a value of any type.
    ///
    /// Same tie-break as [`from_value`](Self::from_value). An input of an
    /// incompatible type is reported as not found.
    fn from_any_value(input: &dyn Any) -> Result<Self, EnumError> {
        match Self::MEMBERS
            .iter()
            .find(|m| m.value().matches_input(input))
        {
            Some(member) => Ok(*member),
            None => {
                let value = describe_input(input);
                tracing::trace!(type_name = Self::TYPE_NAME, %value, "no member matches value");
                Err(EnumError::ValueNotFound {
                    type_name: Self::TYPE_NAME,
                    value,
                })
            }
        }
    }
}

fn name_input(input: &dyn Any) -> Option<&str> {
    if let Some(s) = input.downcast_ref::<&'static str>() {
        return Some(*s);
    }
    input.downcast_ref::<String>().map(String::as_str)
}

fn describe_input(input: &dyn Any) -> String {
    macro_rules! try_debug {
        ($($ty:ty),+ $(,)?) => {
            $(
                if let Some(v) = input.downcast_ref::<$ty>() {
                    return format!("{:?}", v);
                }
            )+
        };
    }

    try_debug!(
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
        &'static str, String,
    );
    "<value of unsupported type>".to_owned()
}
