//! Enhanced enumerations.
//!
//! Helper operations for fieldless Rust enums: listing members, validating
//! membership, declaration-order navigation with wrap-around, and lookup by
//! name or value.
//!
//! ```ignore
//! use enhanced_enums::EnhancedEnum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
//! #[repr(u8)]
//! enum Color {
//!     #[enhanced(name = "RED")]
//!     Red = 1,
//!     #[enhanced(name = "GREEN")]
//!     Green = 2,
//!     #[enhanced(name = "BLUE")]
//!     Blue = 3,
//! }
//!
//! assert_eq!(Color::from_string("RED")?, Color::Red);
//! assert_eq!(Color::Red.previous(), Color::Blue);
//! assert!(!Color::validate(&99));
//! ```

// Lets generated `::enhanced_enums` paths resolve inside this crate.
extern crate self as enhanced_enums;

pub mod codec;
pub mod enhanced;
pub mod error;
pub mod value;

pub use enhanced::EnhancedEnum;
pub use error::EnumError;
pub use value::EnumValue;

// Re-export the derive under the trait's name
pub use enhanced_enums_macros::EnhancedEnum;
