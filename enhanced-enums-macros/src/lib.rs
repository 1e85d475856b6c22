//! Derive macro for `enhanced-enums`.
//!
//! This crate provides `#[derive(EnhancedEnum)]`, which implements the
//! `enhanced_enums::EnhancedEnum` trait for a fieldless enum along with
//! `Display` and `FromStr`. Generated code references `::enhanced_enums`
//! unless overridden with `#[enhanced(crate = "...")]`.

use proc_macro::TokenStream;

mod attrs;
mod enhanced_enum;

/// Derive macro for enhanced enumerations.
///
/// Members are taken from the variants in declaration order. Each member's
/// name is the variant identifier and its value is the discriminant cast to
/// the value type.
///
/// # Requirements
///
/// - Every variant must be a unit variant
/// - The enum must have at least one variant
/// - The enum must also implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`
///
/// # Attributes
///
/// - `#[enhanced(value_type = "T")]` on the enum: value type. Defaults to the
///   `#[repr]` integer type, or `isize`.
/// - `#[enhanced(crate = "path")]` on the enum: path to the runtime crate.
/// - `#[enhanced(name = "NAME")]` on a variant: member name override.
/// - `#[enhanced(value = expr)]` on a variant: explicit member value. Two
///   variants may share a value; lookups by value return the first.
///
/// # Example
///
/// ```ignore
/// use enhanced_enums::EnhancedEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
/// #[repr(u8)]
/// pub enum Color {
///     Red = 1,
///     Green = 2,
///     Blue = 3,
/// }
///
/// // Generated implementations:
/// // impl EnhancedEnum for Color { type Value = u8; ... }
/// // impl Display for Color { ... }
/// // impl FromStr for Color { type Err = EnumError; ... }
/// ```
///
/// # String values
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
/// #[enhanced(value_type = "&'static str")]
/// pub enum Level {
///     #[enhanced(name = "DEBUG", value = "debug")]
///     Debug,
///     #[enhanced(name = "INFO", value = "info")]
///     Info,
/// }
/// ```
#[proc_macro_derive(EnhancedEnum, attributes(enhanced))]
pub fn derive_enhanced_enum(input: TokenStream) -> TokenStream {
    enhanced_enum::derive_enhanced_enum_impl(input)
}
