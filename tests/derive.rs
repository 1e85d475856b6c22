//! Tests for `#[derive(EnhancedEnum)]` through the public API.

use std::str::FromStr;

use enhanced_enums::{EnhancedEnum, EnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
#[repr(u8)]
enum Color {
    #[enhanced(name = "RED")]
    Red = 1,
    #[enhanced(name = "GREEN")]
    Green = 2,
    #[enhanced(name = "BLUE")]
    Blue = 3,
}

/// Same values as `Color`, different type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
#[repr(u8)]
enum Shade {
    Light = 1,
    Dark = 2,
}

/// No repr, no explicit discriminants: values are `isize` 0..n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
}

/// Explicit values with aliases; declaration order differs from value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
#[enhanced(value_type = "i32")]
enum Status {
    #[enhanced(value = 200)]
    Ok,
    #[enhanced(value = 404)]
    NotFound,
    #[enhanced(value = 200)]
    Success,
    #[enhanced(value = 100)]
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
#[enhanced(value_type = "&'static str")]
enum Level {
    #[enhanced(name = "DEBUG", value = "debug")]
    Debug,
    #[enhanced(name = "INFO", value = "info")]
    Info,
    #[enhanced(name = "WARN", value = "warn")]
    Warn,
}

/// A single member navigates to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
enum Singleton {
    Only,
}

mod color_scenario {
    use super::*;

    #[test]
    fn test_list_all() {
        assert_eq!(Color::list_all(), vec![Color::Red, Color::Green, Color::Blue]);
    }

    #[test]
    fn test_to_tuple() {
        assert_eq!(Color::to_tuple(), &[Color::Red, Color::Green, Color::Blue]);
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(Color::Red.next(), Color::Green);
        assert_eq!(Color::Blue.next(), Color::Red);
        assert_eq!(Color::Red.previous(), Color::Blue);
        assert_eq!(Color::Green.previous(), Color::Red);
    }

    #[test]
    fn test_from_string() {
        assert_eq!(Color::from_string("RED"), Ok(Color::Red));
        assert_eq!(
            Color::from_string("Red"),
            Err(EnumError::NameNotFound {
                type_name: "Color",
                name: "Red".to_string(),
            })
        );
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Color::from_value(2), Ok(Color::Green));
        assert!(Color::from_value(99).unwrap_err().is_not_found());
    }

    #[test]
    fn test_validate() {
        assert!(Color::validate(&Color::Red));
        assert!(Color::validate(&2));
        assert!(!Color::validate(&99));
        assert!(!Color::validate(&"__not_a_real_name__"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Green.to_display_string(), "GREEN");
        assert_eq!(Color::Green.to_string(), "GREEN");
        assert_eq!(format!("{}", Color::Blue), "BLUE");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Color::from_str("BLUE"), Ok(Color::Blue));
        assert_eq!("GREEN".parse::<Color>(), Ok(Color::Green));
        assert!("blue".parse::<Color>().is_err());
    }

    #[test]
    fn test_type_metadata() {
        assert_eq!(Color::TYPE_NAME, "Color");
        assert_eq!(Color::count(), 3);
        assert_eq!(Color::Blue.position(), 2);
        assert_eq!(Color::Blue.value(), 3_u8);
    }
}

#[test]
fn test_member_of_other_enum_does_not_validate() {
    // Shade::Light has value 1, same as Color::Red.
    assert_eq!(Shade::Light.value(), Color::Red.value());
    assert!(!Color::validate(&Shade::Light));
    assert!(!Shade::validate(&Color::Red));
    assert!(Shade::validate(&Shade::Dark));
}

#[test]
fn test_malformed_inputs_validate_false() {
    assert!(!Color::validate(&()));
    assert!(!Color::validate(&1.0_f64));
    assert!(!Color::validate(&vec![1_u8]));
    assert!(!Color::validate(&Some(1_u8)));
}

#[test]
fn test_default_value_type_is_isize() {
    assert_eq!(Weekday::Monday.value(), 0_isize);
    assert_eq!(Weekday::from_value(2), Ok(Weekday::Wednesday));
    assert_eq!(Weekday::from_string("Tuesday"), Ok(Weekday::Tuesday));
    assert_eq!(Weekday::Tuesday.to_string(), "Tuesday");
}

mod aliases {
    use super::*;

    #[test]
    fn test_from_value_returns_first_declared() {
        assert_eq!(Status::from_value(200), Ok(Status::Ok));
        assert_eq!(Status::from_any_value(&200_u64), Ok(Status::Ok));
    }

    #[test]
    fn test_aliases_are_distinct_members() {
        assert_eq!(Status::count(), 4);
        assert_ne!(Status::Ok, Status::Success);
        assert_eq!(Status::from_string("Success"), Ok(Status::Success));
        assert_eq!(Status::Success.value(), 200);
    }

    #[test]
    fn test_navigation_follows_declaration_order() {
        assert_eq!(Status::Ok.next(), Status::NotFound);
        assert_eq!(Status::NotFound.next(), Status::Success);
        assert_eq!(Status::Continue.next(), Status::Ok);
        assert_eq!(Status::Ok.previous(), Status::Continue);
    }
}

mod string_values {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(Level::from_value("info"), Ok(Level::Info));
        assert_eq!(
            Level::from_value("INFO"),
            Err(EnumError::ValueNotFound {
                type_name: "Level",
                value: "\"INFO\"".to_string(),
            })
        );
    }

    #[test]
    fn test_from_any_value_with_owned_string() {
        let input = String::from("warn");
        assert_eq!(Level::from_any_value(&input), Ok(Level::Warn));
    }

    #[test]
    fn test_validate_by_name_or_value() {
        assert!(Level::validate(&"debug"));
        assert!(Level::validate(&"DEBUG"));
        assert!(Level::validate(&"WARN".to_string()));
        assert!(!Level::validate(&"Debug"));
        assert!(!Level::validate(&0_u8));
    }

    #[test]
    fn test_names_and_values() {
        assert_eq!(Level::Debug.name(), "DEBUG");
        assert_eq!(Level::Debug.value(), "debug");
    }
}

#[test]
fn test_single_member_wraps_to_itself() {
    assert_eq!(Singleton::Only.next(), Singleton::Only);
    assert_eq!(Singleton::Only.previous(), Singleton::Only);
    assert_eq!(Singleton::list_all(), vec![Singleton::Only]);
}

#[test]
fn test_list_all_is_independent_copy() {
    let mut members = Color::list_all();
    members.clear();
    assert_eq!(Color::list_all().len(), 3);
    assert_eq!(Color::to_tuple().len(), 3);
}

/// Explicit runtime crate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
#[enhanced(crate = "enhanced_enums")]
#[repr(u16)]
enum Port {
    Http = 80,
    Https = 443,
}

#[test]
fn test_explicit_crate_path() {
    assert_eq!(Port::Https.value(), 443_u16);
    assert_eq!(Port::from_value(80), Ok(Port::Http));
    assert_eq!(Port::Http.previous(), Port::Https);
}

/// Variants whose names match the trait's associated items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnhancedEnum)]
enum Part {
    Key,
    Value,
    Err,
}

#[test]
fn test_variants_named_like_associated_items() {
    assert_eq!(Part::list_all(), vec![Part::Key, Part::Value, Part::Err]);
    assert_eq!(Part::Value.value(), 1_isize);
    assert_eq!(Part::from_string("Value"), Ok(Part::Value));
    assert_eq!("Err".parse::<Part>(), Ok(Part::Err));
    assert_eq!(Part::Err.next(), Part::Key);
}

#[test]
fn test_validate_member_reference() {
    assert!(Color::validate(&&Color::Red));
    assert!(!Color::validate(&&Shade::Light));
}
