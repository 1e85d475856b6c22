//! Serde helpers for name and value round-trips.
//!
//! Use with `#[serde(with = "...")]` on a field holding a member:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Paint {
//!     #[serde(with = "enhanced_enums::codec::by_name")]
//!     color: Color,
//!     #[serde(with = "enhanced_enums::codec::by_value")]
//!     fallback: Color,
//! }
//! ```
//!
//! Unknown names or values fail deserialization with the lookup error's
//! message.

/// Serializes a member as its name.
pub mod by_name {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::EnhancedEnum;

    pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: EnhancedEnum,
        S: Serializer,
    {
        serializer.serialize_str(member.name())
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: EnhancedEnum,
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        E::from_string(&name).map_err(D::Error::custom)
    }
}

/// Serializes a member as its value.
pub mod by_value {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::EnhancedEnum;

    pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: EnhancedEnum,
        E::Value: Serialize,
        S: Serializer,
    {
        member.value().serialize(serializer)
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: EnhancedEnum,
        E::Value: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let value = <E::Value as Deserialize<'de>>::deserialize(deserializer)?;
        E::from_value(value).map_err(D::Error::custom)
    }
}
