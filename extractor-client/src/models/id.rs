use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Canonical string form of a backend identifier.
///
/// The wire format carries identifier fields as JSON strings, while callers
/// hold them as strings, integers, or UUIDs depending on where the value
/// came from. `EntityId` accepts any of those sources and always transmits
/// the string form. An absent identifier stays `null` on the wire
/// (`Option<EntityId>` is never coerced to the string `"null"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for EntityId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = EntityId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<EntityId, E> {
                Ok(EntityId(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<EntityId, E> {
                Ok(EntityId(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<EntityId, E> {
                Ok(EntityId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<EntityId, E> {
                Ok(EntityId(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
