//! Strongly-typed IDs with UUID validation. The backend issues UUIDs for events and photos.

use crate::error::ApiError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

fn validate_uuid(s: &str) -> Result<String, ApiError> {
    Uuid::parse_str(s).map_err(|e| ApiError::InvalidId(format!("{s}: {e}")))?;
    Ok(s.to_string())
}

/// Event ID (UUID). Validated on construction via `parse`/`from_str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

/// Photo ID (UUID). Validated on construction via `parse`/`from_str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

macro_rules! id_type {
    ($name:ident) => {
        impl $name {
            pub fn parse(s: impl AsRef<str>) -> Result<Self, ApiError> {
                Self::from_str(s.as_ref())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
        impl FromStr for $name {
            type Err = ApiError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(validate_uuid(s)?))
            }
        }
        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_str(&self.0)
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                let s = String::deserialize(de)?;
                Self::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
id_type!(EventId);
id_type!(PhotoId);
