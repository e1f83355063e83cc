//! Numeric ID newtypes for users and projects, plus the string skill key.
//!
//! Each ID type wraps a `u64` to prevent cross-type confusion.
//! A `UserId` cannot be accidentally used where a `ProjectId` is expected.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create a new ID from its raw value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw value.
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Little-endian bytes of the raw value, used for hashing.
            pub const fn to_le_bytes(self) -> [u8; 8] {
                self.0.to_le_bytes()
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a user whose skills are being simulated.
    UserId
);
define_id!(
    /// Identifier of a candidate project. Orders ranking ties ascending.
    ProjectId
);

/// Key of a single skill dimension (`"java"`, `"cloud"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(String);

impl SkillId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for SkillId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for SkillId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_order_numerically() {
        let mut ids = vec![ProjectId(10), ProjectId(2), ProjectId(7)];
        ids.sort();
        assert_eq!(ids, vec![ProjectId(2), ProjectId(7), ProjectId(10)]);
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&ProjectId(42)).unwrap();
        assert_eq!(json, "42");
        let skill = serde_json::to_string(&SkillId::from("rust")).unwrap();
        assert_eq!(skill, "\"rust\"");
    }
}
