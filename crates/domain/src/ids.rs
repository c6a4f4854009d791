use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Conversion between typed record identifiers and the raw string IDs the
/// backing document store works with.
///
/// Store-assigned identifiers are UUIDs; identity-keyed records (users) carry
/// an opaque external key instead.
pub trait RecordId:
    Clone + PartialEq + Eq + std::hash::Hash + fmt::Display + Send + Sync + 'static
{
    fn from_store_id(raw: &str) -> Result<Self, DomainError>;

    fn to_store_id(&self) -> String {
        self.to_string()
    }
}

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl RecordId for $name {
            fn from_store_id(raw: &str) -> Result<Self, DomainError> {
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|e| DomainError::invalid_id(format!("{raw}: {e}")))
            }
        }
    };
}

// Core entity IDs
define_id!(CampaignId);
define_id!(CharacterId);

// Compendium IDs
define_id!(ItemId);
define_id!(SpellId);
define_id!(ConditionId);

// Rule reference IDs (cascading parent/child pair)
define_id!(RuleCategoryId);
define_id!(RuleReferenceId);

/// User identifier.
///
/// Unlike every other ID, this is not store-assigned: user records are
/// upserted against the key handed out by the external auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl RecordId for UserId {
    fn from_store_id(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::invalid_id("user id cannot be empty"));
        }
        Ok(Self(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_round_trip_through_store_ids() {
        let id = CampaignId::new();
        let raw = id.to_store_id();
        assert_eq!(CampaignId::from_store_id(&raw).ok(), Some(id));
    }

    #[test]
    fn malformed_uuid_id_is_rejected() {
        assert!(CharacterId::from_store_id("not-a-uuid").is_err());
    }

    #[test]
    fn user_ids_accept_external_auth_keys() {
        let id = UserId::from_store_id("auth0|abc123").ok();
        assert_eq!(id, Some(UserId::new("auth0|abc123")));
        assert!(UserId::from_store_id("").is_err());
    }
}
