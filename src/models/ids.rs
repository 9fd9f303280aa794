//! Identity keys for budgets, accounts, categories, users and transactions
//!
//! Each key is a UUID newtype so a `BudgetId` can never be handed to a
//! function expecting an `AccountId`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short, prefixed form used in terminal output (e.g. `bud-1a2b3c4d`)
            pub fn short(&self) -> String {
                format!("{}{}", $prefix, &self.0.simple().to_string()[..8])
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
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            /// Accepts a bare UUID or one carrying the display prefix
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(
    /// Identifies a budget
    BudgetId,
    "bud-"
);
define_id!(
    /// Identifies the bank account backing an emergency fund
    AccountId,
    "acc-"
);
define_id!(CategoryId, "cat-");
define_id!(UserId, "usr-");
define_id!(TransactionId, "txn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = BudgetId::new();
        let b = BudgetId::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn test_short_form() {
        let id = AccountId::new();
        let short = id.short();
        assert!(short.starts_with("acc-"));
        assert_eq!(short.len(), 12);
    }

    #[test]
    fn test_display_is_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: UserId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_prefixed_parse() {
        let id = TransactionId::new();
        let prefixed = format!("txn-{}", id.as_uuid());
        assert_eq!(prefixed.parse::<TransactionId>().unwrap(), id);
        assert!("txn-deadbeef".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
