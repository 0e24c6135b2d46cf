//! Identifiers for Comeback entities.
//!
//! Entities created at runtime (messages, mood entries, posts, events) get a
//! generated ULID. Entities defined by seed data (counters, activities, feed
//! items, quick actions) are keyed by the string the seed gives them.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! ulid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Ulid);

        impl $name {
            /// Generate a new identifier.
            pub fn new() -> Self {
                Self(Ulid::new())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ulid::DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

macro_rules! key_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from a seed key.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// The key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

ulid_id!(
    /// Unique identifier for a chat message
    MessageId
);
ulid_id!(
    /// Unique identifier for a mood journal entry
    EntryId
);
ulid_id!(
    /// Unique identifier for a community post
    PostId
);
ulid_id!(
    /// Unique identifier for an event
    EventId
);

key_id!(
    /// Key of a progress counter (shared with the achievement it backs)
    CounterId
);
key_id!(
    /// Key of a suggested activity
    ActivityId
);
key_id!(
    /// Key of a healing feed item
    FeedItemId
);
key_id!(
    /// Key of a chat quick action
    QuickActionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulid_ids_are_unique_and_parse_back() {
        let a = PostId::new();
        let b = PostId::new();
        assert_ne!(a, b);

        let parsed: PostId = a.to_string().parse().unwrap();
        assert_eq!(parsed, a);
    }

    #[test]
    fn test_key_id_serializes_as_plain_string() {
        let id = CounterId::new("gym-beast");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"gym-beast\"");
        assert_eq!(id.as_str(), "gym-beast");
    }
}
