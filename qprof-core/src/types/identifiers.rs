//! Newtype identifiers for rules and profiles.
//!
//! Each ID type wraps a `String` to prevent cross-type confusion.
//! A `RuleKey` cannot be accidentally used where a `ProfileKey` is
//! expected.

use serde::{Deserialize, Serialize};

macro_rules! define_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key from anything string-like.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// The raw key string.
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
            fn from(key: &str) -> Self {
                Self(key.to_string())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }
    };
}

define_key!(
    /// Opaque key of a static-analysis rule in the catalog.
    /// Immutable, never recycled.
    RuleKey
);

define_key!(
    /// Unique key of a quality profile.
    ProfileKey
);
