//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `BookId` where an `AuthorId` is expected.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Macro to generate typed integer ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Creates an ID from a raw integer.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the inner integer.
            #[must_use]
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(AuthorId, "Unique identifier for an author.");
typed_id!(BookId, "Unique identifier for a book.");
typed_id!(WithdrawalId, "Unique identifier for a withdrawal.");

/// Outcome of coercing a loosely-typed JSON author reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorRef {
    /// Absent, `null`, `0`, `false` or an empty string.
    Missing,
    /// A usable integer id.
    Id(AuthorId),
    /// Present but not an integer; can never match an author.
    Unresolvable,
}

impl AuthorRef {
    /// Coerces a request field into an author reference.
    ///
    /// Accepts JSON integers and numeric strings. Falsy values count as missing.
    #[must_use]
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null | Value::Bool(false)) => Self::Missing,
            Some(Value::Number(n)) => match Decimal::from_str(&n.to_string()) {
                Ok(d) if d.is_zero() => Self::Missing,
                Ok(d) if d.fract().is_zero() => d
                    .to_u64()
                    .map_or(Self::Unresolvable, |id| Self::Id(AuthorId(id))),
                _ => Self::Unresolvable,
            },
            Some(Value::String(s)) if s.is_empty() => Self::Missing,
            Some(Value::String(s)) => match s.parse::<AuthorId>() {
                Ok(id) => Self::Id(id),
                Err(_) => Self::Unresolvable,
            },
            Some(_) => Self::Unresolvable,
        }
    }
}
