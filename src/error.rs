//! Route table configuration errors.
//!
//! All variants are startup-time configuration failures: a process must not
//! begin dispatching navigation events with an ambiguous or malformed route
//! table. "No match" and "unauthenticated access" are *not* errors; they are
//! ordinary dispatch outcomes, see [`crate::dispatch::Outcome`].

use thiserror::Error;

/// Errors raised while building a [`crate::table::RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The pattern string is malformed and cannot be parsed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    /// The exact pattern has already been registered.
    #[error("route pattern '{pattern}' is already registered")]
    DuplicatePattern { pattern: String },

    /// The pattern is structurally ambiguous with a registered pattern:
    /// both have parameters in the same positions, so any path matching one
    /// would also match the other and first-match-wins would silently shadow
    /// one of them.
    #[error("route pattern '{pattern}' conflicts with registered pattern '{existing}'")]
    ConflictingPattern { pattern: String, existing: String },
}
