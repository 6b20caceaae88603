//! Core error types for fragment validation, merging, and queries

use thiserror::Error;

use crate::classifier::Tier;

/// Errors produced by the fragment core.
///
/// I/O layers (loader, emitters, persistence) wrap these in `anyhow`
/// with path context; the core itself never retries or recovers.
#[derive(Debug, Error)]
pub enum Error {
    /// A fragment was added without a name.
    #[error("fragment must have a name")]
    EmptyName,

    /// A fragment's priority falls outside the range its tier allows.
    #[error("{tier} fragment {name} priority must be {}, got {priority}", .tier.range_label())]
    PriorityOutOfRange {
        name: String,
        tier: Tier,
        priority: i32,
    },

    /// An operation that needs merged state ran before any merge.
    #[error("fragments have not been merged yet")]
    NotMerged,

    /// A search pattern failed to compile as a regular expression.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A persisted timestamp could not be parsed as RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] time::error::Parse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_error_message() {
        let err = Error::PriorityOutOfRange {
            name: "user_service".into(),
            tier: Tier::Custom,
            priority: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("user_service"));
        assert!(msg.contains(">=100"));
        assert!(msg.contains("got 5"));
    }

    #[test]
    fn test_not_merged_message() {
        assert_eq!(
            Error::NotMerged.to_string(),
            "fragments have not been merged yet"
        );
    }
}
