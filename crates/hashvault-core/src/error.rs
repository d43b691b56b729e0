//! Error types for the digest service.
//!
//! Every variant is an ordinary, client-reportable outcome. None of them
//! represent an internal failure, and none of them mutate service state:
//! a rejected submission allocates no ID and records no latency.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the digest service.
///
/// Display strings are part of the service contract: the HTTP layer
/// serializes them verbatim into `{"error": ...}` response bodies.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The submitted password was empty (or absent).
    #[error("Bad request: empty password")]
    EmptyPassword,

    /// The lookup token did not parse as a non-negative integer.
    #[error("Invalid ID {token}")]
    InvalidId { token: String },

    /// The ID is well-formed but no digest is stored for it. Covers both
    /// "never allocated" and "allocated but still computing".
    #[error("ID {id} not found")]
    NotFound { id: u64 },

    /// A submission arrived after shutdown began.
    #[error("Service is shutting down")]
    ShuttingDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_match_the_wire_contract() {
        assert_eq!(Error::EmptyPassword.to_string(), "Bad request: empty password");
        assert_eq!(
            Error::InvalidId { token: "4abc".into() }.to_string(),
            "Invalid ID 4abc"
        );
        assert_eq!(Error::NotFound { id: 4 }.to_string(), "ID 4 not found");
        assert_eq!(Error::ShuttingDown.to_string(), "Service is shutting down");
    }
}
