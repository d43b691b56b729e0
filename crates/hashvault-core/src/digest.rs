//! The digest function: SHA-512 over the password bytes, standard base64
//! (padded) over the raw hash. Pure and stateless; everything time-dependent
//! lives in [`crate::Sleeper`] and the service layer.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha512};

/// Computes the encoded digest of a password.
///
/// Deterministic: the same input always yields the same output, so lookups
/// for a completed ID are stable across calls.
pub fn digest(password: &str) -> String {
    let hash = Sha512::digest(password.as_bytes());
    STANDARD.encode(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            digest("angryMonkey"),
            "ZEHhWB65gUlzdVwtDQArEyx+KVLzp/aTaRaPlBzYRIFj6vjFdqEb0Q5B8zVKCZ0vKbZPZklJz0Fd7su2A+gf7Q=="
        );
        assert_eq!(
            digest("something"),
            "mD1D3f9tqQ9qXTthckRqH/4ii4A/5k/dXc+rVkYHioloUf6C9iPJ1uVlSz0vNjoE7BfPtitgdDepx8Ey1RHlIg=="
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(digest("hunter2"), digest("hunter2"));
        assert_ne!(digest("hunter2"), digest("hunter3"));
    }
}
