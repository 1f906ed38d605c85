//! Typed errors for the harmonization pipeline.

use thiserror::Error;

/// Errors produced while harmonizing a melody.
///
/// Both variants are fatal for the whole call: no partial harmonization is
/// ever returned. The rhythm parser has no error type of its own (unknown
/// rhythm tokens fall back to a quarter note).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonizeError {
    /// A melody entry did not resolve to a chromatic pitch class.
    #[error("invalid note name '{name}' (expected e.g. C, F#, Bb)")]
    InvalidNote {
        /// The note name as supplied by the caller.
        name: String,
    },

    /// The key did not resolve to a chromatic pitch class.
    #[error("invalid key name '{name}' (expected e.g. C, D#, E)")]
    InvalidKey {
        /// The key name as supplied by the caller.
        name: String,
    },
}
