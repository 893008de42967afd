//! Error types for the value algebra.

use thiserror::Error;

use cloak_cipher::CipherError;
use cloak_core::CodecError;

/// Errors that can occur during value operations.
///
/// Access denial is deliberately not represented here: `reveal` expresses it
/// as an absent result, because lacking access is a normal business outcome.
#[derive(Debug, Error)]
pub enum CloakError {
    /// Payload codec failure. Indicates a construction bug, never an access
    /// decision.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Cipher failure while sealing.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),
}

/// Result type for value operations.
pub type Result<T> = std::result::Result<T, CloakError>;
