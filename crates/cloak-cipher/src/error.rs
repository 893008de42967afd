//! Error types for the hybrid cipher.
//!
//! Only the sealing direction can fail with an error. The opening direction
//! collapses every cryptographic failure into an absent result: access denial
//! is a normal outcome, and no side channel distinguishes a missing key from
//! corrupted data.

use thiserror::Error;

use cloak_core::CryptoError;

/// Errors that can occur while sealing.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The symmetric encryption step failed.
    #[error("encryption failed: {0}")]
    Encrypt(#[from] CryptoError),

    /// Serialization of a sealed envelope failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for cipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;
