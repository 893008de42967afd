//! Error types for the core primitives.

use thiserror::Error;

/// Errors from the raw cryptographic primitives.
///
/// Deliberately vague: the difference between "wrong key" and "corrupted
/// ciphertext" is not exposed to callers or attackers. Callers that treat
/// decryption failure as access denial map these to an absent result.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("encryption failed")]
    EncryptFailed,

    #[error("decryption failed")]
    DecryptFailed,
}

/// Errors from a payload codec.
///
/// Codec failures indicate a construction bug, not a security boundary, and
/// are surfaced as distinct fatal errors rather than collapsed into access
/// denial.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Encoding a payload to bytes failed.
    #[error("payload encode failed: {0}")]
    Encode(String),

    /// Decoding a payload from bytes failed.
    #[error("payload decode failed: {0}")]
    Decode(String),
}
