//! # Cloak Cipher
//!
//! The hybrid cipher: symmetric bulk encryption plus per-recipient
//! asymmetric key wrapping.
//!
//! ## Encryption Model
//!
//! Sealing uses a two-layer key model:
//!
//! 1. **Content key**: a fresh symmetric key (ChaCha20-Poly1305) encrypts the
//!    payload once, whatever the number of recipients.
//! 2. **Wrapped keys**: the content key is wrapped for each recipient via
//!    ephemeral X25519 ECDH, so only holders of a recipient key pair can
//!    recover it.
//!
//! The raw content key exists only for the duration of the seal call. Opening
//! reverses the process for one recipient and collapses every cryptographic
//! failure into an absent result.

pub mod envelope;
pub mod error;
pub mod wrap;

pub use envelope::{SealFormat, SealedEnvelope};
pub use error::{CipherError, Result};
pub use wrap::WrappedKey;
