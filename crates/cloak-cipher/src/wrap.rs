//! Anonymous key wrapping via X25519 key agreement.
//!
//! Wrapping encrypts a symmetric content key to a recipient's public key:
//! anyone holding only the public key can produce a wrapped key, and only the
//! holder of the full key pair can open it. Each wrap uses a fresh ephemeral
//! key pair, so wrapped keys carry no sender identity.

use serde::{Deserialize, Serialize};

use cloak_core::{
    EphemeralKeyPair, SymmetricKey, SymmetricNonce, X25519PublicKey, X25519StaticSecret,
};

use crate::error::Result;

/// One recipient's encrypted copy of a content key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedKey {
    /// Ephemeral X25519 public key (sender's side of ECDH).
    pub ephemeral_public: X25519PublicKey,

    /// The content key, encrypted under the derived wrap key.
    pub ciphertext: Vec<u8>,

    /// Nonce used for the wrap encryption.
    pub nonce: SymmetricNonce,
}

impl WrappedKey {
    /// Wrap a content key for a recipient's public key.
    pub fn wrap(content_key: &SymmetricKey, recipient_public: &X25519PublicKey) -> Result<Self> {
        let ephemeral = EphemeralKeyPair::generate();
        let ephemeral_public = ephemeral.public_key();

        let shared = ephemeral.diffie_hellman(recipient_public);
        let wrap_key = shared.derive_wrap_key(&wrap_context(&ephemeral_public, recipient_public));

        let nonce = SymmetricNonce::generate();
        let ciphertext = wrap_key.encrypt(content_key.as_bytes(), &nonce)?;

        Ok(Self {
            ephemeral_public,
            ciphertext,
            nonce,
        })
    }

    /// Unwrap with the recipient's secret key.
    ///
    /// Returns `None` on any cryptographic failure: failed authentication,
    /// wrong recipient, or a malformed key. The causes are indistinguishable
    /// to the caller.
    pub fn unwrap_with(&self, secret: &X25519StaticSecret) -> Option<SymmetricKey> {
        let recipient_public = secret.public_key();

        let shared = secret.diffie_hellman(&self.ephemeral_public);
        let wrap_key =
            shared.derive_wrap_key(&wrap_context(&self.ephemeral_public, &recipient_public));

        let key_bytes = wrap_key.decrypt(&self.ciphertext, &self.nonce).ok()?;
        let bytes: [u8; 32] = key_bytes.try_into().ok()?;
        Some(SymmetricKey::from_bytes(bytes))
    }
}

/// Derivation context binding a wrap key to both ends of the exchange.
fn wrap_context(ephemeral: &X25519PublicKey, recipient: &X25519PublicKey) -> Vec<u8> {
    let mut context = Vec::with_capacity(64);
    context.extend_from_slice(ephemeral.as_bytes());
    context.extend_from_slice(recipient.as_bytes());
    context
}
