//! Sealed envelopes.
//!
//! A sealed envelope carries the authenticated ciphertext of a payload plus
//! one wrapped content key per permitted recipient. Sealing generates a fresh
//! content key, encrypts the payload once, and wraps the key for every
//! recipient; the raw content key is dropped when sealing returns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cloak_core::{Identity, PartyId, SymmetricKey, SymmetricNonce, X25519PublicKey};

use crate::error::{CipherError, Result};
use crate::wrap::WrappedKey;

/// Format identifier for sealed envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SealFormat {
    /// ChaCha20-Poly1305 with 256-bit content key.
    ChaCha20Poly1305 = 1,
}

/// Authenticated ciphertext bound to a recipient set.
///
/// A storage layer may persist the envelope via [`SealedEnvelope::to_bytes`];
/// the three cryptographic fields round-trip byte-exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedEnvelope {
    /// Encryption algorithm used.
    pub format: SealFormat,

    /// Nonce used for the payload encryption (unique per envelope).
    pub nonce: SymmetricNonce,

    /// The encrypted payload (includes authentication tag).
    pub ciphertext: Vec<u8>,

    /// Per-recipient wrapped content keys, keyed by party identifier.
    pub wrapped_keys: BTreeMap<PartyId, WrappedKey>,
}

impl SealedEnvelope {
    /// Seal a plaintext for a set of recipients.
    ///
    /// Generates a fresh content key and nonce, encrypts once, and wraps the
    /// key for each recipient. Duplicate recipient ids collapse to the last
    /// entry. An empty recipient set produces an envelope nobody can open.
    pub fn seal<I>(plaintext: &[u8], recipients: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PartyId, X25519PublicKey)>,
    {
        let content_key = SymmetricKey::generate();
        let nonce = SymmetricNonce::generate();
        let ciphertext = content_key.encrypt(plaintext, &nonce)?;

        let mut wrapped_keys = BTreeMap::new();
        for (id, public_key) in recipients {
            let wrapped = WrappedKey::wrap(&content_key, &public_key)?;
            wrapped_keys.insert(id, wrapped);
        }

        Ok(Self {
            format: SealFormat::ChaCha20Poly1305,
            nonce,
            ciphertext,
            wrapped_keys,
        })
    }

    /// Open the envelope as the given identity.
    ///
    /// Returns `None` if the identity has no wrapped key, if unwrapping
    /// fails, or if the payload fails authentication. Absence of access is a
    /// normal outcome, not an error, and the causes are indistinguishable.
    pub fn open(&self, identity: &Identity) -> Option<Vec<u8>> {
        let wrapped = self.wrapped_keys.get(identity.id())?;

        let content_key = match wrapped.unwrap_with(identity.secret()) {
            Some(key) => key,
            None => {
                tracing::debug!(recipient = %identity.id(), "key unwrap failed");
                return None;
            }
        };

        match self.format {
            SealFormat::ChaCha20Poly1305 => {
                match content_key.decrypt(&self.ciphertext, &self.nonce) {
                    Ok(plaintext) => Some(plaintext),
                    Err(_) => {
                        tracing::debug!(recipient = %identity.id(), "payload authentication failed");
                        None
                    }
                }
            }
        }
    }

    /// Whether `id` holds a wrapped key for this envelope.
    pub fn is_recipient(&self, id: &PartyId) -> bool {
        self.wrapped_keys.contains_key(id)
    }

    /// Enumerate the recipient identifiers in sorted order.
    pub fn recipients(&self) -> impl Iterator<Item = &PartyId> {
        self.wrapped_keys.keys()
    }

    /// Get the size of the ciphertext.
    pub fn ciphertext_len(&self) -> usize {
        self.ciphertext.len()
    }

    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).expect("CBOR serialization failed");
        buf
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| CipherError::Serialization(e.to_string()))
    }
}
