//! Cryptographic primitive wrappers.
//!
//! X25519 key agreement and ChaCha20-Poly1305 authenticated encryption,
//! wrapped in strong types. The hybrid cipher is built from these.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use x25519_dalek::{EphemeralSecret, PublicKey, StaticSecret};

use crate::error::CryptoError;

/// An X25519 public key (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct X25519PublicKey(pub [u8; 32]);

impl X25519PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Convert to x25519-dalek PublicKey.
    pub fn to_dalek(&self) -> PublicKey {
        PublicKey::from(self.0)
    }
}

impl fmt::Debug for X25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X25519Pub({})", &self.to_hex()[..16])
    }
}

impl From<PublicKey> for X25519PublicKey {
    fn from(pk: PublicKey) -> Self {
        Self(*pk.as_bytes())
    }
}

impl AsRef<[u8]> for X25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// An X25519 static secret key.
///
/// Key-agreement only; parties in Cloak never sign anything.
#[derive(Clone)]
pub struct X25519StaticSecret(StaticSecret);

impl X25519StaticSecret {
    /// Generate a new random secret.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(StaticSecret::from(bytes))
    }

    /// Create from seed bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(StaticSecret::from(bytes))
    }

    /// Derive the public key.
    pub fn public_key(&self) -> X25519PublicKey {
        X25519PublicKey::from(PublicKey::from(&self.0))
    }

    /// Perform key agreement with a peer's public key.
    pub fn diffie_hellman(&self, peer_public: &X25519PublicKey) -> SharedKey {
        let shared = self.0.diffie_hellman(&peer_public.to_dalek());
        SharedKey(*shared.as_bytes())
    }
}

impl fmt::Debug for X25519StaticSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X25519Secret({:?})", self.public_key())
    }
}

/// A shared secret derived from X25519 key agreement.
#[derive(Clone)]
pub struct SharedKey([u8; 32]);

impl SharedKey {
    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derive a key-wrapping key from this shared secret.
    ///
    /// Uses blake3 derive-key for domain separation; `context` binds the
    /// derived key to one specific wrap.
    pub fn derive_wrap_key(&self, context: &[u8]) -> SymmetricKey {
        use blake3::Hasher;
        let mut hasher = Hasher::new_derive_key("cloak-v0-key-wrap");
        hasher.update(&self.0);
        hasher.update(context);
        SymmetricKey(*hasher.finalize().as_bytes())
    }
}

/// A 256-bit symmetric key for ChaCha20-Poly1305.
#[derive(Clone)]
pub struct SymmetricKey([u8; 32]);

impl SymmetricKey {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encrypt data with this key.
    pub fn encrypt(&self, plaintext: &[u8], nonce: &SymmetricNonce) -> Result<Vec<u8>, CryptoError> {
        let cipher =
            ChaCha20Poly1305::new_from_slice(&self.0).map_err(|_| CryptoError::EncryptFailed)?;

        let nonce = Nonce::from_slice(&nonce.0);
        cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| CryptoError::EncryptFailed)
    }

    /// Decrypt data with this key.
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &SymmetricNonce) -> Result<Vec<u8>, CryptoError> {
        let cipher =
            ChaCha20Poly1305::new_from_slice(&self.0).map_err(|_| CryptoError::DecryptFailed)?;

        let nonce = Nonce::from_slice(&nonce.0);
        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CryptoError::DecryptFailed)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(<redacted>)")
    }
}

/// A 96-bit nonce for ChaCha20-Poly1305.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetricNonce(pub [u8; 12]);

impl SymmetricNonce {
    /// Generate a new random nonce.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 12];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

/// Ephemeral key pair for one-time key agreement.
///
/// The sender side of an anonymous seal: anyone can wrap a key to a public
/// key, and only the holder of the matching secret can unwrap it.
pub struct EphemeralKeyPair {
    secret: EphemeralSecret,
    public: X25519PublicKey,
}

impl EphemeralKeyPair {
    /// Generate a new ephemeral key pair.
    pub fn generate() -> Self {
        let secret = EphemeralSecret::random_from_rng(rand::thread_rng());
        let public = X25519PublicKey::from(PublicKey::from(&secret));
        Self { secret, public }
    }

    /// Get the public key.
    pub fn public_key(&self) -> X25519PublicKey {
        self.public
    }

    /// Perform key agreement with a peer's public key.
    ///
    /// Consumes the ephemeral secret (can only be used once).
    pub fn diffie_hellman(self, peer_public: &X25519PublicKey) -> SharedKey {
        let shared = self.secret.diffie_hellman(&peer_public.to_dalek());
        SharedKey(*shared.as_bytes())
    }
}
