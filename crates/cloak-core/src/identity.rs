//! Party identity: a stable identifier plus X25519 key material.

use std::fmt;

use crate::crypto::{X25519PublicKey, X25519StaticSecret};
use crate::types::PartyId;

/// A party's identity: its identifier and full key pair.
///
/// The secret half never leaves the owning party's process and is never
/// serialized; `Identity` is handed to reveal/materialize calls as an
/// ephemeral parameter rather than stored inside composed values. The one
/// exception is the composer identity captured by a bind, which the
/// permission algebra needs at evaluation time.
#[derive(Clone)]
pub struct Identity {
    id: PartyId,
    secret: X25519StaticSecret,
}

impl Identity {
    /// Create an identity with a freshly generated key pair.
    pub fn generate(id: impl Into<PartyId>) -> Self {
        Self {
            id: id.into(),
            secret: X25519StaticSecret::generate(),
        }
    }

    /// Create an identity with a deterministic key pair from a seed.
    pub fn from_seed(id: impl Into<PartyId>, seed: [u8; 32]) -> Self {
        Self {
            id: id.into(),
            secret: X25519StaticSecret::from_bytes(seed),
        }
    }

    /// The party identifier.
    pub fn id(&self) -> &PartyId {
        &self.id
    }

    /// The public half of the key pair.
    pub fn public_key(&self) -> X25519PublicKey {
        self.secret.public_key()
    }

    /// The secret half of the key pair.
    ///
    /// Needed by unwrap operations acting on the holder's behalf.
    pub fn secret(&self) -> &X25519StaticSecret {
        &self.secret
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({}, {:?})", self.id, self.public_key())
    }
}
