//! # Cloak Core
//!
//! Pure primitives for Cloak: party identities, the public-key registry, and
//! the payload codec boundary.
//!
//! This crate contains no I/O and no composition logic. It is the leaf layer
//! the hybrid cipher and the value algebra are built on.
//!
//! ## Key Types
//!
//! - [`PartyId`] - A party's stable string identifier
//! - [`Identity`] - An identifier plus its X25519 key pair
//! - [`Registry`] - Immutable `PartyId -> X25519PublicKey` map, built by persistent add
//! - [`PayloadCodec`] - The pluggable payload byte boundary

pub mod codec;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod registry;
pub mod types;

pub use codec::{CborCodec, PayloadCodec};
pub use crypto::{
    EphemeralKeyPair, SharedKey, SymmetricKey, SymmetricNonce, X25519PublicKey, X25519StaticSecret,
};
pub use error::{CodecError, CryptoError};
pub use identity::Identity;
pub use registry::Registry;
pub use types::PartyId;
