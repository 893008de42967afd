//! # Cloak
//!
//! Composable encrypted values with recipient-scoped access.
//!
//! ## Overview
//!
//! An [`EncryptedValue`] carries a payload plus the evolving set of parties
//! permitted to read it. Values compose: pure projections, dependent
//! compositions, and explicit restrictions all record themselves in the
//! value's history, and the permission set of the result is derived from that
//! history: composing two values never grants access a party did not already
//! hold on both.
//!
//! ## Key Concepts
//!
//! - **Plain**: in-memory content, universally readable until restricted.
//! - **Sealed**: ciphertext plus one wrapped content key per recipient.
//! - **Transformed / Bound**: lazy composition; the unapplied function is
//!   stored, and nothing is decrypted until reveal.
//! - **Restricted**: an allow-list intersected with upstream permissions.
//! - **Materialization**: sealing a revealable value to every registry party
//!   it currently allows.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloak::{CborCodec, EncryptedValue, Identity, Registry};
//!
//! let alice = Identity::generate("alice");
//! let bob = Identity::generate("bob");
//!
//! let registry = Registry::new()
//!     .with_key("alice", alice.public_key())
//!     .with_key("bob", bob.public_key());
//!
//! // Compose, then seal to the allowed parties
//! let value = EncryptedValue::plain("meeting at noon".to_string())
//!     .restrict(["alice", "bob"])
//!     .materialize(&alice, &registry, CborCodec::new())
//!     .unwrap();
//!
//! // Either recipient can reveal; everyone else gets None
//! assert_eq!(value.reveal(&bob).unwrap(), Some("meeting at noon".to_string()));
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `cloak::core` - Identities, the registry, and the codec boundary
//! - `cloak::cipher` - The hybrid cipher and sealed envelopes

pub mod error;
pub mod materialize;
pub mod value;

// Re-export component crates
pub use cloak_cipher as cipher;
pub use cloak_core as core;

// Re-export main types for convenience
pub use error::{CloakError, Result};
pub use value::{EncryptedValue, LazyNode, SealedValue};

// Re-export commonly used component types
pub use cloak_cipher::{SealFormat, SealedEnvelope, WrappedKey};
pub use cloak_core::{
    CborCodec, CodecError, Identity, PartyId, PayloadCodec, Registry, X25519PublicKey,
};
