//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cloak_core::{Identity, PartyId, Registry, SymmetricKey, SymmetricNonce};

/// Generate a party identifier.
pub fn party_id() -> impl Strategy<Value = PartyId> {
    "[a-z][a-z0-9-]{0,15}".prop_map(PartyId::new)
}

/// Generate a deterministic identity.
pub fn identity() -> impl Strategy<Value = Identity> {
    (party_id(), any::<[u8; 32]>()).prop_map(|(id, seed)| Identity::from_seed(id, seed))
}

/// Generate a random symmetric key.
pub fn symmetric_key() -> impl Strategy<Value = SymmetricKey> {
    any::<[u8; 32]>().prop_map(SymmetricKey::from_bytes)
}

/// Generate a random nonce.
pub fn nonce() -> impl Strategy<Value = SymmetricNonce> {
    any::<[u8; 12]>().prop_map(SymmetricNonce::from_bytes)
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate up to `max` identities with distinct ids, plus a registry
/// knowing them all.
pub fn parties(max: usize) -> impl Strategy<Value = (Vec<Identity>, Registry)> {
    prop::collection::btree_map(party_id(), any::<[u8; 32]>(), 1..=max).prop_map(|entries| {
        let mut identities = Vec::with_capacity(entries.len());
        let mut registry = Registry::new();
        for (id, seed) in entries {
            let identity = Identity::from_seed(id, seed);
            registry = registry.with_key(identity.id().clone(), identity.public_key());
            identities.push(identity);
        }
        (identities, registry)
    })
}
