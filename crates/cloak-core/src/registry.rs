//! The public-key registry.
//!
//! An immutable mapping from party identifiers to X25519 public keys. Built
//! by persistent add: `with_key` returns a new registry, so a registry handed
//! to a composition step cannot be altered retroactively.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::crypto::X25519PublicKey;
use crate::types::PartyId;

/// Read-only mapping `PartyId -> X25519PublicKey`.
///
/// Backed by a sorted map so enumeration order, and therefore recipient
/// sets derived from it, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    keys: BTreeMap<PartyId, X25519PublicKey>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new registry with `id` mapped to `key`.
    ///
    /// Replaces any existing entry for `id`; `self` is left untouched.
    pub fn with_key(&self, id: impl Into<PartyId>, key: X25519PublicKey) -> Registry {
        let mut keys = self.keys.clone();
        keys.insert(id.into(), key);
        Registry { keys }
    }

    /// Look up the public key for a party.
    pub fn lookup(&self, id: &PartyId) -> Option<&X25519PublicKey> {
        self.keys.get(id)
    }

    /// Whether the registry knows `id`.
    pub fn contains(&self, id: &PartyId) -> bool {
        self.keys.contains_key(id)
    }

    /// Enumerate all known identifiers in sorted order.
    pub fn all_ids(&self) -> impl Iterator<Item = &PartyId> {
        self.keys.keys()
    }

    /// Iterate over all entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&PartyId, &X25519PublicKey)> {
        self.keys.iter()
    }

    /// Number of known parties.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;

    #[test]
    fn test_with_key_leaves_original_untouched() {
        let alice = Identity::generate("alice");
        let bob = Identity::generate("bob");

        let r1 = Registry::new().with_key("alice", alice.public_key());
        let r2 = r1.with_key("bob", bob.public_key());

        assert_eq!(r1.len(), 1);
        assert_eq!(r2.len(), 2);
        assert!(!r1.contains(&PartyId::new("bob")));
        assert!(r2.contains(&PartyId::new("bob")));
    }

    #[test]
    fn test_lookup() {
        let alice = Identity::generate("alice");
        let registry = Registry::new().with_key("alice", alice.public_key());

        assert_eq!(
            registry.lookup(&PartyId::new("alice")),
            Some(&alice.public_key())
        );
        assert_eq!(registry.lookup(&PartyId::new("mallory")), None);
    }

    #[test]
    fn test_all_ids_sorted() {
        let registry = Registry::new()
            .with_key("carol", Identity::generate("carol").public_key())
            .with_key("alice", Identity::generate("alice").public_key())
            .with_key("bob", Identity::generate("bob").public_key());

        let ids: Vec<&str> = registry.all_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_with_key_replaces_existing() {
        let old = Identity::generate("alice");
        let new = Identity::generate("alice");

        let registry = Registry::new()
            .with_key("alice", old.public_key())
            .with_key("alice", new.public_key());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(&PartyId::new("alice")), Some(&new.public_key()));
    }
}
