//! Test fixtures and helpers.
//!
//! Common setup code for multi-party scenarios.

use cloak_core::{Identity, Registry};

/// The standard three-party scenario: alice, bob, and carol, all registered.
pub struct Scenario {
    pub alice: Identity,
    pub bob: Identity,
    pub carol: Identity,
    pub registry: Registry,
}

impl Scenario {
    /// Build the scenario with deterministic keys.
    pub fn new() -> Self {
        let alice = party("alice");
        let bob = party("bob");
        let carol = party("carol");
        let registry = Registry::new()
            .with_key("alice", alice.public_key())
            .with_key("bob", bob.public_key())
            .with_key("carol", carol.public_key());

        Self {
            alice,
            bob,
            carol,
            registry,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a deterministic identity from a party name.
///
/// The name doubles as the key seed, so the same name always yields the same
/// key pair.
pub fn party(name: &str) -> Identity {
    let mut seed = [0u8; 32];
    for (i, byte) in name.bytes().take(32).enumerate() {
        seed[i] = byte;
    }
    Identity::from_seed(name, seed)
}

/// Create `count` deterministic identities plus a registry knowing them all.
pub fn party_set(count: usize) -> (Vec<Identity>, Registry) {
    let mut parties = Vec::with_capacity(count);
    let mut registry = Registry::new();

    for i in 0..count {
        let mut seed = [0u8; 32];
        seed[0] = i as u8;
        seed[1] = 0xA5;
        let identity = Identity::from_seed(format!("party-{i}"), seed);
        registry = registry.with_key(identity.id().clone(), identity.public_key());
        parties.push(identity);
    }

    (parties, registry)
}
