//! Algebraic laws of the value composition operators.
//!
//! `transform` behaves as a functor and `bind` as a monad up to what
//! `reveal` observes. The laws are checked through reveal because composed
//! values define no structural equality.

use cloak::{CborCodec, EncryptedValue, Identity, Registry};
use proptest::prelude::*;

fn alice() -> Identity {
    Identity::from_seed("alice", [0x01; 32])
}

fn carol() -> Identity {
    Identity::from_seed("carol", [0x03; 32])
}

fn registry() -> Registry {
    Registry::new()
        .with_key("alice", alice().public_key())
        .with_key("bob", Identity::from_seed("bob", [0x02; 32]).public_key())
}

/// A sealed base value readable by alice and bob but not carol.
fn sealed_value(n: u64) -> EncryptedValue<u64> {
    EncryptedValue::plain(n)
        .restrict(["alice", "bob"])
        .materialize(&alice(), &registry(), CborCodec::new())
        .expect("sealing base value")
}

fn f(n: u64) -> EncryptedValue<u64> {
    EncryptedValue::plain(n.wrapping_add(10)).restrict(["alice", "bob"])
}

fn g(n: u64) -> EncryptedValue<u64> {
    EncryptedValue::plain(n.wrapping_mul(3))
}

#[test]
fn functor_composition() {
    let lhs = sealed_value(7)
        .transform(|n| n + 1)
        .transform(|n| n * 2);
    let rhs = sealed_value(7).transform(|n| (n + 1) * 2);

    assert_eq!(lhs.reveal(&alice()).unwrap(), rhs.reveal(&alice()).unwrap());
    assert_eq!(lhs.reveal(&carol()).unwrap(), None);
    assert_eq!(rhs.reveal(&carol()).unwrap(), None);
}

#[test]
fn monad_left_identity() {
    let composer = alice();
    let bound = EncryptedValue::plain(5u64).bind(f, &composer);

    assert_eq!(
        bound.reveal(&alice()).unwrap(),
        f(5).reveal(&alice()).unwrap()
    );
    assert_eq!(
        bound.reveal(&carol()).unwrap(),
        f(5).reveal(&carol()).unwrap()
    );
}

#[test]
fn monad_right_identity() {
    let composer = alice();
    let value = sealed_value(9);
    let bound = sealed_value(9).bind(EncryptedValue::plain, &composer);

    assert_eq!(
        bound.reveal(&alice()).unwrap(),
        value.reveal(&alice()).unwrap()
    );
    assert_eq!(
        bound.reveal(&carol()).unwrap(),
        value.reveal(&carol()).unwrap()
    );
}

#[test]
fn monad_associativity() {
    let composer = alice();

    let lhs = sealed_value(4).bind(f, &composer).bind(g, &composer);

    let inner_composer = composer.clone();
    let rhs = sealed_value(4).bind(move |x| f(x).bind(g, &inner_composer), &composer);

    assert_eq!(lhs.reveal(&alice()).unwrap(), rhs.reveal(&alice()).unwrap());
    assert_eq!(lhs.reveal(&carol()).unwrap(), rhs.reveal(&carol()).unwrap());
}

#[test]
fn bind_permission_set_is_the_intersection() {
    let composer = alice();
    let bound = sealed_value(1).bind(f, &composer);

    // both operands allow alice and bob; neither allows carol
    assert!(bound.allowed(alice().id()));
    assert!(!bound.allowed(carol().id()));
}

proptest! {
    #[test]
    fn functor_composition_holds_for_arbitrary_affine_maps(
        x in any::<u64>(),
        a in 0u64..1_000,
        b in 0u64..1_000,
    ) {
        let reader = alice();
        let lhs = EncryptedValue::plain(x)
            .transform(move |n: u64| n.wrapping_mul(a))
            .transform(move |n: u64| n.wrapping_add(b));
        let rhs = EncryptedValue::plain(x)
            .transform(move |n: u64| n.wrapping_mul(a).wrapping_add(b));

        prop_assert_eq!(lhs.reveal(&reader).unwrap(), rhs.reveal(&reader).unwrap());
    }

    #[test]
    fn sealed_round_trip_holds_for_arbitrary_payloads(
        payload in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let reader = alice();
        let value = EncryptedValue::plain(payload.clone())
            .restrict(["alice"])
            .materialize(&reader, &registry(), CborCodec::new())
            .unwrap();

        prop_assert_eq!(value.reveal(&reader).unwrap(), Some(payload));
        prop_assert_eq!(value.reveal(&carol()).unwrap(), None);
    }
}
