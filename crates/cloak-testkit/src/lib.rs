//! # Cloak Testkit
//!
//! Testing utilities for Cloak.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: deterministic identities and pre-built registries for
//!   multi-party scenarios
//! - **Generators**: proptest strategies for property-based testing
//! - **JsonCodec**: an alternate payload codec proving the codec boundary is
//!   pluggable
//!
//! ## Fixtures
//!
//! ```rust
//! use cloak_testkit::fixtures::Scenario;
//!
//! let s = Scenario::new();
//! assert!(s.registry.contains(s.alice.id()));
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cloak_testkit::generators::{parties, payload};
//!
//! proptest! {
//!     #[test]
//!     fn my_property((all, registry) in parties(4), payload in payload(128)) {
//!         // ...
//!     }
//! }
//! ```

pub mod codec;
pub mod fixtures;
pub mod generators;

pub use codec::JsonCodec;
pub use fixtures::{party, party_set, Scenario};
