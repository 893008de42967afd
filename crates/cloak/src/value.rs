//! The encrypted-value algebra.
//!
//! An [`EncryptedValue`] records a payload's encryption and transform history
//! as a tree of five variants. Who may read a value falls out of that
//! history: composing values intersects their permission sets, restricting
//! narrows them, and pure projections leave them untouched.
//!
//! Values are immutable. Every operation returns a new value; trees are
//! exclusively owned and never shared or cyclic. Composition is lazy:
//! `transform` and `bind` store the unapplied function, so building up a
//! value never requires decrypt access. Only `reveal` does.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use cloak_cipher::SealedEnvelope;
use cloak_core::{Identity, PartyId, PayloadCodec};

use crate::error::Result;

/// A payload plus the evolving set of parties permitted to read it.
///
/// The five variants form a closed set; `allowed` and `reveal` are exhaustive
/// matches over it. Equality and hashing are intentionally not defined on
/// composed values.
pub enum EncryptedValue<A> {
    /// Payload held in the clear in memory; universally allowed.
    Plain(A),

    /// Sealed ciphertext bound to a recipient set, plus the codec that
    /// decodes the payload on reveal.
    Sealed(SealedValue<A>),

    /// A lazy pure projection of an upstream value. Permission-neutral.
    Transformed(Box<dyn LazyNode<A>>),

    /// A lazy dependent composition. The node captures the composer's
    /// identity, which permission evaluation needs to resolve the nested
    /// value.
    Bound(Box<dyn LazyNode<A>>),

    /// An explicit allow-list intersected with whatever upstream grants.
    Restricted {
        /// The upstream value.
        prev: Box<EncryptedValue<A>>,
        /// The allow-list. Only narrows; never widens upstream permissions.
        allow: BTreeSet<PartyId>,
    },
}

/// A composition node with an erased upstream payload type.
///
/// `Transformed` and `Bound` hold their upstream value and unapplied function
/// behind this trait so the upstream payload type does not leak into
/// [`EncryptedValue`]'s signature. Implemented only by the nodes the
/// constructors build.
pub trait LazyNode<A>: Send + Sync {
    /// Whether `id` may read the composed value.
    fn allowed(&self, id: &PartyId) -> bool;

    /// Resolve the composed value as `identity`.
    fn reveal(&self, identity: &Identity) -> Result<Option<A>>;
}

/// The sealed variant's payload: an envelope plus its codec.
pub struct SealedValue<A> {
    pub(crate) envelope: SealedEnvelope,
    pub(crate) codec: Arc<dyn PayloadCodec<A> + Send + Sync>,
}

impl<A> SealedValue<A> {
    pub(crate) fn new(
        envelope: SealedEnvelope,
        codec: Arc<dyn PayloadCodec<A> + Send + Sync>,
    ) -> Self {
        Self { envelope, codec }
    }

    /// The underlying envelope, e.g. for persistence.
    pub fn envelope(&self) -> &SealedEnvelope {
        &self.envelope
    }

    fn reveal(&self, identity: &Identity) -> Result<Option<A>> {
        match self.envelope.open(identity) {
            Some(bytes) => Ok(Some(self.codec.decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

impl<A> EncryptedValue<A> {
    /// Wrap bare content. Universally readable until restricted or
    /// materialized.
    pub fn plain(content: A) -> Self {
        EncryptedValue::Plain(content)
    }

    /// Rehydrate a sealed value from a persisted envelope.
    pub fn from_envelope<C>(envelope: SealedEnvelope, codec: C) -> Self
    where
        C: PayloadCodec<A> + Send + Sync + 'static,
    {
        EncryptedValue::Sealed(SealedValue::new(envelope, Arc::new(codec)))
    }

    /// Narrow the permission set to `ids` intersected with whatever upstream
    /// already allows.
    pub fn restrict<I>(self, ids: I) -> EncryptedValue<A>
    where
        I: IntoIterator,
        I::Item: Into<PartyId>,
    {
        EncryptedValue::Restricted {
            prev: Box::new(self),
            allow: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this value is already sealed.
    pub fn is_sealed(&self) -> bool {
        matches!(self, EncryptedValue::Sealed(_))
    }

    /// Whether `id` may read this value.
    ///
    /// Evaluated structurally on every call; nothing is cached. Composing
    /// values via `bind` must not grant a party access unless that party
    /// already had access to both operands, so `Bound` takes the conjunction
    /// of upstream and nested permissions. A pure `Transformed` relabeling
    /// does not change who may read.
    pub fn allowed(&self, id: &PartyId) -> bool {
        match self {
            EncryptedValue::Plain(_) => true,
            EncryptedValue::Sealed(sealed) => sealed.envelope.is_recipient(id),
            EncryptedValue::Transformed(node) => node.allowed(id),
            EncryptedValue::Bound(node) => node.allowed(id),
            EncryptedValue::Restricted { prev, allow } => {
                allow.contains(id) && prev.allowed(id)
            }
        }
    }

    /// Resolve this value to its payload as `identity`.
    ///
    /// `Ok(None)` means access denied: a normal outcome covering missing
    /// permissions and every cryptographic failure alike. An error is only
    /// ever a codec failure, which indicates a construction bug.
    pub fn reveal(&self, identity: &Identity) -> Result<Option<A>>
    where
        A: Clone,
    {
        match self {
            EncryptedValue::Plain(content) => Ok(Some(content.clone())),
            EncryptedValue::Sealed(sealed) => sealed.reveal(identity),
            EncryptedValue::Transformed(node) => node.reveal(identity),
            EncryptedValue::Bound(node) => node.reveal(identity),
            EncryptedValue::Restricted { prev, .. } => {
                // Denied callers never reach the upstream value.
                if !self.allowed(identity.id()) {
                    return Ok(None);
                }
                prev.reveal(identity)
            }
        }
    }
}

impl<A> EncryptedValue<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Apply a pure projection lazily.
    ///
    /// The function is stored unapplied and runs only when the value is
    /// revealed. Who may read is unchanged.
    pub fn transform<B, F>(self, f: F) -> EncryptedValue<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        EncryptedValue::Transformed(Box::new(Mapped { prev: self, f }))
    }

    /// Compose with a dependent continuation lazily.
    ///
    /// `composer` is the identity available at the moment the bind is
    /// constructed; permission evaluation uses it to resolve the nested
    /// value. It is the one identity a composed value ever captures.
    pub fn bind<B, F>(self, f: F, composer: &Identity) -> EncryptedValue<B>
    where
        B: Clone + Send + Sync + 'static,
        F: Fn(A) -> EncryptedValue<B> + Send + Sync + 'static,
    {
        EncryptedValue::Bound(Box::new(Chained {
            prev: self,
            f,
            composer: composer.clone(),
        }))
    }
}

impl<A> fmt::Debug for EncryptedValue<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncryptedValue::Plain(_) => write!(f, "Plain(..)"),
            EncryptedValue::Sealed(sealed) => f
                .debug_struct("Sealed")
                .field("recipients", &sealed.envelope.recipients().count())
                .finish(),
            EncryptedValue::Transformed(_) => write!(f, "Transformed(..)"),
            EncryptedValue::Bound(_) => write!(f, "Bound(..)"),
            EncryptedValue::Restricted { prev, allow } => f
                .debug_struct("Restricted")
                .field("allow", allow)
                .field("prev", prev)
                .finish(),
        }
    }
}

/// Node for `Transformed`: upstream value plus an unapplied projection.
struct Mapped<S, F> {
    prev: EncryptedValue<S>,
    f: F,
}

impl<S, A, F> LazyNode<A> for Mapped<S, F>
where
    S: Clone + Send + Sync + 'static,
    F: Fn(S) -> A + Send + Sync,
{
    fn allowed(&self, id: &PartyId) -> bool {
        self.prev.allowed(id)
    }

    fn reveal(&self, identity: &Identity) -> Result<Option<A>> {
        Ok(self.prev.reveal(identity)?.map(|content| (self.f)(content)))
    }
}

/// Node for `Bound`: upstream value, unapplied continuation, and the
/// composer identity captured at construction.
struct Chained<S, F> {
    prev: EncryptedValue<S>,
    f: F,
    composer: Identity,
}

impl<S, A, F> LazyNode<A> for Chained<S, F>
where
    S: Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
    F: Fn(S) -> EncryptedValue<A> + Send + Sync,
{
    fn allowed(&self, id: &PartyId) -> bool {
        if !self.prev.allowed(id) {
            return false;
        }
        match self.prev.reveal(&self.composer) {
            Ok(Some(content)) => (self.f)(content).allowed(id),
            // The composer cannot read upstream, so the nested value cannot
            // be consulted; upstream permissions alone decide.
            _ => true,
        }
    }

    fn reveal(&self, identity: &Identity) -> Result<Option<A>> {
        match self.prev.reveal(identity)? {
            Some(content) => (self.f)(content).reveal(identity),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity::from_seed("alice", [0x01; 32])
    }

    fn id(name: &str) -> PartyId {
        PartyId::new(name)
    }

    #[test]
    fn test_plain_allows_anyone() {
        let value = EncryptedValue::plain(42u64);
        assert!(value.allowed(&id("alice")));
        assert!(value.allowed(&id("mallory")));
    }

    #[test]
    fn test_plain_reveals_without_identity_check() {
        let value = EncryptedValue::plain("content".to_string());
        let outsider = Identity::generate("outsider");
        assert_eq!(value.reveal(&outsider).unwrap(), Some("content".to_string()));
    }

    #[test]
    fn test_restrict_narrows() {
        let value = EncryptedValue::plain(1u8).restrict(["alice", "bob"]);

        assert!(value.allowed(&id("alice")));
        assert!(value.allowed(&id("bob")));
        assert!(!value.allowed(&id("carol")));
    }

    #[test]
    fn test_restrict_never_widens() {
        let value = EncryptedValue::plain(1u8)
            .restrict(["alice"])
            .restrict(["alice", "bob"]);

        // bob is in the outer list but not upstream
        assert!(value.allowed(&id("alice")));
        assert!(!value.allowed(&id("bob")));
    }

    #[test]
    fn test_transform_preserves_permissions() {
        let value = EncryptedValue::plain(2u64).restrict(["alice"]);
        let doubled = value.transform(|n| n * 2);

        assert!(doubled.allowed(&id("alice")));
        assert!(!doubled.allowed(&id("bob")));
        assert_eq!(doubled.reveal(&alice()).unwrap(), Some(4));
    }

    #[test]
    fn test_restricted_reveal_denied_never_touches_upstream() {
        let value = EncryptedValue::plain(1u8)
            .transform(|_| -> u8 { panic!("projection ran for a denied caller") })
            .restrict(["alice"]);

        let bob = Identity::generate("bob");
        assert_eq!(value.reveal(&bob).unwrap(), None);
    }

    #[test]
    fn test_bind_intersects_permissions() {
        let composer = alice();
        let value = EncryptedValue::plain(1u8)
            .restrict(["alice", "bob"])
            .bind(
                |n| EncryptedValue::plain(n + 1).restrict(["alice", "carol"]),
                &composer,
            );

        assert!(value.allowed(&id("alice")));
        assert!(!value.allowed(&id("bob")));
        assert!(!value.allowed(&id("carol")));
    }

    #[test]
    fn test_bind_reveal_resolves_nested_value() {
        let composer = alice();
        let value = EncryptedValue::plain(3u64)
            .bind(|n| EncryptedValue::plain(n * 10), &composer);

        assert_eq!(value.reveal(&alice()).unwrap(), Some(30));
    }

    #[test]
    fn test_bind_scenario_from_composed_restriction() {
        let composer = alice();
        let value = EncryptedValue::plain("x".to_string())
            .restrict(["alice"])
            .bind(|_| EncryptedValue::plain("y".to_string()), &composer);

        assert!(value.allowed(&id("alice")));
        assert!(!value.allowed(&id("bob")));
    }

    #[test]
    fn test_debug_does_not_leak_content() {
        let value = EncryptedValue::plain("top secret".to_string()).restrict(["alice"]);
        let debug = format!("{:?}", value);
        assert!(!debug.contains("top secret"));
    }
}
