//! Materialization: converting a revealable value into a sealed one.
//!
//! Materializing resolves the value with the caller's own identity, encodes
//! the payload, and seals it to every registry party the value currently
//! allows. The composed history collapses into a single `Sealed` variant.

use std::sync::Arc;

use cloak_cipher::SealedEnvelope;
use cloak_core::{Identity, PayloadCodec, Registry};

use crate::error::Result;
use crate::value::{EncryptedValue, SealedValue};

impl<A> EncryptedValue<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Seal this value to its currently-allowed recipient set.
    ///
    /// - Already-sealed values are returned unchanged (idempotent).
    /// - The materializer must itself be able to read the value: if
    ///   `identity` cannot reveal it, the value is returned unchanged.
    /// - Recipients are the registry parties for which [`allowed`] holds at
    ///   the moment of materialization; parties unknown to the registry are
    ///   left out even when allowed.
    ///
    /// [`allowed`]: EncryptedValue::allowed
    pub fn materialize<C>(
        self,
        identity: &Identity,
        registry: &Registry,
        codec: C,
    ) -> Result<EncryptedValue<A>>
    where
        C: PayloadCodec<A> + Send + Sync + 'static,
    {
        if let EncryptedValue::Sealed(_) = &self {
            return Ok(self);
        }

        let content = match self.reveal(identity)? {
            Some(content) => content,
            // Materialization cannot encrypt what it cannot read.
            None => return Ok(self),
        };

        let mut recipients = Vec::new();
        for (id, key) in registry.iter() {
            if self.allowed(id) {
                recipients.push((id.clone(), *key));
            }
        }

        tracing::debug!(
            materializer = %identity.id(),
            recipients = recipients.len(),
            "sealing value"
        );

        let bytes = codec.encode(&content)?;
        let envelope = SealedEnvelope::seal(&bytes, recipients)?;

        Ok(EncryptedValue::Sealed(SealedValue::new(
            envelope,
            Arc::new(codec),
        )))
    }
}
