//! JSON payload codec.
//!
//! An alternate `PayloadCodec` used in tests to prove the codec boundary is
//! actually pluggable, and that codec failures surface as errors rather than
//! access denials.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use cloak_core::{CodecError, PayloadCodec};

/// JSON codec over serde.
pub struct JsonCodec<A> {
    _marker: PhantomData<fn() -> A>,
}

impl<A> JsonCodec<A> {
    /// Create a new JSON codec.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for JsonCodec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> PayloadCodec<A> for JsonCodec<A>
where
    A: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &A) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<A, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloak::{CborCodec, CloakError, EncryptedValue};

    use crate::fixtures::Scenario;

    #[test]
    fn test_materialize_with_json_codec() {
        let s = Scenario::new();

        let value = EncryptedValue::plain("json payload".to_string())
            .restrict(["alice", "bob"])
            .materialize(&s.alice, &s.registry, JsonCodec::new())
            .unwrap();

        assert_eq!(value.reveal(&s.bob).unwrap(), Some("json payload".to_string()));
        assert_eq!(value.reveal(&s.carol).unwrap(), None);
    }

    #[test]
    fn test_codec_mismatch_is_an_error_not_a_denial() {
        let s = Scenario::new();

        // Seal CBOR bytes, then rehydrate the envelope with a JSON codec.
        // The reader holds a valid key, so this is a construction bug and
        // must fail loudly instead of reading as "no access".
        let sealed = EncryptedValue::plain(7u64)
            .restrict(["alice"])
            .materialize(&s.alice, &s.registry, CborCodec::new())
            .unwrap();

        let envelope = match &sealed {
            EncryptedValue::Sealed(inner) => inner.envelope().clone(),
            other => panic!("expected Sealed, got {other:?}"),
        };

        let mismatched: EncryptedValue<u64> =
            EncryptedValue::from_envelope(envelope, JsonCodec::new());

        match mismatched.reveal(&s.alice) {
            Err(CloakError::Codec(_)) => {}
            other => panic!("expected codec error, got {other:?}"),
        }
    }
}
