//! The payload codec boundary.
//!
//! Composed values are generic over their payload type; at the point where a
//! payload crosses into ciphertext it must pass through a codec. The codec is
//! pluggable per payload type; [`CborCodec`] is the workspace default.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Converts a typed payload to and from an opaque byte sequence.
pub trait PayloadCodec<A> {
    /// Encode a payload to bytes.
    fn encode(&self, value: &A) -> Result<Vec<u8>, CodecError>;

    /// Decode a payload from bytes.
    fn decode(&self, bytes: &[u8]) -> Result<A, CodecError>;
}

/// CBOR codec over serde.
///
/// Zero-sized; one instance per payload type.
pub struct CborCodec<A> {
    _marker: PhantomData<fn() -> A>,
}

impl<A> CborCodec<A> {
    /// Create a new CBOR codec.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for CborCodec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for CborCodec<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> PayloadCodec<A> for CborCodec<A>
where
    A: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &A) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf).map_err(|e| CodecError::Encode(e.to_string()))?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<A, CodecError> {
        ciborium::from_reader(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
