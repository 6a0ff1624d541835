//! JSON codec adapter.

use crate::domain::CodecError;
use crate::ports::Codec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `Codec` over `serde_json`, the encoding every Ark v1 endpoint speaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(body).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }
}
