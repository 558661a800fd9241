use crate::{Deserialize, Serialize};
use nullable_core::codec::{Codec, DecodeFor, EncodeFor};
use tracing::trace;

const NULL: &[u8] = b"null";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits indented JSON instead of the compact form.
    pub fn pretty() -> Self {
        JsonCodec { pretty: true }
    }
}

impl Codec for JsonCodec {
    type Data = Vec<u8>;
    type Error = serde_json::Error;

    fn null(&self) -> Vec<u8> {
        NULL.to_vec()
    }

    fn is_null(&self, data: &Vec<u8>) -> bool {
        data.as_slice() == NULL
    }
}

impl<S: Serialize + ?Sized> EncodeFor<JsonCodec, S> for JsonCodec {
    fn encode(codec: &JsonCodec, obj: &S) -> Result<Vec<u8>, serde_json::Error> {
        let res = if codec.pretty {
            serde_json::to_vec_pretty(obj)
        } else {
            serde_json::to_vec(obj)
        };
        res.inspect_err(|e| trace!(error = %e, "json encode failed"))
    }
}

impl<D: Deserialize> DecodeFor<JsonCodec, D> for JsonCodec {
    fn decode(_codec: &JsonCodec, data: &Vec<u8>) -> Result<D, serde_json::Error> {
        serde_json::from_slice(data).inspect_err(|e| {
            trace!(error = %e, len = data.len(), "json decode failed")
        })
    }
}
