use parcodec_core::{Codec, CodecError, Method, Result};
use snap::raw::{Decoder, Encoder};

/// Snappy block codec.
///
/// Uses the raw block format: a varint of the uncompressed length followed
/// by literal/copy elements. The framing format (stream identifier, chunk
/// CRCs) is not used; column chunks are self-delimiting.
pub struct SnappyCodec;

impl Codec for SnappyCodec {
    fn method(&self) -> Method {
        Method::Snappy
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Encoder::new()
            .compress_vec(raw)
            .map_err(|e| CodecError::compress(Method::Snappy, e))
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        Decoder::new()
            .decompress_vec(compressed)
            .map_err(|e| CodecError::decode(Method::Snappy, e))
    }
}
