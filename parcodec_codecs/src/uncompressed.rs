use parcodec_core::{Codec, Method, Result};

/// Identity codec: column chunks are stored verbatim.
///
/// Useful for:
/// - Pages that are already compact (dictionary indices, bit-packed levels)
///   where a general-purpose codec would only add CPU cost.
/// - Verifying the page round-trip independently of any real codec.
pub struct UncompressedCodec;

impl Codec for UncompressedCodec {
    fn method(&self) -> Method {
        Method::Uncompressed
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        Ok(compressed.to_vec())
    }
}
