use brotli::enc::backward_references::BrotliEncoderMode;
use brotli::enc::BrotliEncoderParams;
use parcodec_core::{Codec, CodecError, Method, Result};

/// Brotli (RFC 7932) codec.
///
/// Encoding uses fixed parameters: generic mode, quality 8, and a 2^22 byte
/// sliding window. These only shape the encoder; the decoder accepts any
/// valid Brotli stream whatever quality or window it was produced with.
pub struct BrotliCodec;

impl BrotliCodec {
    /// Encoder quality (0 = fastest, 11 = densest).
    pub const QUALITY: i32 = 8;
    /// Base-2 log of the sliding window size.
    pub const LG_WINDOW: i32 = 22;

    fn encoder_params() -> BrotliEncoderParams {
        BrotliEncoderParams {
            mode: BrotliEncoderMode::BROTLI_MODE_GENERIC,
            quality: Self::QUALITY,
            lgwin: Self::LG_WINDOW,
            ..Default::default()
        }
    }
}

impl Codec for BrotliCodec {
    fn method(&self) -> Method {
        Method::Brotli
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let mut input = raw;
        let mut compressed = Vec::new();
        brotli::BrotliCompress(&mut input, &mut compressed, &Self::encoder_params())
            .map_err(|e| CodecError::compress(Method::Brotli, e))?;
        Ok(compressed)
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        // A stream that ends before its final meta-block surfaces as an
        // UnexpectedEof error rather than a short read.
        let mut input = compressed;
        let mut raw = Vec::new();
        brotli::BrotliDecompress(&mut input, &mut raw)
            .map_err(|e| CodecError::decode(Method::Brotli, e))?;
        Ok(raw)
    }
}
