use parcodec_core::{Codec, CodecError, Method, Result};
use rust_lzo::{worst_compress, LZOContext, LZOError};
use tracing::trace;

/// Smallest output buffer tried when decoding.
const MIN_DECODE_CAPACITY: usize = 64 * 1024;

/// Largest output buffer a single decode may grow to (1 GiB).
const MAX_DECODE_CAPACITY: usize = 1 << 30;

/// LZO1X-1 block codec.
///
/// Emits a bare LZO1X block terminated by the standard end-of-stream marker,
/// with no length prefix or checksum. Since the block does not record its
/// decompressed size, decoding starts from a buffer of four times the input
/// (at least 64 KiB) and doubles it on every output overrun until the
/// 1 GiB ceiling is reached.
pub struct LzoCodec;

impl Codec for LzoCodec {
    fn method(&self) -> Method {
        Method::Lzo
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let mut ctx = LZOContext::new();
        let mut compressed = vec![0u8; worst_compress(raw.len())];
        let (written, err) = ctx.compress_to_slice(raw, &mut compressed);
        let len = written.len();
        if !matches!(err, LZOError::OK) {
            return Err(CodecError::compress(
                Method::Lzo,
                format!("lzo1x_1_compress: {}", lzo_error_name(&err)),
            ));
        }
        compressed.truncate(len);
        Ok(compressed)
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        decompress_within(compressed, MAX_DECODE_CAPACITY)
    }
}

/// Decode `compressed`, growing the output buffer up to `ceiling` bytes.
fn decompress_within(compressed: &[u8], ceiling: usize) -> Result<Vec<u8>> {
    let mut capacity = compressed
        .len()
        .saturating_mul(4)
        .max(MIN_DECODE_CAPACITY)
        .min(ceiling);
    loop {
        let mut raw = vec![0u8; capacity];
        let (written, err) = LZOContext::decompress_to_slice(compressed, &mut raw);
        let len = written.len();
        match err {
            LZOError::OK => {
                raw.truncate(len);
                return Ok(raw);
            }
            LZOError::OUTPUT_OVERRUN if capacity < ceiling => {
                capacity = capacity.saturating_mul(2).min(ceiling);
                trace!(capacity, "lzo output overrun, growing buffer");
            }
            other => {
                return Err(CodecError::decode(
                    Method::Lzo,
                    format!("lzo1x_decompress_safe: {}", lzo_error_name(&other)),
                ));
            }
        }
    }
}

/// minilzo's name for a status code.
fn lzo_error_name(err: &LZOError) -> &'static str {
    match err {
        LZOError::OK => "OK",
        LZOError::ERROR => "ERROR",
        LZOError::INPUT_OVERRUN => "INPUT_OVERRUN",
        LZOError::OUTPUT_OVERRUN => "OUTPUT_OVERRUN",
        LZOError::LOOKBEHIND_OVERRUN => "LOOKBEHIND_OVERRUN",
        LZOError::EOF_NOT_FOUND => "EOF_NOT_FOUND",
        LZOError::INPUT_NOT_CONSUMED => "INPUT_NOT_CONSUMED",
        #[allow(unreachable_patterns)]
        _ => "unexpected status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_lzo_status() {
        // Initial literal run of 238 bytes with only one byte present.
        let err = LzoCodec.decompress(&[0xff, 0x00]).unwrap_err();
        assert!(err.is_decode());
        assert_eq!(
            err.to_string(),
            "LZO decompression failed: lzo1x_decompress_safe: INPUT_OVERRUN"
        );
    }

    #[test]
    fn growth_stops_at_the_ceiling() {
        let raw = vec![0u8; 1024 * 1024];
        let compressed = LzoCodec.compress(&raw).unwrap();

        let ceiling = 2 * MIN_DECODE_CAPACITY;
        let err = decompress_within(&compressed, ceiling).unwrap_err();
        assert!(err.is_decode());
        assert!(
            err.to_string().ends_with("OUTPUT_OVERRUN"),
            "expected an overrun at the ceiling, got: {err}"
        );

        assert_eq!(decompress_within(&compressed, raw.len()).unwrap(), raw);
    }
}
