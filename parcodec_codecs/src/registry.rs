use parcodec_core::{Codec, Method, Result};
use tracing::{debug, trace};

use crate::{BrotliCodec, GzipCodec, LzoCodec, SnappyCodec, UncompressedCodec};

/// One codec per method, indexed by [`Method::index`].
static CODECS: [&dyn Codec; 5] = [
    &UncompressedCodec,
    &GzipCodec,
    &SnappyCodec,
    &LzoCodec,
    &BrotliCodec,
];

/// The codec registered for `method`. Total over [`Method`].
#[inline]
pub fn codec_for(method: Method) -> &'static dyn Codec {
    CODECS[method.index()]
}

/// Every `(method, codec)` pair in the registry.
pub fn registry() -> impl Iterator<Item = (Method, &'static dyn Codec)> {
    Method::ALL.into_iter().map(|m| (m, codec_for(m)))
}

/// Resolve a method token, logging rejected ones.
fn resolve(method: &str) -> Result<Method> {
    method.parse().inspect_err(|_| {
        debug!(method, "rejected unsupported compression method");
    })
}

/// Compress `data` with an already-resolved method.
pub fn compress(method: Method, data: &[u8]) -> Result<Vec<u8>> {
    let out = codec_for(method).compress(data)?;
    trace!(%method, input_len = data.len(), output_len = out.len(), "deflate");
    Ok(out)
}

/// Decompress `data` with an already-resolved method.
pub fn decompress(method: Method, data: &[u8]) -> Result<Vec<u8>> {
    match codec_for(method).decompress(data) {
        Ok(out) => {
            trace!(%method, input_len = data.len(), output_len = out.len(), "inflate");
            Ok(out)
        }
        Err(e) => {
            debug!(%method, input_len = data.len(), error = %e, "inflate failed");
            Err(e)
        }
    }
}

/// Compress `data` with the method named by `method`.
///
/// Fails with an unsupported-method error before touching `data` if
/// the token is not one of `UNCOMPRESSED`, `GZIP`, `SNAPPY`, `LZO`, `BROTLI`.
pub fn deflate(method: &str, data: &[u8]) -> Result<Vec<u8>> {
    compress(resolve(method)?, data)
}

/// Decompress `data` with the method named by `method`.
///
/// Fails with an unsupported-method error for unknown tokens and with a
/// decode error when `data` is not a valid encoding.
pub fn inflate(method: &str, data: &[u8]) -> Result<Vec<u8>> {
    decompress(resolve(method)?, data)
}
