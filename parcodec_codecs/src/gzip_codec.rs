use std::io::{Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use parcodec_core::{Codec, CodecError, Method, Result};

/// GZIP (RFC 1952) codec.
///
/// Compresses at the zlib default level (6) with an all-zero header mtime
/// and no file name, so identical input always yields identical bytes.
/// Decoding follows `gunzip`: concatenated members decode to the
/// concatenation of their contents, and a CRC-32 or length mismatch in any
/// member trailer is an error.
pub struct GzipCodec;

impl Codec for GzipCodec {
    fn method(&self) -> Method {
        Method::Gzip
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(raw)
            .map_err(|e| CodecError::compress(Method::Gzip, e))?;
        encoder
            .finish()
            .map_err(|e| CodecError::compress(Method::Gzip, e))
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        let mut raw = Vec::new();
        MultiGzDecoder::new(compressed)
            .read_to_end(&mut raw)
            .map_err(|e| CodecError::decode(Method::Gzip, e))?;
        Ok(raw)
    }
}
