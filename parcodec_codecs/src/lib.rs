mod brotli_codec;
mod gzip_codec;
mod lzo_codec;
mod registry;
mod snappy_codec;
mod uncompressed;

pub use brotli_codec::BrotliCodec;
pub use gzip_codec::GzipCodec;
pub use lzo_codec::LzoCodec;
pub use snappy_codec::SnappyCodec;
pub use uncompressed::UncompressedCodec;

pub use registry::{codec_for, compress, decompress, deflate, inflate, registry};

pub use parcodec_core::{Codec, CodecError, Method, Result};
