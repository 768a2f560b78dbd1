use crate::error::Result;
use crate::method::Method;

/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Serves exactly one [`Method`] and never re-validates method names;
///   resolving a token to a codec is the registry's job.
/// - Is stateless. Any tuning (levels, window sizes) is a fixed constant of
///   the implementation, so a single shared instance can be used from any
///   number of threads at once.
/// - Returns a freshly allocated buffer and either succeeds completely or
///   fails with no partial output.
pub trait Codec: Send + Sync {
    /// The method this codec implements.
    fn method(&self) -> Method;

    /// Human-readable name, for logs and error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Compress a whole buffer.
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a whole buffer produced by any conforming encoder for
    /// this method.
    ///
    /// Malformed, truncated, or checksum-failing input yields
    /// [`CodecError::Decode`](crate::CodecError::Decode).
    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>>;
}
