use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

// ── Method IDs ─────────────────────────────────────────────────────────────
//
// Values of the `CompressionCodec` field in Parquet column metadata. Ids
// Parquet assigns to other codecs (ZSTD = 6, LZ4 = 5, LZ4_RAW = 7) are
// absent: they are not served by this registry.

pub const METHOD_UNCOMPRESSED: i32 = 0;
pub const METHOD_SNAPPY: i32 = 1;
pub const METHOD_GZIP: i32 = 2;
pub const METHOD_LZO: i32 = 3;
pub const METHOD_BROTLI: i32 = 4;

/// A compression method applied to a column chunk.
///
/// The set is closed: every variant has exactly one registered codec, and
/// any token or id outside it is rejected with
/// [`CodecError::UnsupportedMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Method {
    Uncompressed,
    Gzip,
    Snappy,
    Lzo,
    Brotli,
}

impl Method {
    /// Every method, in registry order.
    pub const ALL: [Method; 5] = [
        Method::Uncompressed,
        Method::Gzip,
        Method::Snappy,
        Method::Lzo,
        Method::Brotli,
    ];

    /// Canonical upper-case token, as written by the storage format.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Uncompressed => "UNCOMPRESSED",
            Method::Gzip => "GZIP",
            Method::Snappy => "SNAPPY",
            Method::Lzo => "LZO",
            Method::Brotli => "BROTLI",
        }
    }

    /// Numeric id stored in column chunk metadata.
    pub const fn id(self) -> i32 {
        match self {
            Method::Uncompressed => METHOD_UNCOMPRESSED,
            Method::Gzip => METHOD_GZIP,
            Method::Snappy => METHOD_SNAPPY,
            Method::Lzo => METHOD_LZO,
            Method::Brotli => METHOD_BROTLI,
        }
    }

    /// Resolve a method from its metadata id.
    pub fn from_id(id: i32) -> Result<Self, CodecError> {
        match id {
            METHOD_UNCOMPRESSED => Ok(Method::Uncompressed),
            METHOD_SNAPPY => Ok(Method::Snappy),
            METHOD_GZIP => Ok(Method::Gzip),
            METHOD_LZO => Ok(Method::Lzo),
            METHOD_BROTLI => Ok(Method::Brotli),
            other => Err(CodecError::unsupported(format!("id {other}"))),
        }
    }

    /// Position of this method in [`Method::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match on the canonical token.
impl FromStr for Method {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| CodecError::unsupported(s))
    }
}

impl TryFrom<String> for Method {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Method> for &'static str {
    fn from(m: Method) -> Self {
        m.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_token() {
        for m in Method::ALL {
            assert_eq!(m.name().parse::<Method>().unwrap(), m);
            assert_eq!(m.to_string(), m.name());
        }
    }

    #[test]
    fn rejects_unknown_tokens_verbatim() {
        for token in ["BOGUS", "gzip", " GZIP", "GZIP ", "", "ZSTD"] {
            let err = token.parse::<Method>().unwrap_err();
            assert!(err.is_unsupported());
            assert_eq!(err.to_string(), format!("invalid compression method: {token}"));
        }
    }

    #[test]
    fn ids_round_trip_and_unknown_ids_fail() {
        for m in Method::ALL {
            assert_eq!(Method::from_id(m.id()).unwrap(), m);
        }
        assert_eq!(Method::Snappy.id(), 1);
        assert_eq!(Method::Brotli.id(), 4);
        for id in [-1, 5, 6, 7, 42] {
            assert!(Method::from_id(id).unwrap_err().is_unsupported());
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, m) in Method::ALL.into_iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn serde_uses_canonical_tokens() {
        let json = serde_json::to_string(&Method::Brotli).unwrap();
        assert_eq!(json, "\"BROTLI\"");
        let m: Method = serde_json::from_str("\"LZO\"").unwrap();
        assert_eq!(m, Method::Lzo);
        assert!(serde_json::from_str::<Method>("\"lzo\"").is_err());
    }
}
