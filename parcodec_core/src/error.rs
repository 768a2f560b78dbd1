use thiserror::Error;

use crate::method::Method;

/// Boxed underlying cause reported by a compression library.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Errors raised by method resolution and by the codecs themselves.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The method token (or metadata id) is not one this layer serves.
    #[error("invalid compression method: {0}")]
    UnsupportedMethod(String),

    /// The encoder failed; only reachable through environment failures.
    #[error("{method} compression failed: {source}")]
    Compress {
        method: Method,
        #[source]
        source: BoxError,
    },

    /// The input is not a valid encoding for `method`.
    #[error("{method} decompression failed: {source}")]
    Decode {
        method: Method,
        #[source]
        source: BoxError,
    },
}

impl CodecError {
    #[inline]
    pub fn unsupported(token: impl Into<String>) -> Self {
        Self::UnsupportedMethod(token.into())
    }

    #[inline]
    pub fn compress(method: Method, source: impl Into<BoxError>) -> Self {
        Self::Compress {
            method,
            source: source.into(),
        }
    }

    #[inline]
    pub fn decode(method: Method, source: impl Into<BoxError>) -> Self {
        Self::Decode {
            method,
            source: source.into(),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedMethod(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The method a codec failure belongs to; `None` for rejected tokens.
    pub fn method(&self) -> Option<Method> {
        match self {
            Self::UnsupportedMethod(_) => None,
            Self::Compress { method, .. } | Self::Decode { method, .. } => Some(*method),
        }
    }
}
