pub mod codec;
pub mod error;
pub mod method;

pub use codec::Codec;
pub use error::{BoxError, CodecError, Result};
pub use method::Method;
