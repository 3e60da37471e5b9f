//! OAuth 1.0 request signing with HMAC-SHA1.
//!
//! Builds the signature base string from a method, target URL and
//! parameter set, signs it with the consumer secret and renders the
//! `Authorization` header value.

pub mod credentials;
pub mod encoding;
pub mod error;
pub mod parameters;
#[cfg(feature = "reqwest")]
pub mod reqwest_ext;
pub mod signer;
pub mod values;

mod util;

pub use credentials::Credentials;
pub use encoding::escape;
pub use error::{Error, Result};
pub use parameters::{ParamValue, ParameterSet};
#[cfg(feature = "reqwest")]
pub use reqwest_ext::{RequestBuilderExt, RequestExt};
pub use signer::Signer;
