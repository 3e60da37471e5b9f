use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::error::Result;
use crate::signer::Signer;

/// Attach an OAuth 1.0 `Authorization` header to a reqwest request.
pub trait RequestExt {
    /// Sign with the method and URL of the request itself; query pairs
    /// are folded into the signed parameters.
    fn sign_oauth1(&mut self, signer: &mut Signer) -> Result<()>;
}

impl RequestExt for reqwest::Request {
    fn sign_oauth1(&mut self, signer: &mut Signer) -> Result<()> {
        let header = signer
            .method(self.method().as_str())
            .target_from_url(self.url())
            .header_string();
        self.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::try_from(header)?);
        Ok(())
    }
}

pub trait RequestBuilderExt {
    /// Use the signer as configured; the builder's own URL is not consulted.
    fn oauth1(self, signer: &mut Signer) -> Self;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn oauth1(self, signer: &mut Signer) -> Self {
        self.header(AUTHORIZATION, signer.header_string())
    }
}
