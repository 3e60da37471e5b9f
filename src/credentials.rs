use serde::Deserialize;
use std::fmt;

use crate::error::{Error, Result};

pub const ENV_CONSUMER_KEY: &str = "OAUTH_CONSUMER_KEY";
pub const ENV_CONSUMER_SECRET: &str = "OAUTH_CONSUMER_SECRET";

/// Consumer key and secret issued by the service provider.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
}

impl Credentials {
    /// Build credentials without validation; empty values are kept as-is.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Like [`Credentials::new`] but rejects empty values.
    pub fn try_new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(consumer_key, consumer_secret);
        if credentials.consumer_key.is_empty() {
            return Err(Error::EmptyCredential("consumer key"));
        }
        if credentials.consumer_secret.is_empty() {
            return Err(Error::EmptyCredential("consumer secret"));
        }
        Ok(credentials)
    }

    /// Read `OAUTH_CONSUMER_KEY` and `OAUTH_CONSUMER_SECRET`.
    pub fn from_env() -> Result<Self> {
        Credentials::from_env_vars(ENV_CONSUMER_KEY, ENV_CONSUMER_SECRET)
    }

    /// Read the key and secret from the named environment variables.
    pub fn from_env_vars(key_var: &'static str, secret_var: &'static str) -> Result<Self> {
        let key = std::env::var(key_var).map_err(|_| Error::MissingEnv(key_var))?;
        let secret = std::env::var(secret_var).map_err(|_| Error::MissingEnv(secret_var))?;
        tracing::debug!(consumer_key = %key, "loaded consumer credentials from environment");
        Ok(Credentials::new(key, secret))
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}
