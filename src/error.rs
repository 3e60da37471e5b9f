use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} must not be empty")]
    EmptyCredential(&'static str),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[cfg(feature = "reqwest")]
    #[error("invalid Authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
