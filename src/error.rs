use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised by the downstream part of the middleware chain.
///
/// The host turns this into the error response. `headers` are the headers
/// that response must carry; the engine adds its CORS headers here when
/// headers are kept on error.
#[derive(Debug, Error)]
#[error("downstream handler failed with status {status}: {source}")]
pub struct DownstreamError {
    pub status: u16,
    pub headers: Headers,
    #[source]
    pub source: BoxError,
}

impl DownstreamError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            status: status::INTERNAL_SERVER_ERROR,
            headers: Headers::new(),
            source: source.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.set(name, value);
        self
    }
}

/// Errors that can be produced while running the CORS policy.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("origin resolver failed: {0}")]
    OriginResolver(#[source] BoxError),
    #[error("credentials resolver failed: {0}")]
    CredentialsResolver(#[source] BoxError),
    #[error(transparent)]
    Downstream(#[from] DownstreamError),
}

impl CorsError {
    /// Returns the downstream failure, if that is what this error wraps.
    pub fn into_downstream(self) -> Result<DownstreamError, Self> {
        match self {
            CorsError::Downstream(err) => Ok(err),
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
