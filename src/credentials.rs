use crate::context::RequestContext;
use crate::error::{BoxError, CorsError};
use crate::resolver::Resolver;
use std::future::Future;

/// Source of the `Access-Control-Allow-Credentials` decision.
#[derive(Clone, Debug)]
pub enum Credentials {
    Static(bool),
    Dynamic(Resolver<bool>),
}

impl Default for Credentials {
    fn default() -> Self {
        Self::Static(false)
    }
}

impl From<bool> for Credentials {
    fn from(value: bool) -> Self {
        Self::Static(value)
    }
}

impl Credentials {
    pub fn from_fn<F>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
    {
        Self::Dynamic(Resolver::from_fn(callback))
    }

    pub fn try_from_fn<F, E>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::Dynamic(Resolver::try_from_fn(callback))
    }

    pub fn from_async_fn<F, Fut, E>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::Dynamic(Resolver::from_async_fn(callback))
    }

    pub async fn resolve(&self, ctx: &RequestContext) -> Result<bool, CorsError> {
        match self {
            Credentials::Static(value) => Ok(*value),
            Credentials::Dynamic(resolver) => resolver
                .resolve(ctx)
                .await
                .map_err(CorsError::CredentialsResolver),
        }
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;
