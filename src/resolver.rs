use crate::context::RequestContext;
use crate::error::BoxError;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub type Resolving<T> = BoxFuture<'static, Result<T, BoxError>>;
pub type ResolveFn<T> = dyn Fn(&RequestContext) -> Resolving<T> + Send + Sync;

/// A per-request callback producing a policy value, either synchronously or
/// asynchronously.
///
/// Every constructor erases into the same boxed-future shape.
pub struct Resolver<T> {
    inner: Arc<ResolveFn<T>>,
}

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

impl<T> Resolver<T>
where
    T: Send + 'static,
{
    /// Wraps an infallible synchronous callback.
    pub fn from_fn<F, R>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> R + Send + Sync + 'static,
        R: Into<T>,
    {
        Self {
            inner: Arc::new(move |ctx: &RequestContext| -> Resolving<T> {
                future::ready(Ok(callback(ctx).into())).boxed()
            }),
        }
    }

    /// Wraps a fallible synchronous callback.
    pub fn try_from_fn<F, R, E>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> Result<R, E> + Send + Sync + 'static,
        R: Into<T>,
        E: Into<BoxError>,
    {
        Self {
            inner: Arc::new(move |ctx: &RequestContext| -> Resolving<T> {
                future::ready(callback(ctx).map(Into::into).map_err(Into::into)).boxed()
            }),
        }
    }

    /// Wraps an asynchronous callback.
    ///
    /// The returned future must be `'static`; copy whatever it needs out of
    /// the context before the `async` block.
    pub fn from_async_fn<F, Fut, R, E>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
        R: Into<T>,
        E: Into<BoxError>,
    {
        Self {
            inner: Arc::new(move |ctx: &RequestContext| -> Resolving<T> {
                callback(ctx)
                    .map(|result| result.map(Into::into).map_err(Into::into))
                    .boxed()
            }),
        }
    }

    pub async fn resolve(&self, ctx: &RequestContext) -> Result<T, BoxError> {
        (self.inner)(ctx).await
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
