use crate::classifier::RequestKind;
use crate::constants::{header, status};
use crate::context::RequestContext;
use crate::error::{CorsError, DownstreamError};
use crate::header_builder::HeaderBuilder;
use crate::options::CorsOptions;
use crate::result::{CorsDecision, PreflightResult, ResolvedDecision, Response, SimpleResult};
use crate::util::non_blank;
use std::future::Future;
use tracing::{debug, trace, warn};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// The options are fixed at construction; all per-request variance comes
/// from the [`RequestContext`] handed to each call.
#[derive(Debug)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Runs the policy around a downstream continuation.
    ///
    /// Requests without an `Origin`, or whose origin resolves to nothing, go
    /// straight to `next` untouched. Preflights are answered here with 204
    /// and an empty body; `next` is never called for them. Simple requests
    /// get their CORS headers before `next` runs, and a downstream failure
    /// comes back as [`CorsError::Downstream`] with the headers retained
    /// according to `keep_headers_on_error`.
    pub async fn handle<B, N, Fut>(
        &self,
        request: &RequestContext,
        mut response: Response<B>,
        next: N,
    ) -> Result<Response<B>, CorsError>
    where
        B: Default,
        N: FnOnce(Response<B>) -> Fut,
        Fut: Future<Output = Result<Response<B>, DownstreamError>>,
    {
        match self.evaluate(request).await? {
            CorsDecision::NotApplicable => Ok(next(response).await?),
            CorsDecision::Preflight(result) => {
                response.headers.extend(result.headers);
                response.status = result.status;
                response.body = B::default();
                Ok(response)
            }
            CorsDecision::Simple(result) => {
                response.headers.extend(result.headers.clone());
                match next(response).await {
                    Ok(response) => Ok(response),
                    Err(err) => Err(CorsError::Downstream(self.retain_on_error(&result, err))),
                }
            }
        }
    }

    /// Computes the headers for `request` without driving the chain.
    ///
    /// Hosts that apply headers themselves call this, then
    /// [`Cors::retain_on_error`] if their downstream fails.
    pub async fn evaluate(&self, request: &RequestContext) -> Result<CorsDecision, CorsError> {
        let Some(decision) = self.resolve(request).await? else {
            return Ok(CorsDecision::NotApplicable);
        };

        match RequestKind::classify(request) {
            RequestKind::Preflight => {
                let headers =
                    HeaderBuilder::new(&self.options, &decision).build_preflight_headers(request);
                debug!(
                    allow_origin = %decision.allow_origin,
                    status = status::NO_CONTENT,
                    "answering CORS preflight"
                );
                Ok(CorsDecision::Preflight(PreflightResult {
                    headers,
                    status: status::NO_CONTENT,
                }))
            }
            RequestKind::Simple => {
                let headers = HeaderBuilder::new(&self.options, &decision).build_simple_headers();
                Ok(CorsDecision::Simple(SimpleResult { headers, decision }))
            }
        }
    }

    /// Writes the simple-request CORS headers onto a downstream failure.
    ///
    /// Same-named entries on the error are overwritten and `Origin` is
    /// merged into the error's own `Vary`. With `keep_headers_on_error`
    /// off the error is returned as it came.
    pub fn retain_on_error(
        &self,
        result: &SimpleResult,
        mut err: DownstreamError,
    ) -> DownstreamError {
        if !self.options.keep_headers_on_error {
            return err;
        }

        for (name, value) in result.headers.iter() {
            if !name.eq_ignore_ascii_case(header::VARY) {
                err.headers.set(name, value);
            }
        }
        err.headers.merge_vary(header::ORIGIN);
        debug!(
            status = err.status,
            allow_origin = %result.decision.allow_origin,
            "kept CORS headers on downstream error"
        );
        err
    }

    /// Resolves origin, then credentials. Each resolver runs at most once.
    async fn resolve(
        &self,
        request: &RequestContext,
    ) -> Result<Option<ResolvedDecision>, CorsError> {
        if non_blank(request.origin()).is_none() {
            trace!(method = request.method(), "no Origin header, skipping CORS");
            return Ok(None);
        }

        let allow_origin = match self.options.origin.resolve(request).await {
            Ok(Some(origin)) => origin,
            Ok(None) => {
                debug!(
                    origin = request.origin(),
                    path = request.path(),
                    "origin not allowed, skipping CORS"
                );
                return Ok(None);
            }
            Err(err) => {
                warn!(error = %err, path = request.path(), "origin resolver failed");
                return Err(err);
            }
        };

        let allow_credentials = self
            .options
            .credentials
            .resolve(request)
            .await
            .inspect_err(|err| {
                warn!(error = %err, path = request.path(), "credentials resolver failed");
            })?;

        Ok(Some(ResolvedDecision {
            allow_origin,
            allow_credentials,
        }))
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
