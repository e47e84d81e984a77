use crate::constants::value::WILDCARD;
use crate::context::RequestContext;
use crate::error::{BoxError, CorsError};
use crate::resolver::Resolver;
use crate::util::equals_ignore_case;
use regex_automata::meta::{BuildError, Regex};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Source of the `Access-Control-Allow-Origin` value.
#[derive(Clone, Debug, Default)]
pub enum Origin {
    /// Echo the request's own `Origin` header.
    #[default]
    RequestOrigin,
    /// A fixed value, `*` included. An empty value disables CORS.
    Static(String),
    /// Decided per request by a callback.
    Dynamic(Resolver<OriginDecision>),
}

/// Outcome of a dynamic origin callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Allow(String),
    Disallow,
}

impl OriginDecision {
    pub fn any() -> Self {
        Self::Allow(WILDCARD.to_string())
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Allow(value.into())
    }

    pub fn disallow() -> Self {
        Self::Disallow
    }

    /// Collapses the decision into the value to emit. Empty strings count
    /// as a refusal.
    pub fn into_allowed(self) -> Option<String> {
        match self {
            OriginDecision::Allow(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

impl From<String> for OriginDecision {
    fn from(value: String) -> Self {
        OriginDecision::Allow(value)
    }
}

impl From<&str> for OriginDecision {
    fn from(value: &str) -> Self {
        OriginDecision::Allow(value.to_owned())
    }
}

impl<T> From<Option<T>> for OriginDecision
where
    T: Into<String>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => OriginDecision::Allow(inner.into()),
            None => OriginDecision::Disallow,
        }
    }
}

/// Failure to turn a configured origin pattern into a matcher.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern exceeded the configured budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// One entry of an origin whitelist.
#[derive(Clone, Debug)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    /// Compiles `pattern` case-insensitively.
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:{pattern})"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => equals_ignore_case(value, candidate),
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Static(WILDCARD.to_string())
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Static(value.into())
    }

    pub fn request_origin() -> Self {
        Self::RequestOrigin
    }

    /// Never grants access; requests pass through without CORS headers.
    pub fn disabled() -> Self {
        Self::Static(String::new())
    }

    /// Echoes the request origin when any matcher accepts it and refuses
    /// otherwise.
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        let matchers: Arc<[OriginMatcher]> = values.into_iter().map(Into::into).collect();
        Self::from_fn(move |ctx: &RequestContext| match ctx.origin() {
            Some(origin)
                if origin.len() <= MAX_ORIGIN_LENGTH
                    && matchers.iter().any(|matcher| matcher.matches(origin)) =>
            {
                OriginDecision::exact(origin)
            }
            _ => OriginDecision::Disallow,
        })
    }

    pub fn from_fn<F, R>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> R + Send + Sync + 'static,
        R: Into<OriginDecision>,
    {
        Self::Dynamic(Resolver::from_fn(callback))
    }

    pub fn try_from_fn<F, R, E>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> Result<R, E> + Send + Sync + 'static,
        R: Into<OriginDecision>,
        E: Into<BoxError>,
    {
        Self::Dynamic(Resolver::try_from_fn(callback))
    }

    pub fn from_async_fn<F, Fut, R, E>(callback: F) -> Self
    where
        F: Fn(&RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
        R: Into<OriginDecision>,
        E: Into<BoxError>,
    {
        Self::Dynamic(Resolver::from_async_fn(callback))
    }

    /// Produces the value for `Access-Control-Allow-Origin`, or `None` when
    /// CORS is disabled for this request.
    pub async fn resolve(&self, ctx: &RequestContext) -> Result<Option<String>, CorsError> {
        match self {
            Origin::RequestOrigin => Ok(ctx
                .origin()
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)),
            Origin::Static(value) if value.is_empty() => Ok(None),
            Origin::Static(value) => Ok(Some(value.clone())),
            Origin::Dynamic(resolver) => resolver
                .resolve(ctx)
                .await
                .map(OriginDecision::into_allowed)
                .map_err(CorsError::OriginResolver),
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::Static(value.to_owned())
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::Static(value)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
