use crate::constants::status;
use crate::headers::Headers;

/// Per-request outcome of origin and credentials resolution. Computed once
/// and shared by header composition and error retention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDecision {
    pub allow_origin: String,
    pub allow_credentials: bool,
}

/// Headers and status emitted for an accepted preflight request.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers emitted for a simple request, plus the decision they came from.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
    pub decision: ResolvedDecision,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    NotApplicable,
}

/// Host-neutral response threaded through the middleware chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<B> {
    pub status: u16,
    pub headers: Headers,
    pub body: B,
}

impl<B: Default> Default for Response<B> {
    fn default() -> Self {
        Self {
            status: status::OK,
            headers: Headers::new(),
            body: B::default(),
        }
    }
}

impl<B> Response<B> {
    pub fn new(body: B) -> Self {
        Self {
            status: status::OK,
            headers: Headers::new(),
            body,
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
