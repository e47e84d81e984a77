use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::util::non_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Preflight,
    Simple,
}

impl RequestKind {
    /// `OPTIONS` carrying a non-empty `Access-Control-Request-Method` is a
    /// preflight. The requested method is not checked against the policy.
    pub fn classify(request: &RequestContext) -> Self {
        let is_options = request.method().eq_ignore_ascii_case(method::OPTIONS);
        let requests_method =
            non_blank(request.header(header::ACCESS_CONTROL_REQUEST_METHOD)).is_some();

        if is_options && requests_method {
            RequestKind::Preflight
        } else {
            RequestKind::Simple
        }
    }

    pub fn is_preflight(self) -> bool {
        matches!(self, RequestKind::Preflight)
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod classifier_test;
