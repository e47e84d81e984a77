use crate::constants::header;
use crate::context::RequestContext;

/// Configuration for the `Access-Control-Allow-Headers` preflight header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Echo the request's `Access-Control-Request-Headers` verbatim.
    #[default]
    MirrorRequest,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    pub fn header_value(&self, request: &RequestContext) -> Option<String> {
        match self {
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
            Self::MirrorRequest => request
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .filter(|value| !value.is_empty())
                .map(str::to_owned),
        }
    }
}

impl From<&str> for AllowedHeaders {
    fn from(value: &str) -> Self {
        Self::List(vec![value.to_owned()])
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
