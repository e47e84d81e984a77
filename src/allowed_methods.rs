use crate::constants::method;
use once_cell::sync::Lazy;

static DEFAULT_METHODS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        method::GET,
        method::HEAD,
        method::PUT,
        method::POST,
        method::DELETE,
        method::PATCH,
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// Configuration for the `Access-Control-Allow-Methods` preflight header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Emit the comma-joined list verbatim. Case-sensitive to preserve caller intent.
    List(Vec<String>),
    /// Never emit the header.
    Disabled,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn disabled() -> Self {
        Self::Disabled
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(values.join(",")),
            AllowedMethods::Disabled => None,
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::List(DEFAULT_METHODS.clone())
    }
}

/// An already-joined value such as `"GET,POST"` is emitted as-is.
impl From<&str> for AllowedMethods {
    fn from(value: &str) -> Self {
        Self::List(vec![value.to_owned()])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
