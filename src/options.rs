use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::credentials::Credentials;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use std::fmt;

/// Policy configuration. Built once and handed to [`crate::Cors::new`],
/// which never mutates it afterwards.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub allow_methods: AllowedMethods,
    pub allow_headers: AllowedHeaders,
    pub expose_headers: Option<ExposedHeaders>,
    pub credentials: Credentials,
    pub max_age: Option<MaxAge>,
    pub keep_headers_on_error: bool,
    pub secure_context: bool,
    pub private_network_access: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            allow_methods: AllowedMethods::default(),
            allow_headers: AllowedHeaders::default(),
            expose_headers: None,
            credentials: Credentials::default(),
            max_age: None,
            keep_headers_on_error: true,
            secure_context: false,
            private_network_access: false,
        }
    }
}

/// Value of `Access-Control-Max-Age`.
///
/// Numbers are rendered in decimal and strings are emitted verbatim. No
/// range or format check is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxAge(String);

impl MaxAge {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaxAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for MaxAge {
    fn from(seconds: u64) -> Self {
        Self(seconds.to_string())
    }
}

impl From<u32> for MaxAge {
    fn from(seconds: u32) -> Self {
        Self(seconds.to_string())
    }
}

impl From<i64> for MaxAge {
    fn from(seconds: i64) -> Self {
        Self(seconds.to_string())
    }
}

impl From<std::time::Duration> for MaxAge {
    fn from(duration: std::time::Duration) -> Self {
        Self(duration.as_secs().to_string())
    }
}

impl From<&str> for MaxAge {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MaxAge {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
