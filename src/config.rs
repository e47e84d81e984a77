use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::credentials::Credentials;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, MaxAge};
use crate::origin::Origin;
use serde::Deserialize;

/// File-friendly form of the static part of [`CorsOptions`].
///
/// Keys use camelCase (`allowMethods`, `keepHeadersOnError`, ...). Unknown
/// keys are ignored. Resolver callbacks cannot be expressed here; set them
/// on the converted [`CorsOptions`] instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsConfig {
    /// `None` echoes the request origin.
    #[serde(default)]
    pub origin: Option<String>,
    /// `null` disables `Access-Control-Allow-Methods`.
    #[serde(default = "default_allow_methods")]
    pub allow_methods: Option<HeaderList>,
    #[serde(default)]
    pub allow_headers: Option<HeaderList>,
    #[serde(default)]
    pub expose_headers: Option<HeaderList>,
    #[serde(default)]
    pub credentials: bool,
    #[serde(default)]
    pub max_age: Option<MaxAgeValue>,
    #[serde(default = "default_keep_headers_on_error")]
    pub keep_headers_on_error: bool,
    #[serde(default)]
    pub secure_context: bool,
    #[serde(default)]
    pub private_network_access: bool,
}

/// A header list given either as an array or as one already-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HeaderList {
    Joined(String),
    List(Vec<String>),
}

impl HeaderList {
    fn into_values(self) -> Vec<String> {
        match self {
            HeaderList::Joined(value) => vec![value],
            HeaderList::List(values) => values,
        }
    }
}

/// Any scalar is accepted and rendered to its string form; no range checks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MaxAgeValue {
    Seconds(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
    Text(String),
}

impl From<MaxAgeValue> for MaxAge {
    fn from(value: MaxAgeValue) -> Self {
        match value {
            MaxAgeValue::Seconds(seconds) => MaxAge::from(seconds),
            MaxAgeValue::Signed(seconds) => MaxAge::from(seconds),
            MaxAgeValue::Float(seconds) => MaxAge::from(seconds.to_string()),
            MaxAgeValue::Flag(flag) => MaxAge::from(flag.to_string()),
            MaxAgeValue::Text(text) => MaxAge::from(text),
        }
    }
}

fn default_allow_methods() -> Option<HeaderList> {
    match AllowedMethods::default() {
        AllowedMethods::List(values) => Some(HeaderList::List(values)),
        AllowedMethods::Disabled => None,
    }
}

fn default_keep_headers_on_error() -> bool {
    true
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: None,
            allow_methods: default_allow_methods(),
            allow_headers: None,
            expose_headers: None,
            credentials: false,
            max_age: None,
            keep_headers_on_error: default_keep_headers_on_error(),
            secure_context: false,
            private_network_access: false,
        }
    }
}

impl From<CorsConfig> for CorsOptions {
    fn from(config: CorsConfig) -> Self {
        Self {
            origin: config.origin.map(Origin::Static).unwrap_or_default(),
            allow_methods: config
                .allow_methods
                .map(|list| AllowedMethods::List(list.into_values()))
                .unwrap_or(AllowedMethods::Disabled),
            allow_headers: config
                .allow_headers
                .map(|list| AllowedHeaders::List(list.into_values()))
                .unwrap_or_default(),
            expose_headers: config
                .expose_headers
                .map(|list| ExposedHeaders::from(list.into_values())),
            credentials: Credentials::Static(config.credentials),
            max_age: config.max_age.map(MaxAge::from),
            keep_headers_on_error: config.keep_headers_on_error,
            secure_context: config.secure_context,
            private_network_access: config.private_network_access,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
