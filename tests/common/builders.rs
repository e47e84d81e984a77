#![allow(dead_code)]

use cors_policy_engine::constants::{header, method};
use cors_policy_engine::{
    AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, Credentials, ExposedHeaders,
    Headers, MaxAge, Origin, RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_methods = AllowedMethods::list(methods);
        self
    }

    pub fn methods_disabled(mut self) -> Self {
        self.options.allow_methods = AllowedMethods::disabled();
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.options.allow_headers = headers;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.expose_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.options.credentials = credentials.into();
        self
    }

    pub fn max_age(mut self, value: impl Into<MaxAge>) -> Self {
        self.options.max_age = Some(value.into());
        self
    }

    pub fn keep_headers_on_error(mut self, enabled: bool) -> Self {
        self.options.keep_headers_on_error = enabled;
        self
    }

    pub fn secure_context(mut self, enabled: bool) -> Self {
        self.options.secure_context = enabled;
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.options.private_network_access = enabled;
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    headers: Headers,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            path: "/".to_string(),
            headers: Headers::new(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    pub fn private_network(self) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK, "true")
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn build(self) -> RequestContext {
        RequestContext::new(self.method, self.path).with_headers(self.headers)
    }

    pub async fn evaluate(self, cors: &Cors) -> CorsDecision {
        cors.evaluate(&self.build())
            .await
            .expect("request evaluation should succeed")
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn request(method: &str) -> RequestBuilder {
    RequestBuilder::new(method)
}

/// An `OPTIONS` request carrying `Access-Control-Request-Method: PUT`.
pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS).request_method(method::PUT)
}
