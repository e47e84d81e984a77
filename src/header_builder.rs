use crate::constants::{header, value};
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::options::CorsOptions;
use crate::result::ResolvedDecision;
use crate::util::non_blank;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
    decision: &'a ResolvedDecision,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions, decision: &'a ResolvedDecision) -> Self {
        Self { options, decision }
    }

    pub(crate) fn build_simple_headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(6);
        headers.extend(self.build_origin_headers());
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_exposed_headers());
        headers
    }

    pub(crate) fn build_preflight_headers(&self, request: &RequestContext) -> Headers {
        let mut headers = Headers::with_capacity(9);
        headers.extend(self.build_origin_headers());
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers(request));
        headers.extend(self.build_max_age_header());
        headers.extend(self.build_private_network_header(request));
        headers
    }

    /// Allow-origin, the isolation pair when enabled, and `Vary: Origin`.
    /// `Vary` is added for the wildcard too; caches still see the response
    /// differ by origin.
    pub(crate) fn build_origin_headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(4);
        headers.set(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.decision.allow_origin.clone(),
        );
        if self.options.secure_context {
            headers.set(header::CROSS_ORIGIN_OPENER_POLICY, value::SAME_ORIGIN);
            headers.set(header::CROSS_ORIGIN_EMBEDDER_POLICY, value::REQUIRE_CORP);
        }
        headers.merge_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> Headers {
        let mut headers = Headers::new();
        if self.decision.allow_credentials {
            headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, value::TRUE);
        }
        headers
    }

    pub(crate) fn build_methods_header(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(methods) = self.options.allow_methods.header_value() {
            headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext) -> Headers {
        let mut headers = Headers::new();
        if let Some(allowed) = self.options.allow_headers.header_value(request) {
            headers.set(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed);
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(exposed) = self
            .options
            .expose_headers
            .as_ref()
            .and_then(|config| config.header_value())
        {
            headers.set(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(max_age) = &self.options.max_age
            && !max_age.as_str().is_empty()
        {
            headers.set(header::ACCESS_CONTROL_MAX_AGE, max_age.as_str());
        }
        headers
    }

    pub(crate) fn build_private_network_header(&self, request: &RequestContext) -> Headers {
        let mut headers = Headers::new();
        let requested =
            non_blank(request.header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK)).is_some();
        if self.options.private_network_access && requested {
            headers.set(header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK, value::TRUE);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
