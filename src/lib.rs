pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod classifier;
mod config;
mod context;
mod cors;
mod credentials;
mod error;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod resolver;
mod result;
mod util;
mod vary;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use classifier::RequestKind;
pub use config::{CorsConfig, HeaderList, MaxAgeValue};
pub use context::RequestContext;
pub use cors::Cors;
pub use credentials::Credentials;
pub use error::{BoxError, CorsError, DownstreamError};
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, MaxAge};
pub use origin::{Origin, OriginDecision, OriginMatcher, PatternError};
pub use resolver::Resolver;
pub use result::{CorsDecision, PreflightResult, ResolvedDecision, Response, SimpleResult};
pub use vary::merge_vary;
