use std::env;
use std::sync::Arc;

use cors_policy_engine::{
    AllowedHeaders, BoxError, Cors, CorsConfig, CorsOptions, Credentials, ExposedHeaders, MaxAge,
    Origin, RequestContext,
};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

/// Reads options from the `CORS_CONFIG` JSON variable when set, otherwise
/// allows a fixed pair of origins with credentials for `/greet` only.
pub fn build_state() -> Result<AppState, BoxError> {
    let options = match env::var("CORS_CONFIG") {
        Ok(raw) => CorsOptions::from(serde_json::from_str::<CorsConfig>(&raw)?),
        Err(_) => CorsOptions {
            origin: Origin::list(["http://api.example.com", "http://localhost:3000"]),
            allow_headers: AllowedHeaders::list(["Content-Type", "X-Example-Trace"]),
            expose_headers: Some(ExposedHeaders::list(["X-Example-Trace"])),
            credentials: Credentials::from_fn(|ctx: &RequestContext| ctx.path() == "/greet"),
            max_age: Some(MaxAge::from(600u64)),
            ..CorsOptions::default()
        },
    };

    Ok(AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
