use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_policy_engine::{
    CorsDecision, CorsError, DownstreamError, Headers, RequestContext, constants::header,
};

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();
    let context = request_context(&request);

    match cors.evaluate(&context).await {
        Ok(CorsDecision::Preflight(result)) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() =
                StatusCode::from_u16(result.status).unwrap_or(StatusCode::NO_CONTENT);
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        Ok(CorsDecision::Simple(result)) => {
            let mut response = next.run(request).await;
            if response.status().is_server_error() {
                let mut err = DownstreamError::new("handler failed")
                    .with_status(response.status().as_u16());
                if let Some(vary) = response
                    .headers()
                    .get(header::VARY)
                    .and_then(|value| value.to_str().ok())
                {
                    err = err.with_header(header::VARY, vary);
                }
                let err = cors.retain_on_error(&result, err);
                error_response(response, &err)
            } else {
                apply_headers(response.headers_mut(), &result.headers);
                response
            }
        }
        Ok(CorsDecision::NotApplicable) => next.run(request).await,
        Err(err) => middleware_error_response(err),
    }
}

/// Rebuilds a failed handler response so it carries only the error's
/// headers. Anything else the handler set is dropped.
fn error_response(response: Response, err: &DownstreamError) -> Response {
    let (parts, body) = response.into_parts();
    let mut rebuilt = Response::new(body);
    *rebuilt.status_mut() = parts.status;
    apply_headers(rebuilt.headers_mut(), &err.headers);
    rebuilt
}

fn middleware_error_response(err: CorsError) -> Response {
    let mut response = Response::new(Body::from(format!("CORS policy error: {err}")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        let value = if name.eq_ignore_ascii_case(header::VARY) {
            let mut merged = Headers::new();
            if let Some(existing) = map
                .get(header::VARY)
                .and_then(|existing| existing.to_str().ok())
            {
                merged.set(header::VARY, existing);
            }
            merged.merge_vary(value);
            merged.get(header::VARY).unwrap_or(value).to_string()
        } else {
            value.to_string()
        };

        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(&value))
        {
            map.insert(header_name, header_value);
        }
    }
}

fn request_context(request: &Request) -> RequestContext {
    let mut headers = Headers::new();
    for (name, value) in request.headers() {
        if let Ok(value) = value.to_str() {
            headers.append(name.as_str(), value);
        }
    }

    RequestContext::new(request.method().as_str(), request.uri().to_string()).with_headers(headers)
}
