//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{Error, session::SESSION_COOKIE};

/// The number of bytes of a request or response body that are logged at the
/// `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body the middleware will buffer, the same as the
/// default limit of axum's body extractors.
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
/// The value of the session cookie is never logged.
/// Bodies are logged as lossy UTF-8 but forwarded byte for byte.
/// Request bodies larger than 2 MiB are rejected.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BODY_SIZE).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return Error::InvalidRequest("could not read request body".to_owned())
                .into_response();
        }
    };

    tracing::info!(
        "Received request: {} {}\nheaders: {:#?}",
        parts.method,
        parts.uri,
        redact_session_cookie(&parts.headers)
    );
    log_body("request", &String::from_utf8_lossy(&bytes));

    let request = Request::from_parts(parts, Body::from(bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::info!(
        "Sending response: {}\nheaders: {:#?}",
        parts.status,
        redact_session_cookie(&parts.headers)
    );
    log_body("response", &String::from_utf8_lossy(&bytes));

    Response::from_parts(parts, Body::from(bytes))
}

/// Copy `headers`, replacing the session ID in any cookie headers with asterisks.
fn redact_session_cookie(headers: &HeaderMap) -> HeaderMap {
    let mut redacted = headers.clone();

    for name in [COOKIE, SET_COOKIE] {
        let values: Vec<HeaderValue> = redacted
            .get_all(&name)
            .iter()
            .map(|value| match value.to_str() {
                Ok(text) => HeaderValue::from_str(&redact_session_id(text))
                    .unwrap_or_else(|_| HeaderValue::from_static("<redacted>")),
                Err(_) => HeaderValue::from_static("<redacted>"),
            })
            .collect();

        redacted.remove(&name);
        for value in values {
            redacted.append(&name, value);
        }
    }

    redacted
}

fn redact_session_id(cookie_text: &str) -> String {
    let field = format!("{SESSION_COOKIE}=");
    let start = match cookie_text.find(&field) {
        Some(start) => start,
        None => return cookie_text.to_string(),
    };

    let end = match cookie_text[start..].find(';') {
        Some(end) => start + end,
        None => cookie_text.len(),
    };

    format!(
        "{}{}********{}",
        &cookie_text[..start],
        field,
        &cookie_text[end..]
    )
}

fn log_body(direction: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("{direction} body: {}...", truncate(body, LOG_BODY_LENGTH_LIMIT));
        tracing::debug!("Full {direction} body: {body:?}");
    } else {
        tracing::info!("{direction} body: {body:?}");
    }
}

/// The longest prefix of `text` that is at most `max_len` bytes and ends on a char boundary.
fn truncate(text: &str, max_len: usize) -> &str {
    let mut end = max_len.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
