//! Middleware that rejects requests without a session.

use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::CookieJar;

use crate::{Error, session::get_session_id};

/// Middleware function that checks for a valid session cookie.
///
/// The session ID is placed into the request and the request executed
/// normally if the cookie is valid, otherwise [Error::SessionMissing] is
/// returned and the wrapped handler never runs.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(session_id): Extension<SessionId>` to receive the session ID.
pub async fn session_guard(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let Some(session_id) = get_session_id(&jar) else {
        tracing::debug!(
            "Rejecting request to {} without a session.",
            request.uri().path()
        );
        return Err(Error::SessionMissing);
    };

    request.extensions_mut().insert(session_id);

    Ok(next.run(request).await)
}
