//! Defines functions for reading and minting the session cookie.

use axum_extra::extract::{CookieJar, cookie::Cookie};
use time::Duration;

use crate::database_id::SessionId;

/// The name of the cookie that holds the session ID.
pub const SESSION_COOKIE: &str = "sessionId";
/// How long a newly minted session cookie lives on the client.
pub const SESSION_COOKIE_MAX_AGE: Duration = Duration::days(7);

/// The session a request should be handled under.
///
/// If the session was minted for this request, `new_cookie` holds the cookie
/// that must be sent back to the client. It is up to the caller to add it to
/// the response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSession {
    /// The ID of the session.
    pub session_id: SessionId,
    /// The cookie to set on the response, if the session is new.
    pub new_cookie: Option<Cookie<'static>>,
}

/// Get the session ID from the cookie jar.
///
/// Returns `None` if the cookie is missing or does not hold a valid session ID.
/// A cookie that is present but is not a UUID is treated the same as a
/// missing one, rather than accepted on presence alone.
pub fn get_session_id(jar: &CookieJar) -> Option<SessionId> {
    let cookie = jar.get(SESSION_COOKIE)?;

    match cookie.value_trimmed().parse() {
        Ok(session_id) => Some(session_id),
        Err(error) => {
            tracing::debug!("Ignoring session cookie with invalid value: {error}");
            None
        }
    }
}

/// Get the session ID from the cookie jar, or mint a new session if there
/// is none.
///
/// The jar is not modified, a new session is returned together with the
/// cookie to set instead.
pub fn resolve_session(jar: &CookieJar) -> ResolvedSession {
    if let Some(session_id) = get_session_id(jar) {
        return ResolvedSession {
            session_id,
            new_cookie: None,
        };
    }

    let session_id = SessionId::new_random();
    tracing::debug!("Minted new session {session_id}");

    ResolvedSession {
        session_id,
        new_cookie: Some(build_session_cookie(session_id)),
    }
}

/// Build the cookie that stores `session_id` on the client for
/// [SESSION_COOKIE_MAX_AGE].
pub fn build_session_cookie(session_id: SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .max_age(SESSION_COOKIE_MAX_AGE)
        .build()
}

#[cfg(test)]
mod cookie_tests {
    use axum_extra::extract::{CookieJar, cookie::Cookie};
    use time::Duration;

    use crate::{
        SessionId,
        session::{SESSION_COOKIE, build_session_cookie, get_session_id, resolve_session},
    };

    #[test]
    fn session_cookie_attributes() {
        let session_id = SessionId::new_random();

        let cookie = build_session_cookie(session_id);

        assert_eq!(cookie.name(), "sessionId");
        assert_eq!(cookie.value(), session_id.to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604800)));
        assert_eq!(cookie.secure(), None);
        assert_eq!(cookie.http_only(), None);
    }

    #[test]
    fn get_session_id_from_jar() {
        let session_id = SessionId::new_random();
        let jar = CookieJar::new().add(build_session_cookie(session_id));

        assert_eq!(get_session_id(&jar), Some(session_id));
    }

    #[test]
    fn get_session_id_missing_cookie() {
        assert_eq!(get_session_id(&CookieJar::new()), None);
    }

    #[test]
    fn get_session_id_invalid_cookie() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-uuid"));

        assert_eq!(get_session_id(&jar), None);
    }

    #[test]
    fn resolve_existing_session_has_no_cookie() {
        let session_id = SessionId::new_random();
        let jar = CookieJar::new().add(build_session_cookie(session_id));

        let resolved = resolve_session(&jar);

        assert_eq!(resolved.session_id, session_id);
        assert_eq!(resolved.new_cookie, None);
    }

    #[test]
    fn resolve_without_session_mints_cookie() {
        let resolved = resolve_session(&CookieJar::new());

        let cookie = resolved.new_cookie.expect("expected a new session cookie");
        assert_eq!(cookie.value(), resolved.session_id.to_string());
    }

    #[test]
    fn resolve_replaces_invalid_session() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "garbage"));

        let resolved = resolve_session(&jar);

        assert!(resolved.new_cookie.is_some());
    }

    #[test]
    fn resolve_mints_distinct_sessions() {
        let first = resolve_session(&CookieJar::new());
        let second = resolve_session(&CookieJar::new());

        assert_ne!(first.session_id, second.session_id);
    }
}
