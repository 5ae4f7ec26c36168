//! Anonymous sessions carried by the `sessionId` cookie.
//!
//! A session is minted the first time a client creates a transaction and is
//! required by every other route.

mod cookie;
mod middleware;

pub use cookie::{
    ResolvedSession, SESSION_COOKIE, SESSION_COOKIE_MAX_AGE, build_session_cookie, get_session_id,
    resolve_session,
};
pub use middleware::session_guard;
