//! Session Ledger is a small personal finance ledger served as a JSON API.
//!
//! Clients record credits and debits against an anonymous session that is
//! carried in the `sessionId` cookie. The session is created on the first
//! write and every read is scoped to it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod routing;
mod session;
mod stores;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::{SessionId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use session::{
    ResolvedSession, SESSION_COOKIE, SESSION_COOKIE_MAX_AGE, get_session_id, resolve_session,
    session_guard,
};
pub use stores::{
    TransactionStore,
    sqlite::{SQLAppState, SQLiteTransactionStore, create_app_state},
};
pub use transaction::{NewTransaction, Transaction, TransactionTitle, TransactionType};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The `sessionId` cookie is missing from the request, or it does not
    /// hold a valid session ID.
    #[error("missing session cookie")]
    SessionMissing,

    /// The request path or body could not be parsed.
    ///
    /// Callers should pass in a description of what was wrong with the
    /// request, it is sent back to the client.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An empty string was used as a transaction title.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// The requested route does not exist.
    #[error("not found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::SessionMissing => StatusCode::UNAUTHORIZED,
            Error::InvalidRequest(_) | Error::EmptyTitle => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = match self {
            // Any errors that are not handled above are not intended to be shown to the client.
            Error::SqlError(_) | Error::DatabaseLockError => {
                tracing::error!("An unexpected error occurred: {}", self);
                "internal server error".to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    async fn body_text(error: Error) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn session_missing_maps_to_401() {
        let (status, body) = body_text(Error::SessionMissing).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"missing session cookie"}"#);
    }

    #[tokio::test]
    async fn validation_errors_map_to_400() {
        let (status, _) = body_text(Error::EmptyTitle).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = body_text(Error::InvalidRequest("bad id".to_owned())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"invalid request: bad id"}"#);
    }

    #[tokio::test]
    async fn sql_error_details_are_not_sent_to_client() {
        let (status, body) =
            body_text(Error::SqlError(rusqlite::Error::InvalidQuery)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"internal server error"}"#);
    }

    #[tokio::test]
    async fn lock_error_maps_to_500() {
        let (status, _) = body_text(Error::DatabaseLockError).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
