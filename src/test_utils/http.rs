use axum::middleware;
use axum_test::{TestResponse, TestServer};
use rusqlite::Connection;
use serde_json::json;

use crate::{
    AppState, SessionId, build_router, create_app_state, endpoints, logging_middleware,
    session::build_session_cookie, stores::TransactionStore,
};

/// A test server for the full router backed by an in-memory SQLite database.
pub(crate) fn get_test_server() -> TestServer {
    let conn = Connection::open_in_memory().unwrap();
    let state = create_app_state(conn).expect("Could not create app state.");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// A test server with the same layers as the server binary, backed by an
/// in-memory SQLite database.
pub(crate) fn get_logged_test_server() -> TestServer {
    let conn = Connection::open_in_memory().unwrap();
    let state = create_app_state(conn).expect("Could not create app state.");
    let router = build_router(state).layer(middleware::from_fn(logging_middleware));

    TestServer::try_new(router).expect("Could not create test server.")
}

/// A test server for the full router backed by `store`.
pub(crate) fn get_test_server_with_store<T: TransactionStore>(store: T) -> TestServer {
    TestServer::try_new(build_router(AppState::new(store))).expect("Could not create test server.")
}

/// Send a request to create a transaction, under `session_id` if given.
pub(crate) async fn create_transaction(
    server: &TestServer,
    session_id: Option<SessionId>,
    title: &str,
    amount: f64,
    transaction_type: &str,
) -> TestResponse {
    let request = server.post(endpoints::TRANSACTIONS).json(&json!({
        "title": title,
        "amount": amount,
        "type": transaction_type,
    }));

    match session_id {
        Some(session_id) => request.add_cookie(build_session_cookie(session_id)).await,
        None => request.await,
    }
}

