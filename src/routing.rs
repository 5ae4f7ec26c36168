//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState, Error, endpoints,
    session::session_guard,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, get_summary_endpoint, get_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route except creating a transaction requires a session cookie.
pub fn build_router<T: TransactionStore>(state: AppState<T>) -> Router {
    let protected_routes = Router::new()
        .route(endpoints::TRANSACTIONS, get(list_transactions_endpoint::<T>))
        .route(endpoints::SUMMARY, get(get_summary_endpoint::<T>))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint::<T>))
        .route_layer(middleware::from_fn(session_guard));

    // Creating a transaction is the only way to start a session.
    let unprotected_routes = Router::new().route(
        endpoints::TRANSACTIONS,
        post(create_transaction_endpoint::<T>),
    );

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
