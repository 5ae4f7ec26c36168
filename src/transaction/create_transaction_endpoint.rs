//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    AppState, Error,
    session::{ResolvedSession, resolve_session},
    stores::TransactionStore,
    transaction::{NewTransaction, TransactionTitle, TransactionType},
};

/// The JSON body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Text detailing the transaction.
    pub title: String,
    /// The value of the transaction. The sign is ignored, see `kind`.
    pub amount: f64,
    /// Whether the amount is a credit or a debit.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// A route handler for creating a new transaction, responds with 201 and an
/// empty body on success.
///
/// If the request has no session cookie a new session is minted and its
/// cookie is set on the response. The body is validated before the session
/// is resolved, so an invalid request never mints a session.
pub async fn create_transaction_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
    jar: CookieJar,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(CookieJar, StatusCode), Error> {
    let Json(request) = payload?;
    let title = TransactionTitle::new(&request.title)?;

    let ResolvedSession {
        session_id,
        new_cookie,
    } = resolve_session(&jar);

    let transaction = state.transaction_store.create(NewTransaction::new(
        title,
        request.amount,
        request.kind,
        session_id,
    ))?;
    tracing::info!(
        "Created transaction {} for session {}",
        transaction.id,
        session_id
    );

    let jar = match new_cookie {
        Some(cookie) => jar.add(cookie),
        None => jar,
    };

    Ok((jar, StatusCode::CREATED))
}
