//! Defines the endpoint for fetching a single transaction.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::{SessionId, TransactionId},
    stores::TransactionStore,
    transaction::Transaction,
};

/// The JSON body returned when fetching a transaction.
///
/// `transaction` is left out of the body when no transaction was found.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// The transaction, if it exists and belongs to the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
}

/// A route handler that returns the transaction with the ID in the path.
///
/// A transaction that belongs to another session is reported the same way as
/// one that does not exist, with a 200 response and no transaction.
pub async fn get_transaction_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
    Extension(session_id): Extension<SessionId>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<TransactionResponse>, Error> {
    let Path(transaction_id) = path?;

    let transaction = state.transaction_store.get(transaction_id, session_id)?;

    Ok(Json(TransactionResponse { transaction }))
}
