//! Defines the endpoint for listing the session's transactions.

use axum::{Extension, Json, extract::State};
use serde::Serialize;

use crate::{
    AppState, Error, database_id::SessionId, stores::TransactionStore, transaction::Transaction,
};

/// The JSON body returned when listing transactions.
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    /// All transactions created under the session.
    pub transactions: Vec<Transaction>,
}

/// A route handler that returns all the transactions for the current session.
pub async fn list_transactions_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TransactionListResponse>, Error> {
    let transactions = state.transaction_store.list(session_id)?;

    Ok(Json(TransactionListResponse { transactions }))
}
