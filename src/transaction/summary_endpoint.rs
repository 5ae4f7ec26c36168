//! Defines the endpoint for the session's balance.

use axum::{Extension, Json, extract::State};
use serde::Serialize;

use crate::{AppState, Error, database_id::SessionId, stores::TransactionStore};

/// The JSON body returned for the summary.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// The balance of the session.
    pub summary: Summary,
}

/// The balance of a session.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// The sum of all transaction amounts, zero if there are no transactions.
    pub amount: f64,
}

/// A route handler that returns the sum of the current session's transactions.
pub async fn get_summary_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<SummaryResponse>, Error> {
    let amount = state.transaction_store.summary(session_id)?;

    Ok(Json(SummaryResponse {
        summary: Summary { amount },
    }))
}
