//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::{SessionId, TransactionId},
    transaction::{NewTransaction, Transaction},
};

/// Handles the creation and retrieval of transactions.
///
/// Every operation is scoped to a single session. A transaction belonging to
/// another session must look exactly like one that does not exist.
pub trait TransactionStore: Clone + Send + Sync + 'static {
    /// Create a new transaction in the store with a freshly generated ID.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve the transaction with `id` created under `session_id`.
    ///
    /// Returns `Ok(None)` if there is no such transaction for the session.
    fn get(&self, id: TransactionId, session_id: SessionId) -> Result<Option<Transaction>, Error>;

    /// Retrieve all the transactions created under `session_id`.
    fn list(&self, session_id: SessionId) -> Result<Vec<Transaction>, Error>;

    /// The sum of the amounts of all transactions created under `session_id`.
    ///
    /// Returns zero if the session has no transactions.
    fn summary(&self, session_id: SessionId) -> Result<f64, Error>;
}
