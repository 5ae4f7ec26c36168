//! Implements a struct that holds the state of the REST server.

use crate::stores::TransactionStore;

/// The state of the REST server.
///
/// The server keeps no other state between requests, everything else lives
/// in the store.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore,
{
    /// The store for managing session [transactions](crate::Transaction).
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore,
{
    /// Create a new [AppState].
    pub fn new(transaction_store: T) -> Self {
        Self { transaction_store }
    }
}
