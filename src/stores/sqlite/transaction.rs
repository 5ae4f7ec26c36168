//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, named_params};
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::{SessionId, TransactionId},
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, map_transaction_row},
};

/// Stores transactions in a SQLite database.
///
/// The transactions table must be set up with [initialize](crate::initialize_db)
/// before the store is used.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire the database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if there is some SQL error.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.lock()?;

        let transaction = connection
            .prepare(
                "INSERT INTO transactions (id, title, amount, session_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, title, amount, session_id, created_at",
            )?
            .query_row(
                (
                    TransactionId::new_random(),
                    transaction.title.as_str(),
                    transaction.amount,
                    transaction.session_id,
                    OffsetDateTime::now_utc(),
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id` and `session_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if there is some SQL error.
    fn get(&self, id: TransactionId, session_id: SessionId) -> Result<Option<Transaction>, Error> {
        let connection = self.lock()?;

        let transaction = connection
            .prepare(
                "SELECT id, title, amount, session_id, created_at FROM transactions
                 WHERE id = :id AND session_id = :session_id",
            )?
            .query_row(
                named_params! { ":id": id, ":session_id": session_id },
                map_transaction_row,
            )
            .optional()?;

        Ok(transaction)
    }

    /// Retrieve the transactions in the database for `session_id`, in the
    /// order they were inserted.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if there is some SQL error.
    fn list(&self, session_id: SessionId) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;

        connection
            .prepare(
                "SELECT id, title, amount, session_id, created_at FROM transactions
                 WHERE session_id = :session_id
                 ORDER BY rowid",
            )?
            .query_map(&[(":session_id", &session_id)], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Sum the amounts of the transactions in the database for `session_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if there is some SQL error.
    fn summary(&self, session_id: SessionId) -> Result<f64, Error> {
        let connection = self.lock()?;

        connection
            .query_row(
                "SELECT COALESCE(SUM(amount), 0.0) FROM transactions WHERE session_id = :session_id",
                &[(":session_id", &session_id)],
                |row| row.get(0),
            )
            .map_err(|error| error.into())
    }
}
