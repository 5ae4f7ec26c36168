//! Defines the core data models and table schema for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::{SessionId, TransactionId},
};

// ============================================================================
// MODELS
// ============================================================================

/// A credit or debit recorded against a session.
///
/// To create a new `Transaction`, use [NewTransaction::new] and insert it
/// through a [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short text description of what the transaction was for.
    pub title: String,
    /// The amount of money, positive for credits and negative for debits.
    pub amount: f64,
    /// The session that created the transaction.
    pub session_id: SessionId,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Whether a transaction adds money to or takes money from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Credit,
    /// Money going out.
    Debit,
}

impl TransactionType {
    /// Apply the sign for this transaction type to `amount`.
    ///
    /// The sign of `amount` is ignored: credits are always stored as
    /// positive and debits as negative.
    pub fn signed_amount(self, amount: f64) -> f64 {
        let magnitude = amount.abs();

        match self {
            TransactionType::Credit => magnitude,
            // Keep zero unsigned so a zero debit does not serialize as -0.0.
            TransactionType::Debit if magnitude == 0.0 => 0.0,
            TransactionType::Debit => -magnitude,
        }
    }
}

/// The title of a transaction, guaranteed to not be empty or only whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTitle(String);

impl TransactionTitle {
    /// Create a transaction title.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyTitle] if `title` is empty or only whitespace.
    pub fn new(title: &str) -> Result<Self, Error> {
        if title.trim().is_empty() {
            Err(Error::EmptyTitle)
        } else {
            Ok(Self(title.to_owned()))
        }
    }

    /// The title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A transaction that has been validated but not yet stored.
///
/// The amount is already signed according to its [TransactionType].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The title of the transaction.
    pub title: TransactionTitle,
    /// The signed amount of the transaction.
    pub amount: f64,
    /// The session the transaction belongs to.
    pub session_id: SessionId,
}

impl NewTransaction {
    /// Create a new transaction for `session_id`, signing `amount` according
    /// to `transaction_type`.
    pub fn new(
        title: TransactionTitle,
        amount: f64,
        transaction_type: TransactionType,
        session_id: SessionId,
    ) -> Self {
        Self {
            title,
            amount: transaction_type.signed_amount(amount),
            session_id,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transactions table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                session_id TEXT NOT NULL,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    // Every query filters on the session.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_session_id ON transactions(session_id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order: id, title, amount, session_id, created_at.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let session_id = row.get(3)?;
    let created_at = row.get(4)?;

    Ok(Transaction {
        id,
        title,
        amount,
        session_id,
        created_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================
