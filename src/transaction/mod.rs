//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction` used to create one
//! - The table schema and row mapping for the database
//! - Route handlers for creating, listing, fetching and summing transactions

mod core;
mod create_transaction_endpoint;
mod get_transaction_endpoint;
mod list_transactions_endpoint;
mod summary_endpoint;

pub use core::{
    NewTransaction, Transaction, TransactionTitle, TransactionType, create_transaction_table,
    map_transaction_row,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use get_transaction_endpoint::get_transaction_endpoint;
pub use list_transactions_endpoint::list_transactions_endpoint;
pub use summary_endpoint::get_summary_endpoint;
