//! Sets up the application's SQLite database.

use rusqlite::Connection;

use crate::{Error, transaction::create_transaction_table};

/// Create the application tables in the database.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an [Error::SqlError] if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
