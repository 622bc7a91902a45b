//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

mod category;
mod person;
mod transaction;

pub use category::SQLiteCategoryStore;
pub use person::SQLitePersonStore;
pub use transaction::SQLiteTransactionStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLitePersonStore, SQLiteCategoryStore, SQLiteTransactionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let person_store = SQLitePersonStore::new(connection.clone());
    let category_store = SQLiteCategoryStore::new(connection.clone());
    let transaction_store = SQLiteTransactionStore::new(connection);

    Ok(AppState::new(person_store, category_store, transaction_store))
}
