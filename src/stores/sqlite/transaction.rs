//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, types::Type};
use rust_decimal::Decimal;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, Transaction, TransactionData, TransactionKind},
    stores::TransactionStore,
};

/// Creates and retrieves transactions to/from a SQLite database.
///
/// Amounts are stored as decimal strings rather than SQLite's binary floats
/// so that what is read back is exactly what was written.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new transaction store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a transaction in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, data: TransactionData) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO \"transaction\" (description, amount, kind, person_id, category_id)
                VALUES (?1, ?2, ?3, ?4, ?5);",
            (
                &data.description,
                data.amount.to_string(),
                data.kind.as_token(),
                data.person_id,
                data.category_id,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Transaction {
            id,
            description: data.description,
            amount: data.amount,
            kind: data.kind,
            person_id: data.person_id,
            category_id: data.category_id,
        })
    }

    /// Retrieve the transaction in the database with `transaction_id`.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if there is no such
    /// transaction, or [Error::SqlError] if there is an SQL error.
    fn get(&self, transaction_id: DatabaseID) -> Result<Transaction, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, description, amount, kind, person_id, category_id
                    FROM \"transaction\" WHERE id = :id;",
            )?
            .query_row(&[(":id", &transaction_id)], SQLiteTransactionStore::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve all transactions in the database, in ascending ID order.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, description, amount, kind, person_id, category_id
                    FROM \"transaction\" ORDER BY id;",
            )?
            .query_map([], SQLiteTransactionStore::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the editable fields of the transaction with `transaction_id`.
    ///
    /// # Errors
    /// This function will return [Error::UpdateMissingTransaction] if there is
    /// no such transaction, or [Error::SqlError] if there is an SQL error.
    fn update(
        &self,
        transaction_id: DatabaseID,
        data: TransactionData,
    ) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();
        let rows_changed = connection.execute(
            "UPDATE \"transaction\"
                SET description = ?1, amount = ?2, kind = ?3, person_id = ?4, category_id = ?5
                WHERE id = ?6;",
            (
                &data.description,
                data.amount.to_string(),
                data.kind.as_token(),
                data.person_id,
                data.category_id,
                transaction_id,
            ),
        )?;

        if rows_changed == 0 {
            return Err(Error::UpdateMissingTransaction);
        }

        Ok(Transaction {
            id: transaction_id,
            description: data.description,
            amount: data.amount,
            kind: data.kind,
            person_id: data.person_id,
            category_id: data.category_id,
        })
    }

    /// Delete the transaction with `transaction_id`.
    ///
    /// # Errors
    /// This function will return [Error::DeleteMissingTransaction] if there is
    /// no such transaction, or [Error::SqlError] if there is an SQL error.
    fn delete(&self, transaction_id: DatabaseID) -> Result<(), Error> {
        let rows_changed = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM \"transaction\" WHERE id = ?1;", (transaction_id,))?;

        if rows_changed == 0 {
            return Err(Error::DeleteMissingTransaction);
        }

        Ok(())
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                amount TEXT NOT NULL,
                kind TEXT NOT NULL,
                person_id INTEGER NOT NULL,
                category_id INTEGER NOT NULL,
                FOREIGN KEY(person_id) REFERENCES person(id),
                FOREIGN KEY(category_id) REFERENCES category(id)
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;
        let description = row.get(offset + 1)?;

        let raw_amount: String = row.get(offset + 2)?;
        let amount = raw_amount.parse::<Decimal>().map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(offset + 2, Type::Text, Box::new(error))
        })?;

        let raw_kind: String = row.get(offset + 3)?;
        let kind = TransactionKind::from_token(&raw_kind).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                offset + 3,
                Type::Text,
                format!("unknown transaction kind token {raw_kind:?}").into(),
            )
        })?;

        Ok(Transaction {
            id,
            description,
            amount,
            kind,
            person_id: row.get(offset + 4)?,
            category_id: row.get(offset + 5)?,
        })
    }
}

#[cfg(test)]
mod transaction_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use rust_decimal::Decimal;

    use crate::{
        Error,
        db::initialize,
        models::{
            Category, CategoryData, Person, PersonData, Purpose, TransactionData, TransactionKind,
        },
        stores::{CategoryStore, PersonStore, TransactionStore},
    };

    use super::super::{SQLiteCategoryStore, SQLitePersonStore};
    use super::SQLiteTransactionStore;

    struct Fixture {
        person_store: SQLitePersonStore,
        store: SQLiteTransactionStore,
        person: Person,
        category: Category,
    }

    fn get_test_fixture() -> Fixture {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));

        let person_store = SQLitePersonStore::new(connection.clone());
        let category_store = SQLiteCategoryStore::new(connection.clone());
        let store = SQLiteTransactionStore::new(connection);

        let person = person_store
            .create(PersonData {
                name: "Ana".to_owned(),
                age: 30,
            })
            .unwrap();
        let category = category_store
            .create(CategoryData {
                description: "Misc".to_owned(),
                purpose: Purpose::Both,
            })
            .unwrap();

        Fixture {
            person_store,
            store,
            person,
            category,
        }
    }

    fn transaction_data(fixture: &Fixture, cents: i64, kind: TransactionKind) -> TransactionData {
        TransactionData {
            description: "Rust Pie".to_owned(),
            amount: Decimal::new(cents, 2),
            kind,
            person_id: fixture.person.id,
            category_id: fixture.category.id,
        }
    }

    #[test]
    fn create_transaction_succeeds() {
        let fixture = get_test_fixture();
        let data = transaction_data(&fixture, 25_50, TransactionKind::Expense);

        let transaction = fixture.store.create(data.clone()).unwrap();

        assert!(transaction.id > 0);
        assert_eq!(transaction.description, data.description);
        assert_eq!(transaction.amount, data.amount);
        assert_eq!(transaction.kind, data.kind);
        assert_eq!(transaction.person_id, data.person_id);
        assert_eq!(transaction.category_id, data.category_id);
    }

    #[test]
    fn get_transaction_round_trips_the_amount_exactly() {
        let fixture = get_test_fixture();
        let inserted_transaction = fixture
            .store
            .create(transaction_data(&fixture, 0_03, TransactionKind::Expense))
            .unwrap();

        let selected_transaction = fixture.store.get(inserted_transaction.id);

        assert_eq!(Ok(inserted_transaction), selected_transaction);
    }

    #[test]
    fn get_transaction_with_invalid_id_returns_not_found() {
        let fixture = get_test_fixture();
        let inserted_transaction = fixture
            .store
            .create(transaction_data(&fixture, 25_50, TransactionKind::Expense))
            .unwrap();

        let selected_transaction = fixture.store.get(inserted_transaction.id + 123);

        assert_eq!(selected_transaction, Err(Error::NotFound));
    }

    #[test]
    fn get_all_transactions_in_insertion_order() {
        let fixture = get_test_fixture();
        let first = fixture
            .store
            .create(transaction_data(&fixture, 25_50, TransactionKind::Expense))
            .unwrap();
        let second = fixture
            .store
            .create(transaction_data(&fixture, 1000_00, TransactionKind::Income))
            .unwrap();

        let transactions = fixture.store.get_all().unwrap();

        assert_eq!(transactions, vec![first, second]);
    }

    #[test]
    fn update_transaction_replaces_fields() {
        let fixture = get_test_fixture();
        let transaction = fixture
            .store
            .create(transaction_data(&fixture, 25_50, TransactionKind::Expense))
            .unwrap();

        let mut data = transaction_data(&fixture, 99_99, TransactionKind::Income);
        data.description = "Salary".to_owned();
        let updated_transaction = fixture.store.update(transaction.id, data).unwrap();

        assert_eq!(updated_transaction.id, transaction.id);
        assert_eq!(updated_transaction.description, "Salary");
        assert_eq!(updated_transaction.amount, Decimal::new(99_99, 2));
        assert_eq!(updated_transaction.kind, TransactionKind::Income);
        assert_eq!(fixture.store.get(transaction.id), Ok(updated_transaction));
    }

    #[test]
    fn update_transaction_with_invalid_id_fails() {
        let fixture = get_test_fixture();
        let data = transaction_data(&fixture, 25_50, TransactionKind::Expense);

        let result = fixture.store.update(999, data);

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn delete_transaction_succeeds() {
        let fixture = get_test_fixture();
        let transaction = fixture
            .store
            .create(transaction_data(&fixture, 25_50, TransactionKind::Expense))
            .unwrap();

        fixture.store.delete(transaction.id).unwrap();

        assert_eq!(fixture.store.get(transaction.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_transaction_with_invalid_id_fails() {
        let fixture = get_test_fixture();

        let result = fixture.store.delete(999);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }

    #[test]
    fn deleting_a_person_cascades_to_only_their_transactions() {
        let fixture = get_test_fixture();
        let other_person = fixture
            .person_store
            .create(PersonData {
                name: "Bruno".to_owned(),
                age: 25,
            })
            .unwrap();

        fixture
            .store
            .create(transaction_data(&fixture, 25_50, TransactionKind::Expense))
            .unwrap();
        let mut other_data = transaction_data(&fixture, 10_00, TransactionKind::Expense);
        other_data.person_id = other_person.id;
        let other_transaction = fixture.store.create(other_data).unwrap();

        fixture.person_store.delete(fixture.person.id).unwrap();

        let remaining = fixture.store.get_all().unwrap();
        assert_eq!(remaining, vec![other_transaction]);
    }
}
