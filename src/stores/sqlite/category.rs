//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, types::Type};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryData, DatabaseID, Purpose},
    stores::CategoryStore,
};

/// Creates and retrieves transaction categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, data: CategoryData) -> Result<Category, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO category (description, purpose) VALUES (?1, ?2);",
            (&data.description, data.purpose.as_token()),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category {
            id,
            description: data.description,
            purpose: data.purpose,
        })
    }

    /// Retrieve the category in the database with `category_id`.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if there is no such
    /// category, or [Error::SqlError] if there is an SQL error.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, description, purpose FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], SQLiteCategoryStore::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve all categories in the database, in ascending ID order.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, description, purpose FROM category ORDER BY id;")?
            .query_map([], SQLiteCategoryStore::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the description and purpose of the category with `category_id`.
    ///
    /// # Errors
    /// This function will return [Error::UpdateMissingCategory] if there is no
    /// such category, or [Error::SqlError] if there is an SQL error.
    fn update(&self, category_id: DatabaseID, data: CategoryData) -> Result<Category, Error> {
        let connection = self.connection.lock().unwrap();
        let rows_changed = connection.execute(
            "UPDATE category SET description = ?1, purpose = ?2 WHERE id = ?3;",
            (&data.description, data.purpose.as_token(), category_id),
        )?;

        if rows_changed == 0 {
            return Err(Error::UpdateMissingCategory);
        }

        Ok(Category {
            id: category_id,
            description: data.description,
            purpose: data.purpose,
        })
    }

    /// Delete the category with `category_id` and every transaction filed
    /// under it.
    ///
    /// Both deletes run inside one SQL transaction so readers never observe a
    /// partial cascade.
    ///
    /// # Errors
    /// This function will return [Error::DeleteMissingCategory] if there is no
    /// such category, or [Error::SqlError] if there is an SQL error.
    fn delete(&self, category_id: DatabaseID) -> Result<(), Error> {
        let mut connection = self.connection.lock().unwrap();
        let transaction = connection.transaction()?;

        transaction.execute(
            "DELETE FROM \"transaction\" WHERE category_id = ?1;",
            (category_id,),
        )?;
        let rows_changed =
            transaction.execute("DELETE FROM category WHERE id = ?1;", (category_id,))?;

        if rows_changed == 0 {
            // Dropping the uncommitted transaction rolls back the dependent
            // deletes.
            return Err(Error::DeleteMissingCategory);
        }

        transaction.commit()?;

        Ok(())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                purpose TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;
        let description = row.get(offset + 1)?;

        let raw_purpose: String = row.get(offset + 2)?;
        let purpose = Purpose::from_token(&raw_purpose).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                offset + 2,
                Type::Text,
                format!("unknown purpose token {raw_purpose:?}").into(),
            )
        })?;

        Ok(Category {
            id,
            description,
            purpose,
        })
    }
}
