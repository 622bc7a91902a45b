//! Implements a SQLite backed person store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, Person, PersonData},
    stores::PersonStore,
};

/// Creates and retrieves people to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLitePersonStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLitePersonStore {
    /// Create a new person store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl PersonStore for SQLitePersonStore {
    /// Create a person in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, data: PersonData) -> Result<Person, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO person (name, age) VALUES (?1, ?2);",
            (&data.name, data.age),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Person {
            id,
            name: data.name,
            age: data.age,
        })
    }

    /// Retrieve the person in the database with `person_id`.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if there is no such
    /// person, or [Error::SqlError] if there is an SQL error.
    fn get(&self, person_id: DatabaseID) -> Result<Person, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, age FROM person WHERE id = :id;")?
            .query_row(&[(":id", &person_id)], SQLitePersonStore::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve all people in the database, in ascending ID order.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Person>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, age FROM person ORDER BY id;")?
            .query_map([], SQLitePersonStore::map_row)?
            .map(|maybe_person| maybe_person.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the name and age of the person with `person_id`.
    ///
    /// # Errors
    /// This function will return [Error::UpdateMissingPerson] if there is no
    /// such person, or [Error::SqlError] if there is an SQL error.
    fn update(&self, person_id: DatabaseID, data: PersonData) -> Result<Person, Error> {
        let connection = self.connection.lock().unwrap();
        let rows_changed = connection.execute(
            "UPDATE person SET name = ?1, age = ?2 WHERE id = ?3;",
            (&data.name, data.age, person_id),
        )?;

        if rows_changed == 0 {
            return Err(Error::UpdateMissingPerson);
        }

        Ok(Person {
            id: person_id,
            name: data.name,
            age: data.age,
        })
    }

    /// Delete the person with `person_id` and all of their transactions.
    ///
    /// Both deletes run inside one SQL transaction so readers never observe a
    /// partial cascade.
    ///
    /// # Errors
    /// This function will return [Error::DeleteMissingPerson] if there is no
    /// such person, or [Error::SqlError] if there is an SQL error.
    fn delete(&self, person_id: DatabaseID) -> Result<(), Error> {
        let mut connection = self.connection.lock().unwrap();
        let transaction = connection.transaction()?;

        transaction.execute(
            "DELETE FROM \"transaction\" WHERE person_id = ?1;",
            (person_id,),
        )?;
        let rows_changed =
            transaction.execute("DELETE FROM person WHERE id = ?1;", (person_id,))?;

        if rows_changed == 0 {
            // Dropping the uncommitted transaction rolls back the dependent
            // deletes.
            return Err(Error::DeleteMissingPerson);
        }

        transaction.commit()?;

        Ok(())
    }
}

impl CreateTable for SQLitePersonStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS person (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLitePersonStore {
    type ReturnType = Person;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Person {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            age: row.get(offset + 2)?,
        })
    }
}
