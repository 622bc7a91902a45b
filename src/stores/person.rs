//! Defines the person store trait.

use crate::{
    Error,
    models::{DatabaseID, Person, PersonData},
};

/// Creates and retrieves the people that own transactions.
pub trait PersonStore {
    /// Create a new person and add them to the store.
    fn create(&self, data: PersonData) -> Result<Person, Error>;

    /// Get a person by their ID.
    fn get(&self, person_id: DatabaseID) -> Result<Person, Error>;

    /// Get all people in the store.
    fn get_all(&self) -> Result<Vec<Person>, Error>;

    /// Replace the editable fields of the person with `person_id`.
    fn update(&self, person_id: DatabaseID, data: PersonData) -> Result<Person, Error>;

    /// Delete the person with `person_id` along with every transaction that
    /// references them.
    ///
    /// Implementers must remove the person and their transactions as a single
    /// atomic unit: concurrent readers observe either all of them or none.
    fn delete(&self, person_id: DatabaseID) -> Result<(), Error>;
}
