//! Create, list, update and delete people.

use crate::{
    Error,
    models::{DatabaseID, Person, PersonData},
    stores::PersonStore,
};

fn checked_data(data: PersonData) -> Result<PersonData, Error> {
    if data.name.trim().is_empty() {
        return Err(Error::EmptyName);
    }

    Ok(data)
}

/// Create a new person.
///
/// # Errors
/// Returns [Error::EmptyName] if the name is empty, or a store error.
pub fn create_person(person_store: &impl PersonStore, data: PersonData) -> Result<Person, Error> {
    person_store.create(checked_data(data)?)
}

/// List every stored person.
pub fn list_people(person_store: &impl PersonStore) -> Result<Vec<Person>, Error> {
    person_store.get_all()
}

/// Replace the editable fields of the person with `person_id`.
///
/// # Errors
/// Returns [Error::EmptyName] if the name is empty, or
/// [Error::UpdateMissingPerson] if the id is unknown.
pub fn update_person(
    person_store: &impl PersonStore,
    person_id: DatabaseID,
    data: PersonData,
) -> Result<Person, Error> {
    person_store.update(person_id, checked_data(data)?)
}

/// Delete the person with `person_id` and every transaction that references
/// them.
///
/// # Errors
/// Returns [Error::DeleteMissingPerson] if the id is unknown, in which case
/// nothing is deleted.
pub fn delete_person(person_store: &impl PersonStore, person_id: DatabaseID) -> Result<(), Error> {
    person_store.delete(person_id)
}
