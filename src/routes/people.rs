//! Route handlers for creating, listing, updating and deleting people.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    models::{DatabaseID, Person, PersonData},
    services,
    stores::{CategoryStore, PersonStore, TransactionStore},
};

/// Handle a GET request to list all people.
pub async fn get_people_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
) -> Result<Json<Vec<Person>>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::people::list_people(&state.person_store).map(Json)
}

/// Handle a POST request to create a person.
pub async fn create_person_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Json(data): Json<PersonData>,
) -> Result<Json<Person>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::people::create_person(&state.person_store, data).map(Json)
}

/// Handle a PUT request to update the person with `person_id`.
pub async fn update_person_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Path(person_id): Path<DatabaseID>,
    Json(data): Json<PersonData>,
) -> Result<Json<Person>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::people::update_person(&state.person_store, person_id, data).map(Json)
}

/// Handle a DELETE request to delete the person with `person_id` and all of
/// their transactions.
pub async fn delete_person_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Path(person_id): Path<DatabaseID>,
) -> Result<(), Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::people::delete_person(&state.person_store, person_id)
}
