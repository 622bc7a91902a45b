//! Route handlers for creating, listing, updating and deleting transactions.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    models::{DatabaseID, Transaction, TransactionData},
    services,
    stores::{CategoryStore, PersonStore, TransactionStore},
};

/// Handle a GET request to list all transactions.
pub async fn get_transactions_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::transactions::list_transactions(&state.transaction_store).map(Json)
}

/// Handle a POST request to create a transaction.
///
/// Responds with 400 and the rejection reason as plain text when the
/// candidate breaks a business rule.
pub async fn create_transaction_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::transactions::create_transaction(
        &state.person_store,
        &state.category_store,
        &state.transaction_store,
        data,
    )
    .map(Json)
}

/// Handle a PUT request to update the transaction with `transaction_id`.
pub async fn update_transaction_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Path(transaction_id): Path<DatabaseID>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::transactions::update_transaction(
        &state.person_store,
        &state.category_store,
        &state.transaction_store,
        transaction_id,
        data,
    )
    .map(Json)
}

/// Handle a DELETE request to delete the transaction with `transaction_id`.
pub async fn delete_transaction_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<(), Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::transactions::delete_transaction(&state.transaction_store, transaction_id)
}
