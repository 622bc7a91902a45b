//! Route handlers for creating, listing, updating and deleting categories.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    models::{Category, CategoryData, DatabaseID},
    services,
    stores::{CategoryStore, PersonStore, TransactionStore},
};

/// Handle a GET request to list all categories.
pub async fn get_categories_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
) -> Result<Json<Vec<Category>>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::categories::list_categories(&state.category_store).map(Json)
}

/// Handle a POST request to create a category.
pub async fn create_category_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Json(data): Json<CategoryData>,
) -> Result<Json<Category>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::categories::create_category(&state.category_store, data).map(Json)
}

/// Handle a PUT request to update the category with `category_id`.
pub async fn update_category_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Path(category_id): Path<DatabaseID>,
    Json(data): Json<CategoryData>,
) -> Result<Json<Category>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::categories::update_category(&state.category_store, category_id, data).map(Json)
}

/// Handle a DELETE request to delete the category with `category_id` and
/// every transaction filed under it.
pub async fn delete_category_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
    Path(category_id): Path<DatabaseID>,
) -> Result<(), Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::categories::delete_category(&state.category_store, category_id)
}
