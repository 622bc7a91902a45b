//! Create, list, update and delete categories.

use crate::{
    Error,
    models::{Category, CategoryData, DatabaseID},
    stores::CategoryStore,
};

fn checked_data(data: CategoryData) -> Result<CategoryData, Error> {
    if data.description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }

    Ok(data)
}

/// Create a new category.
///
/// # Errors
/// Returns [Error::EmptyDescription] if the description is empty, or a store
/// error.
pub fn create_category(
    category_store: &impl CategoryStore,
    data: CategoryData,
) -> Result<Category, Error> {
    category_store.create(checked_data(data)?)
}

/// List every stored category.
pub fn list_categories(category_store: &impl CategoryStore) -> Result<Vec<Category>, Error> {
    category_store.get_all()
}

/// Replace the editable fields of the category with `category_id`.
///
/// # Errors
/// Returns [Error::EmptyDescription] if the description is empty, or
/// [Error::UpdateMissingCategory] if the id is unknown.
pub fn update_category(
    category_store: &impl CategoryStore,
    category_id: DatabaseID,
    data: CategoryData,
) -> Result<Category, Error> {
    category_store.update(category_id, checked_data(data)?)
}

/// Delete the category with `category_id` and every transaction filed under
/// it.
///
/// # Errors
/// Returns [Error::DeleteMissingCategory] if the id is unknown, in which case
/// nothing is deleted.
pub fn delete_category(
    category_store: &impl CategoryStore,
    category_id: DatabaseID,
) -> Result<(), Error> {
    category_store.delete(category_id)
}
