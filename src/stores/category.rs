//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, CategoryData, DatabaseID},
};

/// Creates and retrieves the categories transactions are filed under.
pub trait CategoryStore {
    /// Create a new category and add it to the store.
    fn create(&self, data: CategoryData) -> Result<Category, Error>;

    /// Get a category by its ID.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error>;

    /// Get all categories in the store.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Replace the editable fields of the category with `category_id`.
    fn update(&self, category_id: DatabaseID, data: CategoryData) -> Result<Category, Error>;

    /// Delete the category with `category_id` along with every transaction
    /// filed under it.
    ///
    /// Implementers must remove the category and its transactions as a single
    /// atomic unit: concurrent readers observe either all of them or none.
    fn delete(&self, category_id: DatabaseID) -> Result<(), Error>;
}
