//! Implements a struct that holds the state of the REST server.

use crate::stores::{CategoryStore, PersonStore, TransactionStore};

/// The state of the REST server.
///
/// Generic over the store implementations so that the route handlers and the
/// service layer only ever see the store traits.
#[derive(Debug, Clone)]
pub struct AppState<P, C, T>
where
    P: PersonStore + Send + Sync,
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// The store for managing [people](crate::models::Person).
    pub person_store: P,
    /// The store for managing [categories](crate::models::Category).
    pub category_store: C,
    /// The store for managing [transactions](crate::models::Transaction).
    pub transaction_store: T,
}

impl<P, C, T> AppState<P, C, T>
where
    P: PersonStore + Send + Sync,
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(person_store: P, category_store: C, transaction_store: T) -> Self {
        Self {
            person_store,
            category_store,
            transaction_store,
        }
    }
}
