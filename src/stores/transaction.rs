//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, Transaction, TransactionData},
};

/// Handles the creation and retrieval of transactions.
///
/// The store does not enforce the business rules on what it is given; that is
/// the job of the [validation engine](crate::validation) run by the service
/// layer before anything reaches the store.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    fn create(&self, data: TransactionData) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store.
    fn get(&self, transaction_id: DatabaseID) -> Result<Transaction, Error>;

    /// Retrieve all transactions from the store.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the editable fields of the transaction with `transaction_id`.
    fn update(
        &self,
        transaction_id: DatabaseID,
        data: TransactionData,
    ) -> Result<Transaction, Error>;

    /// Delete the transaction with `transaction_id`. Nothing references
    /// transactions, so there is no cascade.
    fn delete(&self, transaction_id: DatabaseID) -> Result<(), Error>;
}
