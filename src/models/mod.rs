//! This module defines the domain data types.

pub use category::{Category, CategoryData, Purpose};
pub use person::{Person, PersonData};
pub use transaction::{Transaction, TransactionData, TransactionKind};

mod category;
mod person;
mod transaction;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;
