//! This file defines the `Person` type, the owner of transactions.

use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// Someone in the household who records expenses and income.
///
/// A person's transactions are referenced by ID rather than embedded, so
/// serializing a person can never recurse back through their transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The ID of the person.
    pub id: DatabaseID,
    /// The person's display name.
    pub name: String,
    /// The person's age in years.
    ///
    /// People younger than [crate::validation::ADULT_AGE] may only record
    /// expenses.
    pub age: u32,
}

/// The fields used to create or update a [Person].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
    /// The person's display name. Must not be empty.
    pub name: String,
    /// The person's age in years.
    pub age: u32,
}
