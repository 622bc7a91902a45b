//! The transaction validation engine.
//!
//! Decides whether a candidate transaction is legal given the age of its
//! owner and the declared purpose of its category. This is a pure decision
//! function: callers look up the referenced person and category themselves
//! and hand in whatever they found, so the same call serves both the create
//! and the update path.

use thiserror::Error;

use crate::models::{Category, Person, Purpose, TransactionData, TransactionKind};

/// The age from which a person may record income.
pub const ADULT_AGE: u32 = 18;

/// The reasons a transaction candidate may be rejected.
///
/// The checks run in a fixed order and the first failure wins, so the
/// rejection reason is stable for any given candidate.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The referenced person does not exist.
    #[error("person not found")]
    PersonNotFound,

    /// A person under [ADULT_AGE] tried to record income.
    #[error("a person under 18 may only record expenses")]
    AgeRestriction,

    /// The referenced category does not exist.
    #[error("category not found")]
    CategoryNotFound,

    /// The transaction kind is not allowed by the category's purpose.
    #[error("the transaction type is not compatible with the category purpose")]
    IncompatiblePurpose,
}

/// Check a candidate transaction against the current state of the person and
/// category it references.
///
/// `person` and `category` are the stored records for the candidate's
/// `person_id` and `category_id`, or `None` when the lookup found nothing.
/// For updates, `candidate` must be the merged record as it would be
/// persisted, never the stale stored version.
///
/// # Errors
/// Returns the first of the following that applies:
/// - [ValidationError::PersonNotFound] if `person` is `None`,
/// - [ValidationError::AgeRestriction] if the person is a minor and the
///   candidate records income,
/// - [ValidationError::CategoryNotFound] if `category` is `None`,
/// - [ValidationError::IncompatiblePurpose] if the candidate's kind is ruled
///   out by the category's purpose.
pub fn validate(
    candidate: &TransactionData,
    person: Option<&Person>,
    category: Option<&Category>,
) -> Result<(), ValidationError> {
    let person = person.ok_or(ValidationError::PersonNotFound)?;

    if person.age < ADULT_AGE && candidate.kind == TransactionKind::Income {
        return Err(ValidationError::AgeRestriction);
    }

    let category = category.ok_or(ValidationError::CategoryNotFound)?;

    match (candidate.kind, category.purpose) {
        (TransactionKind::Expense, Purpose::Income)
        | (TransactionKind::Income, Purpose::Expense) => {
            Err(ValidationError::IncompatiblePurpose)
        }
        _ => Ok(()),
    }
}
