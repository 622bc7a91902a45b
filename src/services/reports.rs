//! Builds the totals reports from store snapshots.

use crate::{
    Error,
    reports::{CategoryTotals, PersonTotals, Report, aggregate_by_category, aggregate_by_person},
    stores::{CategoryStore, PersonStore, TransactionStore},
};

/// Compute the totals report grouped by person over the full transaction set.
///
/// The transactions are read before the people: a cascade delete landing
/// between the two reads then hides the owner and its rows together, so the
/// report never shows a person that no longer exists.
pub fn totals_by_person(
    person_store: &impl PersonStore,
    transaction_store: &impl TransactionStore,
) -> Result<Report<PersonTotals>, Error> {
    let transactions = transaction_store.get_all()?;
    let people = person_store.get_all()?;

    Ok(aggregate_by_person(&people, &transactions))
}

/// Compute the totals report grouped by category over the full transaction
/// set.
pub fn totals_by_category(
    category_store: &impl CategoryStore,
    transaction_store: &impl TransactionStore,
) -> Result<Report<CategoryTotals>, Error> {
    let transactions = transaction_store.get_all()?;
    let categories = category_store.get_all()?;

    Ok(aggregate_by_category(&categories, &transactions))
}
