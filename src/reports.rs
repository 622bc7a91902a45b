//! The aggregation engine for the totals reports.
//!
//! Pure functions over in-memory snapshots: callers hand in the owning
//! entities and the transaction set, and get back one totals row per owner
//! plus an overall row. All sums use exact decimal arithmetic so repeated
//! aggregation of the same data cannot drift.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Category, DatabaseID, Person, Transaction, TransactionKind};

/// Income, expense and balance totals for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonTotals {
    /// The ID of the person the row aggregates.
    pub person_id: DatabaseID,
    /// The person's name.
    pub person: String,
    /// The sum of the person's income transactions.
    pub income: Decimal,
    /// The sum of the person's expense transactions.
    pub expense: Decimal,
    /// `income - expense`.
    pub balance: Decimal,
}

/// Income, expense and balance totals for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    /// The ID of the category the row aggregates.
    pub category_id: DatabaseID,
    /// The category's description.
    pub category: String,
    /// The sum of the income transactions filed under the category.
    pub income: Decimal,
    /// The sum of the expense transactions filed under the category.
    pub expense: Decimal,
    /// `income - expense`.
    pub balance: Decimal,
}

/// The grand totals across every group of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallTotals {
    /// The sum of every group's income.
    pub total_income: Decimal,
    /// The sum of every group's expense.
    pub total_expense: Decimal,
    /// The sum of every group's balance.
    pub balance: Decimal,
}

/// A totals report: one detail row per group plus the grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report<T> {
    /// One row per group, in store order. Owners without transactions get a
    /// row of zeroes.
    pub details: Vec<T>,
    /// The grand totals, summed from the rows in `details` rather than
    /// recomputed from the transactions, so the report is consistent with
    /// itself by construction.
    pub overall: OverallTotals,
}

/// One group's income and expense sums.
#[derive(Debug, Default, Clone, Copy)]
struct GroupSums {
    income: Decimal,
    expense: Decimal,
}

/// Partition `transactions` by `key` and sum each partition's income and
/// expense amounts.
fn sum_by_key(
    transactions: &[Transaction],
    key: impl Fn(&Transaction) -> DatabaseID,
) -> HashMap<DatabaseID, GroupSums> {
    let mut sums: HashMap<DatabaseID, GroupSums> = HashMap::new();

    for transaction in transactions {
        let group = sums.entry(key(transaction)).or_default();

        match transaction.kind {
            TransactionKind::Income => group.income += transaction.amount,
            TransactionKind::Expense => group.expense += transaction.amount,
        }
    }

    sums
}

fn overall_of(rows: impl Iterator<Item = (Decimal, Decimal, Decimal)>) -> OverallTotals {
    let mut overall = OverallTotals {
        total_income: Decimal::ZERO,
        total_expense: Decimal::ZERO,
        balance: Decimal::ZERO,
    };

    for (income, expense, balance) in rows {
        overall.total_income += income;
        overall.total_expense += expense;
        overall.balance += balance;
    }

    overall
}

/// Compute the totals report grouped by person.
///
/// Every person in `people` gets a row, including people with no
/// transactions. Aggregation is total: the empty transaction set yields a
/// report with all-zero totals.
pub fn aggregate_by_person(people: &[Person], transactions: &[Transaction]) -> Report<PersonTotals> {
    let sums = sum_by_key(transactions, |transaction| transaction.person_id);

    let details: Vec<PersonTotals> = people
        .iter()
        .map(|person| {
            let group = sums.get(&person.id).copied().unwrap_or_default();

            PersonTotals {
                person_id: person.id,
                person: person.name.clone(),
                income: group.income,
                expense: group.expense,
                balance: group.income - group.expense,
            }
        })
        .collect();

    let overall = overall_of(
        details
            .iter()
            .map(|row| (row.income, row.expense, row.balance)),
    );

    Report { details, overall }
}

/// Compute the totals report grouped by category.
///
/// Every category in `categories` gets a row, including categories with no
/// transactions.
pub fn aggregate_by_category(
    categories: &[Category],
    transactions: &[Transaction],
) -> Report<CategoryTotals> {
    let sums = sum_by_key(transactions, |transaction| transaction.category_id);

    let details: Vec<CategoryTotals> = categories
        .iter()
        .map(|category| {
            let group = sums.get(&category.id).copied().unwrap_or_default();

            CategoryTotals {
                category_id: category.id,
                category: category.description.clone(),
                income: group.income,
                expense: group.expense,
                balance: group.income - group.expense,
            }
        })
        .collect();

    let overall = overall_of(
        details
            .iter()
            .map(|row| (row.income, row.expense, row.balance)),
    );

    Report { details, overall }
}
