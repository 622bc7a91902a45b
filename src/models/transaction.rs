//! This file defines the `Transaction` type, the core type of the
//! expense-tracking application.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// The polarity of a transaction: money spent or money earned.
///
/// Serialized with the lowercase tokens existing clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money spent.
    #[serde(rename = "despesa")]
    Expense,
    /// Money earned.
    #[serde(rename = "receita")]
    Income,
}

impl TransactionKind {
    /// The lowercase token used on the wire and in the database.
    pub fn as_token(self) -> &'static str {
        match self {
            TransactionKind::Expense => "despesa",
            TransactionKind::Income => "receita",
        }
    }

    /// Parse a lowercase token back into a transaction kind.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "despesa" => Some(TransactionKind::Expense),
            "receita" => Some(TransactionKind::Income),
            _ => None,
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned
/// by one person under one category.
///
/// The person and category are carried as lookup keys only. Embedding the
/// entities here would recurse when serializing (person to transactions to
/// person), so the back-references stay plain IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseID,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always positive. The sign of the
    /// event comes from `kind`.
    #[serde(rename = "valor")]
    pub amount: Decimal,
    /// Whether the transaction is an expense or income.
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    /// The ID of the person that owns this transaction.
    #[serde(rename = "pessoaId")]
    pub person_id: DatabaseID,
    /// The ID of the category this transaction is filed under.
    #[serde(rename = "categoriaId")]
    pub category_id: DatabaseID,
}

/// The fields used to create or update a [Transaction].
///
/// This is also the candidate handed to the
/// [validation engine](crate::validation::validate): for updates it carries
/// the merged, proposed final state of the record rather than the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    /// A text description of what the transaction is for. Must not be empty.
    pub description: String,
    /// The amount of money spent or earned. Must be greater than zero.
    #[serde(rename = "valor")]
    pub amount: Decimal,
    /// Whether the transaction is an expense or income.
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    /// The ID of the person that owns the transaction.
    #[serde(rename = "pessoaId")]
    pub person_id: DatabaseID,
    /// The ID of the category the transaction is filed under.
    #[serde(rename = "categoriaId")]
    pub category_id: DatabaseID,
}


#[cfg(test)]
mod transaction_wire_tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::{Transaction, TransactionKind};

    #[test]
    fn serializes_with_compatibility_field_names() {
        let transaction = Transaction {
            id: 7,
            description: "Groceries".to_owned(),
            amount: Decimal::new(2550, 2),
            kind: TransactionKind::Expense,
            person_id: 1,
            category_id: 2,
        };

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "description": "Groceries",
                "valor": 25.5,
                "tipo": "despesa",
                "pessoaId": 1,
                "categoriaId": 2,
            })
        );
    }
}
