//! This file defines the `Category` type and the purposes a category may
//! declare.

use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// Declares which transaction kinds a category may be used with.
///
/// Serialized with the lowercase tokens existing clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    /// The category only accepts expense transactions.
    #[serde(rename = "despesa")]
    Expense,
    /// The category only accepts income transactions.
    #[serde(rename = "receita")]
    Income,
    /// The category accepts both expense and income transactions.
    #[serde(rename = "ambas")]
    Both,
}

impl Purpose {
    /// The lowercase token used on the wire and in the database.
    pub fn as_token(self) -> &'static str {
        match self {
            Purpose::Expense => "despesa",
            Purpose::Income => "receita",
            Purpose::Both => "ambas",
        }
    }

    /// Parse a lowercase token back into a purpose.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "despesa" => Some(Purpose::Expense),
            "receita" => Some(Purpose::Income),
            "ambas" => Some(Purpose::Both),
            _ => None,
        }
    }
}

/// A grouping for expenses and income, e.g., 'Groceries', 'Wages'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: DatabaseID,
    /// A text description of what the category groups.
    pub description: String,
    /// Which transaction kinds the category may be used with.
    pub purpose: Purpose,
}

/// The fields used to create or update a [Category].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    /// A text description of what the category groups. Must not be empty.
    pub description: String,
    /// Which transaction kinds the category may be used with.
    pub purpose: Purpose,
}
