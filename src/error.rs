//! Defines the app level error type and its conversion to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::validation::ValidationError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used for a person's name.
    #[error("name cannot be empty")]
    EmptyName,

    /// An empty string was used for a description.
    #[error("description cannot be empty")]
    EmptyDescription,

    /// A zero or negative amount was used for a transaction.
    #[error("the amount must be greater than zero")]
    NonPositiveAmount,

    /// A transaction candidate broke one of the business rules.
    ///
    /// The inner reason carries the fixed, human-readable message that is
    /// returned to the client.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a person that does not exist
    #[error("tried to update a person that is not in the database")]
    UpdateMissingPerson,

    /// Tried to delete a person that does not exist
    #[error("tried to delete a person that is not in the database")]
    DeleteMissingPerson,

    /// Tried to update a category that does not exist
    #[error("tried to update a category that is not in the database")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::EmptyName | Error::EmptyDescription | Error::NonPositiveAmount => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound
            | Error::UpdateMissingPerson
            | Error::DeleteMissingPerson
            | Error::UpdateMissingCategory
            | Error::DeleteMissingCategory
            | Error::UpdateMissingTransaction
            | Error::DeleteMissingTransaction => StatusCode::NOT_FOUND,
            // SQL errors are not intended to be shown to the client.
            Error::SqlError(error) => {
                tracing::error!("An unexpected error occurred: {}", error);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an unexpected error occurred, check the server logs for more details"
                        .to_owned(),
                )
                    .into_response();
            }
        };

        (status_code, self.to_string()).into_response()
    }
}
