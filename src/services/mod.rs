//! The service layer: orchestrates the stores, the
//! [validation engine](crate::validation) and the
//! [aggregation engine](crate::reports) on behalf of the route handlers.

pub mod categories;
pub mod people;
pub mod reports;
pub mod transactions;

use crate::Error;

/// Unwrap a store lookup, treating a missing record as `None` and keeping any
/// other error.
fn found<R>(result: Result<R, Error>) -> Result<Option<R>, Error> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(Error::NotFound) => Ok(None),
        Err(error) => Err(error),
    }
}
