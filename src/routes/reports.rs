//! Route handlers for the totals reports.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    reports::{CategoryTotals, PersonTotals, Report},
    services,
    stores::{CategoryStore, PersonStore, TransactionStore},
};

/// Handle a GET request for the totals report grouped by person.
pub async fn get_report_by_person_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
) -> Result<Json<Report<PersonTotals>>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::reports::totals_by_person(&state.person_store, &state.transaction_store).map(Json)
}

/// Handle a GET request for the totals report grouped by category.
pub async fn get_report_by_category_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
) -> Result<Json<Report<CategoryTotals>>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::reports::totals_by_category(&state.category_store, &state.transaction_store).map(Json)
}

/// Handle a GET request for the by-person detail rows alone.
///
/// Compatibility endpoint for older clients that expect the flattened list
/// without the `details`/`overall` wrapper.
pub async fn get_totals_by_person_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
) -> Result<Json<Vec<PersonTotals>>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::reports::totals_by_person(&state.person_store, &state.transaction_store)
        .map(|report| Json(report.details))
}

/// Handle a GET request for the by-category detail rows alone.
///
/// Compatibility endpoint for older clients that expect the flattened list
/// without the `details`/`overall` wrapper.
pub async fn get_totals_by_category_endpoint<P, C, T>(
    State(state): State<AppState<P, C, T>>,
) -> Result<Json<Vec<CategoryTotals>>, Error>
where
    P: PersonStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    services::reports::totals_by_category(&state.category_store, &state.transaction_store)
        .map(|report| Json(report.details))
}
