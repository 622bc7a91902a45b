//! Application router configuration.

use axum::{
    Json, Router, middleware,
    routing::{get, put},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    routes::{
        categories::{
            create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
            update_category_endpoint,
        },
        people::{
            create_person_endpoint, delete_person_endpoint, get_people_endpoint,
            update_person_endpoint,
        },
        reports::{
            get_report_by_category_endpoint, get_report_by_person_endpoint,
            get_totals_by_category_endpoint, get_totals_by_person_endpoint,
        },
        transactions::{
            create_transaction_endpoint, delete_transaction_endpoint, get_transactions_endpoint,
            update_transaction_endpoint,
        },
    },
    stores::{CategoryStore, PersonStore, TransactionStore},
};

/// Return a router with all the app's routes.
pub fn build_router<P, C, T>(state: AppState<P, C, T>) -> Router
where
    P: PersonStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::PEOPLE,
            get(get_people_endpoint).post(create_person_endpoint),
        )
        .route(
            endpoints::PERSON,
            put(update_person_endpoint).delete(delete_person_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            put(update_category_endpoint).delete(delete_category_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::REPORT_BY_PERSON,
            get(get_report_by_person_endpoint),
        )
        .route(
            endpoints::REPORT_BY_CATEGORY,
            get(get_report_by_category_endpoint),
        )
        .route(
            endpoints::TOTALS_BY_PERSON,
            get(get_totals_by_person_endpoint),
        )
        .route(
            endpoints::TOTALS_BY_CATEGORY,
            get(get_totals_by_category_endpoint),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Liveness probe used to wake and check the deployed service.
async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
