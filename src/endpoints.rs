//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/people/{id}', use
//! [format_endpoint].

/// The route to list and create people.
pub const PEOPLE: &str = "/people";
/// The route to update or delete a single person.
pub const PERSON: &str = "/people/{id}";
/// The route to list and create categories.
pub const CATEGORIES: &str = "/categories";
/// The route to update or delete a single category.
pub const CATEGORY: &str = "/categories/{id}";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{id}";
/// The route for the totals report grouped by person.
pub const REPORT_BY_PERSON: &str = "/reports/by-person";
/// The route for the totals report grouped by category.
pub const REPORT_BY_CATEGORY: &str = "/reports/by-category";
/// Compatibility route exposing the by-person detail rows without the wrapper.
pub const TOTALS_BY_PERSON: &str = "/totals-by-person";
/// Compatibility route exposing the by-category detail rows without the wrapper.
pub const TOTALS_BY_CATEGORY: &str = "/totals-by-category";
/// The route used by deployment health checks.
pub const HEALTH: &str = "/health";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/people/{id}', '{id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
