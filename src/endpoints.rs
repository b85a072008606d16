//! The API endpoints URIs.
//!
//! Endpoints that take a parameter, e.g., '/api/projects/{project_id}', are
//! matched by axum's path extractor.

/// The root route which reports that the backend is running.
pub const ROOT: &str = "/";
/// The route to list and create projects.
pub const PROJECTS: &str = "/api/projects";
/// The route to update or delete a single project.
pub const PROJECT: &str = "/api/projects/{project_id}";
/// The route to list the transactions of a project.
pub const PROJECT_TRANSACTIONS: &str = "/api/projects/{project_id}/transactions";
/// The route to create transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/projects/{project_id}', '{project_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
