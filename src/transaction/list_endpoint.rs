//! Defines the endpoint for listing a project's transactions.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Database, Error,
    project::ProjectId,
    transaction::{Transaction, get_transactions_for_project},
};

/// A route handler that responds with the transactions of a project as a JSON array.
///
/// Unknown project IDs give an empty array rather than an error.
pub async fn get_project_transactions_endpoint(
    State(database): State<Database>,
    path: Result<Path<ProjectId>, PathRejection>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let Path(project_id) = path?;
    let connection = database.open()?;
    let transactions = get_transactions_for_project(project_id, &connection)?;

    Ok(Json(transactions))
}
