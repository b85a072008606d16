//! Defines the endpoint for listing projects.

use axum::{Json, extract::State};

use crate::{
    Database, Error,
    project::{Project, get_all_projects},
};

/// A route handler that responds with every project as a JSON array.
pub async fn get_projects_endpoint(
    State(database): State<Database>,
) -> Result<Json<Vec<Project>>, Error> {
    let connection = database.open()?;
    let projects = get_all_projects(&connection)?;

    Ok(Json(projects))
}
