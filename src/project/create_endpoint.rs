//! Defines the endpoint for creating a new project.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    Database, Error,
    message::Message,
    project::{NewProject, ProjectForm, create_project},
};

/// A route handler for creating a new project, responds with the new project's ID.
pub async fn create_project_endpoint(
    State(database): State<Database>,
    payload: Result<Json<ProjectForm>, JsonRejection>,
) -> Result<Message, Error> {
    let Json(form) = payload?;
    let new_project = NewProject::try_from(form)?;

    let connection = database.open()?;
    let project = create_project(new_project, &connection)?;
    tracing::info!("Created project {} \"{}\"", project.id, project.name);

    Ok(Message::created(project.id, "Project created successfully"))
}
