//! Defines the endpoint for replacing a project's fields.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Database, Error,
    message::Message,
    project::{NewProject, ProjectForm, ProjectId, update_project},
};

/// A route handler for updating a project. All fields are overwritten.
pub async fn edit_project_endpoint(
    State(database): State<Database>,
    path: Result<Path<ProjectId>, PathRejection>,
    payload: Result<Json<ProjectForm>, JsonRejection>,
) -> Result<Message, Error> {
    let Path(project_id) = path?;
    let Json(form) = payload?;
    let project = NewProject::try_from(form)?;

    let connection = database.open()?;
    update_project(project_id, &project, &connection)?;

    Ok(Message::simple("Project updated"))
}
