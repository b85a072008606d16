//! Defines the endpoint for deleting a project.

use axum::extract::{Path, State, rejection::PathRejection};

use crate::{
    Database, Error,
    message::Message,
    project::{ProjectId, delete_project},
};

/// A route handler for deleting a project and every transaction recorded against it.
pub async fn delete_project_endpoint(
    State(database): State<Database>,
    path: Result<Path<ProjectId>, PathRejection>,
) -> Result<Message, Error> {
    let Path(project_id) = path?;
    let connection = database.open()?;

    delete_project(project_id, &connection).inspect_err(|error| {
        tracing::warn!("Could not delete project {project_id}: {error}");
    })?;

    Ok(Message::simple("Project deleted"))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};

    use crate::{
        Error,
        message::Message,
        project::{NewProject, ProjectName, create_project, delete_project_endpoint, project_exists},
        test_utils::TestDatabase,
    };

    #[tokio::test]
    async fn deletes_project() {
        let test_db = TestDatabase::new();
        let project = create_project(
            NewProject {
                name: ProjectName::new_unchecked("Foo"),
                client: None,
                status: None,
                budget: None,
            },
            &test_db.connection(),
        )
        .unwrap();

        let result =
            delete_project_endpoint(State(test_db.database.clone()), Ok(Path(project.id))).await;

        assert_eq!(result, Ok(Message::simple("Project deleted")));
        assert_eq!(project_exists(project.id, &test_db.connection()), Ok(false));
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let test_db = TestDatabase::new();

        let result = delete_project_endpoint(State(test_db.database.clone()), Ok(Path(1))).await;

        assert_eq!(result, Err(Error::ProjectNotFound));
    }
}
