//! Database operations for projects.

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    project::{NewProject, Project, ProjectId, ProjectName},
};

/// Create the project table.
pub fn create_project_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            client TEXT,
            status TEXT,
            budget REAL
        )",
        (),
    )?;

    Ok(())
}

/// Create a project and return it with its generated ID.
pub fn create_project(project: NewProject, connection: &Connection) -> Result<Project, Error> {
    connection.execute(
        "INSERT INTO projects (name, client, status, budget) VALUES (?1, ?2, ?3, ?4)",
        (
            project.name.as_ref(),
            &project.client,
            &project.status,
            project.budget,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Project {
        id,
        name: project.name,
        client: project.client,
        status: project.status,
        budget: project.budget,
    })
}

/// Retrieve a single project by ID.
///
/// # Errors
/// Returns [Error::NotFound] if there is no project with `project_id`.
#[cfg(test)]
pub fn get_project(project_id: ProjectId, connection: &Connection) -> Result<Project, Error> {
    connection
        .prepare("SELECT id, name, client, status, budget FROM projects WHERE id = :id")?
        .query_row(&[(":id", &project_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all projects in the order they were created.
pub fn get_all_projects(connection: &Connection) -> Result<Vec<Project>, Error> {
    connection
        .prepare("SELECT id, name, client, status, budget FROM projects ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_project| maybe_project.map_err(|error| error.into()))
        .collect()
}

/// Check whether a project with `project_id` exists.
pub fn project_exists(project_id: ProjectId, connection: &Connection) -> Result<bool, Error> {
    let exists = connection.query_row(
        "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)",
        [project_id],
        |row| row.get(0),
    )?;

    Ok(exists)
}

/// Overwrite every field of a project.
///
/// # Errors
/// Returns [Error::ProjectNotFound] if there is no project with `project_id`.
pub fn update_project(
    project_id: ProjectId,
    project: &NewProject,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE projects SET name = ?1, client = ?2, status = ?3, budget = ?4 WHERE id = ?5",
        (
            project.name.as_ref(),
            &project.client,
            &project.status,
            project.budget,
            project_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::ProjectNotFound);
    }

    Ok(())
}

/// Delete a project along with all of its transactions.
///
/// The transactions are deleted before the project. Both deletes happen in
/// one SQLite transaction, so nothing is deleted if the project is missing.
///
/// # Errors
/// Returns [Error::ProjectNotFound] if there is no project with `project_id`.
pub fn delete_project(project_id: ProjectId, connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    let transactions_deleted = transaction.execute(
        "DELETE FROM transactions WHERE project_id = ?1",
        [project_id],
    )?;
    let rows_affected = transaction.execute("DELETE FROM projects WHERE id = ?1", [project_id])?;

    if rows_affected == 0 {
        return Err(Error::ProjectNotFound);
    }

    transaction.commit()?;

    tracing::debug!("Deleted project {project_id} and {transactions_deleted} transaction(s)");

    Ok(())
}

fn map_row(row: &Row) -> Result<Project, rusqlite::Error> {
    let raw_name: String = row.get("name")?;

    Ok(Project {
        id: row.get("id")?,
        name: ProjectName::new_unchecked(&raw_name),
        client: row.get("client")?,
        status: row.get("status")?,
        budget: row.get("budget")?,
    })
}
