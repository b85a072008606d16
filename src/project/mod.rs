//! Projects: client engagements with an optional budget and status.

mod create_endpoint;
mod db;
mod delete_endpoint;
mod domain;
mod edit_endpoint;
mod list_endpoint;

pub use create_endpoint::create_project_endpoint;
pub use db::{
    create_project, create_project_table, delete_project, get_all_projects, project_exists,
    update_project,
};
#[cfg(test)]
pub use db::get_project;
pub use delete_endpoint::delete_project_endpoint;
pub use domain::{NewProject, Project, ProjectForm, ProjectId, ProjectName};
pub use edit_endpoint::edit_project_endpoint;
pub use list_endpoint::get_projects_endpoint;
