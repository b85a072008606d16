//! Project Vault is a local backend for tracking client projects and the
//! money that flows in and out of them.
//!
//! This library provides a JSON REST API over a SQLite store. It is consumed
//! by a separately packaged desktop client.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod config;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod message;
mod not_found;
mod project;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{Config, DEFAULT_DB_PATH, DEFAULT_PORT};
pub use db::{Database, initialize as initialize_db};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use project::{Project, ProjectId, ProjectName};
pub use routing::build_router;
pub use transaction::{Description, Transaction, TransactionId};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used as a project name.
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    /// An empty or whitespace-only string was used as a transaction description.
    #[error("Transaction description cannot be empty")]
    EmptyDescription,

    /// The request body could not be parsed into the expected JSON shape.
    ///
    /// Holds the reason given by the JSON extractor, e.g. a missing field.
    #[error("{0}")]
    InvalidJson(String),

    /// A path parameter, such as a record ID, could not be parsed.
    #[error("{0}")]
    InvalidPath(String),

    /// A transaction referenced a project that is not in the database.
    #[error("project {0} does not exist")]
    InvalidProjectId(i64),

    /// Tried to update or delete a project that does not exist.
    #[error("Project not found")]
    ProjectNotFound,

    /// Tried to update or delete a transaction that does not exist.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// The database reports a schema version that no migration path leads to,
    /// e.g. one written by a newer version of the application.
    #[error("database schema version {0} is not supported by this application")]
    UnsupportedSchemaVersion(i64),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidJson(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidPath(rejection.body_text())
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::EmptyProjectName
            | Error::EmptyDescription
            | Error::InvalidJson(_)
            | Error::InvalidPath(_)
            | Error::InvalidProjectId(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ProjectNotFound | Error::TransactionNotFound | Error::NotFound => {
                StatusCode::NOT_FOUND
            }
            Error::SqlError(_) | Error::UnsupportedSchemaVersion(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
