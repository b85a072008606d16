//! Success responses for endpoints that modify data.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// A confirmation returned with status 200 OK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    /// Confirms that a row was created and gives its generated ID.
    Created { id: DatabaseId, message: String },
    /// Confirms that an update or delete succeeded.
    Simple { message: String },
}

impl Message {
    /// Create a confirmation for a new row with `id`.
    pub fn created(id: DatabaseId, message: &str) -> Self {
        Self::Created {
            id,
            message: message.to_owned(),
        }
    }

    /// Create a confirmation without any data attached.
    pub fn simple(message: &str) -> Self {
        Self::Simple {
            message: message.to_owned(),
        }
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
