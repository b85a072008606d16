//! Application router configuration.

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    project::{
        create_project_endpoint, delete_project_endpoint, edit_project_endpoint,
        get_projects_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_project_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Requests from any origin are allowed since the desktop client is served
/// from a different origin than the API.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(endpoints::ROOT, get(get_status))
        .route(
            endpoints::PROJECTS,
            get(get_projects_endpoint).post(create_project_endpoint),
        )
        .route(
            endpoints::PROJECT,
            put(edit_project_endpoint).delete(delete_project_endpoint),
        )
        .route(
            endpoints::PROJECT_TRANSACTIONS,
            get(get_project_transactions_endpoint),
        )
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(cors)
        .with_state(state)
}

/// Lets the client check that the backend is up.
async fn get_status() -> Json<Value> {
    Json(json!({ "status": "Online", "message": "Vault Backend Running" }))
}
