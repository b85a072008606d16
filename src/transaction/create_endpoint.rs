//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    Database, Error,
    message::Message,
    transaction::{NewTransaction, TransactionForm, create_transaction},
};

/// A route handler for recording a transaction against an existing project.
pub async fn create_transaction_endpoint(
    State(database): State<Database>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Message, Error> {
    let Json(form) = payload?;
    let new_transaction = NewTransaction::try_from(form)?;

    let connection = database.open()?;
    let transaction = create_transaction(new_transaction, &connection).inspect_err(|error| {
        tracing::warn!("Could not create transaction: {error}");
    })?;

    Ok(Message::created(transaction.id, "Transaction added"))
}
