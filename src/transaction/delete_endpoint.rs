//! Defines the endpoint for deleting a transaction.

use axum::extract::{Path, State, rejection::PathRejection};

use crate::{
    Database, Error,
    message::Message,
    transaction::{TransactionId, delete_transaction},
};

/// A route handler for deleting a single transaction.
pub async fn delete_transaction_endpoint(
    State(database): State<Database>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Message, Error> {
    let Path(transaction_id) = path?;
    let connection = database.open()?;
    delete_transaction(transaction_id, &connection)?;

    Ok(Message::simple("Transaction deleted"))
}
