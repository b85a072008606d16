//! Defines the endpoint for replacing a transaction's fields.

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
    transaction::{TransactionDetails, TransactionId, TransactionUpdateForm, update_transaction},
};

/// A route handler for updating a transaction's description, category, amount and date.
pub async fn edit_transaction_endpoint(
    State(database): State<Database>,
    path: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionUpdateForm>, JsonRejection>,
) -> Result<Message, Error> {
    let Path(transaction_id) = path?;
    let Json(form) = payload?;
    let details = TransactionDetails::try_from(form)?;

    let connection = database.open()?;
    update_transaction(transaction_id, &details, &connection)?;

    Ok(Message::simple("Transaction updated"))
}
