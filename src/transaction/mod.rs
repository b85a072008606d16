//! Transactions: dated, optionally categorised amounts of money belonging to a project.

mod create_endpoint;
mod db;
mod delete_endpoint;
mod domain;
mod edit_endpoint;
mod list_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use db::{
    create_transaction, create_transaction_table, delete_transaction,
    get_transactions_for_project, update_transaction,
};
#[cfg(test)]
pub use db::get_transaction;
pub use delete_endpoint::delete_transaction_endpoint;
pub use domain::{
    Description, NewTransaction, Transaction, TransactionDetails, TransactionForm, TransactionId,
    TransactionUpdateForm,
};
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::get_project_transactions_endpoint;
