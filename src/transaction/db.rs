//! Database operations for transactions.

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    project::{ProjectId, project_exists},
    transaction::{Description, NewTransaction, Transaction, TransactionDetails, TransactionId},
};

/// Create the transaction table as it was first introduced.
///
/// The `category` column is added by a later migration.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            FOREIGN KEY(project_id) REFERENCES projects(id)
        )",
        (),
    )?;

    Ok(())
}

/// Create a transaction and return it with its generated ID.
///
/// # Errors
/// Returns [Error::InvalidProjectId] if the owning project does not exist.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let sql_transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    if !project_exists(transaction.project_id, &sql_transaction)? {
        return Err(Error::InvalidProjectId(transaction.project_id));
    }

    let NewTransaction {
        project_id,
        details,
    } = transaction;

    sql_transaction.execute(
        "INSERT INTO transactions (project_id, description, category, amount, date)
        VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            project_id,
            details.description.as_ref(),
            &details.category,
            details.amount,
            &details.date,
        ),
    )?;

    let id = sql_transaction.last_insert_rowid();
    sql_transaction.commit()?;

    Ok(Transaction {
        id,
        project_id,
        description: details.description,
        category: details.category,
        amount: details.amount,
        date: details.date,
    })
}

/// Retrieve a single transaction by ID.
///
/// # Errors
/// Returns [Error::NotFound] if there is no transaction with `transaction_id`.
#[cfg(test)]
pub fn get_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(
            "SELECT id, project_id, description, category, amount, date
            FROM transactions WHERE id = :id",
        )?
        .query_row(&[(":id", &transaction_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve the transactions recorded against `project_id`.
///
/// A project without transactions, or a project that does not exist, gives
/// an empty list.
pub fn get_transactions_for_project(
    project_id: ProjectId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, project_id, description, category, amount, date
            FROM transactions WHERE project_id = :project_id ORDER BY id ASC",
        )?
        .query_map(&[(":project_id", &project_id)], map_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the mutable fields of a transaction.
///
/// # Errors
/// Returns [Error::TransactionNotFound] if there is no transaction with `transaction_id`.
pub fn update_transaction(
    transaction_id: TransactionId,
    details: &TransactionDetails,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE transactions SET description = ?1, category = ?2, amount = ?3, date = ?4
        WHERE id = ?5",
        (
            details.description.as_ref(),
            &details.category,
            details.amount,
            &details.date,
            transaction_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::TransactionNotFound);
    }

    Ok(())
}

/// Delete a transaction by ID.
///
/// # Errors
/// Returns [Error::TransactionNotFound] if there is no transaction with `transaction_id`.
pub fn delete_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM transactions WHERE id = ?1", [transaction_id])?;

    if rows_affected == 0 {
        return Err(Error::TransactionNotFound);
    }

    Ok(())
}

fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let raw_description: String = row.get("description")?;

    Ok(Transaction {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        description: Description::new_unchecked(&raw_description),
        category: row.get("category")?,
        amount: row.get("amount")?,
        date: row.get("date")?,
    })
}
