//! Access to the SQLite store and its schema.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, project::create_project_table, transaction::create_transaction_table};

/// A schema upgrade step. Steps must be safe to run against a store that
/// already has the change, since stores created before versioning existed
/// report version zero.
type Migration = fn(&Connection) -> Result<(), rusqlite::Error>;

/// Schema upgrades in the order they were introduced.
///
/// The schema version stored in `PRAGMA user_version` is the number of
/// migrations that have been applied. Append new steps, never reorder.
const MIGRATIONS: &[Migration] = &[
    create_tables,
    add_transaction_category,
    create_transaction_project_index,
];

/// Handle to the on-disk store.
///
/// Connections are not pooled: each caller opens its own connection with
/// [Database::open] and it is closed when dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create a handle for the store at `path`. Nothing is opened until
    /// [Database::open] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path of the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection to the store with foreign key enforcement on.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the file cannot be opened.
    pub fn open(&self) -> Result<Connection, Error> {
        let connection = Connection::open(&self.path)?;
        connection.pragma_update(None, "foreign_keys", "ON")?;

        Ok(connection)
    }

    /// Bring the store's schema up to date.
    ///
    /// # Errors
    /// Returns an error if a migration fails or the store was written by a
    /// newer schema version.
    pub fn initialize(&self) -> Result<(), Error> {
        let connection = self.open()?;

        initialize(&connection)
    }
}

/// Apply any pending schema migrations to `connection`.
///
/// All pending migrations run in a single exclusive transaction, so a
/// failure leaves the store at its previous version.
///
/// # Errors
/// Returns [Error::UnsupportedSchemaVersion] if the store's version is
/// negative or newer than the known migrations, or [Error::SqlError] if a
/// migration fails.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    let current_version = get_schema_version(&transaction)?;
    let latest_version = MIGRATIONS.len() as i64;

    if !(0..=latest_version).contains(&current_version) {
        return Err(Error::UnsupportedSchemaVersion(current_version));
    }

    for (index, migration) in MIGRATIONS
        .iter()
        .enumerate()
        .skip(current_version as usize)
    {
        tracing::info!("Applying database migration {}", index + 1);
        migration(&transaction)?;
    }

    transaction.pragma_update(None, "user_version", latest_version)?;
    transaction.commit()?;

    Ok(())
}

fn get_schema_version(connection: &Connection) -> Result<i64, rusqlite::Error> {
    connection.pragma_query_value(None, "user_version", |row| row.get(0))
}

fn create_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_project_table(connection)?;
    create_transaction_table(connection)
}

/// Stores created before categories existed lack the column.
fn add_transaction_category(connection: &Connection) -> Result<(), rusqlite::Error> {
    if has_column(connection, "transactions", "category")? {
        return Ok(());
    }

    connection.execute("ALTER TABLE transactions ADD COLUMN category TEXT", ())?;

    Ok(())
}

fn create_transaction_project_index(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_project_id ON transactions(project_id)",
        (),
    )?;

    Ok(())
}

fn has_column(connection: &Connection, table: &str, column: &str) -> Result<bool, rusqlite::Error> {
    let count: i64 = connection.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
        (table, column),
        |row| row.get(0),
    )?;

    Ok(count > 0)
}


#[cfg(test)]
mod database_tests {
    use tempfile::TempDir;

    use super::Database;

    #[test]
    fn connections_share_committed_state() {
        let dir = TempDir::new().unwrap();
        let database = Database::new(dir.path().join("vault.db"));
        database.initialize().unwrap();

        database
            .open()
            .unwrap()
            .execute("INSERT INTO projects (name) VALUES ('Shared')", ())
            .unwrap();

        let name: String = database
            .open()
            .unwrap()
            .query_row("SELECT name FROM projects", (), |row| row.get("name"))
            .unwrap();
        assert_eq!(name, "Shared");
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let database = Database::new(dir.path().join("missing").join("vault.db"));

        assert!(database.open().is_err());
    }

    #[test]
    fn open_enables_foreign_keys() {
        let dir = TempDir::new().unwrap();
        let database = Database::new(dir.path().join("vault.db"));

        let foreign_keys: i64 = database
            .open()
            .unwrap()
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();

        assert_eq!(foreign_keys, 1);
    }
}
