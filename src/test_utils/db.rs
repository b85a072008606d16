use rusqlite::Connection;
use tempfile::TempDir;

use crate::Database;

/// An initialized store in a temporary directory.
///
/// Handlers open their own connections, so tests need a file on disk rather
/// than an in-memory database for the handler and the test to see the same
/// data. The directory is removed when this is dropped.
pub(crate) struct TestDatabase {
    pub database: Database,
    _dir: TempDir,
}

impl TestDatabase {
    #[track_caller]
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().expect("could not create temporary directory");
        let database = Database::new(dir.path().join("vault.db"));
        database
            .initialize()
            .expect("could not initialize test database");

        Self {
            database,
            _dir: dir,
        }
    }

    #[track_caller]
    pub(crate) fn connection(&self) -> Connection {
        self.database
            .open()
            .expect("could not open test database connection")
    }
}
