//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{Config, Database, Error};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store that every request opens its own connection to.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] for the store at `config.db_path`.
    ///
    /// This function will bring the database schema up to date.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let database = Database::new(&config.db_path);
        database.initialize()?;

        Ok(Self { database })
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}
