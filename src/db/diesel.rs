use std::convert::TryFrom;
use std::fmt::Debug;
use std::path::Path;

use crate::core::models::Client;
use crate::core::types::ClientId;
use crate::error::PersistenceError;

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use tracing::{event, Level};

use super::models;
use super::schema;
use super::Store;

embed_migrations!("migrations");

/// SQLite backed client store.
///
/// Nothing touches the database until the first operation needs it; the
/// connection is then opened and the schema brought up to date.
pub struct DbStore {
    uri: String,
    conn: Option<SqliteConnection>,
}

impl DbStore {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            conn: None,
        }
    }

    fn connection(&mut self) -> Result<&SqliteConnection, PersistenceError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                let conn = SqliteConnection::establish(&self.uri)?;
                embedded_migrations::run(&conn)?;
                event!(Level::DEBUG, "Ran migrations");
                conn
            }
        };
        Ok(self.conn.insert(conn))
    }

    /// True when the uri names a plain file path that does not exist yet.
    fn is_missing_file(&self) -> bool {
        self.conn.is_none()
            && self.uri != ":memory:"
            && !self.uri.starts_with("file:")
            && !Path::new(&self.uri).exists()
    }

    pub fn get(&mut self, id: &ClientId) -> Result<Option<models::Client>, PersistenceError> {
        use schema::clients::dsl::clients;

        let found = clients
            .find(&id.0)
            .first::<models::Client>(self.connection()?)
            .optional()?;
        Ok(found)
    }
}

impl Debug for DbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbStore")
            .field("uri", &self.uri)
            .field("connected", &self.conn.is_some())
            .finish()
    }
}

impl Store for DbStore {
    fn save_client(&mut self, client: &Client) -> Result<(), PersistenceError> {
        use schema::clients::dsl::clients;

        let model = models::Client::try_from(client)?;

        diesel::insert_into(clients)
            .values(&model)
            .execute(self.connection()?)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    PersistenceError::Conflict(client.id().clone())
                }
                e => e.into(),
            })?;

        Ok(())
    }

    fn remove_by_id(&mut self, id: &ClientId) -> Result<(), PersistenceError> {
        use schema::clients::dsl::clients;

        if self.is_missing_file() {
            return Err(PersistenceError::NotFound(id.clone()));
        }

        let removed = diesel::delete(clients.find(&id.0)).execute(self.connection()?)?;
        if removed == 0 {
            return Err(PersistenceError::NotFound(id.clone()));
        }

        Ok(())
    }
}
