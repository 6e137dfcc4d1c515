//! Client persistence.
//!
//! [`Store`] is the only thing the admin workflows know about storage.
//! [`diesel::DbStore`] keeps clients in SQLite; [`memory::InMemoryStore`]
//! keeps them in a map and is used by tests.

use crate::core::models::Client;
use crate::core::types::ClientId;
use crate::error::PersistenceError;

pub mod diesel;
pub mod memory;
pub mod models;
pub mod schema;

pub trait Store {
    /// Persist a new client. Only the secret hash is stored.
    fn save_client(&mut self, client: &Client) -> Result<(), PersistenceError>;

    /// Remove a client, failing with [`PersistenceError::NotFound`] when no
    /// client has this id.
    fn remove_by_id(&mut self, id: &ClientId) -> Result<(), PersistenceError>;
}

