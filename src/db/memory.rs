use std::collections::HashMap;
use std::convert::TryFrom;

use super::{models, Store};
use crate::core::models::Client;
use crate::core::types::ClientId;
use crate::error::PersistenceError;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    clients: HashMap<ClientId, models::Client>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ClientId) -> Option<&models::Client> {
        self.clients.get(id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Store for InMemoryStore {
    fn save_client(&mut self, client: &Client) -> Result<(), PersistenceError> {
        if self.clients.contains_key(client.id()) {
            return Err(PersistenceError::Conflict(client.id().clone()));
        }
        let row = models::Client::try_from(client)?;
        self.clients.insert(client.id().clone(), row);
        Ok(())
    }

    fn remove_by_id(&mut self, id: &ClientId) -> Result<(), PersistenceError> {
        self.clients
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| PersistenceError::NotFound(id.clone()))
    }
}
