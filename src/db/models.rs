use std::convert::TryFrom;

use super::schema::*;
use crate::core::models;
use crate::error::PersistenceError;

/// A client as it is stored. There is no column for the plaintext secret.
#[derive(Debug, Clone, PartialEq)]
#[derive(Queryable, Insertable)]
#[table_name = "clients"]
pub struct Client {
    pub client_id: String,
    pub secret_hash: Option<String>,
    /// JSON array of grant types, NULL when unrestricted.
    pub grant_types: Option<String>,
    pub redirect_uri: Option<String>,
    pub description: Option<String>,
}

impl Client {
    pub fn grant_type_parts(&self) -> Result<Option<Vec<String>>, PersistenceError> {
        self.grant_types
            .as_deref()
            .map(|raw| serde_json::from_str::<Vec<String>>(raw))
            .transpose()
            .map_err(PersistenceError::from)
    }
}

impl TryFrom<&models::Client> for Client {
    type Error = PersistenceError;

    fn try_from(client: &models::Client) -> Result<Self, Self::Error> {
        let grant_types = client
            .grant_types()
            .as_parts()
            .map(|parts| serde_json::to_string(parts))
            .transpose()?;

        Ok(Self {
            client_id: client.id().0.clone(),
            secret_hash: client.secret_hash().map(|h| h.0.clone()),
            grant_types,
            redirect_uri: client.redirect_uri().map(|u| u.0.clone()),
            description: client.description().map(ToString::to_string),
        })
    }
}
