use crate::core::models::{Client, IssuedSecret};
use crate::core::types::{GrantTypes, RedirectUri};
use crate::error::{Error, Result};
use crate::util::random::IdGenerator;

/// Assembles client records, giving each one a fresh identifier.
pub struct ClientFactory {
    ids: Box<dyn IdGenerator>,
}

impl ClientFactory {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    pub fn build(
        &self,
        credentials: Option<IssuedSecret>,
        grant_types: GrantTypes,
        description: Option<String>,
        redirect_uri: Option<String>,
    ) -> Result<Client> {
        let id = self.ids.generate()?;
        if id.0.is_empty() {
            return Err(Error::Construction(
                "identifier generator returned an empty id".to_string(),
            ));
        }

        Ok(Client::new(
            id,
            credentials,
            grant_types,
            redirect_uri.map(RedirectUri),
            description,
        ))
    }
}
