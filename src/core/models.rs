use super::types::*;

/// A freshly issued confidential credential: the plaintext and its hash always
/// travel together.
#[derive(Debug, Clone)]
pub struct IssuedSecret {
    pub secret: ClientSecret,
    pub hash: HashedClientSecret,
}

/// An OAuth2 client record. Built once by the client factory and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct Client {
    id: ClientId,
    credentials: Option<IssuedSecret>,
    grant_types: GrantTypes,
    redirect_uri: Option<RedirectUri>,
    description: Option<String>,
}

impl Client {
    pub fn new(
        id: ClientId,
        credentials: Option<IssuedSecret>,
        grant_types: GrantTypes,
        redirect_uri: Option<RedirectUri>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            credentials,
            grant_types,
            redirect_uri,
            description,
        }
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn secret(&self) -> Option<&ClientSecret> {
        self.credentials.as_ref().map(|c| &c.secret)
    }

    pub fn secret_hash(&self) -> Option<&HashedClientSecret> {
        self.credentials.as_ref().map(|c| &c.hash)
    }

    pub fn is_public(&self) -> bool {
        self.credentials.is_none()
    }

    pub fn grant_types(&self) -> &GrantTypes {
        &self.grant_types
    }

    pub fn redirect_uri(&self) -> Option<&RedirectUri> {
        self.redirect_uri.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
