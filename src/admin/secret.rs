use tracing::{event, Level};

use crate::core::models::IssuedSecret;
use crate::core::types::ClientSecret;
use crate::error::Result;
use crate::util::hash::SecretHasher;
use crate::util::random::RandomStringGenerator;

pub const SECRET_LENGTH: usize = 32;

/// Generates and hashes secrets for confidential clients.
pub struct SecretIssuer {
    random: Box<dyn RandomStringGenerator>,
    hasher: Box<dyn SecretHasher>,
    cost: u32,
}

impl SecretIssuer {
    pub fn new(
        random: Box<dyn RandomStringGenerator>,
        hasher: Box<dyn SecretHasher>,
        cost: u32,
    ) -> Self {
        Self {
            random,
            hasher,
            cost,
        }
    }

    /// Public clients get nothing; everyone else gets a fresh secret together
    /// with its hash.
    pub fn issue(&self, is_public: bool) -> Result<Option<IssuedSecret>> {
        if is_public {
            return Ok(None);
        }

        let secret = ClientSecret(self.random.generate(SECRET_LENGTH)?);
        let hash = self.hasher.hash(&secret, self.cost)?;
        event!(Level::DEBUG, cost = self.cost, "Issued client secret");

        Ok(Some(IssuedSecret { secret, hash }))
    }
}
