use crate::core::types::{ClientSecret, HashedClientSecret};
use crate::error::{Error, Result};

use super::random::FromRandom;

#[derive(Debug)]
pub struct Salt(pub String);

/// Turns a plaintext client secret into the credential hash that gets stored.
pub trait SecretHasher {
    fn hash(&self, secret: &ClientSecret, cost: u32) -> Result<HashedClientSecret>;
}

/// Argon2 hashing keyed with a server-side secret.
#[derive(Debug)]
pub struct HashingService {
    secret_key: String,
}

impl HashingService {
    pub fn with_secret_key(secret_key: String) -> Self {
        Self { secret_key }
    }

    fn get_config(&self, cost: u32) -> argon2::Config {
        let mut config = argon2::Config::default();
        config.secret = self.secret_key.as_bytes();
        config.time_cost = cost;
        config
    }

    pub fn verify(&self, secret: &ClientSecret, hashed: &HashedClientSecret) -> Result<bool> {
        argon2::verify_encoded_ext(
            hashed.as_ref(),
            secret.as_ref().as_bytes(),
            self.secret_key.as_bytes(),
            &[],
        )
        .map_err(|e| Error::Construction(format!("failed to verify secret hash: {}", e)))
    }
}

impl SecretHasher for HashingService {
    fn hash(&self, secret: &ClientSecret, cost: u32) -> Result<HashedClientSecret> {
        let salt = Salt::from_random();
        let hash = argon2::hash_encoded(
            secret.as_ref().as_bytes(),
            salt.0.as_bytes(),
            &self.get_config(cost),
        )
        .map_err(|e| Error::Construction(format!("failed to hash client secret: {}", e)))?;

        Ok(hash.into())
    }
}
