use crate::error::{Error, Result};

pub const DEFAULT_HASH_COST: u32 = 3;

/// Settings for one invocation, read from the command line and environment.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub hash_secret: String,
    /// Argon2 time cost used when hashing client secrets.
    pub hash_cost: u32,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(Error::Configuration("DATABASE_URL must not be empty".into()));
        }
        if self.hash_secret.is_empty() {
            return Err(Error::Configuration("HASH_SECRET must not be empty".into()));
        }
        if self.hash_cost == 0 {
            return Err(Error::Configuration("HASH_COST must be at least 1".into()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("hash_secret", &"<redacted>")
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}
