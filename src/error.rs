use thiserror::Error;

use crate::core::types::ClientId;

/// Failures reported by a client store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("client not found: {0}")]
    NotFound(ClientId),

    #[error("client already exists: {0}")]
    Conflict(ClientId),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection error: {0}")]
    Connection(#[from] diesel::result::ConnectionError),

    #[error("migration error: {0}")]
    Migration(#[from] diesel_migrations::RunMigrationsError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid collaborator wiring or configuration, detected before a
    /// workflow starts.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// A collaborator could not produce an identifier, secret or hash.
    #[error("construction error: {0}")]
    Construction(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Persistence(PersistenceError::NotFound(_)))
    }

    /// Process exit code for this error at the command boundary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Configuration(_) => 2,
            e if e.is_not_found() => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(Error::Configuration("x".into()).exit_code(), 2);
        let missing: Error = PersistenceError::NotFound(ClientId("foo".into())).into();
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(missing.to_string(), "client not found: foo");
        assert_eq!(Error::Cancelled.exit_code(), 1);
    }
}
