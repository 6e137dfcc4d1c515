use crate::core::types::ClientId;
use crate::error::Result;

use super::hash::Salt;

pub trait FromRandom {
    fn from_random() -> Self;
}

impl FromRandom for Salt {
    fn from_random() -> Self {
        Salt(random_string(16))
    }
}

/// Source of cryptographically strong random strings.
pub trait RandomStringGenerator {
    fn generate(&self, length: usize) -> Result<String>;
}

/// Source of unique client identifiers.
pub trait IdGenerator {
    fn generate(&self) -> Result<ClientId>;
}

/// Alphanumeric strings drawn from the thread-local CSPRNG.
#[derive(Debug, Default)]
pub struct ThreadRngGenerator;

impl RandomStringGenerator for ThreadRngGenerator {
    fn generate(&self, length: usize) -> Result<String> {
        Ok(random_string(length))
    }
}

/// Random (v4) UUIDs.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> Result<ClientId> {
        Ok(ClientId(uuid::Uuid::new_v4().to_string()))
    }
}

fn random_string(size: usize) -> String {
    use rand::Rng;

    rand::thread_rng()
        .sample_iter(rand::distributions::Alphanumeric)
        .take(size)
        .map(|b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        let s = ThreadRngGenerator.generate(32).unwrap();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn uuids_differ() {
        let a = UuidGenerator.generate().unwrap();
        let b = UuidGenerator.generate().unwrap();
        assert!(!a.0.is_empty());
        assert_ne!(a, b);
    }
}
