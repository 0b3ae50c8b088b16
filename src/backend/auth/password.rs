/**
 * Credential Hashing
 *
 * bcrypt hashing and verification for user passwords. bcrypt is CPU-bound,
 * so both operations run on tokio's blocking pool instead of stalling the
 * async worker threads.
 */

use thiserror::Error;

use crate::backend::error::BackendError;

/// Errors from hashing or verifying a password
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<CredentialError> for BackendError {
    fn from(err: CredentialError) -> Self {
        BackendError::internal(err.to_string())
    }
}

/// Password hasher with a fixed bcrypt cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password for storage
    pub async fn hash(&self, password: String) -> Result<String, CredentialError> {
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }

    /// Check a password against a stored hash
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, CredentialError> {
        let valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(valid)
    }
}
