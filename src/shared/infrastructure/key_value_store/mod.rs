// Key-value store port.
//
// Purpose
// - The persistence surface of the time entry session: string keys, JSON text values.
//
// Boundaries
// - No knowledge of time entries here. Key naming and value shapes live in the repository adapter.
//
// Testing guidance
// - InMemoryKeyValueStore can be toggled offline to exercise the StorageUnavailable path.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub mod file_system;
pub mod in_memory;
