pub mod dir;
pub mod memory;
pub mod profiles;

pub use dir::DirKv;
pub use memory::MemoryKv;
pub use profiles::*;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Byte-oriented key-value store used for profiles and cached courses.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
    /// Keys starting with `prefix`, sorted.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// # Errors
/// Returns an error if the key is missing, unreadable, or not valid JSON for `T`.
pub fn kv_get_json<T>(store: &dyn KvStore, key: &str) -> Result<T, StorageError>
where
    T: for<'de> Deserialize<'de>,
{
    let bytes = store
        .get(key)?
        .ok_or_else(|| StorageError::new(format!("KV key missing: {key}")))?;
    serde_json::from_slice(&bytes).map_err(|e| StorageError::new(format!("{key}: {e}")))
}

/// # Errors
/// Returns an error if serialization or the write fails.
pub fn kv_put_json<T>(store: &dyn KvStore, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(value).map_err(|e| StorageError::new(e.to_string()))?;
    store.put(key, &payload)
}
