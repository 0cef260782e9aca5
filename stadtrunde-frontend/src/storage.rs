use anyhow::anyhow;
use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use stadtrunde_core::storage::{Error, KeyValueStorage, Result};

/// The `localStorage` of the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn storage_error(err: StorageError) -> Error {
    match err {
        StorageError::SerdeError(err) => Error::InvalidValue(err.to_string()),
        err => Error::Other(anyhow!("{err}")),
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match LocalStorage::get(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        LocalStorage::set(key, value).map_err(storage_error)
    }

    fn delete(&self, key: &str) -> Result<()> {
        LocalStorage::delete(key);
        Ok(())
    }
}
