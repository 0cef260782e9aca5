// Access to the local key-value store.
// Values are serialized as JSON; each key holds a single,
// complete value that is overwritten as a whole.

use std::io;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub mod keys {
    pub const GEOCODED_LOCATIONS: &str = "geocodedLocations";
    pub const VISITED_LOCATIONS: &str = "visitedLocations";
    pub const HIDE_VISITED: &str = "hideVisitedPreference";
    pub const THEME: &str = "theme";
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("The stored value is invalid: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait KeyValueStorage {
    /// Returns `None` if nothing has been stored under `key`.
    fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned;

    fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize;

    fn delete(&self, key: &str) -> Result<()>;
}

/// Reads a value and treats unreadable entries as absent.
pub fn get_or_log<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    match storage.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Unable to read '{key}' from storage: {err}");
            None
        }
    }
}
