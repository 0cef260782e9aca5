use std::{
    io::{self, ErrorKind},
    path::Path,
};

use jfs::Store;
use serde::{de::DeserializeOwned, Serialize};
use stadtrunde_core::storage::{Error, KeyValueStorage, Result};

/// All values in a single, human readable JSON file.
pub struct JsonFileStorage {
    json_store: Store,
}

impl JsonFileStorage {
    pub fn try_new<P: AsRef<Path>>(file: P) -> io::Result<Self> {
        let cfg = jfs::Config {
            single: true,
            pretty: true,
            ..Default::default()
        };
        let json_store = Store::new_with_cfg(file, cfg)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl std::fmt::Debug for JsonFileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStorage")
            .field("path", &self.path())
            .finish()
    }
}

fn storage_error(err: io::Error) -> Error {
    match err.kind() {
        ErrorKind::InvalidData => Error::InvalidValue(err.to_string()),
        _ => Error::Io(err),
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.json_store.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let json =
            serde_json::to_value(value).map_err(|err| Error::InvalidValue(err.to_string()))?;
        self.json_store
            .save_with_id(&json, key)
            .map_err(storage_error)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        match self.json_store.delete(key) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn storage(dir: &tempfile::TempDir) -> JsonFileStorage {
        JsonFileStorage::try_new(dir.path().join("stadtrunde.json")).unwrap()
    }

    #[test]
    fn missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        assert_eq!(storage.get::<bool>("hideVisitedPreference").unwrap(), None);
    }

    #[test]
    fn set_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let visited = HashMap::from([("Steinweg, Frankfurt am Main".to_string(), true)]);
        storage.set("visitedLocations", &visited).unwrap();
        storage.set("hideVisitedPreference", &true).unwrap();
        assert_eq!(
            storage
                .get::<HashMap<String, bool>>("visitedLocations")
                .unwrap(),
            Some(visited)
        );
        assert_eq!(storage.get::<bool>("hideVisitedPreference").unwrap(), Some(true));
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        storage(&dir).set("theme", &"dark").unwrap();
        assert_eq!(
            storage(&dir).get::<String>("theme").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        storage.set("geocodedLocations", &vec![None::<u8>; 3]).unwrap();
        storage.delete("geocodedLocations").unwrap();
        assert_eq!(storage.get::<Vec<Option<u8>>>("geocodedLocations").unwrap(), None);
        storage.delete("geocodedLocations").unwrap();
    }
}
