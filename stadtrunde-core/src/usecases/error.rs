use crate::storage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The address '{0}' is not part of the catalog")]
    UnknownAddress(String),
    #[error(transparent)]
    Storage(#[from] storage::Error),
}
