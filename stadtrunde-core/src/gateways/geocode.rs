use async_trait::async_trait;
use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Geocoding request failed: {0}")]
    Request(String),
    #[error("Invalid geocoding response: {0}")]
    Response(String),
}

#[async_trait(?Send)]
pub trait GeoCodingGateway {
    /// Resolves a free-text address.
    ///
    /// Returns the position of the first candidate or `None`
    /// if the resolver does not know the address.
    async fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, Error>;
}
