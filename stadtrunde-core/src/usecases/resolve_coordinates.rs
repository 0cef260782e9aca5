use std::time::Duration;

use stadtrunde_boundary::{cached_coordinate, geocoding_from_cache, GeocodedLocations};

use super::prelude::*;
use crate::gateways::{delay::Delay, geocode::GeoCodingGateway};

/// Minimal spacing between two requests to the geocoder
/// as demanded by the usage policy of the public Nominatim service.
pub const MIN_GEOCODING_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSource {
    Cache,
    Geocoder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCoordinates {
    pub source: CoordinateSource,
    /// Aligned to the order of the requested addresses.
    pub geocodings: Vec<Geocoding>,
}

/// Loads the cached coordinates if they cover exactly `expected_len` addresses.
///
/// A cache of any other length is stale as a whole.
pub fn load_cached_coordinates<S>(storage: &S, expected_len: usize) -> Option<Vec<Geocoding>>
where
    S: KeyValueStorage,
{
    let cached: GeocodedLocations = storage::get_or_log(storage, keys::GEOCODED_LOCATIONS)?;
    if cached.len() != expected_len {
        log::debug!(
            "Discard {} cached coordinates for {expected_len} addresses",
            cached.len()
        );
        return None;
    }
    Some(cached.into_iter().map(geocoding_from_cache).collect())
}

/// Pending results are stored like failed ones.
pub fn save_cached_coordinates<S>(storage: &S, geocodings: &[Geocoding]) -> Result<()>
where
    S: KeyValueStorage,
{
    let cached: GeocodedLocations = geocodings.iter().copied().map(cached_coordinate).collect();
    storage.set(keys::GEOCODED_LOCATIONS, &cached)?;
    Ok(())
}

pub fn clear_cached_coordinates<S>(storage: &S) -> Result<()>
where
    S: KeyValueStorage,
{
    storage.delete(keys::GEOCODED_LOCATIONS)?;
    Ok(())
}

/// Resolves all addresses one after another.
///
/// Waits at least [`MIN_GEOCODING_INTERVAL`] between two requests.
/// Failed requests are not retried.
pub async fn geocode_addresses<G, D, A>(
    gateway: &G,
    delay: &D,
    addresses: &[A],
    interval: Duration,
) -> Vec<Geocoding>
where
    G: GeoCodingGateway,
    D: Delay,
    A: AsRef<str>,
{
    let interval = interval.max(MIN_GEOCODING_INTERVAL);
    let mut geocodings = Vec::with_capacity(addresses.len());
    for (index, address) in addresses.iter().enumerate() {
        let address = address.as_ref();
        if index > 0 {
            delay.sleep(interval).await;
        }
        let geocoding = match gateway.resolve_address_lat_lng(address).await {
            Ok(Some(pos)) => Geocoding::Resolved(pos),
            Ok(None) => {
                log::info!("No coordinates found for '{address}'");
                Geocoding::Failed
            }
            Err(err) => {
                log::warn!("Unable to geocode '{address}': {err}");
                Geocoding::Failed
            }
        };
        geocodings.push(geocoding);
    }
    geocodings
}

/// Resolves the coordinates of all addresses, preferably from the cache.
///
/// The future completes only after every address has been settled
/// and the results have been written back into the cache.
pub async fn resolve_coordinates<S, G, D, A>(
    storage: &S,
    gateway: &G,
    delay: &D,
    addresses: &[A],
    interval: Duration,
) -> ResolvedCoordinates
where
    S: KeyValueStorage,
    G: GeoCodingGateway,
    D: Delay,
    A: AsRef<str>,
{
    if let Some(geocodings) = load_cached_coordinates(storage, addresses.len()) {
        log::info!("Load coordinates from cache");
        return ResolvedCoordinates {
            source: CoordinateSource::Cache,
            geocodings,
        };
    }
    log::info!("No valid coordinates in cache: start geocoding");
    let geocodings = geocode_addresses(gateway, delay, addresses, interval).await;
    log::info!("Geocoding finished");
    if let Err(err) = save_cached_coordinates(storage, &geocodings) {
        log::warn!("Unable to cache coordinates: {err}");
    }
    ResolvedCoordinates {
        source: CoordinateSource::Geocoder,
        geocodings,
    }
}
