//! Request and response handling of the Nominatim search API
//! shared by all HTTP clients.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use stadtrunde_boundary::NominatimPlace;

use super::geocode::Error;
use crate::entities::*;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

#[must_use]
pub fn search_url(base_url: &str, address: &str) -> String {
    format!(
        "{}/search?format=json&q={}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(address, NON_ALPHANUMERIC)
    )
}

/// Picks the position of the first candidate.
pub fn first_candidate(places: Vec<NominatimPlace>) -> Result<Option<MapPoint>, Error> {
    let Some(NominatimPlace { lat, lon, .. }) = places.into_iter().next() else {
        return Ok(None);
    };
    format!("{lat},{lon}")
        .parse::<MapPoint>()
        .map(Some)
        .map_err(|err| Error::Response(err.to_string()))
}
