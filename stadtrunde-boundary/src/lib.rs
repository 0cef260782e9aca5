use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

/// A resolved position as returned by the geocoder.
///
/// The field names follow the Nominatim response.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// A search result of a Nominatim server.
///
/// Nominatim encodes the coordinates as decimal strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Cached geocoding results aligned to the catalog order.
///
/// `None` marks an address that could not be resolved.
pub type GeocodedLocations = Vec<Option<Coordinate>>;

/// Visited flags keyed by address.
pub type VisitedLocations = HashMap<String, bool>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
