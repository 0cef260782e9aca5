use std::{cmp::Ordering, fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = RawCoord::MIN;
const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;
const RAW_COORD_RANGE: f64 = RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64;

/// Compact fixed-point integer representation of a geographical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_COORD_INVALID);

    const fn is_valid(self) -> bool {
        self.0 != RAW_COORD_INVALID
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        Self::INVALID
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_valid() && other.is_valid() {
            Some(self.0.cmp(&other.0))
        } else {
            None
        }
    }
}

macro_rules! geo_coord {
    ($(#[$attr:meta])* $name:ident, $deg_max:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd)]
        pub struct $name(GeoCoord);

        impl $name {
            const DEG_MAX: f64 = $deg_max;
            const DEG_MIN: f64 = -$deg_max;
            const TO_DEG: f64 = (Self::DEG_MAX - Self::DEG_MIN) / RAW_COORD_RANGE;
            const FROM_DEG: f64 = RAW_COORD_RANGE / (Self::DEG_MAX - Self::DEG_MIN);

            #[must_use]
            pub const fn max() -> Self {
                Self(GeoCoord(RAW_COORD_MAX))
            }

            #[must_use]
            pub const fn min() -> Self {
                Self(GeoCoord(RAW_COORD_MIN))
            }

            #[must_use]
            pub const fn to_raw(self) -> RawCoord {
                self.0 .0
            }

            #[must_use]
            pub const fn from_raw(raw: RawCoord) -> Self {
                Self(GeoCoord(raw))
            }

            #[must_use]
            pub const fn is_valid(self) -> bool {
                self.0.is_valid()
            }

            #[must_use]
            pub fn to_deg(self) -> f64 {
                if !self.is_valid() {
                    return f64::NAN;
                }
                let deg = f64::from(self.to_raw()) * Self::TO_DEG;
                debug_assert!(deg >= Self::DEG_MIN);
                debug_assert!(deg <= Self::DEG_MAX);
                deg
            }

            #[must_use]
            pub fn to_rad(self) -> f64 {
                self.to_deg().to_radians()
            }

            /// Converts degrees into the fixed-point representation.
            ///
            /// The value must be within the valid range, see [`Self::try_from_deg`].
            #[allow(clippy::cast_possible_truncation)]
            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!(deg >= Self::DEG_MIN);
                debug_assert!(deg <= Self::DEG_MAX);
                let res = Self::from_raw(f64::round(deg * Self::FROM_DEG) as RawCoord);
                debug_assert!(res.is_valid());
                res
            }

            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                (Self::DEG_MIN..=Self::DEG_MAX)
                    .contains(&deg)
                    .then(|| Self::from_deg(deg))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.to_deg())
            }
        }
    };
}

geo_coord!(
    /// Latitude in the range -90..=90 degrees.
    LatCoord,
    90.0
);

geo_coord!(
    /// Longitude in the range -180..=180 degrees.
    LngCoord,
    180.0
);

/// A geographical position on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    #[must_use]
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    #[must_use]
    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    #[must_use]
    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat)?;
        let lng = LngCoord::try_from_deg(lng)?;
        Some(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseMapPointError {
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
}

impl FromStr for MapPoint {
    type Err = ParseMapPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split(',').map(str::trim).collect_tuple() else {
            return Err(ParseMapPointError::Format(s.to_string()));
        };
        let lat = lat_str
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| ParseMapPointError::Latitude(lat_str.to_string()))?;
        let lng = lng_str
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| ParseMapPointError::Longitude(lng_str.to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    #[must_use]
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    #[must_use]
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    #[must_use]
    pub const fn to_meters(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Total order that sorts infinite distances last.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: <https://en.wikipedia.org/wiki/Great-circle_distance>
    #[must_use]
    pub fn distance(p1: Self, p2: Self) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = lat1_rad.sin_cos();
        let (lat2_sin, lat2_cos) = lat2_rad.sin_cos();

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = dlng.sin_cos();

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = nom1.hypot(nom2);
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Some(Distance::from_meters(
            MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom),
        ))
    }
}
