use super::*;
use stadtrunde_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lon) = from.to_lat_lng_deg();
        Self { lat, lon }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = Coordinate;

    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lon } = from;
        Self::try_from_lat_lng_deg(lat, lon).ok_or(from)
    }
}

/// Cache entry of a geocoding result.
///
/// Pending results are cached like failed ones.
#[must_use]
pub fn cached_coordinate(geocoding: e::location::Geocoding) -> Option<Coordinate> {
    geocoding.pos().map(Coordinate::from)
}

/// Restores a geocoding result from the cache.
///
/// Coordinates out of range are treated like a failed resolution.
#[must_use]
pub fn geocoding_from_cache(cached: Option<Coordinate>) -> e::location::Geocoding {
    cached
        .and_then(|c| e::geo::MapPoint::try_from(c).ok())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::{geo::MapPoint, location::Geocoding};

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let c = Coordinate {
            lat: 91.0,
            lon: 8.0,
        };
        assert_eq!(MapPoint::try_from(c), Err(c));
        assert_eq!(geocoding_from_cache(Some(c)), Geocoding::Failed);
        assert_eq!(geocoding_from_cache(None), Geocoding::Failed);
    }

    #[test]
    fn geocoding_to_cached_coordinate() {
        let pos = MapPoint::from_lat_lng_deg(50.1, 8.6);
        let c = cached_coordinate(Geocoding::Resolved(pos)).unwrap();
        assert!((c.lat - 50.1).abs() < 0.000_001);
        assert!((c.lon - 8.6).abs() < 0.000_001);
        assert_eq!(cached_coordinate(Geocoding::Failed), None);
        assert_eq!(cached_coordinate(Geocoding::Pending), None);

        let restored = geocoding_from_cache(Some(c)).pos().unwrap();
        assert!(MapPoint::distance(pos, restored).unwrap().to_meters() < 0.01);
    }
}
