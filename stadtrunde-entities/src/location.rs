use crate::geo::*;

/// A point of interest of the compiled-in catalog.
///
/// The address is the identity of an entry: coordinate caches and
/// visited flags are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub address: String,
    pub note: Option<String>,
    pub class_label: String,
    pub contact_name: String,
}

/// Outcome of resolving the address of a location into a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Geocoding {
    /// Not attempted yet.
    #[default]
    Pending,
    Resolved(MapPoint),
    /// Resolution was attempted but the address is unknown
    /// or the resolver could not be reached.
    Failed,
}

impl Geocoding {
    #[must_use]
    pub const fn pos(self) -> Option<MapPoint> {
        match self {
            Self::Resolved(pos) => Some(pos),
            Self::Pending | Self::Failed => None,
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<Option<MapPoint>> for Geocoding {
    fn from(from: Option<MapPoint>) -> Self {
        from.map_or(Self::Failed, Self::Resolved)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub entry: CatalogEntry,
    pub visited: bool,
    pub geocoding: Geocoding,
    /// Distance to the user, only known if the user position is known.
    pub distance: Option<Distance>,
}

impl Location {
    #[must_use]
    pub fn address(&self) -> &str {
        &self.entry.address
    }

    #[must_use]
    pub const fn pos(&self) -> Option<MapPoint> {
        self.geocoding.pos()
    }
}

impl From<CatalogEntry> for Location {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            entry,
            visited: false,
            geocoding: Geocoding::Pending,
            distance: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_locations_are_neither_visited_nor_resolved() {
        let location = Location::from(CatalogEntry {
            address: "Opernplatz, Frankfurt am Main".into(),
            note: None,
            class_label: "11b".into(),
            contact_name: "Petra Kolb".into(),
        });
        assert!(!location.visited);
        assert!(location.geocoding.is_pending());
        assert_eq!(location.pos(), None);
        assert_eq!(location.distance, None);
    }

    #[test]
    fn failed_geocoding_has_no_position() {
        assert_eq!(Geocoding::from(None), Geocoding::Failed);
        assert_eq!(Geocoding::Failed.pos(), None);
        assert!(!Geocoding::Failed.is_pending());
        let pos = MapPoint::from_lat_lng_deg(50.0, 8.0);
        assert_eq!(Geocoding::from(Some(pos)).pos(), Some(pos));
    }
}
