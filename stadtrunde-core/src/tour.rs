use crate::{
    entities::*,
    storage::KeyValueStorage,
    usecases::{self, ListItem, MapMarker},
};

/// State of a tour through the catalog.
///
/// Locations are kept in catalog order; ranking is derived on demand.
#[derive(Debug, Clone)]
pub struct TourState {
    locations: Vec<Location>,
    hide_visited: bool,
    user_pos: Option<MapPoint>,
    coordinates_settled: bool,
}

impl TourState {
    #[must_use]
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        Self {
            locations: catalog.into_iter().map(Location::from).collect(),
            hide_visited: false,
            user_pos: None,
            coordinates_settled: false,
        }
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn addresses(&self) -> Vec<String> {
        self.locations
            .iter()
            .map(|l| l.entry.address.clone())
            .collect()
    }

    #[must_use]
    pub const fn hide_visited(&self) -> bool {
        self.hide_visited
    }

    #[must_use]
    pub const fn user_pos(&self) -> Option<MapPoint> {
        self.user_pos
    }

    /// Whether every address has been either resolved or given up.
    #[must_use]
    pub const fn coordinates_settled(&self) -> bool {
        self.coordinates_settled
    }

    /// Restores the visited flags and the filter preference.
    pub fn apply_persisted_state<S>(&mut self, storage: &S)
    where
        S: KeyValueStorage,
    {
        let visited = usecases::load_visited(storage);
        usecases::apply_visited(&mut self.locations, &visited);
        self.hide_visited = usecases::load_hide_visited(storage);
    }

    /// Attaches the geocoding results in catalog order.
    ///
    /// Missing trailing results are treated as failed.
    pub fn attach_coordinates(&mut self, geocodings: Vec<Geocoding>) {
        if geocodings.len() != self.locations.len() {
            log::warn!(
                "Got {} geocoding results for {} locations",
                geocodings.len(),
                self.locations.len()
            );
        }
        let mut geocodings = geocodings.into_iter();
        for location in &mut self.locations {
            location.geocoding = match geocodings.next() {
                Some(Geocoding::Pending) | None => Geocoding::Failed,
                Some(geocoding) => geocoding,
            };
        }
        self.coordinates_settled = true;
    }

    pub fn set_user_position(&mut self, user_pos: Option<MapPoint>) {
        self.user_pos = user_pos;
    }

    /// Flips and persists the visited flag of the given address.
    pub fn toggle_visited<S>(&mut self, storage: &S, address: &str) -> usecases::Result<bool>
    where
        S: KeyValueStorage,
    {
        usecases::toggle_visited(storage, &mut self.locations, address)
    }

    /// Changes the filter and persists it.
    ///
    /// The new filter stays in effect even if persisting fails.
    pub fn set_hide_visited<S>(&mut self, storage: &S, hide_visited: bool) -> usecases::Result<()>
    where
        S: KeyValueStorage,
    {
        self.hide_visited = hide_visited;
        usecases::save_hide_visited(storage, hide_visited)
    }

    #[must_use]
    pub fn ranked(&self) -> Vec<Location> {
        usecases::rank_locations(&self.locations, self.user_pos)
    }

    #[must_use]
    pub fn list_items(&self) -> Vec<ListItem> {
        usecases::list_items(&self.ranked(), self.hide_visited)
    }

    #[must_use]
    pub fn markers(&self) -> Vec<MapMarker> {
        usecases::map_markers(&self.locations, self.hide_visited)
    }

    /// The marker to focus for "show on map".
    #[must_use]
    pub fn map_marker(&self, address: &str) -> Option<MapMarker> {
        self.markers().into_iter().find(|m| m.address == address)
    }
}
