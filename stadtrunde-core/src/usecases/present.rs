use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::prelude::*;

pub const NAVIGATION_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Everything a single entry of the list displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub address: String,
    pub visited: bool,
    pub title: String,
    pub address_line: String,
    pub distance_text: Option<String>,
    /// Target of "show on map", only available if the address was resolved.
    pub map_pos: Option<MapPoint>,
    pub navigation_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub address: String,
    pub pos: MapPoint,
    pub title: String,
}

#[must_use]
pub const fn is_listed(location: &Location, hide_visited: bool) -> bool {
    !(hide_visited && location.visited)
}

/// A marker is shown iff the location is resolved and listed.
#[must_use]
pub const fn is_marker_visible(location: &Location, hide_visited: bool) -> bool {
    location.pos().is_some() && is_listed(location, hide_visited)
}

#[must_use]
pub fn title(entry: &CatalogEntry) -> String {
    format!("Klasse {} ({})", entry.class_label, entry.contact_name)
}

/// Heading of the marker popup.
#[must_use]
pub fn popup_title(entry: &CatalogEntry) -> String {
    format!("Klasse {} - {}", entry.class_label, entry.contact_name)
}

#[must_use]
pub fn address_line(entry: &CatalogEntry) -> String {
    match &entry.note {
        Some(note) => format!("{} ({note})", entry.address),
        None => entry.address.clone(),
    }
}

/// Rounded to one decimal in kilometers.
///
/// Unknown or infinite distances are not displayed at all.
#[must_use]
pub fn distance_text(distance: Option<Distance>) -> Option<String> {
    distance
        .filter(|d| d.is_finite())
        .map(|d| format!("ca. {:.1} km entfernt", d.to_kilometers()))
}

#[must_use]
pub fn navigation_url(address: &str) -> String {
    format!(
        "{NAVIGATION_URL}{}",
        utf8_percent_encode(address, NON_ALPHANUMERIC)
    )
}

#[must_use]
pub fn list_item(location: &Location) -> ListItem {
    let Location {
        entry,
        visited,
        distance,
        ..
    } = location;
    ListItem {
        address: entry.address.clone(),
        visited: *visited,
        title: title(entry),
        address_line: address_line(entry),
        distance_text: distance_text(*distance),
        map_pos: location.pos(),
        navigation_url: navigation_url(&entry.address),
    }
}

/// The list items in the given (ranked) order.
#[must_use]
pub fn list_items(ranked: &[Location], hide_visited: bool) -> Vec<ListItem> {
    ranked
        .iter()
        .filter(|l| is_listed(l, hide_visited))
        .map(list_item)
        .collect()
}

#[must_use]
pub fn map_markers(locations: &[Location], hide_visited: bool) -> Vec<MapMarker> {
    locations
        .iter()
        .filter(|l| is_marker_visible(l, hide_visited))
        .filter_map(|l| {
            l.pos().map(|pos| MapMarker {
                address: l.entry.address.clone(),
                pos,
                title: popup_title(&l.entry),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::catalog, usecases::tests::*};

    #[test]
    fn format_distance() {
        assert_eq!(
            distance_text(Some(Distance::from_meters(1234.0))).as_deref(),
            Some("ca. 1.2 km entfernt")
        );
        assert_eq!(
            distance_text(Some(Distance::from_meters(0.0))).as_deref(),
            Some("ca. 0.0 km entfernt")
        );
        assert_eq!(distance_text(Some(Distance::infinite())), None);
        assert_eq!(distance_text(None), None);
    }

    #[test]
    fn escape_navigation_target() {
        assert_eq!(
            navigation_url("Schweizer Platz, Frankfurt am Main"),
            "https://www.google.com/maps/dir/?api=1&destination=Schweizer%20Platz%2C%20Frankfurt%20am%20Main"
        );
        assert_eq!(
            navigation_url("Töngesgasse"),
            "https://www.google.com/maps/dir/?api=1&destination=T%C3%B6ngesgasse"
        );
    }

    #[test]
    fn labels_of_an_entry() {
        let steinweg = catalog().remove(2);
        assert_eq!(title(&steinweg), "Klasse 7a (Sita Poutot)");
        assert_eq!(popup_title(&steinweg), "Klasse 7a - Sita Poutot");
        assert_eq!(
            address_line(&steinweg),
            "Steinweg, Frankfurt am Main (am U-Bahnabgang)"
        );
        let berger = catalog().remove(0);
        assert_eq!(address_line(&berger), "Berger Straße 174, Frankfurt am Main");
    }

    #[test]
    fn list_item_without_coordinates() {
        let item = list_item(&Location::from(entry("Zeil")));
        assert_eq!(item.map_pos, None);
        assert_eq!(item.distance_text, None);
        assert_eq!(item.navigation_url, format!("{NAVIGATION_URL}Zeil"));
    }

    #[test]
    fn hide_visited_items_and_markers() {
        let mut visited = location_at("visited", 50.2, 8.7);
        visited.visited = true;
        let unresolved = Location::from(entry("unresolved"));
        let locations = vec![visited, unresolved, location_at("open", 50.1, 8.6)];

        let items = list_items(&locations, false);
        assert_eq!(items.len(), 3);
        assert!(items[0].visited);
        let markers = map_markers(&locations, false);
        assert_eq!(
            markers.iter().map(|m| m.address.as_str()).collect::<Vec<_>>(),
            vec!["visited", "open"]
        );

        let items = list_items(&locations, true);
        assert_eq!(
            items.iter().map(|i| i.address.as_str()).collect::<Vec<_>>(),
            vec!["unresolved", "open"]
        );
        let markers = map_markers(&locations, true);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].address, "open");
    }

    #[test]
    fn markers_match_listed_resolved_locations() {
        for hide_visited in [false, true] {
            for visited in [false, true] {
                let mut location = location_at("a", 50.0, 8.0);
                location.visited = visited;
                assert_eq!(
                    is_marker_visible(&location, hide_visited),
                    is_listed(&location, hide_visited)
                );
            }
        }
    }
}
