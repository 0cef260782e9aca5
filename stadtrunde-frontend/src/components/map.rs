use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{position, Circle, MapContainer, Marker, Popup, Position, TileLayer};

use stadtrunde_core::{entities::MapPoint, usecases::MapMarker};

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const USER_MARKER_COLOR: &str = "#4285F4";

/// Center and zoom level the map should move to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: f64,
}

fn to_position(pos: MapPoint) -> Position {
    let (lat, lng) = pos.to_lat_lng_deg();
    Position::new(lat, lng)
}

#[component]
pub fn Map(
    initial_view: MapView,
    requested_view: Signal<Option<MapView>>,
    markers: Signal<Vec<MapMarker>>,
    user_pos: Signal<Option<MapPoint>>,
    focused: Signal<Option<MapMarker>>,
) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    Effect::new(move |_| {
        let Some(MapView { center, zoom }) = requested_view.get() else {
            return;
        };
        let Some(map) = map.get() else {
            log::warn!("No leaflet map found");
            return;
        };
        let (lat, lng) = center.to_lat_lng_deg();
        map.set_view(&LatLng::new(lat, lng), zoom);
    });

    view! {
      <MapContainer
        class="map-container"
        center=to_position(initial_view.center)
        zoom=initial_view.zoom
        map=map.write_only()
        set_view=true
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <For
          each=move || markers.get()
          key=|marker| marker.address.clone()
          let:marker
        >
          <Marker position=to_position(marker.pos)>
            <Popup>
              <strong>{marker.title}</strong>
              <br />
              {marker.address}
            </Popup>
          </Marker>
        </For>
        { move || user_pos.get().map(|pos| {
            let (lat, lng) = pos.to_lat_lng_deg();
            view! {
              <Circle
                center=position!(lat, lng)
                radius=25.0
                color="white"
                fill_color=USER_MARKER_COLOR
                fill_opacity=1.0
              >
                <Popup>"Dein Standort"</Popup>
              </Circle>
            }
          })
        }
        { move || focused.get().map(|marker| view! {
            <Popup position=to_position(marker.pos)>
              <strong>{marker.title}</strong>
              <br />
              {marker.address}
            </Popup>
          })
        }
      </MapContainer>
    }
}
