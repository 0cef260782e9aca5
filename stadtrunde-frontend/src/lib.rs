use js_sys::Reflect;
use leptos::*;
use wasm_bindgen::JsValue;

use stadtrunde_core::{
    catalog::{catalog, find_duplicate_address},
    entities::MapPoint,
    gateways::nominatim,
    tour::TourState,
    usecases::{self, MapMarker, Theme, MIN_GEOCODING_INTERVAL},
};

mod components;
mod gateways;
mod geolocation;
mod storage;

use self::{
    components::*,
    gateways::{Nominatim, TimerDelay},
    geolocation::GeolocationError,
    storage::BrowserStorage,
};

const FRANKFURT_LAT_LNG: (f64, f64) = (50.1109, 8.6821);
const DEFAULT_ZOOM: f64 = 12.0;
const USER_POSITION_ZOOM: f64 = 14.0;
const SHOW_ON_MAP_ZOOM: f64 = 17.0;

const LOCATION_UPDATED: &str = "Standort erfolgreich aktualisiert!";
const LOCATION_UNAVAILABLE: &str = "Standort konnte nicht ermittelt werden.";
const LOCATION_UNSUPPORTED: &str = "Geolocation wird nicht unterstützt.";
const LOCATION_REFRESHING: &str = "Standort wird neu ermittelt...";

const MAP_ELEMENT_ID: &str = "map";
const DARK_MODE_CLASS: &str = "dark-mode";

fn default_view() -> MapView {
    let (lat, lng) = FRANKFURT_LAT_LNG;
    MapView {
        center: MapPoint::from_lat_lng_deg(lat, lng),
        zoom: DEFAULT_ZOOM,
    }
}

/// Leaflet is loaded as a global script.
fn leaflet_available() -> bool {
    Reflect::has(&window(), &JsValue::from_str("L")).unwrap_or(false)
}

fn scroll_to_map() {
    if let Some(element) = document().get_element_by_id(MAP_ELEMENT_ID) {
        element.scroll_into_view();
    }
}

fn apply_theme(theme: Theme) {
    let Some(body) = document().body() else {
        log::warn!("No document body found");
        return;
    };
    if let Err(err) = body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme.is_dark())
    {
        log::warn!("Unable to apply theme: {err:?}");
    }
}

#[allow(clippy::too_many_lines)]
#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let catalog = catalog();
    if let Some(address) = find_duplicate_address(&catalog) {
        log::error!("The address '{address}' occurs more than once in the catalog");
    }

    // -- signals -- //

    let tour = RwSignal::new(TourState::new(catalog));
    tour.update(|t| t.apply_persisted_state(&BrowserStorage));
    let theme = RwSignal::new(usecases::load_theme(&BrowserStorage));
    let status = RwSignal::new(None::<String>);
    let map_view = RwSignal::new(None::<MapView>);
    let focused = RwSignal::new(None::<MapMarker>);
    let list_open = RwSignal::new(false);

    let hide_visited = Signal::derive(move || tour.with(TourState::hide_visited));
    let settled = Signal::derive(move || tour.with(TourState::coordinates_settled));
    let user_pos = Signal::derive(move || tour.with(TourState::user_pos));
    let items = create_memo(move |_| tour.with(TourState::list_items));
    let markers = create_memo(move |_| tour.with(TourState::markers));

    // -- actions -- //

    let resolve_coordinates = Action::new(move |()| async move {
        let addresses = tour.with_untracked(TourState::addresses);
        let resolved = usecases::resolve_coordinates(
            &BrowserStorage,
            &Nominatim::new(nominatim::DEFAULT_BASE_URL),
            &TimerDelay,
            &addresses,
            MIN_GEOCODING_INTERVAL,
        )
        .await;
        tour.update(|t| t.attach_coordinates(resolved.geocodings));
    });

    let locate_user = Action::new(move |()| async move {
        match geolocation::current_position().await {
            Ok(pos) => {
                tour.update(|t| t.set_user_position(Some(pos)));
                status.set(Some(LOCATION_UPDATED.to_string()));
                map_view.set(Some(MapView {
                    center: pos,
                    zoom: USER_POSITION_ZOOM,
                }));
            }
            Err(GeolocationError::Unsupported) => {
                log::warn!("Geolocation is not supported");
                status.set(Some(LOCATION_UNSUPPORTED.to_string()));
            }
            Err(GeolocationError::Unavailable(err)) => {
                log::warn!("Unable to determine the user position: {err}");
                status.set(Some(LOCATION_UNAVAILABLE.to_string()));
            }
        }
    });

    // -- callbacks -- //

    let on_hide_visited = move |hide: bool| {
        tour.update(|t| {
            if let Err(err) = t.set_hide_visited(&BrowserStorage, hide) {
                log::warn!("Unable to save filter preference: {err}");
            }
        });
    };

    let on_refresh = move |()| {
        status.set(Some(LOCATION_REFRESHING.to_string()));
        locate_user.dispatch(());
    };

    let on_toggle_theme = move |()| {
        let toggled = theme.get_untracked().toggled();
        theme.set(toggled);
        if let Err(err) = usecases::save_theme(&BrowserStorage, toggled) {
            log::warn!("Unable to save theme: {err}");
        }
    };

    let on_toggle_list = move |()| {
        list_open.update(|open| *open = !*open);
    };

    let on_toggle_visited = move |address: String| {
        tour.update(|t| {
            if let Err(err) = t.toggle_visited(&BrowserStorage, &address) {
                log::warn!("Unable to toggle visited state: {err}");
            }
        });
        let still_shown = focused
            .get_untracked()
            .is_none_or(|m| tour.with_untracked(|t| t.map_marker(&m.address).is_some()));
        if !still_shown {
            focused.set(None);
        }
    };

    let on_show_on_map = move |address: String| {
        let Some(marker) = tour.with_untracked(|t| t.map_marker(&address)) else {
            log::debug!("No coordinates for '{address}'");
            return;
        };
        map_view.set(Some(MapView {
            center: marker.pos,
            zoom: SHOW_ON_MAP_ZOOM,
        }));
        focused.set(Some(marker));
        list_open.set(false);
        scroll_to_map();
    };

    // -- effects -- //

    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    // -- init -- //

    resolve_coordinates.dispatch(());
    locate_user.dispatch(());

    let map = if leaflet_available() {
        view! {
          <Map
            initial_view=default_view()
            requested_view=map_view.into()
            markers=markers.into()
            user_pos
            focused=focused.into()
          />
        }
        .into_view()
    } else {
        log::error!("Leaflet is not available: continue without a map");
        view! { <p class="map-unavailable">"Die Karte konnte nicht geladen werden."</p> }
            .into_view()
    };

    view! {
      <Toolbar
        hide_visited
        on_hide_visited
        on_refresh
        theme=theme.into()
        on_toggle_theme
        on_toggle_list
        status=status.into()
      />
      <main>
        <div id=MAP_ELEMENT_ID>{ map }</div>
        <LocationList
          items=items.into()
          settled
          open=list_open.into()
          on_toggle=on_toggle_visited
          on_show_on_map
        />
      </main>
    }
}
