use js_sys::{Function, Promise, Reflect};
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::GeolocationPosition;

use stadtrunde_core::entities::MapPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    /// The browser has no geolocation API.
    Unsupported,
    /// Denied by the user or no fix available.
    Unavailable(String),
}

fn js_error_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|msg| msg.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown JS error".to_string())
}

/// Requests a single position fix.
pub async fn current_position() -> Result<MapPoint, GeolocationError> {
    let navigator = window().navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(GeolocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    let position: GeolocationPosition = JsFuture::from(promise)
        .await
        .map_err(|err| GeolocationError::Unavailable(js_error_message(&err)))?
        .unchecked_into();
    let coords = position.coords();
    MapPoint::try_from_lat_lng_deg(coords.latitude(), coords.longitude()).ok_or_else(|| {
        GeolocationError::Unavailable(format!(
            "Invalid position {},{}",
            coords.latitude(),
            coords.longitude()
        ))
    })
}
