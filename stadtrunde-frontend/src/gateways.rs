use std::time::Duration;

use async_trait::async_trait;
use gloo_net::http::Request;

use stadtrunde_boundary::NominatimPlace;
use stadtrunde_core::{
    entities::MapPoint,
    gateways::{
        delay::Delay,
        geocode::{Error, GeoCodingGateway},
        nominatim::{first_candidate, search_url},
    },
};

/// Geocoding with a Nominatim server.
///
/// The browser sends its own user agent.
#[derive(Debug, Clone)]
pub struct Nominatim {
    base_url: String,
}

impl Nominatim {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url }
    }
}

#[async_trait(?Send)]
impl GeoCodingGateway for Nominatim {
    async fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, Error> {
        let url = search_url(&self.base_url, address);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| Error::Request(err.to_string()))?;
        if !response.ok() {
            return Err(Error::Response(format!(
                "Nominatim returned status {}",
                response.status()
            )));
        }
        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|err| Error::Response(err.to_string()))?;
        first_candidate(places)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
