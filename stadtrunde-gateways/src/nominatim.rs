use async_trait::async_trait;
use stadtrunde_boundary::NominatimPlace;
use stadtrunde_core::{
    entities::MapPoint,
    gateways::{
        geocode::{Error, GeoCodingGateway},
        nominatim::{first_candidate, search_url},
    },
};

/// Geocoding with a Nominatim server (OpenStreetMap).
///
/// The usage policy of the public server demands an identifying
/// user agent and at most one request per second. The spacing of
/// requests is left to the caller.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::Client,
    base_url: String,
}

impl Nominatim {
    pub fn try_new(base_url: impl Into<String>, user_agent: &str) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        let base_url = base_url.into();
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl GeoCodingGateway for Nominatim {
    async fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, Error> {
        let url = search_url(&self.base_url, address);
        log::debug!("Resolve '{address}'");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| Error::Request(err.to_string()))?;
        if !response.status().is_success() {
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
