use crate::config;
use anyhow::Result;
use async_trait::async_trait;
use stadtrunde_core::{
    entities::MapPoint,
    gateways::geocode::{Error, GeoCodingGateway},
};
use stadtrunde_gateways::nominatim::Nominatim;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<GeoCodingGw> {
    let gw = match &cfg.gateway {
        Some(config::GeocodingGateway::Nominatim {
            base_url,
            user_agent,
        }) => {
            log::info!("Use Nominatim gateway ({base_url})");
            GeoCodingGw::new(Nominatim::try_new(base_url.as_str(), user_agent)?)
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            GeoCodingGw::new(DummyGeoCodingGw)
        }
    };
    Ok(gw)
}

struct DummyGeoCodingGw;

#[async_trait(?Send)]
impl GeoCodingGateway for DummyGeoCodingGw {
    async fn resolve_address_lat_lng(&self, _address: &str) -> Result<Option<MapPoint>, Error> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        Ok(None)
    }
}

pub struct GeoCodingGw(Box<dyn GeoCodingGateway + 'static>);

impl GeoCodingGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + 'static,
    {
        Self(Box::new(gw))
    }
}

#[async_trait(?Send)]
impl GeoCodingGateway for GeoCodingGw {
    async fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, Error> {
        self.0.resolve_address_lat_lng(address).await
    }
}
