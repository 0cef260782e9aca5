use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("stadtrunde.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub storage: Option<Storage>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub file: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Config::default().storage.expect("Storage configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub request_interval: Option<Duration>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.storage.is_some());
        let geocoding = cfg.geocoding.unwrap();
        assert!(matches!(
            geocoding.gateway,
            Some(GeocodingGateway::Nominatim)
        ));
        assert_eq!(geocoding.request_interval, Some(Duration::from_secs(1)));
        assert!(cfg.gateway.unwrap().nominatim.is_some());
    }

    #[test]
    fn parse_human_readable_interval() {
        let cfg: Config = toml::from_str(
            r#"
            [geocoding]
            request-interval = "1500ms"
            "#,
        )
        .unwrap();
        let geocoding = cfg.geocoding.unwrap();
        assert!(geocoding.gateway.is_none());
        assert_eq!(
            geocoding.request_interval,
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn reject_unknown_gateway() {
        let cfg = toml::from_str::<Config>(
            r#"
            [geocoding]
            gateway = "opencage"
            "#,
        );
        assert!(cfg.is_err());
    }
}
