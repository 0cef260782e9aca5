use anyhow::{anyhow, Result};
use stadtrunde_core::{gateways::nominatim, usecases::MIN_GEOCODING_INTERVAL};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "stadtrunde.toml";

const ENV_NAME_STORAGE_FILE: &str = "STADTRUNDE_STORAGE_FILE";

pub struct Config {
    pub storage: Storage,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(file) = env::var(ENV_NAME_STORAGE_FILE) {
            cfg.storage.file = file.into();
        }
        Ok(cfg)
    }
}

pub struct Storage {
    /// JSON file that holds all persisted values.
    pub file: PathBuf,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub request_interval: Duration,
}

pub enum GeocodingGateway {
    Nominatim { base_url: String, user_agent: String },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            storage,
            geocoding,
            gateway,
        } = from;

        let raw::Storage { file } = storage.unwrap_or_default();
        let storage = Storage { file };

        let (gateway_name, request_interval) = geocoding
            .map(|g| (g.gateway, g.request_interval))
            .unwrap_or_default();

        let geo_gateway = match gateway_name {
            Some(gw_name) => {
                let gateway = gateway.ok_or_else(|| anyhow!("Missing gateway configuration"))?;
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                        } = gateway.nominatim.ok_or_else(|| {
                            anyhow!("Missing 'nominatim' gateway configuration")
                        })?;
                        if user_agent.trim().is_empty() {
                            return Err(anyhow!("Nominatim requires a user agent"));
                        }
                        let base_url =
                            base_url.unwrap_or_else(|| nominatim::DEFAULT_BASE_URL.to_string());
                        GeocodingGateway::Nominatim {
                            base_url,
                            user_agent,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let request_interval = match request_interval {
            Some(interval) if interval < MIN_GEOCODING_INTERVAL => {
                log::warn!(
                    "Geocoding request interval of {interval:?} is too short: use {MIN_GEOCODING_INTERVAL:?}"
                );
                MIN_GEOCODING_INTERVAL
            }
            Some(interval) => interval,
            None => MIN_GEOCODING_INTERVAL,
        };

        let geocoding = Geocoding {
            gateway: geo_gateway,
            request_interval,
        };

        Ok(Self { storage, geocoding })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        Config::try_from(toml::from_str::<raw::Config>(toml)?)
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.storage.file, Path::new("stadtrunde.json"));
        assert_eq!(cfg.geocoding.request_interval, Duration::from_secs(1));
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::Nominatim { .. })
        ));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let cfg = Config::try_load_from_file_or_default(Some("does-not-exist.toml")).unwrap();
        assert!(cfg.geocoding.gateway.is_some());
    }

    #[test]
    fn clamp_short_request_interval() {
        let cfg = parse(
            r#"
            [geocoding]
            request-interval = "200ms"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.geocoding.request_interval, MIN_GEOCODING_INTERVAL);
        assert!(cfg.geocoding.gateway.is_none());

        let cfg = parse(
            r#"
            [geocoding]
            request-interval = "3s"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.geocoding.request_interval, Duration::from_secs(3));
    }

    #[test]
    fn nominatim_without_gateway_section() {
        let err = parse(
            r#"
            [geocoding]
            gateway = "nominatim"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn nominatim_with_default_base_url() {
        let cfg = parse(
            r#"
            [geocoding]
            gateway = "nominatim"

            [gateway.nominatim]
            user-agent = "test/1.0"
            "#,
        )
        .unwrap();
        let Some(GeocodingGateway::Nominatim {
            base_url,
            user_agent,
        }) = cfg.geocoding.gateway
        else {
            panic!("Nominatim gateway expected");
        };
        assert_eq!(base_url, nominatim::DEFAULT_BASE_URL);
        assert_eq!(user_agent, "test/1.0");
    }
}
