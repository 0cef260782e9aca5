use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    entities::*,
    gateways::{delay::Delay, geocode},
    storage::{self, KeyValueStorage},
};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn set_raw(&self, key: &str, json: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), json.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get<T>(&self, key: &str) -> storage::Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.values
            .borrow()
            .get(key)
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(|err| storage::Error::InvalidValue(err.to_string()))
    }

    fn set<T>(&self, key: &str, value: &T) -> storage::Result<()>
    where
        T: Serialize,
    {
        if self.read_only {
            return Err(anyhow::anyhow!("read-only storage").into());
        }
        let json = serde_json::to_string(value)
            .map_err(|err| storage::Error::InvalidValue(err.to_string()))?;
        self.set_raw(key, &json);
        Ok(())
    }

    fn delete(&self, key: &str) -> storage::Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Request(String),
    Sleep(Duration),
}

/// Records requests and delays in the order they happen.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Request(address) => Some(address),
                Event::Sleep(_) => None,
            })
            .collect()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Sleep(d) => Some(d),
                Event::Request(_) => None,
            })
            .collect()
    }
}

/// Answers with prepared positions.
///
/// Unknown addresses resolve to no candidate.
#[derive(Debug)]
pub struct ScriptedGeocoder {
    log: EventLog,
    positions: HashMap<String, MapPoint>,
    failing: Vec<String>,
}

impl ScriptedGeocoder {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            positions: HashMap::new(),
            failing: vec![],
        }
    }

    pub fn resolve(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.positions
            .insert(address.to_string(), MapPoint::from_lat_lng_deg(lat, lng));
        self
    }

    pub fn fail(mut self, address: &str) -> Self {
        self.failing.push(address.to_string());
        self
    }
}

#[async_trait(?Send)]
impl geocode::GeoCodingGateway for ScriptedGeocoder {
    async fn resolve_address_lat_lng(
        &self,
        address: &str,
    ) -> Result<Option<MapPoint>, geocode::Error> {
        self.log.push(Event::Request(address.to_string()));
        if self.failing.iter().any(|a| a == address) {
            return Err(geocode::Error::Request("connection refused".into()));
        }
        Ok(self.positions.get(address).copied())
    }
}

/// Returns immediately but remembers how long it should have waited.
#[derive(Debug)]
pub struct RecordingDelay {
    log: EventLog,
}

impl RecordingDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

#[async_trait(?Send)]
impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.log.push(Event::Sleep(duration));
    }
}

pub fn frankfurt_center() -> MapPoint {
    MapPoint::from_lat_lng_deg(50.1109, 8.6821)
}

pub fn entry(address: &str) -> CatalogEntry {
    CatalogEntry {
        address: address.to_string(),
        note: None,
        class_label: "5c".into(),
        contact_name: "Test".into(),
    }
}

pub fn location_at(address: &str, lat: f64, lng: f64) -> Location {
    Location {
        geocoding: Geocoding::Resolved(MapPoint::from_lat_lng_deg(lat, lng)),
        ..Location::from(entry(address))
    }
}
