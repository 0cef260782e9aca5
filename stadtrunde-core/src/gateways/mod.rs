pub mod delay;
pub mod geocode;
pub mod nominatim;
