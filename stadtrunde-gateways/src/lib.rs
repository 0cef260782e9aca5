//! Adapters that connect the core to the outside world
//! when running natively.

pub mod delay;
pub mod json_file;
pub mod nominatim;
