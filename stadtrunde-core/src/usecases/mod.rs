mod error;
mod preferences;
mod present;
mod rank_locations;
mod resolve_coordinates;
mod visited;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, preferences::*, present::*, rank_locations::*, resolve_coordinates::*,
    visited::*,
};

pub type Result<T> = std::result::Result<T, Error>;

mod prelude {
    pub use super::{error::Error, Result};
    pub use crate::{
        entities::*,
        storage::{self, keys, KeyValueStorage},
    };
}
