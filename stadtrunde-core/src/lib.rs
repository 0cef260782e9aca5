//! # stadtrunde-core
//!
//! Coordination of the tour: resolving catalog addresses into
//! positions, persisting visited flags and preferences, ranking
//! locations by distance and deriving what the list and the map show.

pub mod catalog;
pub mod gateways;
pub mod storage;
pub mod tour;
pub mod usecases;

pub mod entities {
    pub use stadtrunde_entities::{geo::*, location::*};
}
