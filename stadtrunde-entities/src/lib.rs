#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # stadtrunde-entities
//!
//! Reusable, agnostic domain entities for Stadtrunde.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod location;
