//! Domain types for the route planner.
//!
//! This module contains the core model of a rail network graph: stations,
//! the links between them, and the itineraries built while searching.
//! Types enforce their invariants at construction time.

mod itinerary;
mod station;

pub use itinerary::Itinerary;
pub use station::{InvalidStationKey, Link, Station, StationIndex, StationKey};
