//! Railway data and the station graph built from it.

mod data;
mod error;
mod graph;

#[cfg(test)]
pub(crate) mod fixtures;

pub use data::{DirectRoute, RailwayData, Route, Stop};
pub use error::NetworkError;
pub use graph::Network;
