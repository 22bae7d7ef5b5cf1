//! Station graph built from railway routes.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::data::{RailwayData, Route};
use crate::domain::{Link, Station, StationIndex, StationKey};

/// The station graph of a railway network.
///
/// Every station named by any route appears exactly once. A station served
/// by several routes collects links from all of them. The graph is
/// read-only once built, so it can be shared between threads and searched
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Arc<Station>>,
    by_key: HashMap<StationKey, StationIndex>,
}

impl Network {
    /// Build the graph from routes.
    ///
    /// Each adjacent pair of stops produces two links: previous to current
    /// using the previous stop's distance-to-next, and current to previous
    /// using the current stop's distance-to-previous. The two are assumed,
    /// not checked, to agree. Stops with blank names are skipped and break
    /// the chain of links at that point.
    pub fn build(routes: &[Route]) -> Self {
        let mut stations: Vec<Station> = Vec::new();
        let mut by_key: HashMap<StationKey, StationIndex> = HashMap::new();

        for route in routes {
            // (station, its distance-to-next) for the stop before this one
            let mut previous: Option<(StationIndex, Option<f64>)> = None;

            for stop in &route.stops {
                let key = match StationKey::normalize(&stop.station_name) {
                    Ok(key) => key,
                    Err(e) => {
                        warn!(route = %route.name, stop = stop.stop, "skipping stop: {e}");
                        previous = None;
                        continue;
                    }
                };

                // First occurrence of a name fixes the station's identity
                let current = match by_key.get(&key) {
                    Some(&idx) => idx,
                    None => {
                        let idx = StationIndex(stations.len());
                        stations.push(Station::new(
                            idx,
                            stop.station_id,
                            stop.station_name.trim(),
                            key.clone(),
                        ));
                        by_key.insert(key, idx);
                        idx
                    }
                };

                if let Some((prev, prev_to_next)) = previous {
                    stations[prev.0].add_link(Link::new(&route.name, current, prev_to_next));
                    stations[current.0].add_link(Link::new(
                        &route.name,
                        prev,
                        stop.distance_to_prev,
                    ));
                }

                previous = Some((current, stop.distance_to_next));
            }
        }

        let network = Self {
            stations: stations.into_iter().map(Arc::new).collect(),
            by_key,
        };

        debug!(
            routes = routes.len(),
            stations = network.len(),
            links = network.link_count(),
            "built network graph"
        );

        network
    }

    /// Build the graph from a railway document.
    pub fn from_data(data: &RailwayData) -> Self {
        Self::build(&data.routes)
    }

    /// Look up a station by normalised key.
    pub fn get(&self, key: &StationKey) -> Option<&Arc<Station>> {
        self.by_key.get(key).and_then(|idx| self.station(*idx))
    }

    /// Look up a station by name, in any letter case.
    pub fn lookup(&self, name: &str) -> Option<&Arc<Station>> {
        let key = StationKey::normalize(name).ok()?;
        self.get(&key)
    }

    /// Returns true if the key names a station in this network.
    pub fn contains(&self, key: &StationKey) -> bool {
        self.by_key.contains_key(key)
    }

    /// Get a station by index.
    pub fn station(&self, index: StationIndex) -> Option<&Arc<Station>> {
        self.stations.get(index.0)
    }

    /// All stations, in order of first appearance.
    pub fn stations(&self) -> impl Iterator<Item = &Arc<Station>> {
        self.stations.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Total number of directional links.
    pub fn link_count(&self) -> usize {
        self.stations.iter().map(|s| s.links().len()).sum()
    }
}
