//! Railway data documents.
//!
//! These types map directly to the railway JSON format: a named network
//! holding routes, each an ordered list of stops. Distances are read
//! leniently because the source files are hand-edited and sometimes carry
//! blanks or strings where a number belongs.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::error::NetworkError;
use crate::domain::StationKey;

/// A complete railway network document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailwayData {
    /// Human-readable name of the network.
    #[serde(default)]
    pub network_name: String,

    /// Routes in file order.
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One named line or service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Route {
    /// Route name, e.g. "West Coast Main Line".
    pub name: String,

    /// Display colour. Not used for planning.
    #[serde(default)]
    pub color: String,

    /// Stops in travel order.
    #[serde(default)]
    pub stops: Vec<Stop>,
}

/// A stop on a route.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Position of the stop on its route.
    #[serde(default)]
    pub stop: u32,

    /// Station display name.
    pub station_name: String,

    /// Station id, shared by every route serving the station.
    #[serde(rename = "stationID", default)]
    pub station_id: u32,

    /// Miles to the next stop. `None` on the last stop.
    #[serde(default, deserialize_with = "lenient_distance")]
    pub distance_to_next: Option<f64>,

    /// Miles to the previous stop. `None` on the first stop.
    #[serde(default, deserialize_with = "lenient_distance")]
    pub distance_to_prev: Option<f64>,
}

/// Accept any JSON value, keeping only numbers.
fn lenient_distance<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

impl Stop {
    /// Creates a stop.
    pub fn new(
        stop: u32,
        station_name: impl Into<String>,
        station_id: u32,
        distance_to_next: Option<f64>,
        distance_to_prev: Option<f64>,
    ) -> Self {
        Self {
            stop,
            station_name: station_name.into(),
            station_id,
            distance_to_next,
            distance_to_prev,
        }
    }
}

impl Route {
    /// Creates a route.
    pub fn new(name: impl Into<String>, color: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            stops,
        }
    }

    /// Total length of the route in miles.
    ///
    /// Missing distances count as zero.
    pub fn distance(&self) -> f64 {
        self.stops
            .iter()
            .filter_map(|s| s.distance_to_next)
            .sum()
    }

    /// First station on the route.
    pub fn first_station(&self) -> Option<&str> {
        self.stops.first().map(|s| s.station_name.as_str())
    }

    /// Last station on the route.
    pub fn last_station(&self) -> Option<&str> {
        self.stops.last().map(|s| s.station_name.as_str())
    }

    /// Position of the first stop whose name normalises to `key`.
    fn position_of(&self, key: &StationKey) -> Option<usize> {
        self.stops.iter().position(|s| {
            StationKey::normalize(&s.station_name).is_ok_and(|k| &k == key)
        })
    }

    /// Lists every stop with its cumulative distance from the start.
    pub fn describe(&self) -> String {
        let mut out = format!("ROUTE: {} ({})\nSTATIONS:\n", self.name, self.color);
        let mut distance = 0.0;

        for stop in &self.stops {
            out.push_str(&format!(
                "{} {} {} miles\n",
                stop.stop, stop.station_name, distance
            ));
            distance += stop.distance_to_next.unwrap_or(0.0);
        }

        out.push_str(&format!("Total Route Distance: {distance} miles"));
        out
    }
}

/// A direct connection between two stations on a single route.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectRoute<'a> {
    /// The route serving both stations.
    pub route: &'a str,
    /// Whichever of the two stations comes first on the route.
    pub from: &'a str,
    /// Whichever of the two stations comes second on the route.
    pub to: &'a str,
    /// Number of stops travelled.
    pub stops: usize,
    /// Miles travelled.
    pub distance: f64,
}

impl fmt::Display for DirectRoute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found: {}: {} to {} {} stops and {} miles",
            self.route, self.from, self.to, self.stops, self.distance
        )
    }
}

impl RailwayData {
    /// Creates a document from routes.
    pub fn new(network_name: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            network_name: network_name.into(),
            routes,
        }
    }

    /// Load a railway document from a `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if !is_json {
            return Err(NetworkError::NotJson(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let data = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            network = %data.network_name,
            routes = data.routes.len(),
            "loaded railway data"
        );
        Ok(data)
    }

    /// Parse a railway document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find a route by exact name.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Route names in file order.
    pub fn route_names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.name.as_str()).collect()
    }

    /// Number of distinct stations, by station id.
    pub fn total_stations(&self) -> usize {
        self.routes
            .iter()
            .flat_map(|r| &r.stops)
            .map(|s| s.station_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Routes sorted by name.
    pub fn routes_sorted_by_name(&self, ascending: bool) -> Vec<&Route> {
        let mut routes: Vec<&Route> = self.routes.iter().collect();
        routes.sort_by(|a, b| {
            if ascending {
                a.name.cmp(&b.name)
            } else {
                b.name.cmp(&a.name)
            }
        });
        routes
    }

    /// Routes sorted by total distance.
    pub fn routes_sorted_by_length(&self, ascending: bool) -> Vec<&Route> {
        let mut routes: Vec<&Route> = self.routes.iter().collect();
        routes.sort_by(|a, b| {
            if ascending {
                a.distance().total_cmp(&b.distance())
            } else {
                b.distance().total_cmp(&a.distance())
            }
        });
        routes
    }

    /// The longest route. Ties go to the route listed first.
    pub fn longest_route(&self) -> Option<&Route> {
        self.routes_sorted_by_length(false).into_iter().next()
    }

    /// Find the first route that serves both stations.
    ///
    /// The two names may be given in either order.
    pub fn find_direct(&self, first: &str, last: &str) -> Option<DirectRoute<'_>> {
        let first = StationKey::normalize(first).ok()?;
        let last = StationKey::normalize(last).ok()?;

        self.routes.iter().find_map(|route| {
            let a = route.position_of(&first)?;
            let b = route.position_of(&last)?;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            let distance = route.stops[lo..hi]
                .iter()
                .filter_map(|s| s.distance_to_next)
                .sum();

            Some(DirectRoute {
                route: &route.name,
                from: &route.stops[lo].station_name,
                to: &route.stops[hi].station_name,
                stops: hi - lo,
                distance,
            })
        })
    }

    /// One line per route: name, end stations and length.
    pub fn summary(&self) -> String {
        let mut out = String::from("Routes Summary\n========================\n");

        for route in &self.routes {
            out.push_str(&format!(
                "{:<25}-    {:<15}to  {:<16}-   {} miles\n",
                route.name,
                route.first_station().unwrap_or(""),
                route.last_station().unwrap_or(""),
                route.distance()
            ));
        }

        out
    }
}
