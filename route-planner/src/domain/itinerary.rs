//! Itinerary types.
//!
//! An `Itinerary` is one candidate path through the network. During a
//! search each branch owns its own copy, so sibling branches never share
//! mutable state.

use std::fmt;
use std::sync::Arc;

use super::{Station, StationIndex};

/// A candidate or completed path through the network.
///
/// # Invariants
///
/// - No station appears twice in `stations`
/// - `success` is only set once the destination has been appended
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    stations: Vec<Arc<Station>>,
    distance: f64,
    changes: usize,
    narrative: Vec<String>,
    success: bool,
}

impl Itinerary {
    /// Creates an empty itinerary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces an independent copy for a new branch of the search.
    ///
    /// Later changes to the branch never affect `self` or any sibling.
    pub fn branch(&self) -> Self {
        self.clone()
    }

    /// Adds `miles` to the running distance.
    ///
    /// Missing, zero, negative and non-finite values are ignored.
    pub fn extend_distance(&mut self, miles: Option<f64>) {
        if let Some(miles) = miles
            && miles.is_finite()
            && miles > 0.0
        {
            self.distance += miles;
        }
    }

    /// Appends a station to the visited sequence.
    pub fn visit(&mut self, station: Arc<Station>) {
        debug_assert!(!self.has_visited(station.index()));
        self.stations.push(station);
    }

    /// Returns true if the station is already on this path.
    pub fn has_visited(&self, index: StationIndex) -> bool {
        self.stations.iter().any(|s| s.index() == index)
    }

    /// Starts the narrative with the first route taken.
    pub fn embark(&mut self, origin: &str, route: &str) {
        self.narrative = vec![format!("Embark at {origin} on {route}")];
    }

    /// Records a change of route at a station.
    pub fn change(&mut self, at: &str, route: &str) {
        self.narrative.push(format!("At {at} change to {route}"));
        self.changes += 1;
    }

    /// Marks the itinerary as having reached its destination.
    pub fn arrive(&mut self, destination: &str) {
        self.narrative.push(format!("Arrive at {destination}"));
        self.success = true;
    }

    /// Visited stations, origin first.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// Display names of the visited stations, origin first.
    pub fn station_names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name()).collect()
    }

    /// Total distance in miles.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of route changes.
    pub fn changes(&self) -> usize {
        self.changes
    }

    /// Whether the destination was reached.
    pub fn success(&self) -> bool {
        self.success
    }

    /// The embark/change/arrive lines.
    pub fn narrative_lines(&self) -> &[String] {
        &self.narrative
    }

    /// The narrative as newline-separated text.
    pub fn narrative(&self) -> String {
        self.narrative.join("\n")
    }

    /// Renders the fixed-format route summary.
    ///
    /// ```text
    /// Route Summary
    /// ==============
    /// Embark at A on Simpleton
    /// Arrive at E
    ///
    /// Total Distance: 100
    /// Changes: 0
    /// Passing Through: A, B, C, D, E
    /// ```
    pub fn describe(&self) -> String {
        format!(
            "Route Summary\n==============\n{}\n\nTotal Distance: {}\nChanges: {}\nPassing Through: {}",
            self.narrative(),
            self.distance,
            self.changes,
            self.station_names().join(", ")
        )
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
