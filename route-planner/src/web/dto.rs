//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Itinerary;
use crate::network::Route;
use crate::planner::PlanRequest;

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin station name, in any letter case
    pub origin: String,

    /// Destination station name, in any letter case
    pub destination: String,

    /// How many itineraries to return (defaults to the configured value)
    pub max_results: Option<i64>,
}

impl PlanJourneyRequest {
    /// Convert into a planner request. Negative caps become zero.
    pub fn to_plan_request(&self) -> PlanRequest {
        let max_results = self
            .max_results
            .map(|n| usize::try_from(n.max(0)).unwrap_or(usize::MAX));
        PlanRequest::new(&self.origin, &self.destination, max_results)
    }
}

/// One way of making the journey.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Whether the itinerary reaches the destination
    pub success: bool,

    /// Station names from origin to destination
    pub stations: Vec<String>,

    /// Total distance in miles
    pub distance: f64,

    /// Number of route changes
    pub changes: usize,

    /// Step-by-step directions
    pub narrative: Vec<String>,

    /// Printable summary block
    pub summary: String,
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    /// Found itineraries, best first
    pub itineraries: Vec<ItineraryResult>,

    /// Number of paths found before truncation
    pub paths_found: usize,
}

/// Every station on the network.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Name of the loaded network
    pub network_name: String,

    /// Display names, sorted
    pub stations: Vec<String>,
}

/// A route in the network listing.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Route name
    pub name: String,

    /// Display colour
    pub color: String,

    /// Station the route starts from
    pub first_station: Option<String>,

    /// Station the route ends at
    pub last_station: Option<String>,

    /// Number of stops
    pub stops: usize,

    /// Length in miles
    pub distance: f64,
}

/// Response listing routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Name of the loaded network
    pub network_name: String,

    /// Routes in file order
    pub routes: Vec<RouteResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            success: itinerary.success(),
            stations: itinerary
                .station_names()
                .into_iter()
                .map(String::from)
                .collect(),
            distance: itinerary.distance(),
            changes: itinerary.changes(),
            narrative: itinerary.narrative_lines().to_vec(),
            summary: itinerary.describe(),
        }
    }
}

impl RouteResult {
    /// Create from a data model Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            color: route.color.clone(),
            first_station: route.first_station().map(String::from),
            last_station: route.last_station().map(String::from),
            stops: route.stops.len(),
            distance: route.distance(),
        }
    }
}
