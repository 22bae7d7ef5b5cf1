//! Depth-first route search.
//!
//! Enumerates every simple path between two stations. Each branch of the
//! search carries its own copy of the itinerary built so far, so no state
//! is shared between siblings and nothing has to be undone on the way back.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{Itinerary, Station, StationKey};
use crate::network::Network;

use super::config::PlannerConfig;
use super::rank::rank_itineraries;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The origin is not on the network
    #[error("origin station not found: {0}")]
    OriginNotFound(String),

    /// The destination is not on the network
    #[error("destination station not found: {0}")]
    DestinationNotFound(String),

    /// Neither endpoint is on the network
    #[error("origin and destination stations not found: {origin}, {destination}")]
    NeitherFound { origin: String, destination: String },

    /// Invalid plan request
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),

    /// The search task did not run to completion
    #[error("route search failed: {0}")]
    SearchFailed(String),
}

/// Request for route planning.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Origin station name, in any letter case.
    pub origin: String,

    /// Destination station name, in any letter case.
    pub destination: String,

    /// How many itineraries to return. `None` uses the configured default.
    pub max_results: Option<usize>,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        max_results: Option<usize>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            max_results,
        }
    }

    /// Validate the request and normalise both station names.
    pub fn keys(&self) -> Result<(StationKey, StationKey), PlanError> {
        let origin = StationKey::normalize(&self.origin)
            .map_err(|e| PlanError::InvalidRequest(format!("origin: {e}")))?;
        let destination = StationKey::normalize(&self.destination)
            .map_err(|e| PlanError::InvalidRequest(format!("destination: {e}")))?;

        Ok((origin, destination))
    }
}

/// Result of route planning.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// Found itineraries, ranked best-first.
    pub itineraries: Vec<Itinerary>,

    /// Number of distinct paths found before truncation.
    pub paths_found: usize,
}

impl PlanResult {
    /// Keep the best `max_results` of a ranked list.
    pub fn from_ranked(ranked: &[Itinerary], max_results: usize) -> Self {
        Self {
            itineraries: ranked.iter().take(max_results).cloned().collect(),
            paths_found: ranked.len(),
        }
    }
}

/// A pending step of the search: a station to enter, with the itinerary
/// that reaches it and the route it was reached on.
struct Frame {
    station: Arc<Station>,
    itinerary: Itinerary,
    arrived_on: Option<String>,
}

/// Find every simple path from `origin` to `destination`.
///
/// Results are in discovery order and unranked. Both stations must belong
/// to `network`. If they are the same station the result is a single
/// itinerary holding just that station.
///
/// The search keeps its own stack rather than recursing, and pushes the
/// branches of each station in reverse so they are explored in link
/// order.
pub fn find_all_paths(
    network: &Network,
    origin: &Arc<Station>,
    destination: &Arc<Station>,
) -> Vec<Itinerary> {
    let mut found = Vec::new();
    let mut explored = 0usize;

    let mut stack = vec![Frame {
        station: Arc::clone(origin),
        itinerary: Itinerary::new(),
        arrived_on: None,
    }];

    while let Some(Frame {
        station,
        mut itinerary,
        arrived_on,
    }) = stack.pop()
    {
        explored += 1;
        itinerary.visit(Arc::clone(&station));

        if station.index() == destination.index() {
            itinerary.arrive(station.name());
            trace!(
                changes = itinerary.changes(),
                distance = itinerary.distance(),
                stops = itinerary.stations().len(),
                "found path"
            );
            found.push(itinerary);
            continue;
        }

        let mut branches = Vec::new();

        for link in station.links() {
            // The only cycle guard: never re-enter a station on this branch
            if itinerary.has_visited(link.to) {
                continue;
            }
            let Some(next) = network.station(link.to) else {
                continue;
            };

            let mut branch = itinerary.branch();
            match arrived_on.as_deref() {
                None => branch.embark(station.name(), &link.route),
                Some(route) if route != link.route => branch.change(station.name(), &link.route),
                Some(_) => {}
            }
            branch.extend_distance(link.distance);

            branches.push(Frame {
                station: Arc::clone(next),
                itinerary: branch,
                arrived_on: Some(link.route.clone()),
            });
        }

        stack.extend(branches.into_iter().rev());
    }

    debug!(
        origin = %origin.name(),
        destination = %destination.name(),
        paths = found.len(),
        explored,
        "route search complete"
    );

    found
}

/// Route planner over a built network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Plan routes for a request.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        let (origin, destination) = request.keys()?;
        let max_results = self.config.result_cap(request.max_results);

        let ranked = ranked_routes(self.network, &origin, &destination)?;
        Ok(PlanResult::from_ranked(&ranked, max_results))
    }
}

/// Look up both endpoints, reporting whichever are missing.
pub(crate) fn resolve_endpoints<'n>(
    network: &'n Network,
    origin: &StationKey,
    destination: &StationKey,
) -> Result<(&'n Arc<Station>, &'n Arc<Station>), PlanError> {
    match (network.get(origin), network.get(destination)) {
        (Some(o), Some(d)) => Ok((o, d)),
        (None, Some(_)) => Err(PlanError::OriginNotFound(origin.to_string())),
        (Some(_), None) => Err(PlanError::DestinationNotFound(destination.to_string())),
        (None, None) => Err(PlanError::NeitherFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }),
    }
}

/// Every path between two stations, ranked best-first.
pub fn ranked_routes(
    network: &Network,
    origin: &StationKey,
    destination: &StationKey,
) -> Result<Vec<Itinerary>, PlanError> {
    let (origin, destination) = resolve_endpoints(network, origin, destination)?;
    Ok(rank_itineraries(find_all_paths(network, origin, destination)))
}

/// The best `max_results` routes between two stations.
///
/// Keys must already be normalised. An absent endpoint is an error; no
/// path between present endpoints is an empty list.
pub fn best_routes(
    network: &Network,
    origin: &StationKey,
    destination: &StationKey,
    max_results: usize,
) -> Result<Vec<Itinerary>, PlanError> {
    let mut routes = ranked_routes(network, origin, destination)?;
    routes.truncate(max_results);
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlanError::OriginNotFound("bath".into());
        assert_eq!(err.to_string(), "origin station not found: bath");

        let err = PlanError::DestinationNotFound("york".into());
        assert_eq!(err.to_string(), "destination station not found: york");

        let err = PlanError::NeitherFound {
            origin: "bath".into(),
            destination: "york".into(),
        };
        assert_eq!(
            err.to_string(),
            "origin and destination stations not found: bath, york"
        );
    }

    #[test]
    fn request_keys_normalise() {
        let request = PlanRequest::new(" Reading", "SWINDON", None);
        let (origin, destination) = request.keys().unwrap();
        assert_eq!(origin.as_str(), "reading");
        assert_eq!(destination.as_str(), "swindon");
    }

    #[test]
    fn request_rejects_blank_names() {
        let request = PlanRequest::new("", "Swindon", None);
        assert!(matches!(
            request.keys(),
            Err(PlanError::InvalidRequest(msg)) if msg.starts_with("origin")
        ));

        let request = PlanRequest::new("Reading", "  ", None);
        assert!(matches!(
            request.keys(),
            Err(PlanError::InvalidRequest(msg)) if msg.starts_with("destination")
        ));
    }

    #[test]
    fn empty_ranking() {
        let result = PlanResult::from_ranked(&[], 5);
        assert!(result.itineraries.is_empty());
        assert_eq!(result.paths_found, 0);
    }

    #[test]
    fn from_ranked_keeps_the_best() {
        let ranked: Vec<Itinerary> = (1..=3)
            .map(|miles| {
                let mut it = Itinerary::new();
                it.extend_distance(Some(f64::from(miles)));
                it
            })
            .collect();

        let result = PlanResult::from_ranked(&ranked, 2);
        assert_eq!(result.paths_found, 3);
        let miles: Vec<f64> = result.itineraries.iter().map(|i| i.distance()).collect();
        assert_eq!(miles, vec![1.0, 2.0]);
    }
}
