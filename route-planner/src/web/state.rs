//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedPlanner;
use crate::network::RailwayData;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Everything in here is read-only once the server starts, so handlers
/// share it freely across requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached route planner over the loaded network
    pub planner: Arc<CachedPlanner>,

    /// The raw route data the network was built from
    pub data: Arc<RailwayData>,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: CachedPlanner, data: RailwayData, config: PlannerConfig) -> Self {
        Self {
            planner: Arc::new(planner),
            data: Arc::new(data),
            config: Arc::new(config),
        }
    }
}
