//! Configuration for the route planner.

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of itineraries returned when a request does not say.
    pub default_max_results: usize,

    /// Upper bound on the number of itineraries any request may ask for.
    pub max_results_limit: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_max_results: usize, max_results_limit: usize) -> Self {
        Self {
            default_max_results,
            max_results_limit,
        }
    }

    /// Resolve the result cap for a request.
    ///
    /// Falls back to the default when unset and never exceeds the limit.
    pub fn result_cap(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_max_results)
            .min(self.max_results_limit)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_max_results: 10,
            max_results_limit: 50,
        }
    }
}
