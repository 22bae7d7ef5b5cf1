//! Route planner using exhaustive depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "What are the best ways to get from this station to that one?"
//!
//! Every simple path through the network is enumerated, then ranked by
//! number of route changes and total distance.

mod config;
mod rank;
mod search;


pub use config::PlannerConfig;
pub use rank::{compare_itineraries, rank_itineraries};
pub use search::{
    PlanError, PlanRequest, PlanResult, Planner, best_routes, find_all_paths, ranked_routes,
};
