//! Railway route planner.
//!
//! Loads a railway network from JSON and answers: "what are the best ways
//! to travel between these two stations?" Routes are ranked by the number
//! of changes, then by distance.

pub mod cache;
pub mod cli;
pub mod domain;
pub mod network;
pub mod planner;
pub mod report;
pub mod web;
