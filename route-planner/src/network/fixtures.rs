//! Small networks shared by tests.

use super::data::{Route, Stop};
use super::graph::Network;

/// A single route with equal spacing between every stop.
pub(crate) fn line(name: &str, stations: &[&str], miles: f64) -> Route {
    let last = stations.len().saturating_sub(1);
    let stops = stations
        .iter()
        .enumerate()
        .map(|(i, station)| {
            Stop::new(
                i as u32 + 1,
                *station,
                i as u32 + 1,
                (i < last).then_some(miles),
                (i > 0).then_some(miles),
            )
        })
        .collect();
    Route::new(name, "black", stops)
}

/// Five stops, 25 miles apart, on one route.
pub(crate) fn simpleton() -> Network {
    Network::build(&[line(
        "Simpleton",
        &["Alphaville", "Betaford", "Gammaton", "Deltafield", "Epsilon"],
        25.0,
    )])
}

/// Two routes meeting at Hub, plus a long direct route.
///
/// ```text
/// Red:     A --10-- Hub --10-- B
/// Blue:    C --10-- Hub --10-- D
/// Express: A --------50------- D
/// ```
///
/// A to D is 20 miles with one change, or 50 miles with none.
pub(crate) fn interchange() -> Network {
    Network::build(&[
        line("Red", &["A", "Hub", "B"], 10.0),
        line("Blue", &["C", "Hub", "D"], 10.0),
        line("Express", &["A", "D"], 50.0),
    ])
}

/// Two lines that never meet.
pub(crate) fn disconnected() -> Network {
    Network::build(&[
        line("North", &["N1", "N2", "N3"], 3.0),
        line("South", &["S1", "S2"], 4.0),
    ])
}
