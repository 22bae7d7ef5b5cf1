//! Console rendering of planned routes.

use crate::domain::Itinerary;
use crate::planner::PlanError;

/// Render a numbered list of itineraries.
///
/// ```text
///
/// Routes found: 1
/// 1:
/// Route Summary
/// ...
/// ```
pub fn routes_found(itineraries: &[Itinerary]) -> String {
    let mut out = format!("\nRoutes found: {}\n", itineraries.len());

    for (i, itinerary) in itineraries.iter().enumerate() {
        out.push_str(&format!("{}:\n{}\n\n", i + 1, itinerary.describe()));
    }

    out
}

/// Explain a planning failure to someone at a terminal.
pub fn plan_failure(err: &PlanError) -> String {
    let hint = match err {
        PlanError::OriginNotFound(_) => "Please check the spelling of the origin station",
        PlanError::DestinationNotFound(_) => {
            "Please check the spelling of the destination station"
        }
        PlanError::NeitherFound { .. } => {
            "Please check the spelling of the origin and destination station"
        }
        PlanError::InvalidRequest(_) | PlanError::SearchFailed(_) => {
            return format!("\nERROR! \t{err}\n");
        }
    };

    format!("\nOne or more stations cannot be found on this network\n{hint}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationKey;
    use crate::network::fixtures::simpleton;
    use crate::planner::best_routes;

    fn key(s: &str) -> StationKey {
        StationKey::normalize(s).unwrap()
    }

    #[test]
    fn no_routes() {
        assert_eq!(routes_found(&[]), "\nRoutes found: 0\n");
    }

    #[test]
    fn numbered_routes() {
        let network = simpleton();
        let routes = best_routes(&network, &key("alphaville"), &key("betaford"), 3).unwrap();

        assert_eq!(
            routes_found(&routes),
            "\nRoutes found: 1\n\
             1:\n\
             Route Summary\n==============\n\
             Embark at Alphaville on Simpleton\n\
             Arrive at Betaford\n\n\
             Total Distance: 25\n\
             Changes: 0\n\
             Passing Through: Alphaville, Betaford\n\n"
        );
    }

    #[test]
    fn failure_hints() {
        let msg = plan_failure(&PlanError::OriginNotFound("bath".into()));
        assert!(msg.contains("cannot be found on this network"));
        assert!(msg.contains("origin station"));

        let msg = plan_failure(&PlanError::DestinationNotFound("york".into()));
        assert!(msg.contains("destination station"));

        let msg = plan_failure(&PlanError::NeitherFound {
            origin: "bath".into(),
            destination: "york".into(),
        });
        assert!(msg.contains("origin and destination station"));

        let msg = plan_failure(&PlanError::InvalidRequest("origin: blank".into()));
        assert!(msg.contains("origin: blank"));

        let msg = plan_failure(&PlanError::SearchFailed("task panicked".into()));
        assert_eq!(msg, "\nERROR! \troute search failed: task panicked\n");
    }
}
