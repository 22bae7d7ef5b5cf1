//! Itinerary ranking for search results.

use std::cmp::Ordering;

use crate::domain::Itinerary;

/// Compare two itineraries by preference.
///
/// Itineraries are ordered by:
/// 1. Number of changes (fewer is better)
/// 2. Total distance (shorter is better)
pub fn compare_itineraries(a: &Itinerary, b: &Itinerary) -> Ordering {
    a.changes()
        .cmp(&b.changes())
        .then_with(|| a.distance().total_cmp(&b.distance()))
}

/// Rank itineraries by preference.
///
/// Returns itineraries sorted best-first. The sort is stable, so
/// itineraries that tie on both keys keep the order they were found in.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by(compare_itineraries);
    itineraries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_itinerary(changes: usize, miles: f64) -> Itinerary {
        let mut it = Itinerary::new();
        it.embark("Origin", "Line 0");
        for i in 0..changes {
            it.change("Somewhere", &format!("Line {}", i + 1));
        }
        it.extend_distance(Some(miles));
        it.arrive("Destination");
        it
    }

    fn keys(itineraries: &[Itinerary]) -> Vec<(usize, f64)> {
        itineraries
            .iter()
            .map(|i| (i.changes(), i.distance()))
            .collect()
    }

    #[test]
    fn fewer_changes_first() {
        let ranked = rank_itineraries(vec![make_itinerary(2, 10.0), make_itinerary(0, 90.0)]);

        assert_eq!(keys(&ranked), vec![(0, 90.0), (2, 10.0)]);
    }

    #[test]
    fn shorter_distance_breaks_ties() {
        let ranked = rank_itineraries(vec![
            make_itinerary(1, 40.0),
            make_itinerary(1, 25.0),
            make_itinerary(1, 30.0),
        ]);

        assert_eq!(keys(&ranked), vec![(1, 25.0), (1, 30.0), (1, 40.0)]);
    }

    #[test]
    fn ties_keep_discovery_order() {
        let mut first = Itinerary::new();
        first.embark("Origin", "First");
        first.extend_distance(Some(10.0));
        let mut second = Itinerary::new();
        second.embark("Origin", "Second");
        second.extend_distance(Some(10.0));

        let ranked = rank_itineraries(vec![first, second]);
        assert_eq!(ranked[0].narrative(), "Embark at Origin on First");
        assert_eq!(ranked[1].narrative(), "Embark at Origin on Second");
    }

    #[test]
    fn compare_is_consistent() {
        let a = make_itinerary(0, 50.0);
        let b = make_itinerary(1, 5.0);

        assert_eq!(compare_itineraries(&a, &b), Ordering::Less);
        assert_eq!(compare_itineraries(&b, &a), Ordering::Greater);
        assert_eq!(compare_itineraries(&a, &a), Ordering::Equal);
    }

    #[test]
    fn empty_input() {
        assert!(rank_itineraries(Vec::new()).is_empty());
    }
}
