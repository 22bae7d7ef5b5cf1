//! Station and link types.

use std::fmt;

/// Error returned when a station name cannot be turned into a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationKey {
    reason: &'static str,
}

/// A case-normalised station lookup key.
///
/// Station names are matched case-insensitively, so "Reading", "READING"
/// and " reading " all refer to the same station. This type guarantees
/// that any `StationKey` value is already in normalised form.
///
/// # Examples
///
/// ```
/// use route_planner::domain::StationKey;
///
/// let key = StationKey::normalize("Reading").unwrap();
/// assert_eq!(key.as_str(), "reading");
///
/// // Surrounding whitespace is ignored
/// assert_eq!(StationKey::normalize("  READING ").unwrap(), key);
///
/// // Blank names are rejected
/// assert!(StationKey::normalize("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationKey(String);

impl StationKey {
    /// Normalise a station name into a lookup key.
    ///
    /// This is a pure function: the same name always yields the same key.
    pub fn normalize(name: &str) -> Result<Self, InvalidStationKey> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationKey {
                reason: "must not be blank",
            });
        }

        Ok(StationKey(trimmed.to_lowercase()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a station in its network's station table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIndex(pub usize);

/// A directional, route-tagged connection to a neighbouring station.
///
/// Every adjacent pair of stops on a route produces two links, one in
/// each direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Name of the route this link belongs to.
    pub route: String,
    /// Distance in miles, if the source data gave a usable value.
    pub distance: Option<f64>,
    /// The station this link leads to.
    pub to: StationIndex,
}

impl Link {
    /// Creates a new link.
    pub fn new(route: impl Into<String>, to: StationIndex, distance: Option<f64>) -> Self {
        Self {
            route: route.into(),
            distance,
            to,
        }
    }
}

/// A named node in the network.
///
/// Interchange stations served by several routes are a single `Station`
/// holding links from all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    index: StationIndex,
    id: u32,
    name: String,
    key: StationKey,
    links: Vec<Link>,
}

impl Station {
    /// Creates a station with no links.
    pub fn new(index: StationIndex, id: u32, name: impl Into<String>, key: StationKey) -> Self {
        Self {
            index,
            id,
            name: name.into(),
            key,
            links: Vec::new(),
        }
    }

    /// Adds an outgoing link.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Position of this station in its network.
    pub fn index(&self) -> StationIndex {
        self.index
    }

    /// Station id from the source data.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalised lookup key.
    pub fn key(&self) -> &StationKey {
        &self.key
    }

    /// Outgoing links, in the order they were added.
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalising is idempotent
        #[test]
        fn normalize_idempotent(s in "[A-Za-z ]{1,20}".prop_filter("not blank", |s| !s.trim().is_empty())) {
            let once = StationKey::normalize(&s).unwrap();
            let twice = StationKey::normalize(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Case never affects the key
        #[test]
        fn case_insensitive(s in "[A-Za-z]{1,20}") {
            let lower = StationKey::normalize(&s.to_lowercase()).unwrap();
            let upper = StationKey::normalize(&s.to_uppercase()).unwrap();
            prop_assert_eq!(lower, upper);
        }
    }
}
