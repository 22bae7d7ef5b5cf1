//! Caching layer for route searches.
//!
//! Searching enumerates every simple path, which grows quickly with the
//! size of the network. The network never changes once loaded, so the full
//! ranked result for an (origin, destination) pair can be kept and reused
//! by later requests whatever result cap they ask for.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Itinerary, StationKey};
use crate::network::Network;
use crate::planner::{PlanError, PlanRequest, PlanResult, PlannerConfig, ranked_routes};

/// Cache key for ranked routes: (origin, destination).
type PlanKey = (StationKey, StationKey);

/// Cached ranked routes, untruncated.
type PlanEntry = Arc<Vec<Itinerary>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Cache of ranked search results.
pub struct PlanCache {
    plans: MokaCache<PlanKey, PlanEntry>,
}

impl PlanCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    /// Get a cached entry.
    pub async fn get(&self, key: &PlanKey) -> Option<PlanEntry> {
        self.plans.get(key).await
    }

    /// Get an entry, running `search` to fill it on a miss.
    ///
    /// Concurrent misses on one key share a single search. Failed searches
    /// leave nothing behind.
    pub async fn get_or_search<F>(&self, key: PlanKey, search: F) -> Result<PlanEntry, PlanError>
    where
        F: Future<Output = Result<PlanEntry, PlanError>>,
    {
        self.plans
            .try_get_with(key, search)
            .await
            .map_err(|e| PlanError::clone(&e))
    }
}

/// Route planner with caching.
///
/// Wraps a shared `Network` and caches ranked results per station pair.
/// Searches run on the blocking thread pool so they never stall the async
/// workers serving other requests.
pub struct CachedPlanner {
    network: Arc<Network>,
    cache: PlanCache,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(network: Arc<Network>, cache_config: &CacheConfig) -> Self {
        Self {
            network,
            cache: PlanCache::new(cache_config),
        }
    }

    /// Every route between two stations, ranked best-first, using the cache
    /// if available.
    pub async fn ranked_routes(
        &self,
        origin: &StationKey,
        destination: &StationKey,
    ) -> Result<PlanEntry, PlanError> {
        let key = (origin.clone(), destination.clone());

        if let Some(cached) = self.cache.get(&key).await {
            debug!(%origin, %destination, "plan cache hit");
            return Ok(cached);
        }

        let network = Arc::clone(&self.network);
        let (from, to) = key.clone();

        self.cache
            .get_or_search(key, async move {
                debug!(origin = %from, destination = %to, "plan cache miss");
                let routes = tokio::task::spawn_blocking(move || ranked_routes(&network, &from, &to))
                    .await
                    .map_err(|e| PlanError::SearchFailed(e.to_string()))??;
                Ok::<_, PlanError>(Arc::new(routes))
            })
            .await
    }

    /// Plan routes for a request.
    pub async fn plan(
        &self,
        request: &PlanRequest,
        config: &PlannerConfig,
    ) -> Result<PlanResult, PlanError> {
        let (origin, destination) = request.keys()?;
        let ranked = self.ranked_routes(&origin, &destination).await?;

        Ok(PlanResult::from_ranked(
            &ranked,
            config.result_cap(request.max_results),
        ))
    }

    /// The network being searched.
    pub fn network(&self) -> &Network {
        &self.network
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::network::fixtures::{interchange, line};

    fn key(s: &str) -> StationKey {
        StationKey::normalize(s).unwrap()
    }

    fn planner() -> CachedPlanner {
        CachedPlanner::new(Arc::new(interchange()), &CacheConfig::default())
    }

    /// Every pair of eight stations joined by its own route.
    fn complete_network() -> Network {
        let mut routes = Vec::new();
        for i in 0..8 {
            for j in (i + 1)..8 {
                let (a, b) = (format!("S{i}"), format!("S{j}"));
                routes.push(line(&format!("L{i}{j}"), &[a.as_str(), b.as_str()], 1.0));
            }
        }
        Network::build(&routes)
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 1000);
    }

    #[tokio::test]
    async fn second_lookup_reuses_entry() {
        let planner = planner();

        let first = planner.ranked_routes(&key("a"), &key("d")).await.unwrap();
        let second = planner.ranked_routes(&key("a"), &key("d")).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_misses_share_one_search() {
        let planner = planner();

        let (from, to) = (key("a"), key("d"));
        let (first, second) = tokio::join!(
            planner.ranked_routes(&from, &to),
            planner.ranked_routes(&from, &to),
        );

        assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn search_does_not_stall_the_runtime() {
        let planner = CachedPlanner::new(Arc::new(complete_network()), &CacheConfig::default());

        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        tokio::spawn(async move { flag.store(true, Ordering::SeqCst) });

        let result = planner
            .plan(&PlanRequest::new("S0", "S7", Some(1)), &PlannerConfig::default())
            .await
            .unwrap();

        // 1 + 6 + 30 + 120 + 360 + 720 + 720 simple paths
        assert_eq!(result.paths_found, 1957);
        assert!(ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn matches_uncached_planner() {
        let network = interchange();
        let config = PlannerConfig::new(1, 5);
        let request = PlanRequest::new("c", "B", None);

        let cached = planner().plan(&request, &config).await.unwrap();
        let direct = crate::planner::Planner::new(&network, &config)
            .plan(&request)
            .unwrap();

        assert_eq!(cached.paths_found, direct.paths_found);
        let describe = |r: &PlanResult| -> Vec<String> {
            r.itineraries.iter().map(Itinerary::describe).collect()
        };
        assert_eq!(describe(&cached), describe(&direct));
    }

    #[tokio::test]
    async fn direction_is_part_of_key() {
        let planner = planner();

        let there = planner.ranked_routes(&key("a"), &key("d")).await.unwrap();
        let back = planner.ranked_routes(&key("d"), &key("a")).await.unwrap();

        assert!(!Arc::ptr_eq(&there, &back));
        assert_eq!(back[0].station_names(), vec!["D", "A"]);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let planner = planner();

        let err = planner
            .ranked_routes(&key("nowhere"), &key("d"))
            .await
            .unwrap_err();
        assert_eq!(err, PlanError::OriginNotFound("nowhere".into()));

        let cache = &planner.cache;
        assert!(cache.get(&(key("nowhere"), key("d"))).await.is_none());
    }

    #[tokio::test]
    async fn plan_truncates_cached_results() {
        let planner = planner();
        let config = PlannerConfig::default();

        let one = planner
            .plan(&PlanRequest::new("A", "D", Some(1)), &config)
            .await
            .unwrap();
        assert_eq!(one.itineraries.len(), 1);
        assert_eq!(one.paths_found, 2);
        assert_eq!(one.itineraries[0].changes(), 0);

        let all = planner
            .plan(&PlanRequest::new("a", "d", Some(10)), &config)
            .await
            .unwrap();
        assert_eq!(all.itineraries.len(), 2);
    }
}
