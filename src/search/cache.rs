//! In-memory listing cache keyed by normalized query.
//!
//! Expired entries are never removed on read; they read as misses and are
//! overwritten by the next successful fetch. The store is bounded: once it
//! grows past [`CACHE_CAPACITY`] the [`EVICTION_BATCH`] entries closest to
//! expiry are dropped.

use super::models::Listing;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

/// TTL for a query that returned at least one listing.
pub const HIT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// TTL for a query that returned nothing.
pub const EMPTY_TTL: Duration = Duration::from_secs(5 * 60);

/// Entry count above which eviction kicks in.
pub const CACHE_CAPACITY: usize = 500;

/// Entries removed per eviction pass.
pub const EVICTION_BATCH: usize = 100;

/// Lower-cases, trims and collapses internal whitespace.
pub fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<Listing>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Hit/miss counters for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Thread-safe query cache. The lock is only held for map operations.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock cannot leave the map half-written
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns live results for `query`, if any.
    pub fn get(&self, query: &str) -> Option<Vec<Listing>> {
        self.get_at(query, Instant::now())
    }

    pub(crate) fn get_at(&self, query: &str, now: Instant) -> Option<Vec<Listing>> {
        let key = normalize_query(query);
        let found = self.lock().get(&key).filter(|e| e.is_live(now)).map(|e| e.results.clone());

        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit for key: {}", key);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("Cache miss for key: {}", key);
        }
        found
    }

    /// Stores `results` with a TTL chosen by whether they are empty.
    pub fn insert(&self, query: &str, results: Vec<Listing>) {
        self.insert_at(query, results, Instant::now());
    }

    pub(crate) fn insert_at(&self, query: &str, results: Vec<Listing>, now: Instant) {
        let ttl = if results.is_empty() { EMPTY_TTL } else { HIT_TTL };
        let key = normalize_query(query);

        let mut entries = self.lock();
        entries.insert(key, CacheEntry { results, expires_at: now + ttl });

        if entries.len() > CACHE_CAPACITY {
            Self::evict_soonest(&mut entries, EVICTION_BATCH);
        }
    }

    fn evict_soonest(entries: &mut HashMap<String, CacheEntry>, count: usize) {
        let mut by_expiry: Vec<(Instant, String)> =
            entries.iter().map(|(k, e)| (e.expires_at, k.clone())).collect();
        by_expiry.sort_by(|a, b| a.0.cmp(&b.0));

        for (_, key) in by_expiry.into_iter().take(count) {
            entries.remove(&key);
        }
        debug!("Evicted {} cache entries, {} remain", count, entries.len());
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: f64) -> Listing {
        Listing::new("Item", price, "CAD")
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Buy   SOFA\tleather  "), "buy sofa leather");
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn test_get_uses_normalized_key() {
        let cache = QueryCache::new();
        cache.insert("buy sofa", vec![listing(100.0)]);

        let hit = cache.get("  BUY   Sofa ").unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_miss_counts() {
        let cache = QueryCache::new();
        assert!(cache.get("nothing").is_none());
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 1, entries: 0 });
    }

    #[test]
    fn test_non_empty_results_live_for_a_day() {
        let cache = QueryCache::new();
        let now = Instant::now();
        cache.insert_at("q", vec![listing(1.0)], now);

        assert!(cache.get_at("q", now + Duration::from_secs(23 * 3600)).is_some());
        assert!(cache.get_at("q", now + HIT_TTL).is_none());
    }

    #[test]
    fn test_empty_results_live_five_minutes() {
        let cache = QueryCache::new();
        let now = Instant::now();
        cache.insert_at("q", Vec::new(), now);

        assert_eq!(cache.get_at("q", now + Duration::from_secs(60)), Some(Vec::new()));
        assert!(cache.get_at("q", now + EMPTY_TTL).is_none());
    }

    #[test]
    fn test_expired_entry_is_kept_until_overwritten() {
        let cache = QueryCache::new();
        let now = Instant::now();
        cache.insert_at("q", Vec::new(), now);

        assert!(cache.get_at("q", now + Duration::from_secs(3600)).is_none());
        assert_eq!(cache.len(), 1);

        cache.insert_at("q", vec![listing(5.0)], now + Duration::from_secs(3600));
        assert_eq!(cache.len(), 1);
        assert!(cache.get_at("q", now + Duration::from_secs(3601)).is_some());
    }

    #[test]
    fn test_no_eviction_at_capacity() {
        let cache = QueryCache::new();
        let now = Instant::now();
        for i in 0..CACHE_CAPACITY {
            cache.insert_at(&format!("q{}", i), vec![listing(1.0)], now);
        }
        assert_eq!(cache.len(), CACHE_CAPACITY);
    }

    #[test]
    fn test_eviction_drops_soonest_to_expire() {
        let cache = QueryCache::new();
        let now = Instant::now();

        // 450 long-lived entries, then 51 short-lived ones pushing past capacity
        for i in 0..450 {
            cache.insert_at(&format!("hit{}", i), vec![listing(1.0)], now);
        }
        for i in 0..51 {
            cache.insert_at(&format!("empty{}", i), Vec::new(), now + Duration::from_secs(i));
        }

        assert_eq!(cache.len(), CACHE_CAPACITY + 1 - EVICTION_BATCH);

        // Every empty entry expires before any hit entry, so all 51 go first
        let probe = now + Duration::from_secs(1);
        for i in 0..51 {
            assert!(cache.get_at(&format!("empty{}", i), probe).is_none());
        }
        let surviving_hits =
            (0..450).filter(|i| cache.get_at(&format!("hit{}", i), probe).is_some()).count();
        assert_eq!(surviving_hits, 450 - (EVICTION_BATCH - 51));
    }

    #[test]
    fn test_clear() {
        let cache = QueryCache::new();
        cache.insert("a", vec![listing(1.0)]);
        cache.insert("b", Vec::new());
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats { hits: 3, misses: 1, entries: 0 };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
