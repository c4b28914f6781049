// src/jobs/cache.rs
use super::{JobListing, JobsClient};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Session-scoped cache of the full fetch-all result.
///
/// Single entry, keyed by nothing: the first caller fills it, everyone
/// else shares the `Arc` until an explicit refresh clears it. The
/// single-page job viewer never goes through here.
pub struct SessionCache {
    slot: RwLock<Option<Arc<Vec<JobListing>>>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Returns the cached listing set, fetching it on first use.
    pub async fn get_or_fetch(&self, client: &JobsClient, max_pages: u32) -> Arc<Vec<JobListing>> {
        if let Some(jobs) = self.slot.read().await.as_ref() {
            return Arc::clone(jobs);
        }

        let mut slot = self.slot.write().await;
        // Another task may have filled the slot while we waited.
        if let Some(jobs) = slot.as_ref() {
            return Arc::clone(jobs);
        }

        let jobs = Arc::new(client.fetch_all(max_pages).await);
        *slot = Some(Arc::clone(&jobs));
        jobs
    }

    /// Drops the cached entry; the next read re-fetches.
    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
        info!("Session job cache cleared");
    }

    pub async fn is_warm(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_starts_cold_and_invalidate_clears() {
        let cache = SessionCache::new();
        assert!(!cache.is_warm().await);

        *cache.slot.write().await = Some(Arc::new(vec![]));
        assert!(cache.is_warm().await);

        cache.invalidate().await;
        assert!(!cache.is_warm().await);
    }

    #[tokio::test]
    async fn test_warm_cache_returns_same_arc() {
        let cache = SessionCache::new();
        let jobs = Arc::new(vec![]);
        *cache.slot.write().await = Some(Arc::clone(&jobs));

        let held = cache.slot.read().await.as_ref().map(Arc::clone).unwrap();
        assert!(Arc::ptr_eq(&held, &jobs));
    }
}
