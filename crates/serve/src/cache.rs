// crates/serve/src/cache.rs

//! Tagged, time-boxed cache for published content.
//!
//! Values are held as JSON so that any backend (in-process, key-value store)
//! can implement [`ContentCache`]. [`MemoryCache`] is the in-process one:
//! concurrent callers for the same key share a single computation, failed
//! computations are not stored, and entries expire after their TTL or when
//! one of their tags is invalidated.

use crate::Error;
use async_trait::async_trait;
use domain::content::ContentKind;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as Json;
use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};
use tokio::{sync::OnceCell, time::Instant};
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Keys and tags
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    pub key: String,
    pub tags: Vec<String>,
}

impl CacheKey {
    /// Key for the full listing of `kind`.
    pub fn listing(kind: ContentKind) -> Self {
        let label = kind.label();
        match kind {
            ContentKind::Homepage => Self {
                key: label.to_owned(),
                tags: vec![label.to_owned()],
            },
            ContentKind::Blog => Self {
                key: "blog-posts".to_owned(),
                tags: vec![label.to_owned(), format!("{label}-list")],
            },
            _ => Self {
                key: label.to_owned(),
                tags: vec![label.to_owned(), format!("{label}-list")],
            },
        }
    }

    /// Key for a single item of `kind`.
    pub fn item(kind: ContentKind, slug: &str) -> Self {
        let label = kind.label();
        Self {
            key: format!("{}:{slug}", kind.singular()),
            tags: vec![label.to_owned(), format!("{label}-{slug}")],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ContentCache: Send + Sync {
    /// Cached value for `key`, or the result of `compute` stored under it.
    async fn get_or_compute(
        &self,
        key: &str,
        ttl: Duration,
        tags: &[String],
        compute: BoxFuture<'_, Result<Json, Error>>,
    ) -> Result<Json, Error>;

    /// Drop every entry carrying `tag`. Returns how many were dropped.
    fn invalidate_tag(&self, tag: &str) -> usize;
}

/// Typed wrapper over [`ContentCache::get_or_compute`].
pub async fn cached<T, F>(
    cache: &dyn ContentCache,
    key: &CacheKey,
    ttl: Duration,
    compute: F,
) -> Result<T, Error>
where
    T: Serialize + DeserializeOwned,
    F: Future<Output = Result<T, Error>> + Send,
{
    let json = cache
        .get_or_compute(
            &key.key,
            ttl,
            &key.tags,
            Box::pin(async move {
                let value = compute.await?;
                serde_json::to_value(&value).map_err(|e| Error::Cache(e.to_string()))
            }),
        )
        .await?;
    serde_json::from_value(json).map_err(|e| Error::Cache(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// In-process implementation
// ─────────────────────────────────────────────────────────────────────────────

struct Entry {
    cell: Arc<OnceCell<Json>>,
    expires_at: Instant,
    tags: Vec<String>,
}

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell_for(&self, key: &str, ttl: Duration, tags: &[String]) -> Arc<OnceCell<Json>> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => entry.cell.clone(),
            _ => {
                let before = entries.len();
                entries.retain(|_, e| e.expires_at > now);
                let swept = before - entries.len();
                if swept > 0 {
                    debug!(swept, "dropped expired cache entries");
                }

                let cell = Arc::new(OnceCell::new());
                entries.insert(
                    key.to_owned(),
                    Entry {
                        cell: cell.clone(),
                        expires_at: now + ttl,
                        tags: tags.to_vec(),
                    },
                );
                cell
            }
        }
    }
}

#[async_trait]
impl ContentCache for MemoryCache {
    async fn get_or_compute(
        &self,
        key: &str,
        ttl: Duration,
        tags: &[String],
        compute: BoxFuture<'_, Result<Json, Error>>,
    ) -> Result<Json, Error> {
        // Lock is released before awaiting.
        let cell = self.cell_for(key, ttl, tags);
        if let Some(value) = cell.get() {
            debug!(key, "cache hit");
            return Ok(value.clone());
        }
        debug!(key, "cache miss");
        cell.get_or_try_init(|| compute).await.cloned()
    }

    fn invalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, e| !e.tags.iter().any(|t| t == tag));
        let dropped = before - entries.len();
        debug!(tag, dropped, "invalidated cache tag");
        dropped
    }
}
