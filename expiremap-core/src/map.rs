use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::clock;
use crate::config::MapConfig;
use crate::entry::Entry;
use crate::error::ConfigError;

/// Truncates a key for logging (keys may carry caller data)
fn truncate_key_for_log(key: &str) -> &str {
    const MAX_LOG_LEN: usize = 16;
    if key.len() <= MAX_LOG_LEN {
        return key;
    }
    let mut end = MAX_LOG_LEN;
    while !key.is_char_boundary(end) {
        end -= 1;
    }
    &key[..end]
}

struct MapInner {
    data: DashMap<String, Entry>,
}

/// Thread-safe string map whose entries may carry an absolute deadline
///
/// Storage is a `DashMap`: keys are spread across shards, each guarded by
/// its own reader/writer lock, so reads run alongside other reads and a write
/// only excludes access to its own shard.
///
/// Expiry is lazy. Every read compares the entry's deadline with the wall
/// clock at whole-second granularity: an entry is gone once the current Unix
/// second is strictly greater than the deadline's. Nothing is removed in the
/// background; an expired entry keeps its slot until it is overwritten,
/// removed, or dropped by [`purge_expired`](Self::purge_expired).
///
/// Cloning is cheap and every clone sees the same data.
///
/// # Example
///
/// ```rust
/// use expiremap_core::ExpiringMap;
/// use std::time::{Duration, SystemTime};
///
/// let map = ExpiringMap::new();
/// map.put("greeting", "hello");
/// map.put_till("stale", "old", SystemTime::now() - Duration::from_secs(10));
///
/// assert_eq!(map.get("greeting"), Some("hello".to_string()));
/// assert_eq!(map.get("stale"), None);
/// assert_eq!(map.keys(), vec!["greeting".to_string()]);
/// ```
#[derive(Clone)]
pub struct ExpiringMap {
    inner: Arc<MapInner>,
}

impl ExpiringMap {
    /// Creates a new, empty map
    pub fn new() -> Self {
        Self::from_data(DashMap::new())
    }

    /// Creates a new, empty map sized according to `config`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the shard amount is unusable.
    pub fn with_config(config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let data = match config.shard_amount {
            Some(shards) => DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards),
            None => DashMap::with_capacity(config.initial_capacity),
        };

        Ok(Self::from_data(data))
    }

    fn from_data(data: DashMap<String, Entry>) -> Self {
        Self {
            inner: Arc::new(MapInner { data }),
        }
    }

    /// Retrieves a copy of the value stored under `key`
    ///
    /// Returns `None` if the key was never stored or its entry has expired;
    /// the two cases are not distinguished. Expired entries are left in place.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.inner.data.get(key) {
            Some(entry) if !entry.value().is_expired() => Some(entry.value().value().to_string()),
            _ => {
                tracing::trace!("miss {}", truncate_key_for_log(key));
                None
            }
        }
    }

    /// Stores a value that never expires, replacing any existing entry
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.put_till(key, value, None);
    }

    /// Stores a value with an optional absolute deadline, replacing any
    /// existing entry
    ///
    /// `deadline` accepts a `SystemTime` or `None` for "never expires". It is
    /// not checked against the current time: a deadline already in the past
    /// is stored as given and the entry is simply never visible.
    pub fn put_till(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        deadline: impl Into<Option<SystemTime>>,
    ) {
        let key = key.into();
        let value: String = value.into();
        let entry = Entry::new(value, deadline.into());

        if entry.is_expired() {
            tracing::debug!(
                "storing already expired entry for {}",
                truncate_key_for_log(&key)
            );
        }

        self.inner.data.insert(key, entry);
    }

    /// Stores a value that expires `ttl` from now
    ///
    /// A `ttl` too large to represent as a wall-clock time is treated as
    /// "never expires".
    pub fn put_for(&self, key: impl Into<String>, value: impl Into<String>, ttl: Duration) {
        let deadline = SystemTime::now().checked_add(ttl);
        self.put_till(key, value, deadline);
    }

    /// Returns every key whose entry has not expired, in no particular order
    pub fn keys(&self) -> Vec<String> {
        let now = clock::now_secs();
        self.inner
            .data
            .iter()
            .filter(|entry| !entry.value().is_expired_at(now))
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Checks if a key exists and is not expired, without copying its value
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner
            .data
            .get(key)
            .is_some_and(|entry| !entry.value().is_expired())
    }

    /// Returns the deadline of a live entry
    ///
    /// The outer `None` means the key is absent or expired; `Some(None)`
    /// means the entry never expires.
    pub fn expires_at(&self, key: &str) -> Option<Option<SystemTime>> {
        let entry = self.inner.data.get(key)?;
        if entry.value().is_expired() {
            return None;
        }
        Some(entry.value().expires_at())
    }

    /// Removes a key from the map
    ///
    /// Returns the removed value if the entry was still live. An expired
    /// entry is removed as well but yields `None`.
    pub fn remove(&self, key: &str) -> Option<String> {
        let (_, entry) = self.inner.data.remove(key)?;
        if entry.is_expired() {
            return None;
        }
        Some(entry.value().to_string())
    }

    /// Removes every entry, live or expired
    ///
    /// Returns the number of slots freed. The count may be approximate while
    /// other threads are writing.
    pub fn clear(&self) -> usize {
        let count = self.inner.data.len();
        self.inner.data.clear();
        tracing::debug!("cleared {} entries", count);
        count
    }

    /// Drops every expired entry from storage
    ///
    /// Reads never do this on their own; call it when expired slots should
    /// give their memory back. Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = clock::now_secs();
        let mut removed = 0;

        self.inner.data.retain(|_, entry| {
            if entry.is_expired_at(now) {
                removed += 1;
                false
            } else {
                true
            }
        });

        tracing::debug!("purged {} expired entries", removed);
        removed
    }

    /// Returns the number of stored slots, expired ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Returns the number of entries that have not expired
    #[must_use]
    pub fn live_len(&self) -> usize {
        let now = clock::now_secs();
        self.inner
            .data
            .iter()
            .filter(|entry| !entry.value().is_expired_at(now))
            .count()
    }

    /// Returns `true` if no slots are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }
}

impl Default for ExpiringMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExpiringMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringMap")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
