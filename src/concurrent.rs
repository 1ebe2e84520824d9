//! Concurrent LRU Cache
//!
//! A thread-safe LRU cache: one [`LruSegment`] behind one
//! `parking_lot::Mutex`. This is the multi-threaded counterpart to
//! [`LruCache`](crate::LruCache).
//!
//! # Why one Mutex?
//!
//! Every `get()` moves the entry to the front of the recency list, so reads
//! mutate shared links just like writes do. An `RwLock` would hand out write
//! locks for every call anyway. A single `Mutex` keeps one global recency
//! order and makes every operation linearizable: the effect of concurrent
//! calls equals some sequential order that respects each call's start and
//! end.
//!
//! The lock is only held for the O(1) map and link updates (plus the clone
//! of the returned value), so contention latency does not depend on how
//! many entries the cache holds.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │           ConcurrentLruCache              │
//! │                                           │
//! │  thread 1 ─┐                              │
//! │  thread 2 ─┼──▶ ┌───────┐   ┌───────────┐ │
//! │  thread N ─┘    │ Mutex │──▶│ LruSegment│ │
//! │                 └───────┘   └───────────┘ │
//! └───────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use lru_rs::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(1000)?);
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! # Ok::<(), lru_rs::Error>(())
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::index::DefaultHashBuilder;
use crate::lru::LruSegment;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

/// A thread-safe LRU cache guarded by a single lock.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq`, and `Clone` to insert.
/// - `V`: Value type. Must implement `Clone` for the accessors that return
///   owned values; [`get_with`](Self::get_with) works for any `V`.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// `ConcurrentLruCache` is `Send + Sync` whenever `K`, `V` and `S` are
/// `Send`, and is usually shared through an `Arc`.
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    cap: NonZeroUsize,
    segment: Mutex<LruSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Fails with [`Error::InvalidCapacity`](crate::Error::InvalidCapacity)
    /// when `capacity` is below 1.
    pub fn new<C>(capacity: C) -> Result<Self>
    where
        C: TryInto<usize>,
    {
        LruCacheConfig::new(capacity).map(|config| Self::init(config, None))
    }

    /// Creates a cache from an already validated capacity.
    pub fn with_capacity(cap: NonZeroUsize) -> Self {
        Self::init(LruCacheConfig::from(cap), None)
    }

    /// Creates a cache from a configuration with an optional hasher.
    ///
    /// ```rust
    /// use lru_rs::ConcurrentLruCache;
    /// use lru_rs::config::LruCacheConfig;
    /// use core::num::NonZeroUsize;
    ///
    /// let config = LruCacheConfig {
    ///     capacity: NonZeroUsize::new(10_000).unwrap(),
    /// };
    /// let cache: ConcurrentLruCache<String, i32> = ConcurrentLruCache::init(config, None);
    /// assert_eq!(cache.cap().get(), 10_000);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a cache that hashes keys with `hash_builder`.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        ConcurrentLruCache {
            cap: config.capacity,
            segment: Mutex::new(LruSegment::with_hasher(config, hash_builder)),
        }
    }

    /// Returns the maximum number of entries. Does not lock.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Retrieves a value and applies a function to it while holding the lock.
    ///
    /// Avoids cloning when only part of the value is needed. The entry is
    /// promoted to most recently used. Keep `f` short: every other caller
    /// waits until it returns.
    ///
    /// ```rust
    /// # use lru_rs::ConcurrentLruCache;
    /// let cache = ConcurrentLruCache::new(4)?;
    /// cache.put("key".to_string(), "hello world".to_string());
    /// assert_eq!(cache.get_with("key", |v| v.len()), Some(11));
    /// # Ok::<(), lru_rs::Error>(())
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.lock().get(key).map(f)
    }

    /// Applies `f` to a mutable reference to the value, promoting the entry.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.segment.lock().get_mut(key).map(f)
    }

    /// Checks for `key` without promoting it.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains_key(key)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.segment.lock().pop_lru()
    }

    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Retrieves a **clone** of the value and promotes the entry.
    ///
    /// A missing key yields `None`. Use [`get_with`](Self::get_with) to read
    /// without cloning.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Returns a clone of the value without promoting the entry.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().peek(key).cloned()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key exists, the value is replaced and the entry moves to the
    /// most recently used position without evicting anything. If the key
    /// is new and the cache is full, the least recently used entry is
    /// evicted first.
    pub fn put(&self, key: K, value: V) {
        self.segment.lock().put(key, value);
    }

    /// Snapshot of the keys, most recently used first.
    ///
    /// O(n) while holding the lock.
    pub fn keys(&self) -> Vec<K> {
        self.segment.lock().keys_cloned()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Returns clones of the entry that the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(K, V)> {
        self.segment
            .lock()
            .peek_lru()
            .map(|(k, v)| (k.clone(), v.clone()))
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentLruCache")
            .field("capacity", &self.cap)
            .field("segment", &*self.segment.lock())
            .finish()
    }
}
