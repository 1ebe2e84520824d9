//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a fixed-capacity LRU cache with O(1) operations for
//! all common cache operations.
//!
//! # Algorithm
//!
//! Two structures cooperate:
//!
//! - an **index** (hash map) from key to the handle of the key's entry, and
//! - a **recency list**, a doubly linked list bounded by head and tail
//!   sentinels, ordered from most recently used (front) to least recently
//!   used (back).
//!
//! `get` and `put` on an existing key move the entry to the front. `put` of a
//! new key into a full cache first removes the back entry from both
//! structures, so the cache never holds more than its capacity.
//!
//! ```text
//!  index: "a" -> #3, "b" -> #2, "c" -> #4
//!
//!  HEAD <-> c(#4) <-> a(#3) <-> b(#2) <-> TAIL
//!           MRU                  LRU, next to evict
//! ```
//!
//! # Performance Characteristics
//!
//! - Get / Put / Remove: O(1) expected
//! - Space: O(capacity). The entry arena never grows past `capacity + 2` slots.
//!
//! # Thread Safety
//!
//! [`LruCache`] takes `&mut self` for every operation that touches recency.
//! For shared access use [`ConcurrentLruCache`](crate::ConcurrentLruCache),
//! which serializes every operation behind a single lock.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::index::{DefaultHashBuilder, Index};
use crate::list::{self, List};
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

/// Internal LRU segment containing the actual cache algorithm.
///
/// Shared between `LruCache` (single-threaded) and `ConcurrentLruCache`
/// (one segment behind a mutex). The index and the list are only ever
/// mutated together, inside a single `&mut self` call.
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    index: Index<K, S>,
}

impl<K: Hash + Eq, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let cap = config.capacity;
        tracing::debug!(capacity = cap.get(), "creating LRU cache");
        LruSegment {
            config,
            list: List::new(cap),
            index: Index::with_capacity_and_hasher(cap.get(), hash_builder),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        debug_assert_eq!(self.index.len(), self.list.len());
        self.index.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.index.lookup(key)?;
        self.list.move_to_front(id);
        self.list.get(id).map(|(_, v)| v)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.index.lookup(key)?;
        self.list.move_to_front(id);
        self.list.get_mut(id).map(|(_, v)| v)
    }

    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.index.lookup(key)?;
        self.list.get(id).map(|(_, v)| v)
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains(key)
    }

    pub(crate) fn peek_lru(&self) -> Option<(&K, &V)> {
        let id = self.list.last()?;
        self.list.get(id).map(|(k, v)| (k, v))
    }

    /// Inserts or overwrites `key`.
    ///
    /// Overwriting never evicts. Inserting a new key into a full segment
    /// evicts the back entry before the new one is linked in.
    pub(crate) fn put(&mut self, key: K, value: V)
    where
        K: Clone,
    {
        if let Some(id) = self.index.lookup(&key) {
            self.list.move_to_front(id);
            self.list.update(id, (key, value));
            return;
        }

        if self.list.is_full() {
            self.pop_lru();
        }

        if let Some(id) = self.list.add((key.clone(), value)) {
            self.index.insert(key, id);
        }
    }

    pub(crate) fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.remove_last()?;
        self.index.remove(&key);
        tracing::trace!(len = self.list.len(), "evicted least recently used entry");
        Some((key, value))
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|(_, v)| v)
    }

    pub(crate) fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    #[cfg_attr(not(feature = "concurrent"), allow(dead_code))]
    pub(crate) fn keys_cloned(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.list.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<K, V, S> fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When a new key is inserted
/// into a full cache, the least recently used entry is evicted to make room.
///
/// # Examples
///
/// ```
/// use lru_rs::LruCache;
///
/// let mut cache = LruCache::new(2)?;
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// # Ok::<(), lru_rs::Error>(())
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    segment: LruSegment<K, V, S>,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Fails with [`Error::InvalidCapacity`](crate::Error::InvalidCapacity)
    /// when `capacity` is below 1.
    ///
    /// ```
    /// use lru_rs::{Error, LruCache};
    ///
    /// assert!(LruCache::<String, String>::new(1).is_ok());
    /// assert_eq!(
    ///     LruCache::<String, String>::new(0).unwrap_err(),
    ///     Error::InvalidCapacity
    /// );
    /// ```
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

    /// Creates a cache from a configuration, with an optional hasher.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache that hashes keys with `hash_builder`.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        LruCache {
            segment: LruSegment::with_hasher(config, hash_builder),
        }
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.segment.cap()
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A missing key is an ordinary outcome and yields `None`.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Like [`get`](Self::get), but hands out a mutable reference.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns the value for `key` without touching its recency.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.peek(key)
    }

    /// Checks for `key` without touching its recency.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }

    /// Returns the entry that the next eviction would remove.
    #[inline]
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.segment.peek_lru()
    }

    /// Removes and returns the least recently used entry.
    #[inline]
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        self.segment.pop_lru()
    }

    /// Removes `key`, returning its value if it was present.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Drops every entry. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }

    /// Iterates from most to least recently used without promoting anything.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.segment.iter()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts `value` under `key` and marks it most recently used.
    ///
    /// Overwriting an existing key never evicts. Inserting a new key into a
    /// full cache evicts the least recently used entry first.
    #[inline]
    pub fn put(&mut self, key: K, value: V) {
        self.segment.put(key, value)
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("segment", &self.segment)
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries, most recently used first.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
