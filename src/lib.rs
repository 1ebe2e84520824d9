#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Single-threaded
//!
//! [`LruCache`] takes `&mut self` for anything that touches recency and hands
//! out references into the cache.
//!
//! ```rust
//! use lru_rs::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! # Ok::<(), lru_rs::Error>(())
//! ```
//!
//! ## Concurrent
//!
//! Enabled by the default `concurrent` feature. [`ConcurrentLruCache`] wraps
//! the same algorithm in a single `parking_lot::Mutex`, so every operation is
//! linearizable and recency order stays global.
//!
//! ```rust
//! use lru_rs::ConcurrentLruCache;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(10_000)?);
//!
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.put("key".to_string(), 42);
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(cache.get("key"), Some(42));
//! # Ok::<(), lru_rs::Error>(())
//! ```
//!
//! ## Errors
//!
//! Construction is the only fallible step: a capacity below 1 yields
//! [`Error::InvalidCapacity`]. A missing key is `None`, never an error.
//!
//! ## Modules
//!
//! - [`lru`]: Single-threaded LRU cache
//! - [`config`]: Cache configuration
//! - [`error`]: Construction errors
//! - [`concurrent`]: Thread-safe wrapper (requires `concurrent` feature)

#![no_std]
#![forbid(unsafe_code)]

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

extern crate alloc;

#[cfg(test)]
extern crate scoped_threadpool;

/// Arena-backed doubly linked list with sentinel nodes.
///
/// Internal infrastructure holding the recency order. Entries are addressed
/// by stable slot handles instead of pointers.
pub(crate) mod list;

/// Key to list-handle lookup table.
pub(crate) mod index;

/// Cache configuration.
pub mod config;

/// Construction errors.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Thread-safe LRU cache behind a single lock.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LruCacheConfig;
pub use error::{Error, Result};
pub use index::DefaultHashBuilder;
pub use lru::LruCache;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
