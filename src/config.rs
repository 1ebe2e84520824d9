//! Cache Configuration
//!
//! [`LruCacheConfig`] carries the one parameter an LRU cache needs: how many
//! entries it may hold. The field is public so a config can be written as a
//! struct literal when the capacity is already known to be non-zero, or
//! built through [`LruCacheConfig::new`] when it comes from an untrusted
//! integer (a config file, a CLI flag, an environment variable).
//!
//! # Examples
//!
//! ```
//! use lru_rs::config::LruCacheConfig;
//! use lru_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Struct literal
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 1000);
//!
//! // Validated from a plain integer
//! let config = LruCacheConfig::new(-3);
//! assert!(config.is_err());
//! ```

use crate::error::{Error, Result};
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Fixed for
///   the lifetime of the cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Builds a config from any integer capacity.
    ///
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero, negative,
    /// or does not fit in `usize`.
    pub fn new<C>(capacity: C) -> Result<Self>
    where
        C: TryInto<usize>,
    {
        match capacity.try_into().ok().and_then(NonZeroUsize::new) {
            Some(capacity) => Ok(LruCacheConfig { capacity }),
            None => {
                tracing::debug!("rejected cache capacity below 1");
                Err(Error::InvalidCapacity)
            }
        }
    }
}

impl From<NonZeroUsize> for LruCacheConfig {
    fn from(capacity: NonZeroUsize) -> Self {
        LruCacheConfig { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
