//! Key to entry-handle lookup table.
//!
//! The index has no ordering of its own; recency lives in the list. It
//! only accelerates finding a key's slot.

use crate::list::EntryId;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
pub use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
pub use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Maps each cached key to the handle of its list entry.
pub(crate) struct Index<K, S = DefaultHashBuilder> {
    map: HashMap<K, EntryId, S>,
}

impl<K: Hash + Eq, S: BuildHasher> Index<K, S> {
    pub(crate) fn with_capacity_and_hasher(cap: usize, hash_builder: S) -> Self {
        Index {
            map: HashMap::with_capacity_and_hasher(cap, hash_builder),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn lookup<Q>(&self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).copied()
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Records `id` as the slot for `key`, returning the handle it replaced.
    #[inline]
    pub(crate) fn insert(&mut self, key: K, id: EntryId) -> Option<EntryId> {
        self.map.insert(key, id)
    }

    #[inline]
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
