//! Correctness Tests for the LRU Cache
//!
//! Validates construction, lookup, update and eviction behaviour with small,
//! predictable access patterns. Each eviction test checks exactly which key
//! was removed.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Explicit checks for which key was evicted after each put
//! - Structural checks through `iter()`, which walks MRU to LRU

use lru_rs::config::LruCacheConfig;
use lru_rs::{Error, LruCache};
use std::num::NonZeroUsize;

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

fn recency_order<K: std::hash::Hash + Eq + Clone, V>(cache: &LruCache<K, V>) -> Vec<K> {
    cache.iter().map(|(k, _)| k.clone()).collect()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_new_rejects_zero_capacity() {
    assert_eq!(
        LruCache::<String, String>::new(0).unwrap_err(),
        Error::InvalidCapacity
    );
}

#[test]
fn test_new_rejects_negative_capacity() {
    assert_eq!(
        LruCache::<String, String>::new(-5).unwrap_err(),
        Error::InvalidCapacity
    );
    assert_eq!(
        LruCache::<String, String>::new(i64::MIN).unwrap_err(),
        Error::InvalidCapacity
    );
}

#[test]
fn test_new_accepts_positive_capacity() {
    assert!(LruCache::<String, String>::new(1).is_ok());
    assert!(LruCache::<i32, String>::new(1).is_ok());
    assert!(LruCache::<u64, f64>::new(1).is_ok());
    assert_eq!(LruCache::<u8, u8>::new(1000u32).unwrap().cap().get(), 1000);
}

#[test]
fn test_with_capacity_is_infallible() {
    let cache: LruCache<u32, u32> = LruCache::with_capacity(NonZeroUsize::new(3).unwrap());
    assert_eq!(cache.cap().get(), 3);
    assert!(cache.is_empty());
}

// ============================================================================
// LOOKUP AND UPDATE
// ============================================================================

#[test]
fn test_miss_then_hit() {
    let mut cache: LruCache<String, String> = make_lru(2);

    assert_eq!(cache.get("key"), None);
    assert_eq!(cache.len(), 0);

    cache.put("key".to_string(), "value".to_string());
    assert_eq!(cache.get("key").map(String::as_str), Some("value"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_int_key_float_value() {
    let mut cache: LruCache<i32, f64> = make_lru(2);

    assert_eq!(cache.get(&4), None);
    cache.put(4, 5.1);
    assert_eq!(cache.get(&4), Some(&5.1));
    assert_eq!(cache.len(), 1);
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    user_id: String,
    name: String,
}

#[test]
fn test_struct_value() {
    let mut cache: LruCache<String, User> = make_lru(2);
    let user_id = "22bc77a3-1456-470f-bdb0-0c893b8778a8".to_string();
    let user = User {
        user_id: user_id.clone(),
        name: "Adam".to_string(),
    };

    assert_eq!(cache.get(&user_id), None);
    cache.put(user_id.clone(), user.clone());
    assert_eq!(cache.get(&user_id), Some(&user));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_update_same_key_in_place() {
    let mut cache = make_lru(2);

    cache.put("key", "value");
    assert_eq!(cache.get(&"key"), Some(&"value"));
    assert_eq!(cache.len(), 1);

    cache.put("key", "new-value");
    assert_eq!(cache.get(&"key"), Some(&"new-value"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_repeated_put_is_idempotent() {
    let mut cache = make_lru(3);
    cache.put("other", 0);

    for _ in 0..50 {
        cache.put("key", 7);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek(&"key"), Some(&7));
    }
    assert!(cache.contains_key(&"other"));
}

// ============================================================================
// EVICTION
// ============================================================================

/// Validates LRU eviction: the least recently used item is evicted
///
/// Setup: capacity 2, insert key-1, key-2, key-3 in order
/// Expected: key-1 is evicted, key-2 and key-3 remain
#[test]
fn test_lru_evicts_least_recently_used() {
    let mut cache = make_lru(2);

    cache.put("key-1", "value");
    assert_eq!(cache.len(), 1);
    cache.put("key-2", "value-2");
    assert_eq!(cache.len(), 2);
    cache.put("key-3", "value-3");
    assert_eq!(cache.len(), 2);

    assert_eq!(cache.get(&"key-1"), None);
    assert_eq!(cache.get(&"key-2"), Some(&"value-2"));
    assert_eq!(cache.get(&"key-3"), Some(&"value-3"));
}

/// Validates that get refreshes recency
///
/// Setup: capacity 2, insert a then b, get a, insert c
/// Expected: b is evicted, not a
#[test]
fn test_lru_get_updates_recency() {
    let mut cache = make_lru(2);

    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), Some(&1));

    cache.put("c", 3);

    assert!(cache.contains_key(&"a"), "a was accessed and must survive");
    assert!(!cache.contains_key(&"b"), "b was least recently used");
    assert!(cache.contains_key(&"c"));
}

/// Validates that updating an existing key also refreshes recency
#[test]
fn test_lru_update_moves_to_mru() {
    let mut cache = make_lru(3);

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);
    assert_eq!(recency_order(&cache), vec![3, 2, 1]);

    cache.put(1, 11);
    assert_eq!(recency_order(&cache), vec![1, 3, 2]);

    cache.put(4, 40);
    assert_eq!(cache.peek(&2), None, "2 became LRU after 1 was updated");
    assert_eq!(cache.peek(&1), Some(&11));
}

/// Validates the full eviction sequence is predictable
#[test]
fn test_lru_eviction_order_is_predictable() {
    let mut cache = make_lru(3);

    for i in 0..3 {
        cache.put(i, i);
    }

    for next in 3..10 {
        let expected_victim = next - 3;
        assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(expected_victim));
        cache.put(next, next);
        assert!(!cache.contains_key(&expected_victim));
        assert_eq!(cache.len(), 3);
    }
}

/// Accessing in reverse insertion order flips the eviction order
#[test]
fn test_lru_reverse_access_order() {
    let mut cache = make_lru(4);

    for i in 0..4 {
        cache.put(i, i);
    }
    for i in (0..4).rev() {
        cache.get(&i);
    }

    assert_eq!(recency_order(&cache), vec![0, 1, 2, 3]);
    cache.put(4, 4);
    assert!(!cache.contains_key(&3));
}

#[test]
fn test_lru_capacity_one() {
    let mut cache = make_lru(1);

    cache.put("a", 1);
    assert_eq!(cache.get(&"a"), Some(&1));

    cache.put("b", 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(&2));

    // Update does not evict the sole entry
    cache.put("b", 3);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"b"), Some(&3));
}

#[test]
fn test_sequential_put_fills_capacity() {
    let cache_size = 100;
    let mut cache = make_lru(cache_size);

    for i in 0..cache_size {
        cache.put(format!("key-{}", i), format!("value-{}", i));
    }
    assert_eq!(cache.len(), cache_size);
}

#[test]
fn test_sequential_put_exceeding_capacity_is_bounded() {
    let cache_size = 100;
    let mut cache = make_lru(cache_size);

    for i in 0..cache_size * 2 {
        cache.put(format!("key-{}", i), format!("value-{}", i));
        assert!(cache.len() <= cache_size);
    }
    assert_eq!(cache.len(), cache_size);

    // Only the second half survives
    for i in 0..cache_size {
        assert!(!cache.contains_key(format!("key-{}", i).as_str()));
    }
    for i in cache_size..cache_size * 2 {
        assert!(cache.contains_key(format!("key-{}", i).as_str()));
    }
}

// ============================================================================
// REMOVAL
// ============================================================================

#[test]
fn test_remove_frees_a_slot() {
    let mut cache = make_lru(2);

    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.remove(&"a"), Some(1));
    assert_eq!(cache.len(), 1);

    // Room again: no eviction
    cache.put("c", 3);
    assert_eq!(cache.len(), 2);
    assert!(cache.contains_key(&"b"));
    assert!(cache.contains_key(&"c"));
}

#[test]
fn test_pop_lru_drains_in_order() {
    let mut cache = make_lru(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.get(&"a");

    assert_eq!(cache.pop_lru(), Some(("b", 2)));
    assert_eq!(cache.pop_lru(), Some(("c", 3)));
    assert_eq!(cache.pop_lru(), Some(("a", 1)));
    assert_eq!(cache.pop_lru(), None);
    assert!(cache.is_empty());
}

#[test]
fn test_clear_then_reuse() {
    let mut cache = make_lru(3);
    for i in 0..3 {
        cache.put(i, i);
    }
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.iter().count(), 0);

    for i in 10..15 {
        cache.put(i, i);
    }
    assert_eq!(recency_order(&cache), vec![14, 13, 12]);
}

// ============================================================================
// INVARIANTS UNDER A LONG MIXED WORKLOAD
// ============================================================================

#[test]
fn test_len_matches_iteration_under_mixed_workload() {
    let mut cache = make_lru(16);

    for i in 0u64..5_000 {
        let key = (i * 7919) % 40;
        match i % 5 {
            0 | 1 => cache.put(key, i),
            2 => {
                cache.get(&key);
            }
            3 => {
                cache.remove(&key);
            }
            _ => {
                cache.peek(&key);
            }
        }
        assert!(cache.len() <= 16);
        assert_eq!(cache.iter().count(), cache.len());
    }
}
