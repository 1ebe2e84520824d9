//! Basic LRU Cache Usage
//!
//! Walks through construction, lookups, updates and eviction on a small
//! single-threaded cache.
//!
//! Run with: RUST_LOG=lru_rs=trace cargo run --example basic_usage

use lru_rs::{Error, LruCache};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("LRU Cache Basic Usage");
    println!("=====================\n");

    invalid_capacity();
    println!();

    eviction()?;
    println!();

    recency()?;

    Ok(())
}

fn invalid_capacity() {
    println!("1. Invalid Capacity");
    println!("   ----------------");

    for capacity in [0i64, -5] {
        match LruCache::<String, String>::new(capacity) {
            Ok(_) => println!("   capacity {}: accepted", capacity),
            Err(e) => println!("   capacity {}: rejected ({})", capacity, e),
        }
    }
}

fn eviction() -> Result<(), Error> {
    println!("2. Eviction");
    println!("   --------");

    let mut cache = LruCache::new(2)?;
    cache.put("key-1".to_string(), "value".to_string());
    cache.put("key-2".to_string(), "value-2".to_string());
    cache.put("key-3".to_string(), "value-3".to_string());

    println!("   len after three puts: {}", cache.len());
    for key in ["key-1", "key-2", "key-3"] {
        println!("   get({}) = {:?}", key, cache.get(key));
    }
    Ok(())
}

fn recency() -> Result<(), Error> {
    println!("3. Recency Order");
    println!("   -------------");

    let mut cache = LruCache::new(3)?;
    cache.put(1, "one");
    cache.put(2, "two");
    cache.put(3, "three");
    cache.get(&1);

    let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    println!("   MRU -> LRU: {:?}", order);
    println!("   next victim: {:?}", cache.peek_lru());

    cache.put(4, "four");
    println!("   after put(4): contains 2? {}", cache.contains_key(&2));
    Ok(())
}
