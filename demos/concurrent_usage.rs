//! Concurrent Cache Usage Examples
//!
//! Multi-threaded usage patterns for `ConcurrentLruCache`.
//!
//! Run with: RUST_LOG=lru_rs=debug cargo run --example concurrent_usage

use lru_rs::config::LruCacheConfig;
use lru_rs::{ConcurrentLruCache, Error};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("Concurrent Cache Usage Examples");
    println!("================================\n");

    basic_concurrent_usage()?;
    println!();

    zero_copy_get_with()?;
    println!();

    throughput()?;

    Ok(())
}

/// Basic multi-threaded cache usage
fn basic_concurrent_usage() -> Result<(), Error> {
    println!("1. Basic Concurrent Usage");
    println!("   -----------------------");

    let cache = Arc::new(ConcurrentLruCache::new(1000)?);
    let num_threads = 4;
    let ops_per_thread = 1000;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("thread{}-key{}", thread_id, i);
                    cache.put(key.clone(), thread_id * 10000 + i);
                    let _ = cache.get(&key);
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }

    // 4000 distinct keys through 1000 slots
    println!("   capacity: {}", cache.cap());
    println!("   len:      {}", cache.len());
    Ok(())
}

/// Reading part of a value under the lock without cloning it
fn zero_copy_get_with() -> Result<(), Error> {
    println!("2. get_with / get_mut_with");
    println!("   -----------------------");

    let cache: ConcurrentLruCache<String, Vec<u8>> =
        ConcurrentLruCache::init(LruCacheConfig::new(16)?, None);
    cache.put("blob".to_string(), vec![0u8; 4096]);

    let len = cache.get_with("blob", |v| v.len());
    println!("   blob length without cloning: {:?}", len);

    cache.get_mut_with("blob", |v| v.truncate(10));
    println!("   after truncate: {:?}", cache.get_with("blob", |v| v.len()));
    Ok(())
}

/// Rough throughput as threads contend on the one lock
fn throughput() -> Result<(), Error> {
    println!("3. Throughput");
    println!("   ----------");

    let ops_per_thread = 100_000;
    for num_threads in [1, 2, 4, 8] {
        let cache = Arc::new(ConcurrentLruCache::new(10_000)?);
        let start = Instant::now();

        let handles: Vec<_> = (0..num_threads)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..ops_per_thread {
                        let key = (t * ops_per_thread + i) % 20_000;
                        if i % 5 == 0 {
                            cache.put(key, i);
                        } else {
                            let _ = cache.get(&key);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            let _ = handle.join();
        }

        let elapsed = start.elapsed();
        let total = (num_threads * ops_per_thread) as f64;
        println!(
            "   {} threads: {:>8.0} ops/ms",
            num_threads,
            total / elapsed.as_secs_f64() / 1000.0
        );
    }
    Ok(())
}
