//! Ember demo - fills a small cache past capacity with logging hooks wired up

use anyhow::Result;
use clap::Parser;
use embercache::EmberCache;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of items)
    #[arg(short, long, default_value_t = 10)]
    capacity: usize,

    /// Number of items to write through the cache
    #[arg(short, long, default_value_t = 20)]
    items: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting ember demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);

    let mut cache: EmberCache<String, i64> = EmberCache::new(args.capacity);

    // Item pushed out of the cache
    cache.on_evict(|key, entry| {
        info!("Evicted {} (dirty: {})", key, entry.is_dirty());
    });

    // Item should be saved (cache detected that it changed)
    cache.on_save(|key, value| {
        warn!("Cache must evict {} and changes were detected, saving {}", key, value);
    });

    // Someone asked for a key that is not cached; load it on the spot
    cache.on_load(|key| {
        info!("{} accessed but not in the cache, loading it", key);
        Some(1000)
    });

    // Fill past capacity to force evictions
    for i in 0..args.items {
        cache.put(format!("item-{}", i), i as i64);
    }

    // Overwrite one surviving item so the save hook has work to do
    let last = format!("item-{}", args.items.saturating_sub(1));
    cache.put(last, -1);

    // Access something that was never written
    let loaded = cache.get(&"item-9999".to_string())?.copied();
    info!("Retrieved: {:?}", loaded);

    info!(
        "hits: {}, misses: {}, evictions: {}",
        cache.stats().hits(),
        cache.stats().misses(),
        cache.stats().evictions()
    );

    cache.flush();
    info!("Cache flushed, done");

    Ok(())
}
