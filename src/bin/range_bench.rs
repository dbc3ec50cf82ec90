//! Range Cache benchmark
//!
//! Runs one seeded workload with and without the cache, checks both totals
//! agree and reports the speedup.

use anyhow::{ensure, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use range_cache::workload::{compare, generate, random_array};
use range_cache::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "range_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let mut array_rng = StdRng::seed_from_u64(config.array_seed);
    let base = random_array(config.array_size, 1, 100, &mut array_rng)
        .context("failed to build array")?;

    let mut workload_rng = StdRng::seed_from_u64(config.workload_seed);
    let ops = generate(
        config.array_size,
        config.query_count,
        &config.workload(),
        &mut workload_rng,
    )
    .context("failed to generate workload")?;
    let updates = ops.iter().filter(|op| op.is_update()).count();

    info!(
        "Array: n={}, operations: q={} ({} updates), capacity={}",
        config.array_size,
        ops.len(),
        updates,
        config.cache_capacity
    );

    let report = compare(&base, &ops, config.cache_capacity).context("benchmark run failed")?;

    ensure!(
        report.is_consistent(),
        "cached total {} differs from uncached total {}",
        report.cached_total,
        report.uncached_total
    );

    info!(
        "No cache : {:8.2} s",
        report.uncached_elapsed.as_secs_f64()
    );
    info!(
        "LRU cache: {:8.2} s  (speedup x{:.2}, hit rate {:.1}%)",
        report.cached_elapsed.as_secs_f64(),
        report.speedup(),
        report.stats.hit_rate() * 100.0
    );

    Ok(())
}
