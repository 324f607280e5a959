//! Example: tracing spans emitted by SubsetIndex
//!
//! Run with:
//! ```text
//! RUST_LOG=subset_trie=trace cargo run --example 04_profile_index --features profiling
//! ```

use std::time::Instant;

use subset_trie::{BitSet, Result, SubsetIndex};
use tracing_subscriber::EnvFilter;

const CAPACITY: usize = 24;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("subset_trie=debug")),
        )
        .with_target(false)
        .init();

    let mut index = SubsetIndex::<u32>::new(CAPACITY);
    let sets: Vec<BitSet> = (0..500u32)
        .map(|i| {
            let elements = (0..3).map(|k| (i as usize * 7 + k * 5) % CAPACITY);
            BitSet::from_elements(CAPACITY, elements)
        })
        .collect::<Result<_>>()?;

    let start = Instant::now();
    {
        let _span = tracing::info_span!("populate", sets = sets.len()).entered();
        for (id, bs) in sets.iter().enumerate() {
            index.add(id as u32, bs)?;
        }
    }
    tracing::info!(nodes = index.node_count(), elapsed = ?start.elapsed(), "index populated");

    let query = BitSet::from_elements(CAPACITY, (0..CAPACITY).step_by(2))?;
    let hits = index.find_subsets(&query)?;
    tracing::info!(hits = hits.len(), "query {query}");

    for (id, bs) in sets.iter().enumerate().take(50) {
        index.remove(&(id as u32), bs)?;
    }
    tracing::info!(nodes = index.node_count(), remaining = index.len(), "after removals");

    Ok(())
}
