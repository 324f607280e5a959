//! Example: Basic BitSet usage

use subset_trie::{BitSet, Result};

fn main() -> Result<()> {
    println!("=== Basic BitSet Example ===");

    let mut bs = BitSet::new(16)?;
    bs.add(5)?;
    bs.add(10)?;
    bs.add(15)?;
    println!("Set: {bs} ({} of {} elements)", bs.len(), bs.capacity());

    println!("Contains 5? {}", bs.contains(5)?);
    println!("Contains 6? {}", bs[6]);

    // Adding an existing element is a no-op
    println!("Added 5 again? {}", bs.add(5)?);

    bs.remove(10)?;
    println!("After removing 10: {bs}");

    match bs.add(16) {
        Ok(_) => println!("Unexpectedly added 16"),
        Err(err) => println!("Adding 16 failed: {err}"),
    }

    bs.fill();
    println!("Filled: {bs}");
    bs.clear();
    println!("Cleared: {bs} (empty: {})", bs.is_empty());

    Ok(())
}
