//! Example: set algebra between bit sets of equal capacity

use subset_trie::{BitSet, Result};

fn main() -> Result<()> {
    println!("=== Set Operations Example ===");

    let a = BitSet::from_elements(10, [1, 2, 3, 5])?;
    let b = BitSet::from_elements(10, [3, 4, 5, 6])?;
    println!("A          = {a}");
    println!("B          = {b}");
    println!("A & B      = {}", (&a & &b)?);
    println!("A | B      = {}", (&a | &b)?);
    println!("A - B      = {}", (&a - &b)?);
    println!("!A         = {}", !&a);

    println!("A intersects B? {}", a.intersects(&b)?);
    let small = BitSet::from_elements(10, [2, 3])?;
    println!("A contains {small}? {}", a.contains_set(&small)?);

    let mut c = a.clone();
    c.union_with(&b)?;
    println!("A |= B     = {c} ({} elements)", c.len());

    let other = BitSet::new(12)?;
    if let Err(err) = a.union(&other) {
        println!("Mixing capacities fails: {err}");
    }

    Ok(())
}
