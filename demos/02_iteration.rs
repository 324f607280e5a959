//! Example: iterating the elements of a BitSet

use subset_trie::{BitSet, Result};

fn main() -> Result<()> {
    println!("=== Iteration Example ===");

    let bs = BitSet::from_elements(200, [0, 7, 64, 65, 130, 199])?;

    print!("Elements:");
    for element in &bs {
        print!(" {element}");
    }
    println!();

    let evens: Vec<usize> = bs.iter().filter(|e| e % 2 == 0).collect();
    println!("Even elements: {evens:?}");
    println!("Sparse form: {:?}", bs.sparse()?);

    // A fresh iterator always starts from the smallest element
    println!("First element: {:?}", bs.iter().next());

    Ok(())
}
