//! Example: finding stored sets that are subsets of a query

use subset_trie::{BitSet, Result, SubsetIndex};

fn main() -> Result<()> {
    println!("=== Subset Search Example ===");

    let mut index = SubsetIndex::<u32>::new(8);
    index.add(101, &BitSet::from_elements(8, [1, 3])?)?;
    index.add(102, &BitSet::from_elements(8, [1])?)?;
    index.add(103, &BitSet::from_elements(8, [1, 3, 5])?)?;
    println!("Stored {} sets in {} trie nodes", index.len(), index.node_count());

    let query = BitSet::from_elements(8, [1, 3, 4, 6])?;
    let results = index.find_subsets(&query)?;
    // 103 is excluded: it contains 5, which the query does not
    println!("Subsets of {query}: {} found", results.len());
    for id in &results {
        println!("  ID: {id}");
    }

    index.remove(&101, &BitSet::from_elements(8, [1, 3])?)?;
    println!(
        "After removing 101: {:?} ({} nodes)",
        index.find_subsets(&query)?,
        index.node_count()
    );

    Ok(())
}
