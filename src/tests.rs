// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scenario tests combining BitSet and SubsetIndex

#[cfg(test)]
mod tests {
    #![allow(clippy::module_inception)]
    use crate::{BitSet, Result, SetError, SubsetIndex};

    fn sorted<T: Ord>(mut ids: Vec<T>) -> Vec<T> {
        ids.sort();
        ids
    }

    #[test]
    fn test_canonical_string_of_sparse_set() -> Result<()> {
        let bs = BitSet::from_elements(10, [0, 3, 9])?;
        assert_eq!(bs.to_string(), "[X--X-----X]");
        assert_eq!(format!("{bs}"), "[X--X-----X]");
        Ok(())
    }

    #[test]
    fn test_zero_capacity_errors() {
        let mut empty = BitSet::default();
        assert_eq!(empty.add(0), Err(SetError::ZeroCapacity));
        assert_eq!(BitSet::new(0).unwrap_err(), SetError::InvalidCapacity);
    }

    #[test]
    fn test_subset_search_scenario() -> Result<()> {
        let mut index = SubsetIndex::<u32>::new(8);
        index.add(101, &BitSet::from_elements(8, [1, 3])?)?;
        index.add(102, &BitSet::from_elements(8, [1])?)?;
        index.add(103, &BitSet::from_elements(8, [1, 3, 5])?)?;

        let query = BitSet::from_elements(8, [1, 3, 4, 6])?;
        assert_eq!(sorted(index.find_subsets(&query)?), vec![101, 102]);

        // 103 becomes reachable once bit 5 is allowed
        let mut wider = query.clone();
        wider.add(5)?;
        assert_eq!(sorted(index.find_subsets(&wider)?), vec![101, 102, 103]);
        Ok(())
    }

    #[test]
    fn test_index_agrees_with_contains_set() -> Result<()> {
        let capacity = 6;
        let mut index = SubsetIndex::<usize>::new(capacity);
        let mut stored = Vec::new();

        // Every pattern of 6 bits, keyed by its numeric value
        for pattern in 0..(1usize << capacity) {
            let bs = BitSet::from_elements(
                capacity,
                (0..capacity).filter(|bit| pattern & (1 << bit) != 0),
            )?;
            index.add(pattern, &bs)?;
            stored.push(bs);
        }

        for query in stored.iter().step_by(7) {
            let expected: Vec<usize> = stored
                .iter()
                .enumerate()
                .filter(|(_, bs)| query.contains_set(bs).unwrap())
                .map(|(pattern, _)| pattern)
                .collect();
            assert_eq!(sorted(index.find_subsets(query)?), expected);
            assert_eq!(expected.len(), 1 << query.len());
        }
        Ok(())
    }

    #[test]
    fn test_remove_then_query() -> Result<()> {
        let mut index = SubsetIndex::<u32>::new(12);
        let a = BitSet::from_elements(12, [2, 7, 11])?;
        let b = BitSet::from_elements(12, [2])?;
        index.add(1, &a)?;
        index.add(2, &b)?;
        index.add(1, &a)?;

        assert!(index.remove(&1, &a)?);
        assert_eq!(sorted(index.find_subsets(&a)?), vec![1, 2]);

        assert!(index.remove(&1, &a)?);
        assert_eq!(index.find_subsets(&a)?, vec![2]);
        assert!(!index.remove(&1, &a)?);

        assert!(index.remove(&2, &b)?);
        assert!(index.is_empty());
        assert_eq!(index.node_count(), 1);
        Ok(())
    }

    #[test]
    fn test_sparse_round_trip() -> Result<()> {
        let original = BitSet::from_elements(100, [0, 17, 63, 64, 99])?;
        let mut rebuilt = BitSet::new(original.capacity())?;
        for element in original.sparse()? {
            rebuilt.add(element)?;
        }
        assert_eq!(rebuilt.try_eq(&original), Ok(true));
        assert_eq!(rebuilt.len(), 5);
        Ok(())
    }
}
