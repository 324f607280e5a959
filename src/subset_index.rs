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

//! Binary trie over bit positions answering "which stored sets are subsets
//! of this query?".
//!
//! Level `i` of the trie branches on bit `i`: the absent child is taken when
//! the bit is clear, the present child when it is set. A stored set therefore
//! lives at depth `capacity`, at the end of the path spelled by its bits.

use slotmap::{new_key_type, SlotMap};
use smallvec::{smallvec, SmallVec};

#[cfg(feature = "profiling")]
use tracing::info_span;

use crate::bitset::BitSet;
use crate::error::{Result, SetError};

new_key_type! {
    /// Arena handle of a trie node.
    struct NodeId;
}

/// Frontier nodes kept inline before spilling to the heap
const INLINE_FRONTIER: usize = 16;

type Frontier = SmallVec<[NodeId; INLINE_FRONTIER]>;

/// Trie node. Every node except the root is referenced by exactly one child
/// slot of its parent.
#[derive(Debug, Clone)]
struct Node<T> {
    values: SmallVec<[T; 2]>,
    absent: Option<NodeId>,
    present: Option<NodeId>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self {
            values: SmallVec::new(),
            absent: None,
            present: None,
        }
    }

    fn child(&self, bit: bool) -> Option<NodeId> {
        if bit {
            self.present
        } else {
            self.absent
        }
    }

    fn child_slot(&mut self, bit: bool) -> &mut Option<NodeId> {
        if bit {
            &mut self.present
        } else {
            &mut self.absent
        }
    }

    /// No values and no children: the node must not stay in the trie.
    fn is_vacant(&self) -> bool {
        self.values.is_empty() && self.absent.is_none() && self.present.is_none()
    }
}

/// Index of `(identifier, BitSet)` pairs supporting subset queries.
///
/// Identifiers need not be unique; the same pair may be stored several times
/// and each copy is tracked separately.
///
/// ```
/// use subset_trie::{BitSet, SubsetIndex};
///
/// let mut index = SubsetIndex::new(8);
/// index.add(101, &BitSet::from_elements(8, [1, 3])?)?;
/// index.add(103, &BitSet::from_elements(8, [1, 3, 5])?)?;
///
/// let query = BitSet::from_elements(8, [1, 3, 4, 6])?;
/// assert_eq!(index.find_subsets(&query)?, vec![101]);
/// # Ok::<(), subset_trie::SetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SubsetIndex<T = u32> {
    capacity: usize,
    root: NodeId,
    nodes: SlotMap<NodeId, Node<T>>,
    len: usize,
}

impl<T> SubsetIndex<T> {
    /// Create an empty index for sets of the given capacity.
    pub fn new(capacity: usize) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new());
        Self {
            capacity,
            root,
            nodes,
            len: 0,
        }
    }

    /// Capacity every operand must have.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every stored pair and release the whole trie.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.insert(Node::new());
        self.len = 0;
    }

    /// Store `id` under `set`, creating the path on demand.
    pub fn add(&mut self, id: T, set: &BitSet) -> Result<()> {
        self.check_capacity(set)?;

        #[cfg(feature = "profiling")]
        let span = info_span!(
            "subset_index.add",
            capacity = self.capacity,
            elements = set.len(),
            nodes = self.nodes.len()
        );
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        let mut node = self.root;
        for level in 0..self.capacity {
            let bit = set.bit(level);
            node = match self.nodes[node].child(bit) {
                Some(child) => child,
                None => {
                    let child = self.nodes.insert(Node::new());
                    *self.nodes[node].child_slot(bit) = Some(child);
                    child
                }
            };
        }

        self.nodes[node].values.push(id);
        self.len += 1;
        Ok(())
    }

    /// Remove one stored copy of `(id, set)`.
    ///
    /// Returns `Ok(false)` if the pair is not stored. When several copies
    /// exist, exactly one is removed; which one is unspecified, and the order
    /// of the remaining identifiers at that path may change. Nodes left with
    /// no values and no children are pruned on the way back to the root.
    pub fn remove(&mut self, id: &T, set: &BitSet) -> Result<bool>
    where
        T: PartialEq,
    {
        self.check_capacity(set)?;

        #[cfg(feature = "profiling")]
        let span = info_span!(
            "subset_index.remove",
            capacity = self.capacity,
            elements = set.len(),
            nodes = self.nodes.len()
        );
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        // parents[level] is the node whose child at `level` lies on the path
        let mut parents = Vec::with_capacity(self.capacity);
        let mut node = self.root;
        for level in 0..self.capacity {
            parents.push(node);
            match self.nodes[node].child(set.bit(level)) {
                Some(child) => node = child,
                None => return Ok(false),
            }
        }

        let values = &mut self.nodes[node].values;
        let Some(position) = values.iter().position(|value| value == id) else {
            return Ok(false);
        };
        values.swap_remove(position);
        self.len -= 1;

        let _released = self.prune(node, &parents, set);
        #[cfg(feature = "profiling")]
        tracing::trace!(released = _released, "pruned vacant trie nodes");

        Ok(true)
    }

    /// Identifiers of every stored set that is a subset of `query`.
    ///
    /// The trie is walked one level at a time. Where the query has the bit
    /// set, both children stay viable; where it is clear, only the absent
    /// child does. Results come in traversal order, not sorted.
    pub fn find_subsets(&self, query: &BitSet) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.check_capacity(query)?;

        #[cfg(feature = "profiling")]
        let span = info_span!(
            "subset_index.find_subsets",
            capacity = self.capacity,
            query_elements = query.len(),
            nodes = self.nodes.len()
        );
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        let mut frontier: Frontier = smallvec![self.root];
        let mut next = Frontier::new();

        for level in 0..self.capacity {
            if frontier.is_empty() {
                break;
            }
            next.clear();

            let either = query.bit(level);
            for &id in &frontier {
                let node = &self.nodes[id];
                next.extend(node.absent);
                if either {
                    next.extend(node.present);
                }
            }

            std::mem::swap(&mut frontier, &mut next);
        }

        let total: usize = frontier
            .iter()
            .map(|&id| self.nodes[id].values.len())
            .sum();
        let mut result = Vec::with_capacity(total);
        for &id in &frontier {
            result.extend(self.nodes[id].values.iter().cloned());
        }

        #[cfg(feature = "profiling")]
        tracing::debug!(matches = result.len(), leaves = frontier.len(), "subset query done");

        Ok(result)
    }

    fn check_capacity(&self, set: &BitSet) -> Result<()> {
        if set.capacity() != self.capacity {
            return Err(SetError::CapacityMismatch {
                expected: self.capacity,
                found: set.capacity(),
            });
        }
        Ok(())
    }

    /// Walk from `leaf` toward the root, detaching vacant nodes. Stops at the
    /// first node that still holds a value or a child. The root is never
    /// released. Returns the number of released nodes.
    fn prune(&mut self, leaf: NodeId, parents: &[NodeId], set: &BitSet) -> usize {
        let mut released = 0;
        let mut node = leaf;
        for (level, &parent) in parents.iter().enumerate().rev() {
            if !self.nodes[node].is_vacant() {
                break;
            }
            self.nodes.remove(node);
            *self.nodes[parent].child_slot(set.bit(level)) = None;
            released += 1;
            node = parent;
        }
        released
    }
}
