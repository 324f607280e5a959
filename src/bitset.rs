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

//! Fixed-capacity BitSet backed by a Vec<u64>.
//!
//! Elements are integers in `[0, capacity)`. Single-element mutations keep the
//! cached length up to date incrementally; bulk word-wise operations recount it
//! from scratch.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr, Index, Not, Sub};

use crate::error::{Result, SetError};

const WORD_BITS: usize = u64::BITS as usize;

/// Dense bit-vector set with a capacity fixed at construction.
///
/// `Default` yields a capacity-0 set; every element-level operation on it
/// fails with [`SetError::ZeroCapacity`].
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    capacity: usize,
    len: usize,
    words: Vec<u64>,
}

impl BitSet {
    /// Create an empty set holding elements in `[0, capacity)`.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_fill(capacity, false)
    }

    /// Create a set containing every element in `[0, capacity)`.
    pub fn filled(capacity: usize) -> Result<Self> {
        Self::with_fill(capacity, true)
    }

    /// Create a set that is either empty or full.
    pub fn with_fill(capacity: usize, fill: bool) -> Result<Self> {
        if capacity == 0 {
            return Err(SetError::InvalidCapacity);
        }

        let mut set = Self {
            capacity,
            len: 0,
            words: vec![0; capacity.div_ceil(WORD_BITS)],
        };
        if fill {
            set.fill();
        }
        Ok(set)
    }

    /// Build a set from a sequence of elements.
    /// Fails on the first invalid element; nothing is returned in that case.
    pub fn from_elements<I>(capacity: usize, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new(capacity)?;
        for element in elements {
            set.add(element)?;
        }
        Ok(set)
    }

    /// Upper bound (exclusive) on element values.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements in the set. O(1), served from the cached count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no bit is set.
    ///
    /// Scans the words instead of reading the cached count.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Insert `element`. Returns whether the set changed.
    pub fn add(&mut self, element: usize) -> Result<bool> {
        let (word_idx, mask) = self.locate(element)?;
        if self.words[word_idx] & mask != 0 {
            return Ok(false);
        }
        self.words[word_idx] |= mask;
        self.len += 1;
        Ok(true)
    }

    /// Remove `element`. Returns whether the set changed.
    pub fn remove(&mut self, element: usize) -> Result<bool> {
        let (word_idx, mask) = self.locate(element)?;
        if self.words[word_idx] & mask == 0 {
            return Ok(false);
        }
        self.words[word_idx] &= !mask;
        self.len -= 1;
        Ok(true)
    }

    /// Check if `element` is in the set.
    pub fn contains(&self, element: usize) -> Result<bool> {
        let (word_idx, mask) = self.locate(element)?;
        Ok(self.words[word_idx] & mask != 0)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.len = 0;
    }

    /// Insert every element in `[0, capacity)`.
    pub fn fill(&mut self) {
        self.words.fill(!0);
        self.mask_tail();
        self.len = self.capacity;
    }

    /// Elements present in both sets.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.intersect_with(other)?;
        Ok(result)
    }

    /// Elements present in either set.
    pub fn union(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.union_with(other)?;
        Ok(result)
    }

    /// Elements present in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.difference_with(other)?;
        Ok(result)
    }

    /// In-place intersection.
    pub fn intersect_with(&mut self, other: &Self) -> Result<()> {
        self.combine(other, |a, b| a & b)
    }

    /// In-place union.
    pub fn union_with(&mut self, other: &Self) -> Result<()> {
        self.combine(other, |a, b| a | b)
    }

    /// In-place difference.
    pub fn difference_with(&mut self, other: &Self) -> Result<()> {
        self.combine(other, |a, b| a & !b)
    }

    /// Every element of `[0, capacity)` not in this set.
    pub fn complement(&self) -> Self {
        let mut result = self.clone();
        result.invert();
        result
    }

    /// In-place complement.
    pub fn invert(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.mask_tail();
        self.recount();
    }

    /// Word-wise equality. Unlike `==`, reports differing capacities as an error.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.check_capacity(other)?;
        Ok(self.words == other.words)
    }

    /// Returns true if this set shares any element with `other`.
    pub fn intersects(&self, other: &Self) -> Result<bool> {
        self.check_capacity(other)?;
        Ok(self
            .words
            .iter()
            .zip(&other.words)
            .any(|(&a, &b)| a & b != 0))
    }

    /// Returns true if every element of `other` is also in `self`.
    pub fn contains_set(&self, other: &Self) -> Result<bool> {
        self.check_capacity(other)?;
        Ok(self
            .words
            .iter()
            .zip(&other.words)
            .all(|(&a, &b)| !a & b == 0))
    }

    /// Returns true if every element of `self` is also in `other`.
    pub fn is_subset_of(&self, other: &Self) -> Result<bool> {
        other.contains_set(self)
    }

    /// Returns iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
            remaining: self.len,
        }
    }

    /// Collect the elements in ascending order.
    pub fn sparse(&self) -> Result<Vec<usize>> {
        if self.capacity == 0 {
            return Err(SetError::ZeroCapacity);
        }
        Ok(self.iter().collect())
    }

    /// Unchecked bit test for callers that already validated the capacity.
    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.capacity);
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    pub(crate) fn check_capacity(&self, other: &Self) -> Result<()> {
        if self.capacity != other.capacity {
            return Err(SetError::CapacityMismatch {
                expected: self.capacity,
                found: other.capacity,
            });
        }
        Ok(())
    }

    fn locate(&self, element: usize) -> Result<(usize, u64)> {
        if self.capacity == 0 {
            return Err(SetError::ZeroCapacity);
        }
        if element >= self.capacity {
            return Err(SetError::OutOfRange {
                element,
                capacity: self.capacity,
            });
        }
        Ok((element / WORD_BITS, 1 << (element % WORD_BITS)))
    }

    fn combine(&mut self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Result<()> {
        self.check_capacity(other)?;
        for (word, &rhs) in self.words.iter_mut().zip(&other.words) {
            *word = op(*word, rhs);
        }
        self.recount();
        Ok(())
    }

    /// Bits past `capacity` in the last word must stay zero.
    fn mask_tail(&mut self) {
        let tail_bits = self.capacity % WORD_BITS;
        if tail_bits != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << tail_bits) - 1;
            }
        }
    }

    /// Recompute the cached length after a bulk operation (Kernighan's method).
    fn recount(&mut self) {
        let mut len = 0;
        for &word in &self.words {
            let mut remaining = word;
            while remaining != 0 {
                remaining &= remaining - 1;
                len += 1;
            }
        }
        self.len = len;
    }
}

/// Sets of different capacities are never equal. Use [`BitSet::try_eq`] to
/// surface the mismatch as an error instead.
impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.words == other.words
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.words.hash(state);
    }
}

/// Canonical form: `[`, then `X` or `-` per position, then `]`.
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for index in 0..self.capacity {
            f.write_char(if self.bit(index) { 'X' } else { '-' })?;
        }
        f.write_char(']')
    }
}

/// Panics on an invalid element, like slice indexing.
/// Use [`BitSet::contains`] for the fallible form.
impl Index<usize> for BitSet {
    type Output = bool;

    fn index(&self, element: usize) -> &bool {
        match self.contains(element) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(err) => panic!("{err}"),
        }
    }
}

impl BitAnd<&BitSet> for &BitSet {
    type Output = Result<BitSet>;

    fn bitand(self, rhs: &BitSet) -> Result<BitSet> {
        self.intersection(rhs)
    }
}

impl BitOr<&BitSet> for &BitSet {
    type Output = Result<BitSet>;

    fn bitor(self, rhs: &BitSet) -> Result<BitSet> {
        self.union(rhs)
    }
}

impl Sub<&BitSet> for &BitSet {
    type Output = Result<BitSet>;

    fn sub(self, rhs: &BitSet) -> Result<BitSet> {
        self.difference(rhs)
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        self.complement()
    }
}

impl Not for BitSet {
    type Output = BitSet;

    fn not(mut self) -> BitSet {
        self.invert();
        self
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Ascending iterator over the elements of a [`BitSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let trailing = self.current_word.trailing_zeros();
                self.current_word &= self.current_word - 1; // clear lowest set bit
                self.remaining -= 1;
                return Some(self.word_idx * WORD_BITS + trailing as usize);
            }

            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current_word = self.words[self.word_idx];
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
