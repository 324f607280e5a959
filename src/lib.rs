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

//! Subset Trie - fixed-capacity bit sets and a subset-query index
//!
//! [`BitSet`] is a dense bit-vector set over `[0, capacity)` with set algebra
//! and ascending iteration. [`SubsetIndex`] stores `(identifier, BitSet)`
//! pairs in a binary trie keyed on bit position and returns every stored set
//! that is a subset of a query.

pub mod bitset;
pub mod error;
pub mod prelude;
pub mod subset_index;

#[cfg(test)]
mod tests;

pub use bitset::*;
pub use error::*;
pub use subset_index::*;
