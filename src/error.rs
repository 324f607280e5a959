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

//! Error types

use std::fmt;

/// Error type shared by [`BitSet`](crate::BitSet) and
/// [`SubsetIndex`](crate::SubsetIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// A bit set was explicitly constructed with capacity 0
    InvalidCapacity,

    /// Element-level operation on a zero-capacity (default) bit set
    ZeroCapacity,

    /// Element index is not below the set's capacity
    OutOfRange { element: usize, capacity: usize },

    /// Operands were built for different capacities
    CapacityMismatch { expected: usize, found: usize },
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::InvalidCapacity => {
                write!(f, "Cannot explicitly create a bit set with capacity 0")
            }
            SetError::ZeroCapacity => write!(f, "This bit set has a capacity of 0"),
            SetError::OutOfRange { element, capacity } => {
                write!(f, "Element {element} is outside of the range [0, {capacity})")
            }
            SetError::CapacityMismatch { expected, found } => {
                write!(f, "Capacity mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for SetError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, SetError>;
