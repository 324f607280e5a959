//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use subset_trie::prelude::*;
//! ```

pub use crate::bitset::BitSet;
pub use crate::error::{Result, SetError};
pub use crate::subset_index::SubsetIndex;
