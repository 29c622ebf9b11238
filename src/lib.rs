//! `GrowVec`: a growable contiguous vector with a deterministic growth
//! policy and raw-position cursors.
//!
//! The vector owns exactly one heap buffer and tracks its logical length and
//! allocated capacity separately. Capacity grows by exact doubling starting
//! from 1, so the capacity reached by any sequence of pushes is reproducible:
//! pushing past a full buffer of capacity `c` always yields capacity `2 * c`.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut vec = GrowVec::new();
//! assert_eq!(vec.capacity(), 0);
//!
//! for i in 0..5 {
//!     vec.push(i);
//! }
//! // Observed capacities on the way: 1, 2, 4, 8.
//! assert_eq!(vec.len(), 5);
//! assert_eq!(vec.capacity(), 8);
//!
//! vec.clear();
//! // Clearing keeps the allocation for reuse.
//! assert_eq!(vec.capacity(), 8);
//! ```
//!
//! # Construction forms
//!
//! ```
//! use growvec::GrowVec;
//!
//! // Filled with the element default; capacity is exactly the length.
//! let zeros: GrowVec<i32> = GrowVec::with_len(3);
//! assert_eq!(zeros.as_slice(), &[0, 0, 0]);
//!
//! // From a literal sequence; capacity is exactly the sequence length.
//! let vec = GrowVec::from([1, 2, 3]);
//! assert_eq!(vec.capacity(), 3);
//!
//! // Cloning preserves the source's capacity, not just its length.
//! let mut source: GrowVec<i32> = GrowVec::new();
//! source.reserve(10);
//! source.push(7);
//! let copy = source.clone();
//! assert_eq!(copy.capacity(), 10);
//! ```
//!
//! # Comparison
//!
//! Vectors compare lexicographically: the first pairwise mismatch decides,
//! and a strict prefix orders before its extension.
//!
//! ```
//! use growvec::GrowVec;
//!
//! assert!(GrowVec::from([1, 2, 3]) < GrowVec::from([2, 3, 4]));
//! assert!(GrowVec::from([1, 2, 3]) < GrowVec::from([1, 2, 3, 4]));
//! ```
//!
//! # Cursors
//!
//! [`GrowVec::begin`] and [`GrowVec::end`] hand out [`Cursor`]s: copyable
//! raw positions supporting element-sized arithmetic, signed distance, and
//! address ordering. A cursor holds no reference to its vector and is
//! invalidated by any reallocation of the buffer it points into, so
//! dereferencing is `unsafe`.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut vec = GrowVec::from([10, 20, 30]);
//! let first = vec.begin();
//! let last = vec.end();
//! assert_eq!(last - first, 3);
//! assert_eq!(unsafe { *(first + 1).as_ref() }, 20);
//! ```
//!
//! # Iterator support
//!
//! For bounds-safe traversal the vector also implements the standard
//! iterator protocol, which borrows the vector and is therefore immune to
//! the invalidation hazards of raw cursors:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut vec = GrowVec::from([1, 2, 3]);
//! for value in &mut vec {
//!     *value *= 10;
//! }
//! let collected: Vec<i32> = vec.iter().copied().collect();
//! assert_eq!(collected, vec![10, 20, 30]);
//! ```

mod core;
mod cursor;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::GrowVec;
pub use crate::cursor::Cursor;
pub use crate::error::GrowVecError;
pub use crate::iter::{GrowVecIter, GrowVecIterMut};
