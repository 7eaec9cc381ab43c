//! Duplicate-rejecting integer collections.
//!
//! - [`UniqueIntSet`]: append-only set of `i32` values in insertion order
//!
//! # Examples
//!
//! ```rust
//! use unique_int_set::set::UniqueIntSet;
//!
//! let mut set = UniqueIntSet::new();
//! set.insert(3);
//! set.insert(5);
//! set.insert(3); // already present, ignored
//!
//! assert_eq!(set.len(), 2);
//! let elements: Vec<i32> = set.into_iter().collect();
//! assert_eq!(elements, vec![3, 5]);
//! ```
//!
//! # Hashing
//!
//! Sets larger than 32 elements keep a hashed index next to their storage.
//! The `fxhash` and `ahash` features swap std's `RandomState` for a faster
//! hasher; results are identical either way.

mod index;
mod unique_int_set;

pub use unique_int_set::INITIAL_CAPACITY;
pub use unique_int_set::UniqueIntSet;
pub use unique_int_set::UniqueIntSetIntoIterator;
pub use unique_int_set::UniqueIntSetIterator;
