//! # unique-int-set
//!
//! An append-only, duplicate-rejecting collection of integers that keeps
//! insertion order.
//!
//! ## Overview
//!
//! [`UniqueIntSet`](set::UniqueIntSet) offers two core operations:
//!
//! - **`contains`**: membership test, linear scan for small sets and a
//!   hashed index for large ones
//! - **`insert`**: append a value only if it is not already present
//!
//! Values are never removed. The order in which distinct values were first
//! inserted is the order of iteration.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence of integers
//! - `fxhash`: use `rustc-hash` for the hashed index
//! - `ahash`: use `ahash` for the hashed index
//!
//! ## Example
//!
//! ```rust
//! use unique_int_set::prelude::*;
//!
//! let mut set = UniqueIntSet::new();
//! set.insert(3);
//! set.insert(5);
//! set.insert(3);
//!
//! assert!(set.contains(3));
//! assert_eq!(set.as_slice(), &[3, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use unique_int_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CapacityError;
    pub use crate::set::*;
}

pub mod error;
pub mod set;
