//! Insertion-ordered, duplicate-rejecting integer collection.
//!
//! This module provides [`UniqueIntSet`], an append-only collection of `i32`
//! values that rejects duplicates and remembers the order in which distinct
//! values were first added.
//!
//! # Overview
//!
//! `UniqueIntSet` stores its elements in a `SmallVec` with room for
//! [`INITIAL_CAPACITY`] values inline, so empty and small sets never touch
//! the heap. Membership is answered by a linear scan while the set is small
//! and by a hashed index once it grows past 32 elements. Either way the
//! backing storage is the single source of insertion order.
//!
//! # Time Complexity
//!
//! | Operation     | n <= 32           | n > 32               |
//! |---------------|-------------------|----------------------|
//! | `contains`    | O(n)              | O(1) expected        |
//! | `insert`      | O(n)              | O(1) amortized       |
//! | `position`    | O(n)              | O(n)                 |
//! | `len`         | O(1)              | O(1)                 |
//! | `get`         | O(1)              | O(1)                 |
//! | `iter`        | O(1) + O(n)       | O(1) + O(n)          |
//!
//! # Examples
//!
//! ```rust
//! use unique_int_set::set::UniqueIntSet;
//!
//! let mut set = UniqueIntSet::new();
//! assert!(!set.contains(5));
//!
//! set.insert(3);
//! set.insert(5);
//! set.insert(3);
//!
//! assert!(set.contains(5));
//! assert_eq!(set.as_slice(), &[3, 5]);
//! ```

use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use super::index::MembershipIndex;
use crate::error::CapacityError;

/// Number of elements a new set holds without allocating.
pub const INITIAL_CAPACITY: usize = 10;

type Storage = SmallVec<[i32; INITIAL_CAPACITY]>;

/// An append-only collection of unique integers in insertion order.
///
/// Values are only ever added. Inserting a value that is already present
/// leaves the collection untouched, so the sequence returned by
/// [`as_slice`](Self::as_slice) never contains duplicates and never changes
/// the relative order of existing elements.
///
/// # Examples
///
/// ```rust
/// use unique_int_set::set::UniqueIntSet;
///
/// let mut set = UniqueIntSet::new();
/// set.insert(-1);
/// set.insert(0);
///
/// assert!(set.contains(-1));
/// assert!(!set.contains(2));
/// assert_eq!(set.as_slice(), &[-1, 0]);
/// ```
#[derive(Clone, Default)]
pub struct UniqueIntSet {
    elements: Storage,
    index: MembershipIndex,
}

impl UniqueIntSet {
    /// Creates an empty set with room for [`INITIAL_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let set = UniqueIntSet::new();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(5));
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
            index: MembershipIndex::Scan,
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// Capacities below [`INITIAL_CAPACITY`] are rounded up to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let set = UniqueIntSet::with_capacity(100);
    /// assert!(set.capacity() >= 100);
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity.max(INITIAL_CAPACITY)),
            index: MembershipIndex::Scan,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns `true` if `value` has been inserted.
    ///
    /// Never fails, and always returns `false` for an empty set.
    ///
    /// # Complexity
    ///
    /// - O(n) linear scan for sets of up to 32 elements
    /// - O(1) expected for larger sets (hashed index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let set: UniqueIntSet = [1, 2].into();
    /// assert!(set.contains(1));
    /// assert!(!set.contains(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.index.contains(&self.elements, value)
    }

    /// Appends `value` unless it is already present.
    ///
    /// Returns `true` if the value was appended and `false` if it was
    /// already in the set, in which case nothing changes. Existing elements
    /// are never reordered.
    ///
    /// # Panics
    ///
    /// Panics (or aborts, depending on the global allocator) if growing the
    /// backing storage fails. Use [`try_insert`](Self::try_insert) to
    /// handle that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let mut set = UniqueIntSet::new();
    /// assert!(set.insert(5));
    /// assert!(!set.insert(5));
    /// assert_eq!(set.as_slice(), &[5]);
    /// ```
    pub fn insert(&mut self, value: i32) -> bool {
        if self.contains(value) {
            return false;
        }
        self.elements.push(value);
        self.index.record_appended(&self.elements);
        true
    }

    /// Like [`insert`](Self::insert), but reports allocation failure.
    ///
    /// On error the set is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the backing storage or the membership
    /// index cannot grow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let mut set = UniqueIntSet::new();
    /// assert_eq!(set.try_insert(7), Ok(true));
    /// assert_eq!(set.try_insert(7), Ok(false));
    /// ```
    pub fn try_insert(&mut self, value: i32) -> Result<bool, CapacityError> {
        if self.contains(value) {
            return Ok(false);
        }
        self.try_reserve(1)?;
        self.elements.push(value);
        self.index.record_appended(&self.elements);
        Ok(true)
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the requested capacity overflows or the
    /// allocator fails. The set is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let mut set = UniqueIntSet::new();
    /// set.try_reserve(64).unwrap();
    /// assert!(set.capacity() >= 64);
    ///
    /// assert!(set.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        self.elements
            .try_reserve(additional)
            .map_err(CapacityError::from)
            .and_then(|()| {
                self.index
                    .try_reserve(&self.elements, additional)
                    .map_err(CapacityError::from)
            })
            .inspect_err(|error| {
                log::debug!("unique-int-set: reserving {additional} elements failed: {error}");
            })
    }

    /// Returns the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    /// Returns the element at `position` in insertion order.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&i32> {
        self.elements.get(position)
    }

    /// Returns the first element inserted, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&i32> {
        self.elements.first()
    }

    /// Returns the most recently inserted element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&i32> {
        self.elements.last()
    }

    /// Returns the insertion position of `value`, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let set: UniqueIntSet = [3, 5, 3, 8].into();
    /// assert_eq!(set.position(8), Some(2));
    /// assert_eq!(set.position(4), None);
    /// ```
    #[must_use]
    pub fn position(&self, value: i32) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        self.elements.iter().position(|&element| element == value)
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_int_set::set::UniqueIntSet;
    ///
    /// let set: UniqueIntSet = [3, 1, 2].into();
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&3, &1, &2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> UniqueIntSetIterator<'_> {
        UniqueIntSetIterator {
            inner: self.elements.iter(),
        }
    }

    #[cfg(test)]
    const fn has_hashed_index(&self) -> bool {
        self.index.is_hashed()
    }

    #[cfg(test)]
    fn spilled(&self) -> bool {
        self.elements.spilled()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`UniqueIntSet`] in insertion order.
#[derive(Clone, Debug)]
pub struct UniqueIntSetIterator<'a> {
    inner: std::slice::Iter<'a, i32>,
}

impl<'a> Iterator for UniqueIntSetIterator<'a> {
    type Item = &'a i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for UniqueIntSetIterator<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for UniqueIntSetIterator<'_> {}

impl FusedIterator for UniqueIntSetIterator<'_> {}

/// Owning iterator over a [`UniqueIntSet`] in insertion order.
pub struct UniqueIntSetIntoIterator {
    inner: smallvec::IntoIter<[i32; INITIAL_CAPACITY]>,
}

impl Iterator for UniqueIntSetIntoIterator {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for UniqueIntSetIntoIterator {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for UniqueIntSetIntoIterator {}

impl FusedIterator for UniqueIntSetIntoIterator {}

impl fmt::Debug for UniqueIntSetIntoIterator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("UniqueIntSetIntoIterator")
            .field(&self.inner.as_slice())
            .finish()
    }
}

impl IntoIterator for UniqueIntSet {
    type Item = i32;
    type IntoIter = UniqueIntSetIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        UniqueIntSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a UniqueIntSet {
    type Item = &'a i32;
    type IntoIter = UniqueIntSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Construction
// =============================================================================

impl FromIterator<i32> for UniqueIntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i32> for UniqueIntSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> Extend<&'a i32> for UniqueIntSet {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<const N: usize> From<[i32; N]> for UniqueIntSet {
    fn from(values: [i32; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<Vec<i32>> for UniqueIntSet {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

// =============================================================================
// Comparison and formatting
// =============================================================================

impl PartialEq for UniqueIntSet {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for UniqueIntSet {}

impl Hash for UniqueIntSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for UniqueIntSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for UniqueIntSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for UniqueIntSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct UniqueIntSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for UniqueIntSetVisitor {
    type Value = UniqueIntSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input keep their first occurrence.
        let mut set = UniqueIntSet::new();
        while let Some(element) = seq.next_element::<i32>()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UniqueIntSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UniqueIntSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
