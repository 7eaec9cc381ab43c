//! Membership index for [`UniqueIntSet`](super::UniqueIntSet).
//!
//! Small sets answer membership by scanning the backing storage. Once a set
//! holds more than [`SCAN_LIMIT`] elements (or reserves room for that many),
//! the index switches to a hash set mirroring the storage. The switch is
//! one-way and invisible through the public API.
//!
//! # State Transitions
//!
//! ```text
//!              append / reserve (n > SCAN_LIMIT)
//!     Scan ─────────────────────────────────────► Hashed
//! ```
//!
//! The hasher is chosen by feature flag: `fxhash` selects
//! `rustc_hash::FxBuildHasher`, `ahash` selects `ahash::RandomState`, and
//! otherwise std's `RandomState` is used.

use std::collections::{HashSet, TryReserveError};

/// Largest element count answered by linear scan.
pub(crate) const SCAN_LIMIT: usize = 32;

#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexHasher = std::collections::hash_map::RandomState;

/// Acceleration structure for `contains`.
///
/// When `Hashed`, the set holds exactly the values of the backing storage.
#[derive(Clone, Debug, Default)]
pub(crate) enum MembershipIndex {
    #[default]
    Scan,
    Hashed(HashSet<i32, IndexHasher>),
}

impl MembershipIndex {
    /// Returns `true` if `value` is one of `elements`.
    #[inline]
    pub(crate) fn contains(&self, elements: &[i32], value: i32) -> bool {
        match self {
            Self::Scan => elements.iter().any(|&element| element == value),
            Self::Hashed(set) => set.contains(&value),
        }
    }

    /// Records the element just pushed onto `elements`.
    ///
    /// `elements` must already contain the new value as its last element.
    pub(crate) fn record_appended(&mut self, elements: &[i32]) {
        match self {
            Self::Scan => {
                if elements.len() > SCAN_LIMIT {
                    *self = Self::Hashed(Self::build(elements));
                }
            }
            Self::Hashed(set) => {
                if let Some(&value) = elements.last() {
                    set.insert(value);
                }
            }
        }
    }

    /// Makes room for `additional` more elements without further allocation.
    ///
    /// A `Scan` index whose storage would grow past [`SCAN_LIMIT`] is
    /// switched to `Hashed` here, so the later append cannot allocate.
    pub(crate) fn try_reserve(
        &mut self,
        elements: &[i32],
        additional: usize,
    ) -> Result<(), TryReserveError> {
        match self {
            Self::Hashed(set) => set.try_reserve(additional),
            Self::Scan => {
                if elements.len().saturating_add(additional) <= SCAN_LIMIT {
                    return Ok(());
                }
                let mut set = HashSet::with_hasher(IndexHasher::default());
                set.try_reserve(elements.len().saturating_add(additional))?;
                set.extend(elements.iter().copied());
                log::trace!(
                    "unique-int-set: hashed membership index built ahead of growth ({} + {additional} elements)",
                    elements.len()
                );
                *self = Self::Hashed(set);
                Ok(())
            }
        }
    }

    fn build(elements: &[i32]) -> HashSet<i32, IndexHasher> {
        let mut set =
            HashSet::with_capacity_and_hasher(elements.len() * 2, IndexHasher::default());
        set.extend(elements.iter().copied());
        log::trace!(
            "unique-int-set: hashed membership index built at {} elements",
            elements.len()
        );
        set
    }

    #[cfg(test)]
    pub(crate) const fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }
}
