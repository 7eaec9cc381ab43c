//! Error types for fallible growth of a [`UniqueIntSet`].
//!
//! Infallible insertion treats allocation failure as fatal, like every
//! standard collection. [`UniqueIntSet::try_reserve`] and
//! [`UniqueIntSet::try_insert`] report the failure instead, through
//! [`CapacityError`].
//!
//! [`UniqueIntSet`]: crate::set::UniqueIntSet
//! [`UniqueIntSet::try_reserve`]: crate::set::UniqueIntSet::try_reserve
//! [`UniqueIntSet::try_insert`]: crate::set::UniqueIntSet::try_insert

use std::alloc::Layout;
use std::collections::TryReserveError;

use smallvec::CollectionAllocErr;

/// Represents a failed attempt to grow a [`UniqueIntSet`].
///
/// The set is left exactly as it was before the failing call.
///
/// # Examples
///
/// ```rust
/// use unique_int_set::error::CapacityError;
///
/// let error = CapacityError::CapacityOverflow;
/// assert_eq!(
///     format!("{error}"),
///     "UniqueIntSet: requested capacity exceeds the addressable size"
/// );
/// ```
///
/// [`UniqueIntSet`]: crate::set::UniqueIntSet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// The requested element count overflowed `usize` or `isize::MAX` bytes.
    CapacityOverflow,
    /// The allocator refused to provide the backing storage.
    AllocationFailed {
        /// The layout that was requested from the allocator.
        layout: Layout,
    },
    /// The hashed membership index could not reserve room.
    IndexReservationFailed(TryReserveError),
}

impl std::fmt::Display for CapacityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityOverflow => write!(
                formatter,
                "UniqueIntSet: requested capacity exceeds the addressable size"
            ),
            Self::AllocationFailed { layout } => write!(
                formatter,
                "UniqueIntSet: allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
            Self::IndexReservationFailed(error) => {
                write!(formatter, "UniqueIntSet: membership index: {error}")
            }
        }
    }
}

impl std::error::Error for CapacityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IndexReservationFailed(error) => Some(error),
            Self::CapacityOverflow | Self::AllocationFailed { .. } => None,
        }
    }
}

impl From<CollectionAllocErr> for CapacityError {
    fn from(error: CollectionAllocErr) -> Self {
        match error {
            CollectionAllocErr::CapacityOverflow => Self::CapacityOverflow,
            CollectionAllocErr::AllocErr { layout } => Self::AllocationFailed { layout },
        }
    }
}

impl From<TryReserveError> for CapacityError {
    fn from(error: TryReserveError) -> Self {
        Self::IndexReservationFailed(error)
    }
}
