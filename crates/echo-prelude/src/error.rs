// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for prelude contract violations.

/// Contract violations raised by the prelude data structures.
///
/// All variants are programmer errors: the caller broke a precondition. None
/// of them is transient, none is retried internally, and no operation that
/// returns one leaves partially applied state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreludeError {
    /// The value of an [`Optional::Absent`](crate::Optional::Absent) was read.
    #[error("[EMPTY_VALUE_ACCESS] cannot read the value of an absent optional")]
    EmptyValueAccess,
    /// A [`Cursor`](crate::Cursor) was read before its first successful advance
    /// or after it ran off the end of the sequence.
    #[error("[EMPTY_CURSOR_ACCESS] cursor has no current element")]
    EmptyCursorAccess,
    /// An index fell outside `[0, bound)`.
    ///
    /// Raised both for addressing a slot outside a rule universe and for
    /// pushing onto a full [`IndexStack`](crate::IndexStack), in which case
    /// `index` is the write position that was refused.
    #[error("[INDEX_OUT_OF_RANGE] index {index} outside [0, {bound})")]
    IndexOutOfRange {
        /// The offending index or write position.
        index: usize,
        /// The exclusive upper bound that was violated.
        bound: usize,
    },
}

impl PreludeError {
    /// Returns `Ok(())` when `index < bound`, otherwise an
    /// [`IndexOutOfRange`](PreludeError::IndexOutOfRange) error.
    #[inline]
    pub(crate) fn check_index(index: usize, bound: usize) -> Result<(), PreludeError> {
        if index < bound {
            Ok(())
        } else {
            tracing::warn!(index, bound, "index outside rule universe");
            Err(PreludeError::IndexOutOfRange { index, bound })
        }
    }
}
