// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generation-stamped sparse index set.
//!
//! Membership lives in a direct-indexed stamp array; insertion order lives in
//! an [`IndexStack`]. A slot is a member iff its stamp equals the current
//! generation, so [`SparseIndexSet::clear`] bumps the generation instead of
//! walking the flags. Stamps are only rewritten when the `u32` generation
//! wraps, which happens once every ~4 billion clears.

use crate::error::PreludeError;
use crate::index_stack::IndexStack;

/// A set over `[0, capacity)` with O(1) insert, O(1) membership, O(1) clear,
/// and enumeration in first-insertion order.
///
/// # Invariant
///
/// For every `i < capacity`: `stamps[i] == generation` iff `i` appears in
/// `members`, and it appears there exactly once.
#[derive(Clone, Debug)]
pub struct SparseIndexSet {
    members: IndexStack,
    stamps: Box<[u32]>,
    generation: u32,
}

impl SparseIndexSet {
    /// Allocates an empty set over the universe `[0, capacity)`.
    pub fn new(capacity: usize) -> Self {
        Self {
            members: IndexStack::new(capacity),
            stamps: vec![0; capacity].into_boxed_slice(),
            // Stamps start at 0, so generation 1 means "nothing marked".
            generation: 1,
        }
    }

    /// Adds `index` if absent. Returns `true` when it was newly added.
    ///
    /// # Errors
    ///
    /// [`PreludeError::IndexOutOfRange`] when `index >= capacity`.
    #[inline]
    pub fn insert(&mut self, index: usize) -> Result<bool, PreludeError> {
        PreludeError::check_index(index, self.stamps.len())?;
        if self.stamps[index] == self.generation {
            return Ok(false);
        }
        // Distinct members never exceed capacity; push before stamping anyway.
        self.members.push(index)?;
        self.stamps[index] = self.generation;
        Ok(true)
    }

    /// Returns `true` if `index` is a member.
    ///
    /// # Errors
    ///
    /// [`PreludeError::IndexOutOfRange`] when `index >= capacity`.
    #[inline]
    pub fn contains(&self, index: usize) -> Result<bool, PreludeError> {
        PreludeError::check_index(index, self.stamps.len())?;
        Ok(self.stamps[index] == self.generation)
    }

    /// Removes every member in O(1).
    pub fn clear(&mut self) {
        // Invalidate flags before dropping the member list.
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamps.fill(0);
            self.generation = 1;
        }
        self.members.clear();
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Size of the universe this set ranges over.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.stamps.len()
    }

    /// Members in first-insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        self.members.as_slice()
    }

    /// Iterates members in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a SparseIndexSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
