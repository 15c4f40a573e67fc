// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-capacity index stack with O(1) clear.

use crate::error::PreludeError;

/// A fixed-capacity stack of indices recording push order.
///
/// Backing storage is allocated once at construction. [`clear`](Self::clear)
/// only resets the logical length: stale slots stay in memory and are
/// overwritten by later pushes, so a stack reused every cycle never
/// reallocates.
///
/// # Invariant
///
/// `slots[..top]` are exactly the values pushed since the last clear, in push
/// order, and `top <= capacity` always.
#[derive(Clone, Debug)]
pub struct IndexStack {
    slots: Box<[usize]>,
    top: usize,
}

impl IndexStack {
    /// Allocates a stack that holds at most `capacity` indices.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            top: 0,
        }
    }

    /// Appends `value` at the current logical length.
    ///
    /// # Errors
    ///
    /// [`PreludeError::IndexOutOfRange`] when the stack is full. The stack is
    /// unchanged in that case.
    #[inline]
    pub fn push(&mut self, value: usize) -> Result<(), PreludeError> {
        let Some(slot) = self.slots.get_mut(self.top) else {
            return Err(PreludeError::IndexOutOfRange {
                index: self.top,
                bound: self.slots.len(),
            });
        };
        *slot = value;
        self.top += 1;
        Ok(())
    }

    /// Resets the logical length to zero without touching storage.
    #[inline]
    pub fn clear(&mut self) {
        self.top = 0;
    }

    /// Number of values pushed since the last clear.
    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    /// `true` if nothing was pushed since the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Maximum number of values the stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The live values in push order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.top]
    }

    /// Iterates the live values in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a IndexStack {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order_and_duplicates() {
        let mut stack = IndexStack::new(4);
        stack.push(3).unwrap();
        stack.push(1).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.as_slice(), &[3, 1, 3]);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.capacity(), 4);
    }

    #[test]
    fn push_past_capacity_is_index_out_of_range() {
        let mut stack = IndexStack::new(2);
        assert_eq!(stack.push(0), Ok(()));
        assert_eq!(stack.push(1), Ok(()));
        assert_eq!(
            stack.push(2),
            Err(PreludeError::IndexOutOfRange { index: 2, bound: 2 })
        );
        // Refused push leaves the stack untouched.
        assert_eq!(stack.as_slice(), &[0, 1]);
    }

    #[test]
    fn clear_resets_length_and_slots_are_reused() {
        let mut stack = IndexStack::new(3);
        stack.push(7).unwrap();
        stack.push(8).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.as_slice(), &[] as &[usize]);
        stack.push(9).unwrap();
        assert_eq!(stack.as_slice(), &[9]);
        assert_eq!(stack.capacity(), 3);
    }

    #[test]
    fn zero_capacity_refuses_every_push() {
        let mut stack = IndexStack::new(0);
        assert_eq!(
            stack.push(0),
            Err(PreludeError::IndexOutOfRange { index: 0, bound: 0 })
        );
    }
}
