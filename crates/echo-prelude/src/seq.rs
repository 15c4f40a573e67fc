// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable cons sequences with structural sharing and deferred tails.
//!
//! A [`Seq`] is the empty sequence, a cons cell (`head` plus a shared `tail`),
//! or a deferred sequence whose contents are produced by a thunk the first time
//! a cursor reaches it and memoized from then on. Cells are reference-counted,
//! so consing onto a sequence never copies it and many sequences may share one
//! tail.
//!
//! Traversal goes through a [`Cursor`]: single-pass, not restartable, and
//! independent of every other cursor over the same sequence. Restarting means
//! asking the sequence for a fresh cursor.
//!
//! ```
//! use echo_prelude::Seq;
//!
//! let shared = Seq::cons(2, Seq::cons(3, Seq::empty()));
//! let a = Seq::cons(1, shared.clone());
//! let b = Seq::cons(9, shared);
//! assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![9, 2, 3]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::PreludeError;

type Thunk<T> = Box<dyn FnOnce() -> Seq<T> + Send>;

/// An immutable, structurally shared sequence.
///
/// Cloning is O(1) and shares every cell. A `Seq<T>` is `Send + Sync` whenever
/// `T` is, so one sequence may be traversed from several threads at once, each
/// thread with its own cursor.
pub struct Seq<T>(Node<T>);

enum Node<T> {
    Empty,
    Cons(Arc<ConsCell<T>>),
    Deferred(Arc<Deferred<T>>),
}

struct ConsCell<T> {
    head: T,
    tail: Seq<T>,
}

struct Deferred<T> {
    // Taken on first force so captures are released once the result is memoized.
    thunk: Mutex<Option<Thunk<T>>>,
    forced: OnceLock<Seq<T>>,
}

impl<T> Deferred<T> {
    fn force(&self) -> &Seq<T> {
        self.forced.get_or_init(|| {
            let thunk = self
                .thunk
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            // Only `None` if an earlier force panicked inside the thunk.
            thunk.map_or_else(Seq::empty, |thunk| thunk())
        })
    }
}

impl<T> Seq<T> {
    /// The sequence with no elements.
    pub const fn empty() -> Self {
        Self(Node::Empty)
    }

    /// A sequence yielding `head` and then every element of `tail`.
    ///
    /// `tail` is shared, not copied.
    pub fn cons(head: T, tail: Self) -> Self {
        Self(Node::Cons(Arc::new(ConsCell { head, tail })))
    }

    /// A sequence whose contents are produced by `thunk` on first traversal.
    ///
    /// The thunk runs at most once per `defer` call, no matter how many clones
    /// or cursors reach it; its result is memoized and the thunk (with
    /// everything it captured) is dropped. It must not force the sequence it
    /// is producing.
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        Self(Node::Deferred(Arc::new(Deferred {
            thunk: Mutex::new(Some(Box::new(thunk))),
            forced: OnceLock::new(),
        })))
    }

    /// A fresh cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor {
            state: CursorState::NotStarted(self),
        }
    }

    /// Same as [`cursor`](Self::cursor); reads better in iterator chains.
    pub fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }

    /// `true` if the sequence yields nothing. Forces a deferred front.
    pub fn is_empty(&self) -> bool {
        self.resolve().is_none()
    }

    /// Follows deferred links until the first cons cell or the end.
    fn resolve(&self) -> Option<&ConsCell<T>> {
        let mut seq = self;
        loop {
            match &seq.0 {
                Node::Empty => return None,
                Node::Cons(cell) => return Some(cell.as_ref()),
                Node::Deferred(deferred) => seq = deferred.force(),
            }
        }
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self(match &self.0 {
            Node::Empty => Node::Empty,
            Node::Cons(cell) => Node::Cons(Arc::clone(cell)),
            Node::Deferred(deferred) => Node::Deferred(Arc::clone(deferred)),
        })
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    /// Forces and prints every element; do not use on infinite sequences.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Self::empty(), |tail, head| Self::cons(head, tail))
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T> Drop for ConsCell<T> {
    fn drop(&mut self) {
        unlink(std::mem::take(&mut self.tail).0);
    }
}

impl<T> Drop for Deferred<T> {
    fn drop(&mut self) {
        if let Some(seq) = self.forced.take() {
            unlink(seq.0);
        }
    }
}

/// Releases uniquely owned successors of `next` (cons cells and forced
/// deferred links alike) in a loop, so dropping a long chain never recurses
/// once per link. Stops at the first node something else still shares.
fn unlink<T>(mut next: Node<T>) {
    loop {
        next = match next {
            Node::Cons(cell) => match Arc::try_unwrap(cell) {
                Ok(mut owned) => std::mem::take(&mut owned.tail).0,
                Err(_) => break,
            },
            Node::Deferred(deferred) => match Arc::try_unwrap(deferred) {
                Ok(mut owned) => match owned.forced.take() {
                    Some(seq) => seq.0,
                    None => break,
                },
                Err(_) => break,
            },
            Node::Empty => break,
        };
    }
}

/// Single-pass traversal state over a [`Seq`].
///
/// `current` is only readable between a successful [`Cursor::advance`] and the
/// next one. Tail delegation is flattened: leaving a cell's head moves the
/// cursor straight onto the tail's first cell, so each advance is O(1)
/// amortized however deep the sequence is.
pub struct Cursor<'a, T> {
    state: CursorState<'a, T>,
}

enum CursorState<'a, T> {
    /// No advance yet; the whole sequence is ahead.
    NotStarted(&'a Seq<T>),
    /// The cell's head is current; its tail is next.
    HeadProduced(&'a ConsCell<T>),
    /// Ran off the end.
    Exhausted,
}

impl<'a, T> Cursor<'a, T> {
    /// Moves to the next element. Returns `false` once the sequence is
    /// exhausted, and on every call after that.
    pub fn advance(&mut self) -> bool {
        let ahead = match self.state {
            CursorState::NotStarted(seq) => seq,
            CursorState::HeadProduced(cell) => &cell.tail,
            CursorState::Exhausted => return false,
        };
        match ahead.resolve() {
            Some(cell) => {
                self.state = CursorState::HeadProduced(cell);
                true
            }
            None => {
                self.state = CursorState::Exhausted;
                false
            }
        }
    }

    /// The element the cursor is on.
    ///
    /// # Errors
    ///
    /// [`PreludeError::EmptyCursorAccess`] before the first successful
    /// [`advance`](Self::advance) and after exhaustion.
    pub fn current(&self) -> Result<&'a T, PreludeError> {
        match self.state {
            CursorState::HeadProduced(cell) => Ok(&cell.head),
            CursorState::NotStarted(_) | CursorState::Exhausted => {
                Err(PreludeError::EmptyCursorAccess)
            }
        }
    }

    /// `true` once an advance has run off the end.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, CursorState::Exhausted)
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.advance() {
            self.current().ok()
        } else {
            None
        }
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}
