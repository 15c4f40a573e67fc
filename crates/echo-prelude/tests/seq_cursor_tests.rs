// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]
//! Cursor semantics over shared and deferred sequences.

use echo_prelude::{PreludeError, Seq};
use proptest::prelude::*;

fn collect<T: Clone>(seq: &Seq<T>) -> Vec<T> {
    seq.iter().cloned().collect()
}

#[test]
fn cons_yields_head_then_tail() {
    let seq = Seq::cons(1, Seq::cons(2, Seq::empty()));
    assert_eq!(collect(&seq), vec![1, 2]);
    assert_eq!(collect(&Seq::<i32>::empty()), Vec::<i32>::new());
}

#[test]
fn fresh_cursor_restarts_where_an_old_one_cannot() {
    let seq = Seq::cons('a', Seq::cons('b', Seq::empty()));
    let mut spent = seq.cursor();
    while spent.advance() {}
    assert_eq!(spent.current(), Err(PreludeError::EmptyCursorAccess));
    assert!(!spent.advance());
    assert_eq!(seq.cursor().next(), Some(&'a'));
}

#[test]
fn shared_tail_is_not_copied() {
    let tail: Seq<String> = ["x", "y"].iter().map(|s| (*s).to_owned()).collect();
    let left = Seq::cons("l".to_owned(), tail.clone());
    let right = Seq::cons("r".to_owned(), tail.clone());
    let l_second = left.iter().nth(1).unwrap();
    let r_second = right.iter().nth(1).unwrap();
    assert!(std::ptr::eq(l_second, r_second), "tails must share cells");
}

#[test]
fn deferred_sequences_can_be_nested_and_empty() {
    let seq: Seq<u8> = Seq::defer(|| Seq::defer(|| Seq::cons(1, Seq::defer(Seq::empty))));
    assert!(!seq.is_empty());
    assert_eq!(collect(&seq), vec![1]);
    assert!(Seq::<u8>::defer(Seq::empty).is_empty());
}

#[test]
fn one_sequence_many_threads() {
    let seq: Seq<u64> = (0..1_000).collect();
    let expected: u64 = (0..1_000).sum();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| seq.iter().sum::<u64>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

proptest! {
    #[test]
    fn collected_sequence_preserves_order(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let seq: Seq<i32> = items.iter().copied().collect();
        prop_assert_eq!(collect(&seq), items);
    }

    #[test]
    fn interleaved_cursors_do_not_interfere(
        items in prop::collection::vec(any::<u16>(), 1..32),
        steps in prop::collection::vec(any::<bool>(), 0..96),
    ) {
        let seq: Seq<u16> = items.iter().copied().collect();
        let mut a = seq.cursor();
        let mut b = seq.cursor();
        let (mut seen_a, mut seen_b) = (Vec::new(), Vec::new());
        for step_a in steps {
            if step_a {
                seen_a.extend(a.next().copied());
            } else {
                seen_b.extend(b.next().copied());
            }
        }
        seen_a.extend(a.copied());
        seen_b.extend(b.copied());
        prop_assert_eq!(&seen_a, &items);
        prop_assert_eq!(&seen_b, &items);
    }
}
