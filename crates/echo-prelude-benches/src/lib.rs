// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Benchmark-only crate; see `benches/`.
#![forbid(unsafe_code)]

/// Deterministic activation pattern shared by the rule table benches.
///
/// Yields `count` indices in `[0, universe)` with a fixed odd stride so every
/// index is hit before any repeats, then wraps into repeats.
pub fn stride_indices(universe: usize, count: usize) -> impl Iterator<Item = usize> {
    const STRIDE: usize = 7919;
    (0..count).map(move |i| i.wrapping_mul(STRIDE) % universe.max(1))
}
