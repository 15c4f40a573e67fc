// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-cycle active/support tracking over a fixed rule universe.
//!
//! The evaluation loop owns one [`RuleTable`] per rule universe, sized at
//! startup to the largest rule index + 1, and drives it once per cycle:
//!
//! 1. [`RuleTable::reset_cycle`] (at the start of every cycle, or at the end of
//!    every cycle; pick one and stay consistent),
//! 2. any number of [`RuleTable::add_active`] / [`RuleTable::add_support`] as
//!    rules fire,
//! 3. reads through [`RuleTable::active_indices`] / [`RuleTable::is_active`]
//!    to drive downstream decisions.
//!
//! Nothing is allocated after construction.

use tracing::{debug, trace};

use crate::config::{ConfigError, RuleTableConfig};
use crate::error::PreludeError;
use crate::index_stack::IndexStack;
use crate::sparse_set::SparseIndexSet;

/// Counts reported by [`RuleTable::reset_cycle`] for the cycle that just ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CycleSummary {
    /// Zero-based number of the cycle that ended.
    pub cycle: u64,
    /// Distinct active indices recorded during the cycle.
    pub active: usize,
    /// Support events recorded during the cycle (duplicates included).
    pub support: usize,
}

/// Active-index tracker for one rule universe.
///
/// - The **active** set deduplicates: activating an index twice in a cycle is
///   free, and [`active_indices`](Self::active_indices) lists each active index
///   once in first-activation order.
/// - The **support** log does not: every [`add_support`](Self::add_support)
///   appends, so the log may hold the same index several times. Its capacity
///   is the universe size, which bounds the support events per cycle.
///
/// # Invariant
///
/// `is_active(i)` holds iff `i` appears in `active_indices()`, for every `i` in
/// the universe, at every point between calls.
///
/// A table is not safe for concurrent mutation; it belongs to a single
/// evaluation loop.
#[derive(Clone, Debug)]
pub struct RuleTable {
    active: SparseIndexSet,
    support: IndexStack,
    cycle: u64,
}

impl RuleTable {
    /// Allocates a table over `[0, universe_size)` with nothing active.
    pub fn new(universe_size: usize) -> Self {
        debug!(universe_size, "rule table allocated");
        Self {
            active: SparseIndexSet::new(universe_size),
            support: IndexStack::new(universe_size),
            cycle: 0,
        }
    }

    /// Builds a table from validated configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when the configuration fails
    /// [`RuleTableConfig::validate`].
    pub fn from_config(config: &RuleTableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.universe_size))
    }

    /// Number of indices in the universe.
    #[inline]
    pub fn universe_size(&self) -> usize {
        self.active.capacity()
    }

    /// Marks `index` active for the current cycle.
    ///
    /// Returns `true` on first activation in this cycle and `false` for a
    /// repeat, which leaves the table unchanged.
    ///
    /// # Errors
    ///
    /// [`PreludeError::IndexOutOfRange`] when `index` is outside the universe.
    #[inline]
    pub fn add_active(&mut self, index: usize) -> Result<bool, PreludeError> {
        self.active.insert(index)
    }

    /// Appends `index` to the support log for the current cycle.
    ///
    /// # Errors
    ///
    /// [`PreludeError::IndexOutOfRange`] when `index` is outside the universe,
    /// or when the log already holds `universe_size` events this cycle.
    #[inline]
    pub fn add_support(&mut self, index: usize) -> Result<(), PreludeError> {
        PreludeError::check_index(index, self.universe_size())?;
        self.support.push(index)
    }

    /// O(1) membership test on the active set.
    ///
    /// # Errors
    ///
    /// [`PreludeError::IndexOutOfRange`] when `index` is outside the universe.
    #[inline]
    pub fn is_active(&self, index: usize) -> Result<bool, PreludeError> {
        self.active.contains(index)
    }

    /// Active indices in first-activation order.
    #[inline]
    pub fn active_indices(&self) -> &[usize] {
        self.active.as_slice()
    }

    /// Support events in recording order.
    #[inline]
    pub fn support_indices(&self) -> &[usize] {
        self.support.as_slice()
    }

    /// Number of distinct active indices.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of support events recorded this cycle.
    #[inline]
    pub fn support_count(&self) -> usize {
        self.support.len()
    }

    /// Zero-based number of the current cycle.
    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Ends the current cycle: deactivates every active index, empties the
    /// support log, and advances the cycle counter.
    ///
    /// Runs in O(1); the active flags are invalidated by generation rather
    /// than cleared slot by slot.
    pub fn reset_cycle(&mut self) -> CycleSummary {
        let summary = CycleSummary {
            cycle: self.cycle,
            active: self.active.len(),
            support: self.support.len(),
        };
        trace!(
            cycle = summary.cycle,
            active = summary.active,
            support = summary.support,
            "rule table cycle reset"
        );
        self.active.clear();
        self.support.clear();
        self.cycle = self.cycle.wrapping_add(1);
        summary
    }
}
