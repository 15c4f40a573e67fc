// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Echo rule prelude.
//!
//! Small building blocks shared by rule definitions and the rule evaluation
//! loop:
//!
//! - [`Optional`] — a closed present/absent sum type with a total match
//!   combinator and fail-fast value access.
//! - [`Seq`] — an immutable, structurally shared cons sequence whose tails may
//!   be deferred, traversed through independent single-pass [`Cursor`]s.
//! - [`IndexStack`] / [`SparseIndexSet`] — fixed-capacity index storage that is
//!   cleared in O(1) and never reallocates across cycles.
//! - [`RuleTable`] — the per-cycle active/support tracker over a fixed rule
//!   universe.
//!
//! # Ownership
//!
//! Nothing in this crate is global. A [`RuleTable`] is owned by exactly one
//! evaluation loop and handed around explicitly; [`Optional`] and [`Seq`] values
//! are immutable once built and may be shared for reading across threads.
//!
//! # Failure policy
//!
//! Every contract violation (reading an absent value, reading a cursor with no
//! current element, addressing an index outside the universe) surfaces as a
//! [`PreludeError`]. Nothing is silently ignored and nothing panics.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

pub mod config;
mod error;
mod index_stack;
mod optional;
mod rule_result;
mod rule_table;
mod seq;
mod sparse_set;

pub use config::{ConfigError, ConfigService, ConfigStore, RuleTableConfig, RULE_TABLE_CONFIG_KEY};
pub use error::PreludeError;
pub use index_stack::IndexStack;
pub use optional::Optional;
pub use rule_result::RuleResult;
pub use rule_table::{CycleSummary, RuleTable};
pub use seq::{Cursor, Seq};
pub use sparse_set::SparseIndexSet;
