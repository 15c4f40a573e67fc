// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for echo-prelude crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`cycles`] - Scripted rule-table cycles and a naive reference model

pub mod config;
pub mod cycles;

pub use config::InMemoryConfigStore;
pub use cycles::{CycleEvent, CycleScript, ReferenceTable};
