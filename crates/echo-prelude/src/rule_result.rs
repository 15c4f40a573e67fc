// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Completion status reported by a rule body.

use serde::{Deserialize, Serialize};

/// What a rule reports at the end of a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleResult {
    /// The rule finished and need not be scheduled again.
    Done,
    /// The rule still has work left for later cycles.
    Working,
}

impl RuleResult {
    /// `true` for [`RuleResult::Done`].
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl std::fmt::Display for RuleResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Done => "done",
            Self::Working => "working",
        })
    }
}
