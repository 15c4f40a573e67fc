// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted rule-table cycles and a naive reference model.
//!
//! [`CycleScript`] records the calls an evaluation loop would make against a
//! [`RuleTable`]. [`ReferenceTable`] implements the same contract the slow,
//! obvious way (a `Vec<bool>` of flags cleared slot by slot on reset) so tests
//! can replay one script against both and compare.

use echo_prelude::{PreludeError, RuleTable};

/// One call an evaluation loop makes against a rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleEvent {
    /// `add_active(index)`.
    Activate(usize),
    /// `add_support(index)`.
    Support(usize),
    /// `reset_cycle()`.
    Reset,
}

/// Builder for a sequence of [`CycleEvent`]s.
///
/// ```
/// use echo_prelude::RuleTable;
/// use echo_prelude_dry_tests::CycleScript;
///
/// let script = CycleScript::new().activate(2).activate(2).activate(4);
/// let mut table = RuleTable::new(5);
/// script.replay(&mut table);
/// assert_eq!(table.active_indices(), &[2, 4]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CycleScript {
    events: Vec<CycleEvent>,
}

impl CycleScript {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an activation.
    pub fn activate(mut self, index: usize) -> Self {
        self.events.push(CycleEvent::Activate(index));
        self
    }

    /// Appends a support event.
    pub fn support(mut self, index: usize) -> Self {
        self.events.push(CycleEvent::Support(index));
        self
    }

    /// Appends a cycle reset.
    pub fn reset(mut self) -> Self {
        self.events.push(CycleEvent::Reset);
        self
    }

    /// The recorded events in order.
    pub fn events(&self) -> &[CycleEvent] {
        &self.events
    }

    /// Runs every event against `table`, returning each call's outcome.
    pub fn replay(&self, table: &mut RuleTable) -> Vec<Result<(), PreludeError>> {
        self.events
            .iter()
            .map(|event| match *event {
                CycleEvent::Activate(i) => table.add_active(i).map(|_| ()),
                CycleEvent::Support(i) => table.add_support(i),
                CycleEvent::Reset => {
                    table.reset_cycle();
                    Ok(())
                }
            })
            .collect()
    }
}

impl From<Vec<CycleEvent>> for CycleScript {
    fn from(events: Vec<CycleEvent>) -> Self {
        Self { events }
    }
}

/// Obviously-correct rule table used as a test oracle.
#[derive(Clone, Debug)]
pub struct ReferenceTable {
    flags: Vec<bool>,
    active: Vec<usize>,
    support: Vec<usize>,
}

impl ReferenceTable {
    /// A model over `[0, universe_size)`.
    pub fn new(universe_size: usize) -> Self {
        Self {
            flags: vec![false; universe_size],
            active: Vec::new(),
            support: Vec::new(),
        }
    }

    fn range_check(&self, index: usize) -> Result<(), PreludeError> {
        if index < self.flags.len() {
            Ok(())
        } else {
            Err(PreludeError::IndexOutOfRange {
                index,
                bound: self.flags.len(),
            })
        }
    }

    /// Applies one event and returns what the real table should return.
    pub fn apply(&mut self, event: CycleEvent) -> Result<(), PreludeError> {
        match event {
            CycleEvent::Activate(i) => {
                self.range_check(i)?;
                if !self.flags[i] {
                    self.flags[i] = true;
                    self.active.push(i);
                }
                Ok(())
            }
            CycleEvent::Support(i) => {
                self.range_check(i)?;
                if self.support.len() == self.flags.len() {
                    return Err(PreludeError::IndexOutOfRange {
                        index: self.support.len(),
                        bound: self.flags.len(),
                    });
                }
                self.support.push(i);
                Ok(())
            }
            CycleEvent::Reset => {
                // Flags first, then the stacks.
                for &i in &self.active {
                    self.flags[i] = false;
                }
                self.active.clear();
                self.support.clear();
                Ok(())
            }
        }
    }

    /// Runs a whole script against the model.
    pub fn replay(&mut self, script: &CycleScript) -> Vec<Result<(), PreludeError>> {
        script.events().iter().map(|&e| self.apply(e)).collect()
    }

    /// Returns a description of the first disagreement with `table`, if any.
    ///
    /// Compares active order, support order, and the active flag of every
    /// index in the universe.
    pub fn diff(&self, table: &RuleTable) -> Option<String> {
        if table.universe_size() != self.flags.len() {
            return Some(format!(
                "universe {} != model {}",
                table.universe_size(),
                self.flags.len()
            ));
        }
        if table.active_indices() != self.active.as_slice() {
            return Some(format!(
                "active {:?} != model {:?}",
                table.active_indices(),
                self.active
            ));
        }
        if table.support_indices() != self.support.as_slice() {
            return Some(format!(
                "support {:?} != model {:?}",
                table.support_indices(),
                self.support
            ));
        }
        self.flags
            .iter()
            .enumerate()
            .find(|&(i, &flag)| table.is_active(i) != Ok(flag))
            .map(|(i, &flag)| format!("is_active({i}) disagrees with model flag {flag}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_and_table_agree_on_a_mixed_script() {
        let script = CycleScript::new()
            .activate(1)
            .support(3)
            .activate(1)
            .support(3)
            .activate(9)
            .reset()
            .activate(0);
        let mut table = RuleTable::new(4);
        let mut model = ReferenceTable::new(4);
        assert_eq!(script.replay(&mut table), model.replay(&script));
        assert_eq!(model.diff(&table), None);
    }
}
