use crate::field::Base;
use crate::players::BaseRunner;
use crate::utils::errors::SimError;
use serde::{Deserialize, Serialize};

/// Occupancy of the three bases. Runners are owned by the slot they stand
/// on; nothing here moves until the resolver's commit step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseState {
    pub first: Option<BaseRunner>,
    pub second: Option<BaseRunner>,
    pub third: Option<BaseRunner>,
}

impl BaseState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_runner(mut self, base: Base, runner: BaseRunner) -> Self {
        self.set(base, Some(runner));
        self
    }

    pub fn get(&self, base: Base) -> Option<&BaseRunner> {
        match base {
            Base::First => self.first.as_ref(),
            Base::Second => self.second.as_ref(),
            Base::Third => self.third.as_ref(),
            Base::Home => None,
        }
    }

    pub fn set(&mut self, base: Base, runner: Option<BaseRunner>) {
        match base {
            Base::First => self.first = runner,
            Base::Second => self.second = runner,
            Base::Third => self.third = runner,
            Base::Home => {}
        }
    }

    pub fn take(&mut self, base: Base) -> Option<BaseRunner> {
        match base {
            Base::First => self.first.take(),
            Base::Second => self.second.take(),
            Base::Third => self.third.take(),
            Base::Home => None,
        }
    }

    pub fn occupied(&self, base: Base) -> bool {
        self.get(base).is_some()
    }

    pub fn runner_count(&self) -> u8 {
        [&self.first, &self.second, &self.third]
            .iter()
            .filter(|r| r.is_some())
            .count() as u8
    }

    /// Occupied bases from the lead runner back: third, second, first. The
    /// resolver walks runners in this order so every advance target is
    /// provably clear when the decision is made.
    pub fn lead_first(&self) -> Vec<Base> {
        [Base::Third, Base::Second, Base::First]
            .into_iter()
            .filter(|&b| self.occupied(b))
            .collect()
    }
}

/// Game context a play is resolved in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySituation {
    pub outs: u8,
    pub bases: BaseState,
    pub batter: BaseRunner,
}

impl PlaySituation {
    pub fn new(outs: u8, bases: BaseState, batter: BaseRunner) -> Self {
        Self {
            outs,
            bases,
            batter,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.outs > 2 {
            return Err(SimError::PlayStateError(format!(
                "play cannot start with {} outs",
                self.outs
            )));
        }
        Ok(())
    }
}
