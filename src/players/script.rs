use super::actor::Actor;
use crate::Error;
use crate::gameplay::*;
use std::collections::VecDeque;

/// Replays pre-recorded decisions in order, whoever is asked.
///
/// A rejected decision is consumed like any other. Once the script runs
/// dry it checks when it can and folds otherwise.
#[derive(Debug, Clone, Default)]
pub struct Script {
    actions: VecDeque<Action>,
    rejected: usize,
}

impl From<Vec<Action>> for Script {
    fn from(actions: Vec<Action>) -> Self {
        Self {
            actions: actions.into(),
            rejected: 0,
        }
    }
}

impl TryFrom<&str> for Script {
    type Error = anyhow::Error;
    /// Comma separated, e.g. `"call, raise 60, fold"`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(Action::try_from)
            .collect::<Result<Vec<Action>, _>>()
            .map(Self::from)
    }
}

impl Script {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
    pub fn len(&self) -> usize {
        self.actions.len()
    }
    /// How many scripted decisions broke a rule.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl Actor for Script {
    fn act(&mut self, turn: &Turn) -> Action {
        self.actions.pop_front().unwrap_or_else(|| {
            log::warn!("{} has no scripted decision left", turn.name);
            match turn.is_legal(Choice::Check) {
                true => Action::Check,
                false => Action::Fold,
            }
        })
    }
    fn reject(&mut self, _: &Turn, _: &Error) {
        self.rejected += 1;
    }
}
