use super::actor::Actor;
use crate::Chips;
use crate::gameplay::*;
use rand::Rng;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// Plays a random legal action, leaning towards calls.
///
/// Raises are sized uniformly between a min-raise and a pot-sized raise,
/// capped at the stack.
#[derive(Debug, Clone)]
pub struct Robot {
    rng: SmallRng,
}

impl From<u64> for Robot {
    fn from(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Robot {
    pub fn new() -> Self {
        Self::from(rand::random::<u64>())
    }
    fn weight(choice: &Choice) -> u32 {
        match choice {
            Choice::Fold => 1500,
            Choice::Check => 1000,
            Choice::Call => 4000,
            Choice::Raise => 500,
            Choice::Shove => 1,
        }
    }
    fn choose(&mut self, legal: &[Choice]) -> Choice {
        match WeightedIndex::new(legal.iter().map(Self::weight)) {
            Ok(distribution) => legal[distribution.sample(&mut self.rng)],
            Err(_) => Choice::Fold,
        }
    }
    fn sizing(&mut self, turn: &Turn) -> Chips {
        let min = turn.min_raise();
        let max = turn.max_raise();
        let pot = (turn.current_bet + turn.owed + turn.pot).clamp(min, max);
        self.rng.random_range(min..=pot)
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for Robot {
    fn act(&mut self, turn: &Turn) -> Action {
        match self.choose(&turn.legal) {
            Choice::Fold => Action::Fold,
            Choice::Check => Action::Check,
            Choice::Call => Action::Call,
            Choice::Raise => Action::Raise(self.sizing(turn)),
            Choice::Shove => Action::Shove,
        }
    }
}
