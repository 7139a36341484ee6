use super::evaluator::Evaluator;
use super::hand::Hand;
use super::ranking::Ranking;
use crate::Score;

/// Offset that keeps every score positive; the nuts score 1 or more.
const WORST: Score = 9 << 26;

/// A hand's strength: its category, then kickers to break ties.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: u16,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> u16 {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Evaluator::from(hand).strength()
    }
}

impl From<(Ranking, u16)> for Strength {
    fn from((value, kicks): (Ranking, u16)) -> Self {
        Self { value, kicks }
    }
}

/// Packs the strength into a total order where lower is stronger:
/// 4 bits category, 4+4 bits naming ranks, 13 bits kickers.
impl From<Strength> for Score {
    fn from(strength: Strength) -> Score {
        let (hi, lo) = strength.value.ranks();
        let code = strength.value.category() << 26
            | (u8::from(hi) as u32) << 22
            | (lo.map(u8::from).unwrap_or(0) as u32) << 18
            | strength.kicks as u32;
        WORST - code
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}
