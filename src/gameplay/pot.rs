use super::seat::Seat;
use crate::Chips;
use crate::Position;
use std::collections::BTreeSet;

/// One pot tier: an amount and the seats that may win it.
///
/// Folded seats can still appear in `eligible`; they are filtered out at
/// settlement, not when the tier forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    amount: Chips,
    eligible: BTreeSet<Position>,
}

impl Pot {
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn eligible(&self) -> &BTreeSet<Position> {
        &self.eligible
    }
    pub fn is_eligible(&self, position: Position) -> bool {
        self.eligible.contains(&position)
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({} eligible)", self.amount, self.eligible.len())
    }
}

/// Ordered pot tiers, main pot first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pots(Vec<Pot>);

impl Pots {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    /// Records a contribution. Merges into the newest tier when the
    /// eligibility sets match exactly, otherwise opens a new tier.
    pub fn add(&mut self, amount: Chips, eligible: BTreeSet<Position>) {
        match self.0.last_mut() {
            Some(last) if last.eligible == eligible => last.amount += amount,
            _ => self.0.push(Pot { amount, eligible }),
        }
    }
    pub fn total(&self) -> Chips {
        self.0.iter().map(|p| p.amount).sum()
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Pot> {
        self.0.iter()
    }
}

/// Rebuilds the tiers from what each seat has put in this hand.
///
/// Boundaries sit at every all-in total plus the deepest commitment. A
/// seat is cut from a tier when it is all-in or folded with nothing
/// committed above the tier's floor.
impl From<&[Seat]> for Pots {
    fn from(seats: &[Seat]) -> Self {
        let mut levels = seats
            .iter()
            .filter(|s| s.is_all_in())
            .map(|s| s.spent())
            .chain(seats.iter().map(|s| s.spent()).max())
            .filter(|&level| level > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        let mut pots = Self::empty();
        let mut floor = 0;
        for ceiling in levels {
            let amount = seats
                .iter()
                .map(|s| s.spent().min(ceiling) - s.spent().min(floor))
                .sum::<Chips>();
            let eligible = seats
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_active() || s.spent() > floor)
                .map(|(i, _)| i)
                .collect::<BTreeSet<Position>>();
            if amount > 0 {
                pots.add(amount, eligible);
            }
            floor = ceiling;
        }
        pots
    }
}

impl std::fmt::Display for Pots {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tiers = self.0.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", tiers.join(", "))
    }
}
