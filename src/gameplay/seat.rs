use crate::Chips;
use crate::Error;
use crate::cards::*;

/// One player's chip ledger and per-hand status.
///
/// # Fields
///
/// - `state`: Betting, Shoving (all-in), or Folding
/// - `chips`: Chips behind (not yet committed)
/// - `bet`: Chips committed this street; swept when the street closes
/// - `spent`: Total chips committed this hand; drives pot tiers
/// - `hole`: Hole cards, absent before the deal and after a fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    name: String,
    state: State,
    chips: Chips,
    bet: Chips,
    spent: Chips,
    hole: Option<Hole>,
}

impl Seat {
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            state: State::Betting,
            chips,
            bet: 0,
            spent: 0,
            hole: None,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Chips behind.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    /// Chips committed this street.
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// Chips committed this hand.
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn hole(&self) -> Option<&Hole> {
        self.hole.as_ref()
    }
    pub fn is_folded(&self) -> bool {
        self.state == State::Folding
    }
    pub fn is_all_in(&self) -> bool {
        self.state == State::Shoving
    }
    /// Still takes turns: neither folded nor all-in.
    pub fn is_active(&self) -> bool {
        self.state == State::Betting
    }
    /// Out of chips with nothing at stake.
    pub fn is_busted(&self) -> bool {
        self.chips == 0
    }
}

impl Seat {
    /// Deals hole cards. Anything other than two cards is refused.
    pub fn set_hole(&mut self, cards: Vec<Card>) -> Result<(), Error> {
        self.hole = Some(Hole::try_from(cards)?);
        Ok(())
    }
    /// Moves chips from the stack into this street's bet.
    /// Emptying the stack always means all-in, whatever the action was called.
    pub fn commit(&mut self, chips: Chips) -> Chips {
        debug_assert!(chips <= self.chips);
        let chips = chips.min(self.chips);
        self.chips -= chips;
        self.bet += chips;
        self.spent += chips;
        if self.chips == 0 && self.state == State::Betting {
            self.state = State::Shoving;
        }
        chips
    }
    pub fn fold(&mut self) {
        self.state = State::Folding;
        self.hole = None;
    }
    /// Adds winnings to the stack.
    pub fn win(&mut self, chips: Chips) {
        self.chips += chips;
    }
    /// Street is over; its bets already live in the pot ledger.
    pub fn sweep(&mut self) {
        self.bet = 0;
    }
    /// Clears everything about the last hand except the stack.
    pub fn reset(&mut self) {
        self.state = State::Betting;
        self.bet = 0;
        self.spent = 0;
        self.hole = None;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {:<12} ${:>6} bet {:>5}",
            self.state, self.name, self.chips, self.bet
        )
    }
}

/// Player betting status within a hand.
///
/// - `Betting`: Active and can still make decisions
/// - `Shoving`: All-in, no more decisions but still in the pot
/// - `Folding`: Out of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "P"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
        }
    }
}
