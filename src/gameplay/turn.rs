use super::action::Choice;
use crate::Chips;
use crate::Position;
use crate::cards::*;

/// What a decision source sees when it is asked to act.
///
/// A snapshot: nothing here borrows the game, so actors are free to hold
/// on to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub position: Position,
    pub name: String,
    pub street: Street,
    /// Chips behind.
    pub chips: Chips,
    /// Chips already committed this street.
    pub bet: Chips,
    /// Chips needed to call.
    pub owed: Chips,
    pub current_bet: Chips,
    pub pot: Chips,
    pub board: Board,
    pub hole: Option<Hole>,
    pub legal: Vec<Choice>,
}

impl Turn {
    pub fn is_legal(&self, choice: Choice) -> bool {
        self.legal.contains(&choice)
    }
    /// Smallest accepted raise target: one chip more than a call.
    pub fn min_raise(&self) -> Chips {
        self.bet + self.owed + 1
    }
    /// Largest accepted raise target: the whole stack.
    pub fn max_raise(&self) -> Chips {
        self.bet + self.chips
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let legal = self
            .legal
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join("/");
        write!(
            f,
            "{} on the {} with {} behind, {} to call into {} [{}]",
            self.name, self.street, self.chips, self.owed, self.pot, legal
        )
    }
}
