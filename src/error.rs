use crate::Chips;
use crate::gameplay::Choice;

/// Every way a table operation can be refused.
///
/// Action variants are recoverable: the acting seat is asked again and no
/// chips have moved. Construction variants are fatal to the call that
/// produced them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} is not available; choose one of the offered actions")]
    Unavailable(Choice),
    #[error("seat {0} has no decision to make")]
    Inactive(String),
    #[error("raise to {to} does not exceed your current bet of {bet}")]
    RaiseBelowBet { to: Chips, bet: Chips },
    #[error("raise to {to} adds {adds}, which must be more than the {owed} owed to call")]
    RaiseBelowCall { to: Chips, adds: Chips, owed: Chips },
    #[error("raise to {to} adds {adds}, but only {stack} chips remain in your stack")]
    RaiseAboveStack { to: Chips, adds: Chips, stack: Chips },
    #[error("a hand must have exactly 2 cards, got {0}")]
    MalformedHand(usize),
    #[error("at least {min} players with chips are required, got {got}")]
    InsufficientPlayers { min: usize, got: usize },
    #[error("seat name {0} is taken; every seat needs its own name")]
    DuplicateName(String),
    #[error("at most {max} players fit at one table, got {got}")]
    TooManyPlayers { max: usize, got: usize },
    #[error("deck has {left} cards left, {need} requested")]
    DeckExhausted { left: usize, need: usize },
}

impl Error {
    /// True if the acting seat may simply be asked again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable(_)
                | Self::RaiseBelowBet { .. }
                | Self::RaiseBelowCall { .. }
                | Self::RaiseAboveStack { .. }
        )
    }
}
