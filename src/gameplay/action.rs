use super::seat::Seat;
use crate::Chips;

/// The kind of decision a seat may take, without any sizing.
///
/// This is what the legal-action deriver hands to a decision source;
/// the source answers with a sized [`Action`].
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Choice {
    Fold,
    Check,
    Call,
    Raise,
    Shove,
}

impl Choice {
    /// Legal choices for `seat` when it owes `owed` chips to stay in.
    ///
    /// Empty for folded or all-in seats. A seat with an empty stack that
    /// somehow was not marked all-in may only fold.
    pub fn legal(seat: &Seat, owed: Chips) -> Vec<Self> {
        let chips = seat.chips();
        if !seat.is_active() {
            vec![]
        } else if chips == 0 {
            vec![Self::Fold]
        } else if owed == 0 {
            vec![Self::Fold, Self::Check, Self::Raise, Self::Shove]
        } else if chips > owed {
            vec![Self::Fold, Self::Call, Self::Raise, Self::Shove]
        } else if chips == owed {
            vec![Self::Fold, Self::Call]
        } else {
            vec![Self::Fold, Self::Shove]
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fold => "Fold",
            Self::Check => "Check",
            Self::Call => "Call",
            Self::Raise => "Raise",
            Self::Shove => "All-in",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A seat's decision.
///
/// `Raise` carries the seat's total bet for the street after raising,
/// not the increment.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
    Shove,
}

impl Action {
    pub fn choice(&self) -> Choice {
        match self {
            Self::Fold => Choice::Fold,
            Self::Check => Choice::Check,
            Self::Call => Choice::Call,
            Self::Raise(_) => Choice::Raise,
            Self::Shove => Choice::Shove,
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        let kind = parts.first().map(|p| p.to_uppercase()).unwrap_or_default();
        match kind.as_str() {
            "FOLD" => Ok(Self::Fold),
            "CHECK" => Ok(Self::Check),
            "CALL" => Ok(Self::Call),
            "SHOVE" | "ALL-IN" | "ALL_IN" | "ALLIN" => Ok(Self::Shove),
            "RAISE" => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Self::Raise)
                .ok_or_else(|| anyhow::anyhow!("invalid raise amount")),
            _ => Err(anyhow::anyhow!("invalid action type {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Check => write!(f, "CHECK"),
            Self::Call => write!(f, "CALL"),
            Self::Raise(to) => write!(f, "RAISE {}", to),
            Self::Shove => write!(f, "ALL-IN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(chips: Chips) -> Seat {
        Seat::new("hero", chips)
    }

    #[test]
    fn nothing_owed() {
        let legal = Choice::legal(&seat(100), 0);
        assert_eq!(legal, vec![Choice::Fold, Choice::Check, Choice::Raise, Choice::Shove]);
    }

    #[test]
    fn owing_less_than_stack() {
        let legal = Choice::legal(&seat(100), 40);
        assert_eq!(legal, vec![Choice::Fold, Choice::Call, Choice::Raise, Choice::Shove]);
    }

    #[test]
    fn owing_exactly_the_stack() {
        assert_eq!(Choice::legal(&seat(40), 40), vec![Choice::Fold, Choice::Call]);
    }

    #[test]
    fn owing_more_than_stack() {
        assert_eq!(Choice::legal(&seat(30), 40), vec![Choice::Fold, Choice::Shove]);
    }

    #[test]
    fn empty_stack_may_only_fold() {
        assert_eq!(Choice::legal(&seat(0), 0), vec![Choice::Fold]);
    }

    #[test]
    fn inactive_seats_have_no_choices() {
        let mut folded = seat(100);
        folded.fold();
        let mut shoved = seat(100);
        shoved.commit(100);
        assert!(Choice::legal(&folded, 10).is_empty());
        assert!(Choice::legal(&shoved, 10).is_empty());
    }

    #[test]
    fn parses_decisions() {
        assert_eq!(Action::try_from("raise 60").unwrap(), Action::Raise(60));
        assert_eq!(Action::try_from("All-in").unwrap(), Action::Shove);
        assert_eq!(Action::try_from("CHECK").unwrap(), Action::Check);
        assert!(Action::try_from("raise").is_err());
        assert!(Action::try_from("bet 10").is_err());
    }
}
