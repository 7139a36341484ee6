use crate::Chips;
use crate::cards::Board;

/// What one hand paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub round: usize,
    pub board: Board,
    /// False when everyone else folded and no cards were shown.
    pub showdown: bool,
    /// Chips won by each seat, in seating order at the time of the hand.
    pub winnings: Vec<(String, Chips)>,
    /// Seats removed after the hand for running out of chips.
    pub eliminated: Vec<String>,
}

impl Summary {
    pub fn new(round: usize, board: Board, showdown: bool, winnings: Vec<(String, Chips)>) -> Self {
        Self {
            round,
            board,
            showdown,
            winnings,
            eliminated: Vec::new(),
        }
    }
    pub fn won(&self, name: &str) -> Chips {
        self.winnings
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, w)| *w)
            .sum()
    }
    pub fn winners(&self) -> impl Iterator<Item = &str> {
        self.winnings
            .iter()
            .filter(|(_, w)| *w > 0)
            .map(|(n, _)| n.as_str())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let paid = self
            .winnings
            .iter()
            .filter(|(_, w)| *w > 0)
            .map(|(n, w)| format!("{} +{}", n, w))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "hand {} [{}] {}", self.round, self.board, paid)?;
        if !self.showdown {
            write!(f, " (uncontested)")?;
        }
        for name in self.eliminated.iter() {
            write!(f, ", {} out", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_winners() {
        let summary = Summary::new(
            3,
            Board::empty(),
            false,
            vec![("a".into(), 0), ("b".into(), 30)],
        );
        assert_eq!(summary.won("b"), 30);
        assert_eq!(summary.winners().collect::<Vec<_>>(), vec!["b"]);
        assert!(summary.to_string().contains("b +30"));
    }
}
