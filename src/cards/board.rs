use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// Community cards: 0, 3, 4 or 5 of them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn street(&self) -> Street {
        match self.0.len() {
            0..=2 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::Rive,
        }
    }
    pub fn extend(&mut self, cards: Vec<Card>) {
        debug_assert!(self.0.len() + cards.len() <= 5);
        self.0.extend(cards);
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.0.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "--");
        }
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
