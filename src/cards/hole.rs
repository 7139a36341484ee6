use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self([a, b])
    }
}

/// Anything other than exactly two cards is a malformed hand.
impl TryFrom<Vec<Card>> for Hole {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.as_slice() {
            [a, b] => Ok(Self::from((*a, *b))),
            cards => Err(Error::MalformedHand(cards.len())),
        }
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(hole.0.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}
