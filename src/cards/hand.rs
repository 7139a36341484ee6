use super::card::Card;
use super::suit::Suit;

/// An unordered set of cards packed into the 52 low bits of a u64.
///
/// Used by the evaluator, which only ever needs set algebra and
/// per-suit / per-rank projections.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Union of two disjoint hands.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    /// Only the cards of one suit.
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    /// Cards of the given rank count, one bit per rank, e.g. every rank held 2+ times.
    pub fn ranks_with(&self, n: u32) -> u16 {
        (0..13u8)
            .filter(|r| (self.0 >> (r * 4) & 0xF).count_ones() >= n)
            .map(|r| 1u16 << r)
            .fold(0, |mask, bit| mask | bit)
    }
}

impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & 0x000F_FFFF_FFFF_FFFF)
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0, |a, b| a | b))
    }
}

/// one-way conversion to u16 rank masks: which ranks appear at all
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        h.ranks_with(1)
    }
}

/// low to high
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        (0..52u8)
            .filter(|i| h.0 >> i & 1 == 1)
            .map(Card::from)
            .collect()
    }
}

impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .map(|cards| Self::from(cards.as_slice()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
