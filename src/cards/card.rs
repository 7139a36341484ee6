use super::rank::Rank;
use super::suit::Suit;

/// A single playing card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 injection
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism, e.g. "Ts" or "10♠"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (rank, suit) = match s.strip_prefix("10") {
            Some(suit) => (Rank::Ten, suit),
            None => {
                let mut chars = s.chars();
                let rank = chars.next().ok_or_else(|| anyhow::anyhow!("empty card"))?;
                (Rank::try_from(rank)?, chars.as_str())
            }
        };
        let mut chars = suit.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::from((rank, Suit::try_from(c)?))),
            _ => Err(anyhow::anyhow!("invalid card {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert_eq!(n, u8::from(Card::from(n)));
        }
    }

    #[test]
    fn parses_both_notations() {
        let ten = Card::from((Rank::Ten, Suit::Spade));
        assert_eq!(Card::try_from("Ts").unwrap(), ten);
        assert_eq!(Card::try_from("10♠").unwrap(), ten);
        assert!(Card::try_from("Xs").is_err());
        assert!(Card::try_from("Tsx").is_err());
    }
}
