/// Card rank, deuce low. Aces also play low in the wheel straight.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const fn all() -> [Self; 13] {
        [
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
            Self::Ace,
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        Self::all()[n as usize % 13]
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 rank masks: one bit per rank, 13 bits.
/// Converting a mask back yields its highest rank.
impl From<u16> for Rank {
    fn from(n: u16) -> Self {
        let n = n & 0x1FFF;
        debug_assert!(n > 0);
        Self::from((15 - n.leading_zeros()) as u8)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            'A' => Ok(Self::Ace),
            _ => Err(anyhow::anyhow!("invalid rank {}", c)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let symbol = "23456789TJQKA"
            .chars()
            .nth(u8::from(*self) as usize)
            .unwrap_or('?');
        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_yields_highest_rank() {
        let mask = u16::from(Rank::Five) | u16::from(Rank::Jack) | u16::from(Rank::Two);
        assert_eq!(Rank::from(mask), Rank::Jack);
    }

    #[test]
    fn parses_symbols() {
        assert_eq!(Rank::try_from('t').unwrap(), Rank::Ten);
        assert_eq!(Rank::try_from('A').unwrap(), Rank::Ace);
        assert!(Rank::try_from('1').is_err());
    }
}
