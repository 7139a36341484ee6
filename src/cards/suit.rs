#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        Self::all()[n as usize % 4]
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 mask of every card of this suit in a [`Hand`](super::Hand) bitset.
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001_1111_1111_1111 << u8::from(s)
    }
}

impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Self::Club),
            'd' | '♦' => Ok(Self::Diamond),
            'h' | '♥' => Ok(Self::Heart),
            's' | '♠' => Ok(Self::Spade),
            _ => Err(anyhow::anyhow!("invalid suit {}", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Club => write!(f, "c"),
            Self::Diamond => write!(f, "d"),
            Self::Heart => write!(f, "h"),
            Self::Spade => write!(f, "s"),
        }
    }
}
