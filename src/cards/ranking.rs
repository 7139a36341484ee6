use super::rank::Rank;

/// A poker hand's category, with the ranks that define it.
///
/// Ordered weakest to strongest; ties within a category fall through
/// to the kickers carried by [`Strength`](super::Strength).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, same suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Self::HighCard(_) | Self::Flush(_) => 4,
            Self::OnePair(_) => 3,
            Self::ThreeOAK(_) => 2,
            Self::FourOAK(_) | Self::TwoPair(_, _) => 1,
            _ => 0,
        }
    }
    /// Rank bits already spoken for by the category itself.
    pub fn mask(&self) -> u16 {
        match *self {
            Self::TwoPair(hi, lo) | Self::FullHouse(hi, lo) => u16::from(hi) | u16::from(lo),
            Self::HighCard(hi)
            | Self::OnePair(hi)
            | Self::ThreeOAK(hi)
            | Self::Straight(hi)
            | Self::Flush(hi)
            | Self::FourOAK(hi)
            | Self::StraightFlush(hi) => u16::from(hi),
        }
    }
    /// Category index, 0 for high card up to 8 for a straight flush.
    pub fn category(&self) -> u32 {
        match self {
            Self::HighCard(_) => 0,
            Self::OnePair(_) => 1,
            Self::TwoPair(..) => 2,
            Self::ThreeOAK(_) => 3,
            Self::Straight(_) => 4,
            Self::Flush(_) => 5,
            Self::FullHouse(..) => 6,
            Self::FourOAK(_) => 7,
            Self::StraightFlush(_) => 8,
        }
    }
    /// The one or two ranks naming the hand, high first.
    pub fn ranks(&self) -> (Rank, Option<Rank>) {
        match *self {
            Self::TwoPair(hi, lo) | Self::FullHouse(hi, lo) => (hi, Some(lo)),
            Self::HighCard(hi)
            | Self::OnePair(hi)
            | Self::ThreeOAK(hi)
            | Self::Straight(hi)
            | Self::Flush(hi)
            | Self::FourOAK(hi)
            | Self::StraightFlush(hi) => (hi, None),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Self::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Self::HighCard(r) => write!(f, "HighCard      {} ", r),
            Self::OnePair(r) => write!(f, "OnePair       {} ", r),
            Self::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Self::Straight(r) => write!(f, "Straight      {} ", r),
            Self::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Self::Flush(r) => write!(f, "Flush         {} ", r),
            Self::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}
