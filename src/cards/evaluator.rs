use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for a 5 to 7 card hand's strength.
///
/// Works entirely on rank bitmasks: each search projects the hand onto
/// 13 bits and looks for the highest qualifying rank.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        let ranking = self.find_ranking();
        Strength::from((ranking, self.find_kickers(ranking)))
    }
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
            // empty hands rank lowest
            .unwrap_or(Ranking::HighCard(Rank::Two))
    }
    /// Highest remaining ranks outside the category, as a rank mask.
    pub fn find_kickers(&self, ranking: Ranking) -> u16 {
        let pool = match ranking {
            Ranking::Flush(_) => self.find_suit_of_flush().map(|s| u16::from(self.0.of(&s))),
            _ => Some(u16::from(self.0)),
        };
        let mut kicks = pool.unwrap_or(0) & !ranking.mask();
        while kicks.count_ones() as usize > ranking.n_kickers() {
            kicks &= kicks - 1;
        }
        kicks
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, 0).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, 0).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, 0).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, 0).map(|hi| {
            self.find_rank_of_n_oak(2, u16::from(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, 0).and_then(|triple| {
            self.find_rank_of_n_oak(2, u16::from(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(u16::from(self.0))
            .map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Rank::from(u16::from(self.0.of(&suit))))
            .map(Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| self.find_rank_of_straight(u16::from(self.0.of(&suit))))
            .map(Ranking::StraightFlush)
    }

    fn find_rank_of_straight(&self, ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    /// Highest rank held at least `n` times, ignoring the `skip` mask.
    fn find_rank_of_n_oak(&self, n: u32, skip: u16) -> Option<Rank> {
        match self.0.ranks_with(n) & !skip {
            0 => None,
            mask => Some(Rank::from(mask)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Vec<Rank>) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.find_ranking();
        let kicks = eval.find_kickers(ranking);
        let kicks = Rank::all()
            .into_iter()
            .rev()
            .filter(|r| kicks & u16::from(*r) != 0)
            .collect();
        (ranking, kicks)
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        assert_eq!(eval("As Kh Qd Jc 9s"), (Ranking::HighCard(Rank::Ace), vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        assert_eq!(eval("As Ah Kd Qc Js"), (Ranking::OnePair(Rank::Ace), vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair_from_three_pairs() {
        assert_eq!(
            eval("As Ah Kd Kc Qs Qh Jd"),
            (Ranking::TwoPair(Rank::Ace, Rank::King), vec![Rank::Queen])
        );
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(eval("As 2h 3d 4c 5s"), (Ranking::Straight(Rank::Five), vec![]));
    }

    #[test]
    fn low_straight_beats_wheel() {
        assert_eq!(eval("As 2s 3h 4d 5c 6s"), (Ranking::Straight(Rank::Six), vec![]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, kicks) = eval("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
        assert_eq!(kicks, vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Four]);
    }

    #[test]
    fn full_house_over_flush() {
        assert_eq!(
            eval("Kh Ah Ad As Ks Qs Js 9s").0,
            Ranking::FullHouse(Rank::Ace, Rank::King)
        );
    }

    #[test]
    fn two_trips_make_a_full_house() {
        assert_eq!(
            eval("As Ah Ad Kc Ks Kh Qd").0,
            Ranking::FullHouse(Rank::Ace, Rank::King)
        );
    }

    #[test]
    fn four_oak_with_kicker() {
        assert_eq!(
            eval("As Ah Ad Ac Ks Kh Qd"),
            (Ranking::FourOAK(Rank::Ace), vec![Rank::King])
        );
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(eval("As 2s 3s 4s 5s Kd").0, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn strength_orders_like_poker() {
        let weak = Strength::from(Hand::try_from("As Kh Qd Jc 9s").unwrap());
        let kick = Strength::from(Hand::try_from("As Kh Qd Jc Ts").unwrap());
        let pair = Strength::from(Hand::try_from("2s 2h 3d 4c 7s").unwrap());
        assert!(weak < kick);
        assert!(kick < pair);
        assert!(crate::Score::from(pair) < crate::Score::from(kick));
        assert!(crate::Score::from(kick) < crate::Score::from(weak));
    }
}
