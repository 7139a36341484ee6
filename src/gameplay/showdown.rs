use super::pot::Pots;
use super::ranker::Ranker;
use super::seat::Seat;
use crate::Chips;
use crate::Position;
use crate::Score;
use crate::cards::Board;

/// Pays out every pot tier to its best eligible hand.
///
/// Each live seat is scored once up front. Ties split a tier evenly and
/// the odd chips all go to the tied winner seated first. That is a fixed
/// convention, not a card-based tie-break.
#[derive(Debug, Clone)]
pub struct Showdown {
    scores: Vec<Option<Score>>,
}

impl Showdown {
    pub fn new<R: Ranker + ?Sized>(seats: &[Seat], board: &Board, ranker: &R) -> Self {
        Self {
            scores: seats
                .iter()
                .map(|s| match s.is_folded() {
                    true => None,
                    false => s.hole().map(|h| ranker.rank(h, board)),
                })
                .collect(),
        }
    }
    pub fn score(&self, position: Position) -> Option<Score> {
        self.scores.get(position).copied().flatten()
    }

    /// Winnings per position. Tiers with no live claimant are logged and
    /// left unpaid.
    pub fn settle(&self, pots: &Pots) -> Vec<Chips> {
        let mut winnings = vec![0; self.scores.len()];
        for (i, pot) in pots.iter().enumerate() {
            let claimants = (0..self.scores.len())
                .filter(|&p| pot.is_eligible(p))
                .filter_map(|p| self.score(p).map(|s| (p, s)))
                .collect::<Vec<(Position, Score)>>();
            let Some(best) = claimants.iter().map(|&(_, s)| s).min() else {
                log::warn!("pot {} of {} chips has no eligible claimant", i, pot.amount());
                continue;
            };
            let winners = claimants
                .iter()
                .filter(|&&(_, s)| s == best)
                .map(|&(p, _)| p)
                .collect::<Vec<Position>>();
            let share = pot.amount() / winners.len() as Chips;
            let remainder = pot.amount() % winners.len() as Chips;
            for &winner in winners.iter() {
                winnings[winner] += share;
            }
            winnings[winners[0]] += remainder;
            log::debug!("pot {} of {} to {:?}", i, pot.amount(), winners);
        }
        winnings
    }

    /// The last seat standing takes everything, no cards shown.
    pub fn concede(total: Chips, n: usize, winner: Position) -> Vec<Chips> {
        let mut winnings = vec![0; n];
        winnings[winner] = total;
        winnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;
    use std::collections::BTreeSet;

    /// Scores each seat by its lowest hole card; deuces are best.
    fn lowest_card(hole: &Hole, _: &Board) -> Score {
        u8::from(hole.cards()[0].rank()) as Score
    }

    fn seated(holes: &[&str], committed: &[Chips]) -> Vec<Seat> {
        holes
            .iter()
            .zip(committed)
            .enumerate()
            .map(|(i, (hole, &chips))| {
                let mut seat = Seat::new(i.to_string(), 1_000);
                let cards = Vec::<Card>::from(Hand::try_from(*hole).unwrap());
                seat.set_hole(cards).unwrap();
                seat.commit(chips);
                seat
            })
            .collect()
    }

    fn pots(tiers: Vec<(Chips, Vec<Position>)>) -> Pots {
        let mut pots = Pots::empty();
        for (amount, eligible) in tiers {
            pots.add(amount, eligible.into_iter().collect::<BTreeSet<_>>());
        }
        pots
    }

    #[test]
    fn lowest_score_takes_the_pot() {
        let seats = seated(&["2c 9d", "5h 6h"], &[50, 50]);
        let showdown = Showdown::new(&seats, &Board::empty(), &lowest_card);
        assert_eq!(showdown.settle(&pots(vec![(100, vec![0, 1])])), vec![100, 0]);
    }

    #[test]
    fn odd_chip_goes_to_first_seat() {
        let seats = seated(&["7c 2d", "7h 3h"], &[50, 51]);
        let ranker = |_: &Hole, _: &Board| -> Score { 1 };
        let showdown = Showdown::new(&seats, &Board::empty(), &ranker);
        assert_eq!(showdown.settle(&pots(vec![(101, vec![0, 1])])), vec![51, 50]);
    }

    #[test]
    fn settling_twice_agrees() {
        let seats = seated(&["7c 2d", "7h 3h", "7s 4s"], &[40, 40, 40]);
        let ranker = |_: &Hole, _: &Board| -> Score { 1 };
        let showdown = Showdown::new(&seats, &Board::empty(), &ranker);
        let pots = pots(vec![(121, vec![0, 1, 2])]);
        assert_eq!(showdown.settle(&pots), showdown.settle(&pots));
        assert_eq!(showdown.settle(&pots), vec![41, 40, 40]);
    }

    #[test]
    fn folded_seats_never_win() {
        let mut seats = seated(&["2c 9d", "5h 6h"], &[50, 50]);
        seats[0].fold();
        let showdown = Showdown::new(&seats, &Board::empty(), &lowest_card);
        assert_eq!(showdown.settle(&pots(vec![(100, vec![0, 1])])), vec![0, 100]);
    }

    #[test]
    fn side_pot_goes_past_the_short_stack() {
        let seats = seated(&["2c 9d", "5h 6h", "9s Ts"], &[100, 300, 300]);
        let showdown = Showdown::new(&seats, &Board::empty(), &lowest_card);
        let pots = pots(vec![(300, vec![0, 1, 2]), (400, vec![1, 2])]);
        assert_eq!(showdown.settle(&pots), vec![300, 400, 0]);
    }

    #[test]
    fn orphaned_pot_is_skipped() {
        let mut seats = seated(&["2c 9d", "5h 6h", "9s Ts"], &[100, 100, 100]);
        seats[2].fold();
        let showdown = Showdown::new(&seats, &Board::empty(), &lowest_card);
        let pots = pots(vec![(200, vec![0, 1]), (50, vec![2])]);
        assert_eq!(showdown.settle(&pots), vec![200, 0, 0]);
    }

    #[test]
    fn concession_pays_the_whole_total() {
        assert_eq!(Showdown::concede(30, 2, 0), vec![30, 0]);
    }
}
