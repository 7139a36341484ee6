use crate::Score;
use crate::cards::*;

/// Scores a hole against the shared board. Lower is stronger.
///
/// Must be total over every 5 to 7 card combination. Any
/// `Fn(&Hole, &Board) -> Score` closure is a ranker, which is how tests
/// pin down who wins.
pub trait Ranker {
    fn rank(&self, hole: &Hole, board: &Board) -> Score;
}

impl<F> Ranker for F
where
    F: Fn(&Hole, &Board) -> Score,
{
    fn rank(&self, hole: &Hole, board: &Board) -> Score {
        self(hole, board)
    }
}

/// The bundled evaluator.
#[derive(Debug, Default, Clone, Copy)]
pub struct HandRanker;

impl HandRanker {
    pub fn strength(hole: &Hole, board: &Board) -> Strength {
        Strength::from(Hand::add(Hand::from(*hole), Hand::from(board)))
    }
}

impl Ranker for HandRanker {
    fn rank(&self, hole: &Hole, board: &Board) -> Score {
        Score::from(Self::strength(hole, board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(s: &str) -> Hole {
        let cards = Vec::<Card>::from(Hand::try_from(s).unwrap());
        Hole::try_from(cards).unwrap()
    }
    fn board(s: &str) -> Board {
        Board::from(Vec::<Card>::from(Hand::try_from(s).unwrap()))
    }

    #[test]
    fn stronger_hand_scores_lower() {
        let board = board("2c 7d 9h Js Kd");
        let aces = HandRanker.rank(&hole("As Ad"), &board);
        let kings = HandRanker.rank(&hole("Ks Kh"), &board);
        let junk = HandRanker.rank(&hole("3c 4d"), &board);
        assert!(kings < aces);
        assert!(aces < junk);
    }

    #[test]
    fn board_plays_for_both() {
        let board = board("Ts Js Qs Ks As");
        let a = HandRanker.rank(&hole("2c 3d"), &board);
        let b = HandRanker.rank(&hole("4h 5h"), &board);
        assert_eq!(a, b);
    }

    #[test]
    fn closures_are_rankers() {
        let ranker = |_: &Hole, _: &Board| -> Score { 7 };
        assert_eq!(ranker.rank(&hole("2c 3d"), &Board::empty()), 7);
    }
}
