use crate::Position;
use crate::cards::Street;

/// Seat roles and acting order for one hand.
///
/// Pure: computed from the seat count and the dealer button, never
/// mutates anything. Heads-up collapses the button onto the small blind,
/// so the dealer acts first preflop and last after the flop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    n: usize,
    dealer: Position,
}

impl Rotation {
    pub fn new(n: usize, dealer: Position) -> Self {
        debug_assert!(n >= 2);
        debug_assert!(dealer < n);
        Self { n, dealer }
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn is_heads_up(&self) -> bool {
        self.n == 2
    }
    pub fn sblind(&self) -> Position {
        match self.is_heads_up() {
            true => self.dealer,
            false => self.after(self.dealer),
        }
    }
    pub fn bblind(&self) -> Position {
        self.after(self.sblind())
    }
    /// The seat that opens betting on `street`.
    pub fn first(&self, street: Street) -> Position {
        match (self.is_heads_up(), street) {
            (true, Street::Pref) => self.sblind(),
            (true, _) => self.bblind(),
            (false, Street::Pref) => self.after(self.bblind()),
            (false, _) => self.after(self.dealer),
        }
    }
    /// Every seat once, starting from `first(street)` and wrapping. The
    /// driver skips seats that are folded or all-in.
    pub fn order(&self, street: Street) -> Vec<Position> {
        let first = self.first(street);
        let order = (0..self.n)
            .map(|i| (first + i) % self.n)
            .collect::<Vec<Position>>();
        log::trace!("{} order {:?}", street, order);
        order
    }
    pub fn after(&self, position: Position) -> Position {
        (position + 1) % self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_up_dealer_posts_small() {
        let rotation = Rotation::new(2, 0);
        assert_eq!(rotation.sblind(), 0);
        assert_eq!(rotation.bblind(), 1);
    }

    #[test]
    fn heads_up_order_flips_after_preflop() {
        let rotation = Rotation::new(2, 1);
        assert_eq!(rotation.order(Street::Pref), vec![1, 0]);
        assert_eq!(rotation.order(Street::Flop), vec![0, 1]);
        assert_eq!(rotation.order(Street::Rive), vec![0, 1]);
    }

    #[test]
    fn ring_preflop_starts_after_big_blind() {
        let rotation = Rotation::new(5, 3);
        assert_eq!(rotation.sblind(), 4);
        assert_eq!(rotation.bblind(), 0);
        assert_eq!(rotation.order(Street::Pref), vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn ring_postflop_starts_after_dealer() {
        let rotation = Rotation::new(5, 3);
        assert_eq!(rotation.order(Street::Turn), vec![4, 0, 1, 2, 3]);
    }

    #[test]
    fn three_handed_dealer_is_under_the_gun() {
        let rotation = Rotation::new(3, 0);
        assert_eq!(rotation.first(Street::Pref), 0);
        assert_eq!(rotation.first(Street::Flop), 1);
    }
}
