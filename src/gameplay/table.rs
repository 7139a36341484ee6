use super::pot::Pots;
use super::seat::Seat;
use crate::Chips;
use crate::Error;
use crate::cards::*;

/// Everything shared across seats: the deck, the community board and the
/// pot ledger.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    board: Board,
    pots: Pots,
}

impl From<Deck> for Table {
    fn from(deck: Deck) -> Self {
        Self {
            deck,
            board: Board::empty(),
            pots: Pots::empty(),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::from(Deck::new())
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn pots(&self) -> &Pots {
        &self.pots
    }
    pub fn total(&self) -> Chips {
        self.pots.total()
    }

    /// Reshuffles, clears the board and pots, and wipes every seat's
    /// per-hand state. Stacks are untouched.
    pub fn reset(&mut self, seats: &mut [Seat]) {
        self.deck.reset();
        self.board.clear();
        self.pots.clear();
        seats.iter_mut().for_each(Seat::reset);
    }
    /// Two hole cards to every seat, one card at a time around the table.
    pub fn deal_holes(&mut self, seats: &mut [Seat]) -> Result<(), Error> {
        let n = seats.len();
        let cards = self.deck.deal(2 * n)?;
        for (i, seat) in seats.iter_mut().enumerate() {
            seat.set_hole(vec![cards[i], cards[i + n]])?;
        }
        Ok(())
    }
    /// Burns one card, then turns over what the street reveals.
    pub fn deal_board(&mut self, street: Street) -> Result<(), Error> {
        self.deck.burn()?;
        let cards = self.deck.deal(street.n_revealed())?;
        log::info!("{:<7} {}", street, Board::from(cards.clone()));
        self.board.extend(cards);
        Ok(())
    }
    /// Re-derives the pot tiers from every seat's hand total.
    pub fn collect(&mut self, seats: &[Seat]) {
        self.pots = Pots::from(seats);
    }
    /// Empties the ledger once its chips have been paid out.
    pub fn clear(&mut self) {
        self.pots.clear();
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "board {:<16} pots {} total {}",
            self.board,
            self.pots,
            self.total()
        )
    }
}
