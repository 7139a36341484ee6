use super::card::Card;
use crate::Error;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A 52-card deck that owns its shuffling source.
///
/// Every deck carries its own seeded generator, so a table seeded once
/// deals the same sequence of hands on every run.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl From<u64> for Deck {
    fn from(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(52),
            rng: SmallRng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }
}

impl Deck {
    /// A deck seeded from the thread-local generator.
    pub fn new() -> Self {
        Self::from(rand::random::<u64>())
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Restore all 52 cards and shuffle them.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend((0..52u8).map(Card::from));
        self.cards.shuffle(&mut self.rng);
    }
    /// Take `n` cards off the top.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, Error> {
        if n > self.cards.len() {
            return Err(Error::DeckExhausted {
                left: self.cards.len(),
                need: n,
            });
        }
        let from = self.cards.len() - n;
        Ok(self.cards.split_off(from))
    }
    /// Discard the top card face down.
    pub fn burn(&mut self) -> Result<(), Error> {
        self.deal(1).map(|_| ())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
