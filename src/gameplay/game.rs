use super::action::*;
use super::ranker::*;
use super::rotation::Rotation;
use super::seat::Seat;
use super::showdown::Showdown;
use super::summary::Summary;
use super::table::Table;
use super::turn::Turn;
use crate::Chips;
use crate::Error;
use crate::MAX_SEATS;
use crate::MIN_SEATS;
use crate::Position;
use crate::cards::*;
use crate::players::Actor;

/// How a betting round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every live seat has matched the current bet, folded, or is all-in.
    Closed,
    /// Everyone else folded; this seat takes the pot without a showdown.
    Uncontested(Position),
}

/// A multi-hand session at one table.
///
/// Owns the seats and the table. Between hands it prunes busted seats and
/// moves the button; within a hand it drives betting rounds street by
/// street and settles the pots.
#[derive(Debug, Clone)]
pub struct Game {
    seats: Vec<Seat>,
    table: Table,
    sblind: Chips,
    dealer: Position,
    street: Street,
    current_bet: Chips,
    aggressor: Option<Position>,
    round: usize,
}

impl Game {
    /// Seats with no chips are dropped before the first hand. Names must
    /// be unique; actors and winnings are keyed by them.
    pub fn new(seats: Vec<Seat>, sblind: Chips) -> Result<Self, Error> {
        let seats = seats
            .into_iter()
            .filter(|s| !s.is_busted())
            .collect::<Vec<Seat>>();
        if seats.len() < MIN_SEATS {
            return Err(Error::InsufficientPlayers {
                min: MIN_SEATS,
                got: seats.len(),
            });
        }
        if seats.len() > MAX_SEATS {
            return Err(Error::TooManyPlayers {
                max: MAX_SEATS,
                got: seats.len(),
            });
        }
        for (i, seat) in seats.iter().enumerate() {
            if seats[..i].iter().any(|s| s.name() == seat.name()) {
                return Err(Error::DuplicateName(seat.name().to_string()));
            }
        }
        Ok(Self {
            dealer: seats.len() - 1,
            seats,
            table: Table::new(),
            sblind,
            street: Street::Pref,
            current_bet: 0,
            aggressor: None,
            round: 0,
        })
    }
    /// Replaces the deck with one shuffled from `seed`.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.table = Table::from(Deck::from(seed));
        self
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> &Seat {
        &self.seats[position]
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn aggressor(&self) -> Option<Position> {
        self.aggressor
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn sblind(&self) -> Chips {
        self.sblind
    }
    pub fn bblind(&self) -> Chips {
        self.sblind * 2
    }
    pub fn rotation(&self) -> Rotation {
        Rotation::new(self.seats.len(), self.dealer)
    }
    /// Stacks plus everything in the pot ledger.
    pub fn chips_in_play(&self) -> Chips {
        self.seats.iter().map(Seat::chips).sum::<Chips>() + self.table.total()
    }
    /// True while at least two seats hold chips.
    pub fn is_running(&self) -> bool {
        self.seats.iter().filter(|s| !s.is_busted()).count() >= MIN_SEATS
    }
}

impl Game {
    /// Chips `position` must add to match the current bet.
    pub fn owed(&self, position: Position) -> Chips {
        self.current_bet.saturating_sub(self.seats[position].bet())
    }
    pub fn legal(&self, position: Position) -> Vec<Choice> {
        Choice::legal(&self.seats[position], self.owed(position))
    }
    pub fn turn(&self, position: Position) -> Turn {
        let seat = &self.seats[position];
        Turn {
            position,
            name: seat.name().to_string(),
            street: self.street,
            chips: seat.chips(),
            bet: seat.bet(),
            owed: self.owed(position),
            current_bet: self.current_bet,
            pot: self.table.total(),
            board: self.table.board().clone(),
            hole: seat.hole().copied(),
            legal: self.legal(position),
        }
    }
    /// The only seat that has not folded, if there is just one.
    pub fn uncontested(&self) -> Option<Position> {
        let mut live = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_folded())
            .map(|(i, _)| i);
        match (live.next(), live.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }
    /// Whether `position` still has a decision to make this round. A lone
    /// active seat with nothing to call has none.
    fn is_due(&self, position: Position) -> bool {
        let active = self.seats.iter().filter(|s| s.is_active()).count();
        self.seats[position].is_active() && (active > 1 || self.owed(position) > 0)
    }
}

impl Game {
    /// Validates and applies one decision, returning the chips moved.
    ///
    /// Nothing changes on error. A raise, or an all-in that ends above
    /// the current bet, makes `position` the aggressor and reopens action.
    pub fn apply(&mut self, position: Position, action: Action) -> Result<Chips, Error> {
        let owed = self.owed(position);
        let seat = &self.seats[position];
        if !seat.is_active() {
            return Err(Error::Inactive(seat.name().to_string()));
        }
        if !self.legal(position).contains(&action.choice()) {
            return Err(Error::Unavailable(action.choice()));
        }
        if let Action::Raise(to) = action {
            let bet = seat.bet();
            let stack = seat.chips();
            if to <= bet {
                return Err(Error::RaiseBelowBet { to, bet });
            }
            let adds = to - bet;
            if adds <= owed {
                return Err(Error::RaiseBelowCall { to, adds, owed });
            }
            if adds > stack {
                return Err(Error::RaiseAboveStack { to, adds, stack });
            }
        }
        let seat = &mut self.seats[position];
        let moved = match action {
            Action::Fold => {
                seat.fold();
                0
            }
            Action::Check => 0,
            Action::Call => seat.commit(owed.min(seat.chips())),
            Action::Raise(to) => seat.commit(to - seat.bet()),
            Action::Shove => seat.commit(seat.chips()),
        };
        if seat.bet() > self.current_bet {
            self.current_bet = seat.bet();
            self.aggressor = Some(position);
        }
        self.table.collect(&self.seats);
        log::debug!(
            "{:<12} {:<10} {}",
            self.seats[position].name(),
            action,
            self.table.pots()
        );
        Ok(moved)
    }

    /// Walks the acting order until the round closes or only one seat is
    /// left holding cards.
    ///
    /// Each seat gets one pass; a bet above the current one resets the
    /// pass so every other seat must answer it. Rejected decisions are
    /// sent back to the same seat without moving the cursor.
    pub fn betting_round<A>(&mut self, actor: &mut A) -> Result<Outcome, Error>
    where
        A: Actor + ?Sized,
    {
        let order = self.rotation().order(self.street);
        let n = order.len();
        let mut cursor = 0;
        let mut remaining = n;
        while remaining > 0 {
            if let Some(winner) = self.uncontested() {
                return Ok(Outcome::Uncontested(winner));
            }
            let position = order[cursor % n];
            cursor += 1;
            remaining -= 1;
            if !self.is_due(position) {
                continue;
            }
            let before = self.current_bet;
            loop {
                let turn = self.turn(position);
                let action = actor.act(&turn);
                match self.apply(position, action) {
                    Ok(_) => break,
                    Err(e) if e.is_recoverable() => {
                        log::warn!("{} rejected {}: {}", turn.name, action, e);
                        actor.reject(&turn, &e);
                    }
                    Err(e) => return Err(e),
                }
            }
            if self.current_bet > before {
                remaining = n - 1;
            }
        }
        Ok(match self.uncontested() {
            Some(winner) => Outcome::Uncontested(winner),
            None => Outcome::Closed,
        })
    }

    /// Sweeps this street's bets and deals the next board cards.
    pub fn next_street(&mut self) -> Result<(), Error> {
        let Some(street) = self.street.next() else {
            return Ok(());
        };
        self.seats.iter_mut().for_each(Seat::sweep);
        self.current_bet = 0;
        self.aggressor = None;
        self.street = street;
        self.table.deal_board(street)
    }
}

impl Game {
    /// Moves the button one seat and posts both blinds. A seat that cannot
    /// cover its blind posts what it has and is all-in; the price to call
    /// is still the full big blind.
    pub fn rotate_blinds(&mut self) {
        self.dealer = (self.dealer + 1) % self.seats.len();
        let rotation = self.rotation();
        for (position, blind) in [
            (rotation.sblind(), self.sblind()),
            (rotation.bblind(), self.bblind()),
        ] {
            let seat = &mut self.seats[position];
            let posted = seat.commit(blind.min(seat.chips()));
            log::debug!("{:<12} posts {}", seat.name(), posted);
        }
        self.current_bet = self
            .seats
            .iter()
            .map(Seat::bet)
            .max()
            .unwrap_or(0)
            .max(self.bblind());
        self.table.collect(&self.seats);
    }

    /// Reshuffles, posts blinds and deals hole cards.
    pub fn start_hand(&mut self) -> Result<(), Error> {
        if !self.is_running() {
            return Err(Error::InsufficientPlayers {
                min: MIN_SEATS,
                got: self.seats.iter().filter(|s| !s.is_busted()).count(),
            });
        }
        self.round += 1;
        self.street = Street::Pref;
        self.current_bet = 0;
        self.aggressor = None;
        self.table.reset(&mut self.seats);
        self.rotate_blinds();
        self.table.deal_holes(&mut self.seats)?;
        log::info!(
            "hand {} dealer {} blinds {}/{}",
            self.round,
            self.seats[self.dealer].name(),
            self.sblind(),
            self.bblind()
        );
        Ok(())
    }

    /// Plays one hand from the shuffle to the payout.
    pub fn play_hand<A, R>(&mut self, actor: &mut A, ranker: &R) -> Result<Summary, Error>
    where
        A: Actor + ?Sized,
        R: Ranker + ?Sized,
    {
        self.start_hand()?;
        let conceded = loop {
            match self.betting_round(actor)? {
                Outcome::Uncontested(winner) => break Some(winner),
                Outcome::Closed if self.street == Street::Rive => break None,
                Outcome::Closed => self.next_street()?,
            }
        };
        let winnings = match conceded {
            Some(winner) => Showdown::concede(self.table.total(), self.seats.len(), winner),
            None => {
                self.reveal();
                Showdown::new(&self.seats, self.table.board(), ranker).settle(self.table.pots())
            }
        };
        for (seat, &chips) in self.seats.iter_mut().zip(winnings.iter()) {
            if chips > 0 {
                log::info!("{:<12} wins {}", seat.name(), chips);
            }
            seat.win(chips);
        }
        self.table.clear();
        let mut summary = Summary::new(
            self.round,
            self.table.board().clone(),
            conceded.is_none(),
            self.seats
                .iter()
                .zip(winnings)
                .map(|(s, w)| (s.name().to_string(), w))
                .collect(),
        );
        summary.eliminated = self.prune();
        Ok(summary)
    }

    /// Plays hands until one seat holds every chip, the actor declines to
    /// continue, or `limit` hands have been dealt.
    pub fn play<A, R>(
        &mut self,
        actor: &mut A,
        ranker: &R,
        limit: Option<usize>,
    ) -> Result<Vec<Summary>, Error>
    where
        A: Actor + ?Sized,
        R: Ranker + ?Sized,
    {
        let mut summaries = Vec::new();
        while self.is_running() {
            if limit.is_some_and(|limit| summaries.len() >= limit) {
                break;
            }
            if !summaries.is_empty() && !actor.resume(self) {
                break;
            }
            summaries.push(self.play_hand(actor, ranker)?);
        }
        if let [winner] = self.seats.as_slice() {
            log::info!("{} holds all {} chips", winner.name(), winner.chips());
        }
        Ok(summaries)
    }

    /// Logs every live hand with its category.
    fn reveal(&self) {
        for seat in self.seats.iter().filter(|s| !s.is_folded()) {
            if let Some(hole) = seat.hole() {
                log::info!(
                    "{:<12} shows {} {}",
                    seat.name(),
                    hole,
                    HandRanker::strength(hole, self.table.board())
                );
            }
        }
    }

    /// Removes busted seats. The button stays put relative to the
    /// survivors so the next rotation lands on the seat that would have
    /// been next anyway.
    fn prune(&mut self) -> Vec<String> {
        let before = self.seats[..self.dealer]
            .iter()
            .filter(|s| !s.is_busted())
            .count();
        let survived = !self.seats[self.dealer].is_busted();
        let eliminated = self
            .seats
            .iter()
            .filter(|s| s.is_busted())
            .map(|s| s.name().to_string())
            .collect::<Vec<String>>();
        self.seats.retain(|s| !s.is_busted());
        for name in eliminated.iter() {
            log::info!("{} is out of chips", name);
        }
        let n = self.seats.len();
        if n > 0 {
            self.dealer = match survived {
                true => before,
                false => (before + n - 1) % n,
            };
        }
        eliminated
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "hand {} {} {}", self.round, self.street, self.table)?;
        for (i, seat) in self.seats.iter().enumerate() {
            let button = if i == self.dealer { "D" } else { " " };
            writeln!(f, "{} {}", button, seat)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Script;

    fn game(stacks: &[Chips]) -> Game {
        let seats = stacks
            .iter()
            .enumerate()
            .map(|(i, &chips)| Seat::new(format!("p{}", i), chips))
            .collect();
        Game::new(seats, 10).unwrap().seeded(42)
    }

    #[test]
    fn one_seat_is_not_a_game() {
        let seats = vec![Seat::new("a", 100), Seat::new("b", 0)];
        assert_eq!(
            Game::new(seats, 10).unwrap_err(),
            Error::InsufficientPlayers { min: 2, got: 1 }
        );
    }

    #[test]
    fn too_many_seats_for_one_deck() {
        let seats = (0..23).map(|i| Seat::new(i.to_string(), 100)).collect();
        assert!(matches!(
            Game::new(seats, 10),
            Err(Error::TooManyPlayers { max: 22, got: 23 })
        ));
    }

    #[test]
    fn duplicate_names_are_refused() {
        let seats = vec![Seat::new("x", 1000), Seat::new("y", 1000), Seat::new("x", 1000)];
        assert_eq!(
            Game::new(seats, 10).unwrap_err(),
            Error::DuplicateName("x".to_string())
        );
    }

    #[test]
    fn blinds_are_posted_around_the_button() {
        let mut game = game(&[1000, 1000, 1000]);
        game.start_hand().unwrap();
        assert_eq!(game.dealer(), 0);
        assert_eq!(game.seat(1).bet(), 10);
        assert_eq!(game.seat(2).bet(), 20);
        assert_eq!(game.current_bet(), 20);
        assert_eq!(game.table().total(), 30);
        assert!(game.seats().iter().all(|s| s.hole().is_some()));
    }

    #[test]
    fn short_blind_is_all_in() {
        let mut game = game(&[1000, 5]);
        game.start_hand().unwrap();
        assert!(game.seat(1).is_all_in());
        assert_eq!(game.seat(1).bet(), 5);
        assert_eq!(game.current_bet(), 20);
        assert_eq!(game.owed(0), 10);
    }

    #[test]
    fn short_big_blind_keeps_the_full_price() {
        let mut game = game(&[1000, 1000, 15]);
        game.start_hand().unwrap();
        assert!(game.seat(2).is_all_in());
        assert_eq!(game.seat(2).bet(), 15);
        assert_eq!(game.current_bet(), 20);
        assert_eq!(game.owed(0), 20);
        assert_eq!(game.apply(0, Action::Call), Ok(20));
        assert_eq!(game.seat(0).bet(), 20);
        assert_eq!(game.owed(1), 10);
        assert_eq!(game.aggressor(), None);
    }

    #[test]
    fn rejected_raise_moves_nothing() {
        let mut game = game(&[1000, 1000, 1000]);
        game.start_hand().unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply(0, Action::Raise(20)),
            Err(Error::RaiseBelowCall { to: 20, adds: 20, owed: 20 })
        );
        assert_eq!(
            game.apply(0, Action::Raise(1001)),
            Err(Error::RaiseAboveStack { to: 1001, adds: 1001, stack: 1000 })
        );
        assert_eq!(game.apply(0, Action::Check), Err(Error::Unavailable(Choice::Check)));
        assert_eq!(game.seats(), before.seats());
        assert_eq!(game.table().total(), before.table().total());
    }

    #[test]
    fn raise_to_the_whole_stack_is_all_in() {
        let mut game = game(&[1000, 1000, 1000]);
        game.start_hand().unwrap();
        assert_eq!(game.apply(0, Action::Raise(1000)), Ok(1000));
        assert!(game.seat(0).is_all_in());
        assert_eq!(game.current_bet(), 1000);
        assert_eq!(game.aggressor(), Some(0));
    }

    #[test]
    fn short_all_in_does_not_reopen() {
        let mut game = game(&[1000, 1000, 40]);
        game.start_hand().unwrap();
        game.apply(0, Action::Raise(60)).unwrap();
        game.apply(1, Action::Call).unwrap();
        assert_eq!(game.apply(2, Action::Shove), Ok(20));
        assert!(game.seat(2).is_all_in());
        assert_eq!(game.current_bet(), 60);
        assert_eq!(game.aggressor(), Some(0));
    }

    #[test]
    fn all_in_above_the_bet_reopens() {
        let mut game = game(&[1000, 1000, 90]);
        game.start_hand().unwrap();
        game.apply(0, Action::Raise(60)).unwrap();
        game.apply(1, Action::Call).unwrap();
        game.apply(2, Action::Shove).unwrap();
        assert_eq!(game.current_bet(), 90);
        assert_eq!(game.aggressor(), Some(2));
        assert_eq!(game.owed(0), 30);
    }

    #[test]
    fn raise_reopens_the_round() {
        let mut game = game(&[1000, 1000, 1000]);
        game.start_hand().unwrap();
        let mut script = Script::from(vec![
            Action::Call,
            Action::Call,
            Action::Raise(60),
            Action::Call,
            Action::Call,
        ]);
        assert_eq!(game.betting_round(&mut script).unwrap(), Outcome::Closed);
        assert!(game.seats().iter().all(|s| s.spent() == 60));
        assert_eq!(game.table().total(), 180);
        assert!(script.is_empty());
    }

    #[test]
    fn illegal_decision_is_asked_again() {
        let mut game = game(&[1000, 1000]);
        game.start_hand().unwrap();
        let mut script = Script::from(vec![Action::Check, Action::Fold]);
        let outcome = game.betting_round(&mut script).unwrap();
        assert_eq!(outcome, Outcome::Uncontested(1));
        assert_eq!(script.rejected(), 1);
        assert!(script.is_empty());
    }

    #[test]
    fn everyone_all_in_runs_the_board_out() {
        let mut game = game(&[1000, 1000]);
        let mut script = Script::from(vec![Action::Shove, Action::Call]);
        let ranker = |_: &Hole, _: &Board| -> crate::Score { 1 };
        let summary = game.play_hand(&mut script, &ranker).unwrap();
        assert!(summary.showdown);
        assert_eq!(summary.board.cards().len(), Street::Rive.n_observed());
        assert!(script.is_empty());
        assert_eq!(game.seat(0).chips(), 1000);
        assert_eq!(game.seat(1).chips(), 1000);
    }

    #[test]
    fn chips_survive_an_all_in_hand() {
        let mut game = game(&[1000, 1000, 100]);
        let mut script = Script::from(vec![Action::Shove, Action::Fold, Action::Shove]);
        let ranker = |hole: &Hole, _: &Board| -> crate::Score {
            hole.cards().iter().map(|c| u8::from(c.rank()) as crate::Score).sum()
        };
        let summary = game.play_hand(&mut script, &ranker).unwrap();
        assert_eq!(game.chips_in_play(), 2100);
        assert_eq!(summary.winnings.iter().map(|(_, w)| w).sum::<Chips>(), 1110);
        match summary.eliminated.as_slice() {
            [] => assert_eq!(game.seats().len(), 3),
            [name] => assert_eq!(name, "p2"),
            _ => panic!("only the short stack can bust"),
        }
    }

    #[test]
    fn button_holds_when_a_seat_busts() {
        let mut game = game(&[100, 100, 100, 100]);
        game.dealer = 2;
        game.seats[1] = Seat::new("p1", 0);
        assert_eq!(game.prune(), vec!["p1".to_string()]);
        assert_eq!(game.dealer(), 1);
        game.rotate_blinds();
        assert_eq!(game.seat(game.dealer()).name(), "p3");
    }

    #[test]
    fn button_passes_on_when_the_dealer_busts() {
        let mut game = game(&[100, 100, 100, 100]);
        game.dealer = 2;
        game.seats[2] = Seat::new("p2", 0);
        assert_eq!(game.prune(), vec!["p2".to_string()]);
        assert_eq!(game.seat(game.dealer()).name(), "p1");
        game.rotate_blinds();
        assert_eq!(game.seat(game.dealer()).name(), "p3");
    }
}
