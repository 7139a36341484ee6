use crate::Error;
use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::gameplay::Turn;

/// A decision source: answers "what do you do now?" for whichever seat
/// is up.
///
/// The driver blocks on [`Actor::act`]. A decision that breaks a rule is
/// handed back through [`Actor::reject`] and the same seat is asked again.
pub trait Actor {
    fn act(&mut self, turn: &Turn) -> Action;
    fn reject(&mut self, _: &Turn, _: &Error) {}
    /// Asked between hands; false ends the session.
    fn resume(&mut self, _: &Game) -> bool {
        true
    }
}

impl<A: Actor + ?Sized> Actor for Box<A> {
    fn act(&mut self, turn: &Turn) -> Action {
        (**self).act(turn)
    }
    fn reject(&mut self, turn: &Turn, error: &Error) {
        (**self).reject(turn, error)
    }
    fn resume(&mut self, game: &Game) -> bool {
        (**self).resume(game)
    }
}
