use super::actor::Actor;
use crate::Error;
use crate::gameplay::*;
use std::collections::HashMap;

/// Routes each seat, by name, to its own decision source.
///
/// Seats without an entry go to the fallback. Every actor is asked
/// whether to deal another hand; any one of them can end the session.
pub struct Lineup {
    actors: HashMap<String, Box<dyn Actor>>,
    fallback: Box<dyn Actor>,
}

impl Lineup {
    pub fn new(fallback: Box<dyn Actor>) -> Self {
        Self {
            actors: HashMap::new(),
            fallback,
        }
    }
    pub fn seat(mut self, name: impl Into<String>, actor: Box<dyn Actor>) -> Self {
        self.actors.insert(name.into(), actor);
        self
    }
    fn route(&mut self, name: &str) -> &mut dyn Actor {
        match self.actors.get_mut(name) {
            Some(actor) => actor.as_mut(),
            None => self.fallback.as_mut(),
        }
    }
}

impl Actor for Lineup {
    fn act(&mut self, turn: &Turn) -> Action {
        self.route(&turn.name).act(turn)
    }
    fn reject(&mut self, turn: &Turn, error: &Error) {
        self.route(&turn.name).reject(turn, error)
    }
    fn resume(&mut self, game: &Game) -> bool {
        self.actors.values_mut().all(|a| a.resume(game)) && self.fallback.resume(game)
    }
}
