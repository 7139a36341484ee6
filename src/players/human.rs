use super::actor::Actor;
use crate::Chips;
use crate::Error;
use crate::gameplay::*;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;

/// Interactive terminal seat.
///
/// Shows the seat's cards and the legal choices, and asks for a raise
/// target within the accepted range. Prompt failures fold the hand.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn selection(turn: &Turn) -> std::io::Result<Choice> {
        let labels = turn
            .legal
            .iter()
            .map(|c| Self::paint(c).to_string())
            .collect::<Vec<String>>();
        let hole = turn
            .hole
            .map(|h| h.to_string())
            .unwrap_or_else(|| "--".into());
        let index = Select::new()
            .with_prompt(format!(
                "\n{} holds {} on [{}], {} to call",
                turn.name.bold(),
                hole.bold(),
                turn.board,
                turn.owed.to_string().yellow()
            ))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(std::io::Error::other)?;
        Ok(turn.legal[index])
    }
    fn sizing(turn: &Turn) -> std::io::Result<Chips> {
        let min = turn.min_raise();
        let max = turn.max_raise();
        Input::<Chips>::new()
            .with_prompt(format!("Raise to [{}-{}]", min, max))
            .validate_with(|to: &Chips| -> Result<(), String> {
                match *to {
                    to if to < min => Err(format!("Minimum raise is {}", min)),
                    to if to > max => Err(format!("Maximum raise is {}", max)),
                    _ => Ok(()),
                }
            })
            .report(false)
            .interact_text()
            .map_err(std::io::Error::other)
    }
    fn decide(turn: &Turn) -> std::io::Result<Action> {
        Ok(match Self::selection(turn)? {
            Choice::Fold => Action::Fold,
            Choice::Check => Action::Check,
            Choice::Call => Action::Call,
            Choice::Raise => Action::Raise(Self::sizing(turn)?),
            Choice::Shove => Action::Shove,
        })
    }
    fn paint(choice: &Choice) -> colored::ColoredString {
        match choice {
            Choice::Fold => choice.label().red(),
            Choice::Check => choice.label().normal(),
            Choice::Call => choice.label().green(),
            Choice::Raise => choice.label().yellow(),
            Choice::Shove => choice.label().magenta().bold(),
        }
    }
}

impl Actor for Human {
    fn act(&mut self, turn: &Turn) -> Action {
        Self::decide(turn).unwrap_or_else(|e| {
            log::error!("{} could not be prompted: {}", turn.name, e);
            Action::Fold
        })
    }
    fn reject(&mut self, _: &Turn, error: &Error) {
        println!("{}", error.to_string().red());
    }
    fn resume(&mut self, game: &Game) -> bool {
        println!("{}", game);
        Confirm::new()
            .with_prompt("Deal another hand?")
            .default(true)
            .interact()
            .unwrap_or(false)
    }
}
