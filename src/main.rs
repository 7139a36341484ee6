//! Holdem Binary
//!
//! Deals a No-Limit Hold'em session in the terminal. The first `--humans`
//! seats are prompted; everyone else plays randomly.

use clap::Parser;
use holdem_table::gameplay::*;
use holdem_table::players::*;
use holdem_table::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Config {
    #[arg(long = "name", help = "Seat name, once per seat in seating order")]
    names: Vec<String>,
    #[arg(long, default_value_t = 1, help = "How many of the first seats are interactive")]
    humans: usize,
    #[arg(long, default_value_t = STACK, help = "Starting stack for every seat")]
    stack: Chips,
    #[arg(long, default_value_t = S_BLIND, help = "Small blind; the big blind is twice this")]
    small_blind: Chips,
    #[arg(long, help = "Deck and robot seed for a reproducible session")]
    seed: Option<u64>,
    #[arg(long, help = "Stop after this many hands")]
    hands: Option<usize>,
    #[arg(long, help = "Only log warnings to the terminal")]
    quiet: bool,
}

impl Config {
    fn names(&self) -> Vec<String> {
        match self.names.len() {
            0 => vec!["hero".to_string(), "villain".to_string()],
            _ => self.names.clone(),
        }
    }
    fn lineup(&self, seed: u64) -> Lineup {
        self.names()
            .into_iter()
            .enumerate()
            .fold(Lineup::new(Box::new(Robot::from(seed))), |lineup, (i, name)| {
                match i < self.humans {
                    true => lineup.seat(name, Box::new(Human)),
                    false => lineup.seat(name, Box::new(Robot::from(seed.wrapping_add(i as u64)))),
                }
            })
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    log(match config.quiet {
        true => log::LevelFilter::Warn,
        false => log::LevelFilter::Info,
    })?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let seats = config
        .names()
        .into_iter()
        .map(|name| Seat::new(name, config.stack))
        .collect::<Vec<Seat>>();
    let mut game = Game::new(seats, config.small_blind)?.seeded(seed);
    let mut lineup = config.lineup(seed);
    log::info!("seed {}", seed);
    for summary in game.play(&mut lineup, &HandRanker, config.hands)? {
        log::debug!("{}", summary);
    }
    for seat in game.seats() {
        println!("{:<12} {:>8}", seat.name(), seat.chips());
    }
    Ok(())
}
