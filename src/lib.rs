//! No-Limit Texas Hold'em table engine.
//!
//! Runs fixed-blind betting rounds for 2..=22 seats, forms side pots as
//! players commit unequal stacks, and settles every pot tier at showdown.
//!
//! - [`cards`]: cards, hands, the seeded deck and the bundled evaluator
//! - [`gameplay`]: chip and pot ledgers, turn order, legal actions,
//!   the betting-round driver and showdown settlement
//! - [`players`]: decision sources that answer "what do you do now?"
pub mod cards;
pub mod error;
pub mod gameplay;
pub mod players;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pot amounts. Never negative.
pub type Chips = u32;
/// Seat index around the table, in seating order.
pub type Position = usize;
/// Rank score of a hole + board combination. Lower is stronger.
pub type Score = u32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Default starting stack.
pub const STACK: Chips = 1_000;
/// Default small blind. The big blind is always twice the small blind.
pub const S_BLIND: Chips = 10;
/// Fewest seats a game can be dealt with.
pub const MIN_SEATS: usize = 2;
/// Most seats one deck can serve: 2 hole cards each, 5 board cards, 3 burns.
pub const MAX_SEATS: usize = 22;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
