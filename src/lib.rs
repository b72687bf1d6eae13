//! liars-dice: rules engine and hot-seat terminal game for Liar's Dice
//!
//! Goals:
//! - Every rule lives in [`game::Game`]; frontends only drive it
//! - Deterministic when seeded, so matches can be replayed and tested
//! - No panics for invalid moves; use `Result` for recoverable errors
//!
//! ## Quick start: play a round
//! ```
//! use liars_dice::bet::Bet;
//! use liars_dice::dice::ScriptedDice;
//! use liars_dice::game::{Game, Verdict};
//!
//! // Every die shows a 4.
//! let dice = Box::new(ScriptedDice::new(vec![4]));
//! let mut game = Game::with_source(&["Ann", "Ben"], 2, 6, dice).unwrap();
//! game.setup();
//!
//! game.first_bet(Bet::new(3, 4)).unwrap();
//! game.next_player();
//! let outcome = game.call_bluff().unwrap();
//!
//! assert_eq!(outcome.verdict, Verdict::ChallengerIncorrect);
//! assert_eq!(game.dice_in_play(), 3);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin liars-dice -- Ann Ben Cat
//! ```

pub mod bet;
pub mod cli;
pub mod config;
pub mod dice;
pub mod engine;
pub mod game;
pub mod odds;
pub mod player;
pub mod tui;

use std::io;
use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Send `log` records at debug level and above to `path`.
///
/// The TUI owns the terminal, so there is no terminal logger.
pub fn init_logging(path: &Path) -> io::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::File::create(path)?;
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file).map_err(io::Error::other)
}
