use crate::config::{GameConfig, DEFAULT_DICE_COUNT, DEFAULT_DICE_SIZE, MAX_DICE_COUNT};
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Hot-seat Liar's Dice in the terminal", long_about = None)]
pub struct Cli {
    /// Dice each player starts with
    #[arg(short = 'c', long, default_value_t = DEFAULT_DICE_COUNT,
          value_parser = clap::value_parser!(u64).range(1..=MAX_DICE_COUNT as u64).map(|v| v as usize))]
    pub dice_count: usize,
    /// Faces per die
    #[arg(short = 's', long, default_value_t = DEFAULT_DICE_SIZE,
          value_parser = clap::value_parser!(u8).range(1..))]
    pub dice_size: u8,
    /// Draw six-sided dice as unicode faces
    #[arg(short, long)]
    pub unicode: bool,
    /// Hide the odds shown after a challenge
    #[arg(long)]
    pub no_odds: bool,
    /// Show every player's dice during turns
    #[arg(short, long)]
    pub debug: bool,
    /// Seed the dice for a reproducible match
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write a debug log to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
    /// Player names, pre-filled on the setup screen
    pub names: Vec<String>,
}

impl Cli {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            dice_count: self.dice_count,
            dice_size: self.dice_size,
            unicode_dice: self.unicode,
            show_odds: !self.no_odds,
            debug: self.debug,
            seed: self.seed,
        }
    }
}
