use crate::dice::{DiceSource, RandomDice};

pub const DEFAULT_DICE_COUNT: usize = 5;
pub const DEFAULT_DICE_SIZE: u8 = 6;
/// Most dice a player may start with.
pub const MAX_DICE_COUNT: usize = 20;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("at least {min} players are required, got {got}")]
    TooFewPlayers { min: usize, got: usize },
    #[error("player names must not be blank")]
    EmptyName,
    #[error("each player needs at least one die")]
    NoDice,
    #[error("at most {max} dice per player, got {got}")]
    TooManyDice { max: usize, got: usize },
    #[error("dice need at least one face")]
    NoFaces,
}

/// Match settings chosen before the first roll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    pub dice_count: usize,
    pub dice_size: u8,
    /// Draw d6 faces as ⚀..⚅ instead of `[n]`.
    pub unicode_dice: bool,
    /// Show the challenger's odds after each challenge.
    pub show_odds: bool,
    /// Show every hand on every turn.
    pub debug: bool,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_count: DEFAULT_DICE_COUNT,
            dice_size: DEFAULT_DICE_SIZE,
            unicode_dice: false,
            show_odds: true,
            debug: false,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dice_count == 0 {
            return Err(ConfigError::NoDice);
        }
        if self.dice_count > MAX_DICE_COUNT {
            return Err(ConfigError::TooManyDice { max: MAX_DICE_COUNT, got: self.dice_count });
        }
        if self.dice_size == 0 {
            return Err(ConfigError::NoFaces);
        }
        Ok(())
    }

    /// Dice for a new match: seeded when a seed is configured. The seed in
    /// use is logged so any match can be replayed with `--seed`.
    pub fn dice_source(&self) -> Box<dyn DiceSource> {
        let dice = match self.seed {
            Some(seed) => RandomDice::seeded(seed),
            None => RandomDice::from_entropy(),
        };
        log::info!("dice seed {}", dice.seed());
        Box::new(dice)
    }

    /// Unicode faces only exist for six-sided dice.
    pub fn unicode_faces(&self) -> bool {
        self.unicode_dice && self.dice_size == 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.dice_count, 5);
        assert_eq!(cfg.dice_size, 6);
        assert!(cfg.show_odds);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        let cfg = GameConfig { dice_count: 0, ..GameConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoDice));
        let cfg = GameConfig { dice_size: 0, ..GameConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoFaces));
    }

    #[test]
    fn dice_count_is_capped() {
        let cfg = GameConfig { dice_count: MAX_DICE_COUNT, ..GameConfig::default() };
        assert!(cfg.validate().is_ok());
        let cfg = GameConfig { dice_count: MAX_DICE_COUNT + 1, ..GameConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::TooManyDice { max: 20, got: 21 }));
    }

    #[test]
    fn seeded_sources_agree() {
        let cfg = GameConfig { seed: Some(9), ..GameConfig::default() };
        let mut a = cfg.dice_source();
        let mut b = cfg.dice_source();
        assert_eq!(a.roll_n(10, 6), b.roll_n(10, 6));
    }

    #[test]
    fn unicode_faces_need_d6() {
        let cfg = GameConfig { unicode_dice: true, dice_size: 8, ..GameConfig::default() };
        assert!(!cfg.unicode_faces());
        let cfg = GameConfig { unicode_dice: true, ..GameConfig::default() };
        assert!(cfg.unicode_faces());
    }
}
