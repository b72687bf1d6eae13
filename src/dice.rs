use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Where dice values come from.
///
/// Every roll in a game goes through one source, so a match can be replayed by
/// handing the game a seeded or scripted source.
pub trait DiceSource: fmt::Debug {
    /// Roll one die with `sides` faces. Must return a value in `1..=sides`.
    fn roll(&mut self, sides: u8) -> u8;

    /// Roll `count` dice.
    fn roll_n(&mut self, count: usize, sides: u8) -> Vec<u8> {
        (0..count).map(|_| self.roll(sides)).collect()
    }
}

/// Fair dice backed by a ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomDice {
    /// Seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// Seeded stream for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self, sides: u8) -> u8 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed sequence of faces, cycling when it runs out.
///
/// Faces larger than the die are wrapped back into range so the hand
/// invariant holds whatever the script says.
///
/// ```
/// use liars_dice::dice::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![3, 4]);
/// assert_eq!(dice.roll_n(3, 6), vec![3, 4, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    pos: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<u8>) -> Self {
        Self { faces, pos: 0 }
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, sides: u8) -> u8 {
        let sides = sides.max(1);
        if self.faces.is_empty() {
            return 1;
        }
        let raw = self.faces[self.pos % self.faces.len()];
        self.pos = (self.pos + 1) % self.faces.len();
        (raw.max(1) - 1) % sides + 1
    }
}
