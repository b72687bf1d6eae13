use crate::dice::DiceSource;
use std::fmt;

/// Stable identity of a player, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out player ids. Each game owns its own sequence.
#[derive(Debug, Clone, Default)]
pub struct PlayerIds {
    next: u32,
}

impl PlayerIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) dice: Vec<u8>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, dice: Vec<u8>) -> Self {
        Self { id, name: name.into(), dice }
    }

    /// Returns the player's id
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dice currently in hand
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    /// A player is out once their last die is gone.
    pub fn lost(&self) -> bool {
        self.dice.is_empty()
    }

    /// Number of dice in hand showing `face`.
    pub fn count_face(&self, face: u8) -> usize {
        self.dice.iter().filter(|&&d| d == face).count()
    }

    /// Reroll the whole hand, keeping its size.
    pub fn roll(&mut self, sides: u8, source: &mut dyn DiceSource) {
        let count = self.dice.len();
        self.dice = source.roll_n(count, sides);
    }

    /// Drop one die. Returns false if the hand was already empty.
    pub fn remove_die(&mut self) -> bool {
        self.dice.pop().is_some()
    }

    /// Hand rendered as `"[3] [5] [1]"`.
    pub fn dice_string(&self) -> String {
        self.dice.iter().map(|d| format!("[{d}]")).collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>10}: {}", self.name, self.dice_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn ids_follow_creation_order() {
        let mut ids = PlayerIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_eq!(a.value(), 0);
        assert_eq!(b.value(), 1);
        assert!(a < b);
    }

    #[test]
    fn separate_sequences_do_not_share_state() {
        let mut first = PlayerIds::new();
        first.next_id();
        first.next_id();
        let mut second = PlayerIds::new();
        assert_eq!(second.next_id().value(), 0);
    }

    #[test]
    fn roll_keeps_hand_size() {
        let mut p = Player::new(PlayerIds::new().next_id(), "Ada", vec![1, 1, 1]);
        let mut dice = ScriptedDice::new(vec![4, 5]);
        p.roll(6, &mut dice);
        assert_eq!(p.dice(), &[4, 5, 4]);
    }

    #[test]
    fn losing_last_die_marks_lost() {
        let mut p = Player::new(PlayerIds::new().next_id(), "Bo", vec![2]);
        assert!(!p.lost());
        assert!(p.remove_die());
        assert!(p.lost());
        assert!(!p.remove_die());
    }

    #[test]
    fn dice_string_formats_hand() {
        let p = Player::new(PlayerIds::new().next_id(), "Cy", vec![3, 5, 1]);
        assert_eq!(p.dice_string(), "[3] [5] [1]");
        assert_eq!(p.count_face(5), 1);
    }
}
