use std::fmt;

/// A claim that at least `amount` dice in the pool show `face`.
///
/// Bets order by amount first, then face, so `3x [2]` beats `2x [6]`.
///
/// ```
/// use liars_dice::bet::Bet;
///
/// assert!(Bet::new(3, 2) > Bet::new(2, 6));
/// assert!(Bet::new(2, 5) > Bet::new(2, 4));
/// assert_eq!(Bet::new(4, 3).to_string(), "4x [3]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bet {
    // Field order drives the derived ordering.
    amount: usize,
    face: u8,
}

impl Bet {
    pub const fn new(amount: usize, face: u8) -> Self {
        Self { amount, face }
    }

    /// Number of dice claimed.
    pub const fn amount(&self) -> usize {
        self.amount
    }

    /// Face value claimed.
    pub const fn face(&self) -> u8 {
        self.face
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x [{}]", self.amount, self.face)
    }
}
