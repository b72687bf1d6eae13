//! Odds of a bet from one player's point of view.
//!
//! The querying player's own hand is known, so it is taken out of both the
//! pool and the claimed count before the rest of the pool is treated as
//! independent fair dice. Each unknown die shows the claimed face with
//! probability `1 / dice_size`, which makes the number of matching unknown
//! dice binomially distributed.
//!
//! These figures are advisory. Challenges always resolve on the real dice.
//!
//! ```
//! use liars_dice::odds;
//!
//! // Nothing known, nothing claimed, nothing in play: certain.
//! assert_eq!(odds::spot_on(3, 0, 0, &[], 6), 1.0);
//!
//! // Holding two 5s already covers a claim of two 5s.
//! assert_eq!(odds::at_least(5, 2, 10, &[5, 5, 1], 6), 1.0);
//! ```

/// Claimed count and pool size after removing the known dice.
///
/// Both may go negative: a negative count means the known dice alone already
/// exceed the claim.
fn adjusted(face: u8, amount: usize, dice_in_play: usize, known: &[u8]) -> (i64, i64) {
    let held = known.iter().filter(|&&d| d == face).count() as i64;
    let q = amount as i64 - held;
    let m = dice_in_play as i64 - known.len() as i64;
    (q, m)
}

/// `ln C(n, k)`, summed term by term so large pools neither overflow nor
/// lose the result to `inf * 0`.
fn ln_binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (1..=k).map(|i| ((n - k + i) as f64 / i as f64).ln()).sum()
}

/// Probability that exactly `q` of `m` unknown dice show a given face.
fn mass(q: i64, m: i64, dice_size: u8) -> f64 {
    if q < 0 || m < 0 || q > m {
        return 0.0;
    }
    // A one-sided die always shows the face.
    if dice_size <= 1 {
        return if q == m { 1.0 } else { 0.0 };
    }
    let p = 1.0 / f64::from(dice_size);
    let ln = ln_binomial(m as u64, q as u64) + q as f64 * p.ln() + (m - q) as f64 * (-p).ln_1p();
    ln.exp()
}

/// Probability that the pool holds exactly `amount` dice showing `face`.
pub fn spot_on(face: u8, amount: usize, dice_in_play: usize, known: &[u8], dice_size: u8) -> f64 {
    let (q, m) = adjusted(face, amount, dice_in_play, known);
    mass(q, m, dice_size)
}

/// Probability that the pool holds at least `amount` dice showing `face`,
/// i.e. that the bet is true.
pub fn at_least(face: u8, amount: usize, dice_in_play: usize, known: &[u8], dice_size: u8) -> f64 {
    let (q, m) = adjusted(face, amount, dice_in_play, known);
    if m < 0 {
        return 0.0;
    }
    if q <= 0 {
        return 1.0;
    }
    let total: f64 = (q..=m).map(|i| mass(i, m, dice_size)).sum();
    total.min(1.0)
}
