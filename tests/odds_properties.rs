use liars_dice::odds::{at_least, spot_on};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn hand() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 0..=5)
}

proptest! {
    #[test]
    fn at_least_is_a_probability(face in 1u8..=6, amount in 0usize..=20, extra in 0usize..=15, known in hand()) {
        let pool = known.len() + extra;
        let p = at_least(face, amount, pool, &known, 6);
        prop_assert!((0.0..=1.0).contains(&p), "p = {p}");
    }

    #[test]
    fn at_least_never_grows_with_amount(face in 1u8..=6, amount in 0usize..=19, extra in 0usize..=15, known in hand()) {
        let pool = known.len() + extra;
        let lo = at_least(face, amount, pool, &known, 6);
        let hi = at_least(face, amount + 1, pool, &known, 6);
        prop_assert!(hi <= lo + EPS, "{hi} > {lo}");
    }

    #[test]
    fn spot_on_bounded_by_at_least(face in 1u8..=6, amount in 0usize..=20, extra in 0usize..=15, known in hand()) {
        let pool = known.len() + extra;
        let exact = spot_on(face, amount, pool, &known, 6);
        let tail = at_least(face, amount, pool, &known, 6);
        prop_assert!(exact <= tail + EPS);
    }

    #[test]
    fn spot_on_sums_to_one(face in 1u8..=6, extra in 0usize..=15, known in hand(), sides in 2u8..=12) {
        let pool = known.len() + extra;
        let total: f64 = (0..=pool).map(|k| spot_on(face, k, pool, &known, sides)).sum();
        prop_assert!((total - 1.0).abs() < 1e-6, "total = {total}");
    }
}

#[test]
fn claims_beyond_the_pool_are_impossible() {
    assert_eq!(at_least(2, 6, 5, &[1, 3], 6), 0.0);
    assert_eq!(spot_on(2, 6, 5, &[1, 3], 6), 0.0);
}

#[test]
fn two_unknown_dice_for_one_six() {
    // 1 - (5/6)^2
    let p = at_least(6, 1, 2, &[], 6);
    assert!((p - 11.0 / 36.0).abs() < EPS);
}

#[test]
fn large_pools_keep_sane_odds() {
    // 1200 unknown d6: mean 200 sixes, sd about 13.
    let far_above = at_least(6, 400, 1200, &[], 6);
    assert!(far_above.is_finite());
    assert!(far_above < 1e-9, "far_above = {far_above}");

    let far_below = at_least(6, 150, 1200, &[], 6);
    assert!(far_below > 0.999, "far_below = {far_below}");

    let exact_tail = spot_on(6, 600, 1200, &[], 6);
    assert!(exact_tail.is_finite());
    assert!(exact_tail < 1e-9);

    let at_mean = spot_on(6, 200, 1200, &[], 6);
    assert!(at_mean > 0.01 && at_mean < 0.05, "at_mean = {at_mean}");
}

#[test]
fn large_pool_spot_on_sums_to_one() {
    let pool = 1500;
    let total: f64 = (0..=pool).map(|k| spot_on(3, k, pool, &[3, 1], 6)).sum();
    assert!((total - 1.0).abs() < 1e-6, "total = {total}");
}
