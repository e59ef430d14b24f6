//! Magnitude → field parameter curve.
//!
//! Computes all field-level parameters from a single `log10(amount)` curve.
//! No hardcoded tiers — cheap and expensive threats differ smoothly in
//! visual density. A $1 bill and a $500 debt sit at the two ends of the
//! curve; anything past $500 saturates.

use serde::{Deserialize, Serialize};

use crate::config::FieldTuning;
use crate::rocks::{generate_rocks, RockSpec};

/// Field-level parameters for one threat, plus its generated rocks.
///
/// Identical `(amount, seed, tuning)` inputs always produce an identical
/// value; the caller owns any caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    pub rock_count: usize,
    pub field_radius: f32,
    /// Size multiplier of the anchor rock relative to the threat's base size.
    pub anchor_size: f32,
    /// Field drift speed, scene units per second.
    pub drift_speed: f32,
    /// How many rocks must be destroyed before the field collapses.
    pub cascade_threshold: u32,
    pub rocks: Vec<RockSpec>,
}

/// Linear interpolation between `min` and `max` by `t` in [0, 1].
fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}

/// Normalise a dollar amount to the [0, 1] curve position.
///
/// Non-positive and NaN amounts clamp to $1 (t = 0) rather than erroring —
/// this runs inside a rendering hot path.
fn curve_position(amount: f32, tuning: &FieldTuning) -> f32 {
    let log_amount = amount.max(1.0).log10();
    (log_amount / tuning.magnitude_log_span).clamp(0.0, 1.0)
}

/// Collapse trigger count for a field of the given density.
///
/// Fixed contractual rule, deliberately not tunable: small fields collapse
/// after 2 kills, mid fields after 3, dense fields after 4.
fn cascade_threshold(rock_count: usize) -> u32 {
    if rock_count <= 4 {
        2
    } else if rock_count <= 7 {
        3
    } else {
        4
    }
}

/// Compute the full field descriptor for a threat.
///
/// `amount` is the dollar magnitude of the threat; `seed` makes the layout
/// reproducible (pass [`crate::constants::DEFAULT_FIELD_SEED`] unless
/// debugging a specific layout).
pub fn field_params(amount: f32, seed: u32, tuning: &FieldTuning) -> FieldParams {
    let t = curve_position(amount, tuning);

    let rock_count = lerp(tuning.rock_count_min, tuning.rock_count_max, t).round() as usize;
    let field_radius = lerp(tuning.field_radius_min, tuning.field_radius_max, t);
    let anchor_size = lerp(tuning.anchor_size_min, tuning.anchor_size_max, t);
    let drift_speed = lerp(tuning.drift_speed_min, tuning.drift_speed_max, t);
    let cascade_threshold = cascade_threshold(rock_count);

    let rocks = generate_rocks(rock_count, field_radius, anchor_size, seed, tuning);

    FieldParams {
        rock_count,
        field_radius,
        anchor_size,
        drift_speed,
        cascade_threshold,
        rocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FIELD_SEED;

    fn params(amount: f32) -> FieldParams {
        field_params(amount, DEFAULT_FIELD_SEED, &FieldTuning::default())
    }

    // ── Curve position ────────────────────────────────────────────────────────

    #[test]
    fn one_dollar_sits_at_curve_bottom() {
        let tuning = FieldTuning::default();
        assert_eq!(curve_position(1.0, &tuning), 0.0);
    }

    #[test]
    fn non_positive_amounts_clamp_to_one_dollar() {
        let tuning = FieldTuning::default();
        assert_eq!(curve_position(0.0, &tuning), 0.0);
        assert_eq!(curve_position(-250.0, &tuning), 0.0);
        assert_eq!(curve_position(f32::NAN, &tuning), 0.0);
    }

    #[test]
    fn curve_saturates_past_five_hundred() {
        let tuning = FieldTuning::default();
        assert_eq!(curve_position(501.19, &tuning), 1.0);
        assert_eq!(curve_position(1.0e9, &tuning), 1.0);
    }

    // ── Field parameters ──────────────────────────────────────────────────────

    #[test]
    fn same_amount_and_seed_produce_identical_params() {
        let a = field_params(50.0, 42, &FieldTuning::default());
        let b = field_params(50.0, 42, &FieldTuning::default());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_produce_different_distributions() {
        let a = field_params(50.0, 42, &FieldTuning::default());
        let b = field_params(50.0, 999, &FieldTuning::default());
        assert_ne!(a.rocks[0].position, b.rocks[0].position);
        assert_eq!(a.rock_count, b.rock_count);
    }

    #[test]
    fn cheap_threats_have_few_rocks() {
        let cheap = params(5.0);
        assert!((3..=5).contains(&cheap.rock_count), "got {}", cheap.rock_count);
    }

    #[test]
    fn mid_tier_threats_have_medium_counts() {
        let mid = params(50.0);
        assert!((6..=8).contains(&mid.rock_count), "got {}", mid.rock_count);
    }

    #[test]
    fn expensive_threats_max_out() {
        let expensive = params(200.0);
        assert!(
            (9..=10).contains(&expensive.rock_count),
            "got {}",
            expensive.rock_count
        );
    }

    #[test]
    fn radius_and_count_grow_with_amount() {
        let small = params(5.0);
        let large = params(200.0);
        assert!(large.field_radius > small.field_radius);
        assert!(large.rock_count > small.rock_count);
        assert!(large.anchor_size > small.anchor_size);
        assert!(large.drift_speed > small.drift_speed);
    }

    #[test]
    fn cascade_threshold_follows_rock_count() {
        assert_eq!(cascade_threshold(3), 2);
        assert_eq!(cascade_threshold(4), 2);
        assert_eq!(cascade_threshold(5), 3);
        assert_eq!(cascade_threshold(7), 3);
        assert_eq!(cascade_threshold(8), 4);
        assert_eq!(cascade_threshold(10), 4);

        assert_eq!(params(5.0).cascade_threshold, 3); // 5 rocks
        assert_eq!(params(200.0).cascade_threshold, 4); // 9-10 rocks
    }

    #[test]
    fn rock_count_matches_rocks_len() {
        for amount in [1.0, 5.0, 50.0, 200.0, 5000.0] {
            let p = params(amount);
            assert_eq!(p.rock_count, p.rocks.len(), "amount {}", amount);
        }
    }

    #[test]
    fn huge_amounts_hit_the_performance_ceiling_not_beyond() {
        let p = params(1.0e12);
        assert_eq!(p.rock_count, 10);
        assert_eq!(p.field_radius, 7.0);
    }
}
