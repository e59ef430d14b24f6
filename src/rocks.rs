//! Tiered rock distribution within an oblate ellipsoid field.
//!
//! Every threat cluster is one `large` anchor rock, a couple of `medium`
//! rocks, and a remainder of `small` debris. Positions come from uniform
//! sphere sampling (cube-root radius for uniform volume coverage), flattened
//! on Y, with pairwise spacing enforced by bounded rejection sampling.
//!
//! All draws for one [`generate_rocks`] call come from a single generator
//! seeded with the field's base seed, so a `(count, radius, anchor, seed)`
//! tuple always reproduces the same cluster.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldTuning;
use crate::constants::{
    TUMBLE_X_MAX, TUMBLE_X_MIN, TUMBLE_Y_MAX, TUMBLE_Y_MIN, TUMBLE_Z_MAX, TUMBLE_Z_MIN,
};
use crate::rng::Mulberry32;

/// Size tier of a rock within its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// The single anchor rock, biased toward the field centre.
    Large,
    /// Mid-size rocks, 2–3 per field.
    Medium,
    /// Everything else.
    Small,
}

/// Rendering hint for trail effects; small rocks get none so a dense field
/// stays inside the particle budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailTier {
    Full,
    Reduced,
    None,
}

impl Tier {
    /// Hit points before the rock shatters.
    pub fn hit_points(self) -> u32 {
        match self {
            Tier::Large => 3,
            Tier::Medium => 2,
            Tier::Small => 1,
        }
    }

    /// Trail quality for this tier.
    pub fn trail_tier(self) -> TrailTier {
        match self {
            Tier::Large => TrailTier::Full,
            Tier::Medium => TrailTier::Reduced,
            Tier::Small => TrailTier::None,
        }
    }

    /// Size-scale range as a fraction of the field's anchor size.
    pub fn size_range(self) -> (f32, f32) {
        match self {
            Tier::Large => (0.8, 1.0),
            Tier::Medium => (0.4, 0.6),
            Tier::Small => (0.15, 0.35),
        }
    }
}

/// One procedurally placed rock within a threat field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockSpec {
    /// Position in the field's tier ordering (0 is always the large rock).
    pub index: usize,
    pub tier: Tier,
    /// Size multiplier relative to the parent threat's base size.
    pub size_scale: f32,
    pub hp: u32,
    /// Local position within the field ellipsoid.
    pub position: Vec3,
    /// Sub-seed for downstream procedural detail (surface geometry etc).
    pub seed: u32,
    /// Tumble rate, radians per second per axis.
    pub angular_velocity: Vec3,
    pub trail_tier: TrailTier,
}

/// Build the ordered tier list: index 0 large, then 2–3 medium, rest small.
fn assign_tiers(count: usize) -> Vec<Tier> {
    let medium_count = (((count as f32) * 0.3).round() as usize).clamp(2, 3);
    let small_count = count.saturating_sub(1 + medium_count);

    let mut tiers = Vec::with_capacity(count);
    tiers.push(Tier::Large);
    tiers.extend(std::iter::repeat(Tier::Medium).take(medium_count));
    tiers.extend(std::iter::repeat(Tier::Small).take(small_count));
    tiers.truncate(count);
    tiers
}

/// Draw one candidate position inside the flattened field ellipsoid.
///
/// θ uniform, φ = acos(2u−1) for uniform sphere coverage, radius scaled by
/// cbrt(u) for uniform *volume* coverage. Large rocks are pulled toward the
/// centre before any spacing check.
fn sample_position(
    rng: &mut Mulberry32,
    tier: Tier,
    field_radius: f32,
    tuning: &FieldTuning,
) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let r = field_radius * rng.gen::<f32>().cbrt();

    let mut position = Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin() * tuning.field_y_flatten,
        r * phi.cos(),
    );

    if tier == Tier::Large {
        position *= tuning.large_center_bias;
    }

    position
}

fn tumble_sign(rng: &mut Mulberry32) -> f32 {
    if rng.gen::<f32>() < 0.5 {
        -1.0
    } else {
        1.0
    }
}

/// Generate the rock specs for one threat field.
///
/// Deterministic in `(count, field_radius, anchor_size, base_seed, tuning)`.
/// Spacing is a soft constraint: each rock is resampled up to
/// `tuning.placement_attempts` times to clear `field_radius ×
/// tuning.min_spacing_factor` from every placed rock, then the last sample
/// is accepted as-is. With the default tuning the budget is never exhausted
/// for the 3–10 rock fields the magnitude curve produces.
pub fn generate_rocks(
    count: usize,
    field_radius: f32,
    anchor_size: f32,
    base_seed: u32,
    tuning: &FieldTuning,
) -> Vec<RockSpec> {
    let mut rng = Mulberry32::new(base_seed);
    let tiers = assign_tiers(count);
    let min_spacing = field_radius * tuning.min_spacing_factor;

    let mut placed: Vec<Vec3> = Vec::with_capacity(count);
    let mut rocks = Vec::with_capacity(count);

    for (index, &tier) in tiers.iter().enumerate() {
        let mut position = sample_position(&mut rng, tier, field_radius, tuning);
        let mut attempts = 1;
        while attempts < tuning.placement_attempts
            && placed
                .iter()
                .any(|prior| prior.distance(position) < min_spacing)
        {
            position = sample_position(&mut rng, tier, field_radius, tuning);
            attempts += 1;
        }
        placed.push(position);

        let (size_lo, size_hi) = tier.size_range();
        let size_scale = anchor_size * rng.gen_range(size_lo..size_hi);

        let angular_velocity = Vec3::new(
            rng.gen_range(TUMBLE_X_MIN..TUMBLE_X_MAX) * tumble_sign(&mut rng),
            rng.gen_range(TUMBLE_Y_MIN..TUMBLE_Y_MAX) * tumble_sign(&mut rng),
            rng.gen_range(TUMBLE_Z_MIN..TUMBLE_Z_MAX) * tumble_sign(&mut rng),
        );

        rocks.push(RockSpec {
            index,
            tier,
            size_scale,
            hp: tier.hit_points(),
            position,
            seed: base_seed.wrapping_add(index as u32),
            angular_velocity,
            trail_tier: tier.trail_tier(),
        });
    }

    rocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> FieldTuning {
        FieldTuning::default()
    }

    // ── Tier assignment ───────────────────────────────────────────────────────

    #[test]
    fn three_rocks_split_one_large_two_medium() {
        assert_eq!(assign_tiers(3), vec![Tier::Large, Tier::Medium, Tier::Medium]);
    }

    #[test]
    fn ten_rocks_get_three_medium() {
        let tiers = assign_tiers(10);
        assert_eq!(tiers[0], Tier::Large);
        assert_eq!(tiers.iter().filter(|t| **t == Tier::Medium).count(), 3);
        assert_eq!(tiers.iter().filter(|t| **t == Tier::Small).count(), 6);
    }

    #[test]
    fn every_count_in_band_has_exactly_one_large() {
        for count in 3..=10 {
            let tiers = assign_tiers(count);
            assert_eq!(tiers.len(), count);
            assert_eq!(
                tiers.iter().filter(|t| **t == Tier::Large).count(),
                1,
                "count={}",
                count
            );
            let medium = tiers.iter().filter(|t| **t == Tier::Medium).count();
            assert!((2..=3).contains(&medium), "count={} medium={}", count, medium);
        }
    }

    // ── Generation ────────────────────────────────────────────────────────────

    #[test]
    fn same_inputs_reproduce_the_same_cluster() {
        let a = generate_rocks(7, 5.0, 0.9, 42, &tuning());
        let b = generate_rocks(7, 5.0, 0.9, 42, &tuning());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_move_the_rocks() {
        let a = generate_rocks(7, 5.0, 0.9, 42, &tuning());
        let b = generate_rocks(7, 5.0, 0.9, 999, &tuning());
        assert_ne!(a[0].position, b[0].position);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn rocks_respect_minimum_spacing() {
        let tuning = tuning();
        let rocks = generate_rocks(10, 7.0, 1.0, 42, &tuning);
        let min_spacing = 7.0 * tuning.min_spacing_factor;
        for i in 0..rocks.len() {
            for j in (i + 1)..rocks.len() {
                let dist = rocks[i].position.distance(rocks[j].position);
                assert!(
                    dist >= min_spacing,
                    "rocks {} and {} are {} apart (< {})",
                    i,
                    j,
                    dist,
                    min_spacing
                );
            }
        }
    }

    #[test]
    fn rocks_stay_inside_the_field_ellipsoid() {
        let rocks = generate_rocks(10, 7.0, 1.0, 7, &tuning());
        for rock in &rocks {
            assert!(rock.position.x.abs() <= 7.0);
            assert!(rock.position.y.abs() <= 7.0 * 0.5);
            assert!(rock.position.z.abs() <= 7.0);
        }
    }

    #[test]
    fn size_scales_sit_in_tier_band_times_anchor() {
        let anchor = 0.9;
        let rocks = generate_rocks(8, 5.0, anchor, 42, &tuning());
        for rock in &rocks {
            let (lo, hi) = rock.tier.size_range();
            assert!(
                rock.size_scale >= anchor * lo && rock.size_scale <= anchor * hi,
                "tier {:?} size {} outside [{}, {}]",
                rock.tier,
                rock.size_scale,
                anchor * lo,
                anchor * hi
            );
        }
    }

    #[test]
    fn hp_and_trail_follow_tier() {
        let rocks = generate_rocks(8, 5.0, 0.9, 42, &tuning());
        for rock in &rocks {
            assert_eq!(rock.hp, rock.tier.hit_points());
            assert_eq!(rock.trail_tier, rock.tier.trail_tier());
        }
        assert_eq!(rocks[0].hp, 3);
        assert_eq!(rocks[0].trail_tier, TrailTier::Full);
    }

    #[test]
    fn sub_seeds_step_from_the_base_seed() {
        let rocks = generate_rocks(5, 4.0, 0.9, 100, &tuning());
        for (i, rock) in rocks.iter().enumerate() {
            assert_eq!(rock.seed, 100 + i as u32);
        }
    }

    #[test]
    fn tumble_components_are_signed_and_bounded() {
        let rocks = generate_rocks(10, 7.0, 1.0, 3, &tuning());
        for rock in &rocks {
            let av = rock.angular_velocity;
            assert!(av.x.abs() >= TUMBLE_X_MIN && av.x.abs() <= TUMBLE_X_MAX);
            assert!(av.y.abs() >= TUMBLE_Y_MIN && av.y.abs() <= TUMBLE_Y_MAX);
            assert!(av.z.abs() >= TUMBLE_Z_MIN && av.z.abs() <= TUMBLE_Z_MAX);
        }
    }

    #[test]
    fn large_rock_hugs_the_field_centre() {
        let tuning = tuning();
        // Max sample radius after centre bias.
        let bound = 7.0 * tuning.large_center_bias;
        for seed in [1, 42, 77, 999] {
            let rocks = generate_rocks(10, 7.0, 1.0, seed, &tuning);
            assert!(
                rocks[0].position.length() <= bound + f32::EPSILON,
                "seed {} anchor at {:?}",
                seed,
                rocks[0].position
            );
        }
    }
}
