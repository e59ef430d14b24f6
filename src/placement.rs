//! Spawn and convergence placement for mobile threats.
//!
//! Each threat gets a deterministic spawn point near the frustum edge and a
//! deterministic resting point inside the convergence disk, both derived
//! from its identity string. The two are seeded with **different** salts —
//! see [`crate::constants::SPAWN_SALT`] — so that a threat's approach vector
//! is uncorrelated with where it entered the scene. Reusing one salt would
//! send every threat toward a target at the same relative angle, and the
//! whole sky would move in lock-step radial drift. Decorrelation is a
//! contract here, not a cosmetic choice.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldTuning;
use crate::constants::BLACK_HOLE_ANCHOR;
use crate::rng::{hash_identity, Mulberry32};

/// Threat taxonomy of the financial scan layer.
///
/// Kinds select a visual treatment out of scope here; within this crate
/// they only feed the spawn-bias table and the static-threat set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatKind {
    /// Wasteful subscriptions.
    Asteroid,
    /// Budget overruns.
    IonStorm,
    /// Upcoming bills.
    SolarFlare,
    /// Debt spirals. Static: pinned to a fixed scene anchor.
    BlackHole,
    /// Missed rewards.
    Wormhole,
    /// Fraud alerts.
    EnemyCruiser,
}

/// Per-kind override of the spawn band.
struct SpawnBias {
    x_min: f32,
    x_max: f32,
    y_bias: f32,
}

impl ThreatKind {
    /// Static threats hold a fixed anchor instead of spawning and drifting.
    pub fn is_static(self) -> bool {
        matches!(self, ThreatKind::BlackHole)
    }

    /// Spawn-band override for kinds that shouldn't use the default band.
    fn spawn_bias(self) -> Option<SpawnBias> {
        match self {
            // Wormholes open further out and higher, coming in over the top.
            ThreatKind::Wormhole => Some(SpawnBias {
                x_min: 55.0,
                x_max: 70.0,
                y_bias: 10.0,
            }),
            // Cruisers flank from slightly wider than the debris field.
            ThreatKind::EnemyCruiser => Some(SpawnBias {
                x_min: 45.0,
                x_max: 60.0,
                y_bias: 0.0,
            }),
            _ => None,
        }
    }
}

/// Deterministic spawn position for a threat.
///
/// Same identity (and kind) ⇒ same position, forever. Static kinds return
/// their fixed anchor. Mobile kinds land in a left-or-right band near the
/// frustum edge at deep Z.
pub fn spawn_position(identity: &str, kind: Option<ThreatKind>, tuning: &FieldTuning) -> Vec3 {
    if kind.is_some_and(ThreatKind::is_static) {
        return Vec3::from(BLACK_HOLE_ANCHOR);
    }

    let mut rng = Mulberry32::new(hash_identity(identity).wrapping_mul(tuning.spawn_salt));

    let side = if rng.gen::<f32>() < 0.5 { -1.0 } else { 1.0 };

    let bias = kind.and_then(ThreatKind::spawn_bias);
    let (x_min, x_max) = bias
        .as_ref()
        .map_or((tuning.spawn_x_min, tuning.spawn_x_max), |b| {
            (b.x_min, b.x_max)
        });
    let y_bias = bias.map_or(0.0, |b| b.y_bias);

    let x = side * (x_min + rng.gen::<f32>() * (x_max - x_min));
    let y = tuning.spawn_y_offset + y_bias + (rng.gen::<f32>() - 0.5) * 2.0 * tuning.spawn_y_range;
    let z = tuning.spawn_z - rng.gen::<f32>() * tuning.spawn_z_jitter;

    Vec3::new(x, y, z)
}

/// Deterministic resting point inside the convergence disk.
///
/// Uniform-area disk sampling (sqrt on the radius draw), flattened on Y,
/// with a small Z scatter so settled threats don't stack in one plane.
/// Seeded with [`crate::constants::CONVERGENCE_SALT`] — deliberately not
/// the spawn salt (see module docs).
pub fn convergence_target(identity: &str, tuning: &FieldTuning) -> Vec3 {
    let mut rng = Mulberry32::new(hash_identity(identity).wrapping_mul(tuning.convergence_salt));

    let angle = rng.gen::<f32>() * TAU;
    let r = tuning.convergence_radius * rng.gen::<f32>().sqrt();
    let z_scatter = (rng.gen::<f32>() - 0.5) * 2.0 * tuning.convergence_z_scatter;

    Vec3::from(tuning.convergence_center)
        + Vec3::new(
            angle.cos() * r,
            angle.sin() * r * tuning.convergence_y_flatten,
            z_scatter,
        )
}

/// Closed-form position along the spawn → convergence drift.
///
/// The animation layer advances an exponential approach each frame; this is
/// the same curve as a pure function of elapsed time: after `t` seconds the
/// threat has covered `1 − (1 − drift_rate)^t` of the way. Negative elapsed
/// clamps to the spawn point.
pub fn drift_position(spawn: Vec3, target: Vec3, elapsed_seconds: f32, tuning: &FieldTuning) -> Vec3 {
    let elapsed = elapsed_seconds.max(0.0);
    let progress = 1.0 - (1.0 - tuning.drift_rate).powf(elapsed);
    spawn.lerp(target, progress)
}
