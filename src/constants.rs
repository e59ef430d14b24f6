//! Centralised placement and field-generation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::FieldTuning`] mirrors the runtime-tunable subset; this
//! module remains the **authoritative default** source.
//!
//! Values were chosen against a dashboard scene with the camera at the
//! origin looking down −Z; distances are scene units, times are seconds.

// ── Magnitude Curve ───────────────────────────────────────────────────────────

/// Log-scale span of the magnitude curve, in decades.
///
/// `t = log10(max(1, amount)) / MAGNITUDE_LOG_SPAN`, clamped to [0, 1].
/// At 2.7 a $1 threat maps to t=0 and a $500+ threat saturates at t=1, so
/// cheap and expensive threats differ in visual density rather than linearly.
/// Raising this pushes saturation toward larger amounts.
pub const MAGNITUDE_LOG_SPAN: f32 = 2.7;

/// Rock count at the bottom of the curve (t=0).
pub const ROCK_COUNT_MIN: f32 = 3.0;

/// Rock count at curve saturation (t=1).
///
/// Also the per-field performance ceiling: arbitrarily large amounts produce
/// this many rocks, never more.
pub const ROCK_COUNT_MAX: f32 = 10.0;

/// Field radius at t=0 (scene units).
pub const FIELD_RADIUS_MIN: f32 = 2.0;

/// Field radius at t=1 (scene units).
pub const FIELD_RADIUS_MAX: f32 = 7.0;

/// Anchor-rock size multiplier at t=0, relative to the threat's base size.
pub const ANCHOR_SIZE_MIN: f32 = 0.8;

/// Anchor-rock size multiplier at t=1.
pub const ANCHOR_SIZE_MAX: f32 = 1.0;

/// Field drift speed at t=0 (scene units per second).
pub const DRIFT_SPEED_MIN: f32 = 0.08;

/// Field drift speed at t=1 (scene units per second).
pub const DRIFT_SPEED_MAX: f32 = 0.2;

// ── Rock Distribution ─────────────────────────────────────────────────────────

/// Vertical flatten factor applied to sampled rock positions.
///
/// 1.0 would give a spherical field; 0.5 gives the oblate ellipsoid
/// (wider than tall) that reads well from the bridge camera.
pub const FIELD_Y_FLATTEN: f32 = 0.5;

/// Scale applied to the large rock's sampled position, pulling it toward
/// the field centre so the cluster has a visual anchor.
pub const LARGE_CENTER_BIAS: f32 = 0.3;

/// Minimum pairwise rock spacing as a fraction of the field radius.
///
/// Enforced by rejection sampling. Values above ~0.4 make dense fields
/// exhaust the attempt budget and degrade to best-effort placement.
pub const MIN_SPACING_FACTOR: f32 = 0.25;

/// Resample attempts per rock before accepting an overlapping position.
///
/// A soft budget: after this many rejections the last sample is kept.
/// At the default spacing factor, exhaustion is effectively unreachable
/// for the 3–10 rock fields the curve produces.
pub const PLACEMENT_ATTEMPTS: u32 = 50;

/// Tumble-rate magnitude floor for the X axis (radians per second).
pub const TUMBLE_X_MIN: f32 = 0.1;
/// Tumble-rate magnitude ceiling for the X axis.
pub const TUMBLE_X_MAX: f32 = 0.6;
/// Tumble-rate magnitude floor for the Y axis.
pub const TUMBLE_Y_MIN: f32 = 0.1;
/// Tumble-rate magnitude ceiling for the Y axis.
pub const TUMBLE_Y_MAX: f32 = 0.8;
/// Tumble-rate magnitude floor for the Z axis.
pub const TUMBLE_Z_MIN: f32 = 0.05;
/// Tumble-rate magnitude ceiling for the Z axis.
pub const TUMBLE_Z_MAX: f32 = 0.4;

// ── Growth ────────────────────────────────────────────────────────────────────

/// Growth rate per second of threat age.
///
/// 0.0004/s ≈ 2.4%/minute. At this rate a threat reaches the growth cap
/// after roughly 20.8 minutes on screen.
pub const GROWTH_RATE_PER_SEC: f64 = 0.0004;

/// Hard ceiling on the growth multiplier (+50%).
pub const GROWTH_MAX: f64 = 1.5;

// ── Spawn Zone ────────────────────────────────────────────────────────────────
// Mobile threats materialise near the frustum edges at deep Z, appearing as
// small distant objects approaching the bridge viewport.

/// Inner edge of the horizontal spawn band (|X| minimum).
pub const SPAWN_X_MIN: f32 = 40.0;

/// Outer edge of the horizontal spawn band (|X| maximum, still in frustum).
pub const SPAWN_X_MAX: f32 = 55.0;

/// Vertical spread around the spawn band centre (±).
pub const SPAWN_Y_RANGE: f32 = 20.0;

/// Upward bias so threats come in "over the horizon".
pub const SPAWN_Y_OFFSET: f32 = 5.0;

/// Depth at which threats materialise.
pub const SPAWN_Z: f32 = -75.0;

/// Z-axis jitter: actual depth = `SPAWN_Z - draw * SPAWN_Z_JITTER`.
pub const SPAWN_Z_JITTER: f32 = 15.0;

// ── Convergence Zone ──────────────────────────────────────────────────────────
// Where mobile threats settle after drifting in from their spawn point.

/// Centre of the convergence disk.
pub const CONVERGENCE_CENTER: [f32; 3] = [0.0, 0.0, -30.0];

/// Radius of the convergence scatter disk.
pub const CONVERGENCE_RADIUS: f32 = 2.5;

/// Vertical flatten factor of the disk (ellipse, wider than tall).
pub const CONVERGENCE_Y_FLATTEN: f32 = 0.4;

/// Depth scatter around the disk centre (±).
pub const CONVERGENCE_Z_SCATTER: f32 = 1.5;

/// Exponential approach rate from spawn toward the convergence target,
/// per second. 0.04 → ~85% of the way there after 60 seconds.
pub const DRIFT_RATE: f32 = 0.04;

// ── Static Threats ────────────────────────────────────────────────────────────

/// Fixed anchor for static threats (currently black holes).
///
/// X=8: right of centre. Y=-3: slightly below the eyeline. Z=-30:
/// mid-distance, close enough for detail without dominating the scene.
pub const BLACK_HOLE_ANCHOR: [f32; 3] = [8.0, -3.0, -30.0];

// ── Seeding ───────────────────────────────────────────────────────────────────

/// Default base seed for field generation; override for reproducible
/// debugging of a specific layout.
pub const DEFAULT_FIELD_SEED: u32 = 42;

/// Seed salt for spawn placement.
///
/// MUST stay distinct from [`CONVERGENCE_SALT`]. With a shared salt every
/// threat's travel vector would leave its spawn point at the same relative
/// angle, collapsing the scene into uniform radial motion. Any two distinct
/// large primes work; the pair is validated by
/// [`crate::error::validate_tuning`].
pub const SPAWN_SALT: u32 = 7919;

/// Seed salt for convergence placement. See [`SPAWN_SALT`].
pub const CONVERGENCE_SALT: u32 = 6271;
