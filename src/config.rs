//! Runtime field tuning, optionally loaded from a TOML file.
//!
//! [`FieldTuning`] mirrors every runtime-tunable constant in
//! [`crate::constants`]. Every engine entry point takes `&FieldTuning`, so a
//! host can tune the scene without recompiling:
//!
//! 1. Edit `threatfield.toml` (any subset of keys; missing keys keep their
//!    compiled defaults).
//! 2. Reload — [`FieldTuning::load`] never fails, it falls back to defaults
//!    on a missing file, a parse error, or values outside their safe ranges.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `FieldTuning::default()`.

use serde::Deserialize;

use crate::constants::*;
use crate::error::validate_tuning;

/// Runtime-tunable placement and field-generation configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in the
/// tuning TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    // ── Magnitude Curve ───────────────────────────────────────────────────────
    pub magnitude_log_span: f32,
    pub rock_count_min: f32,
    pub rock_count_max: f32,
    pub field_radius_min: f32,
    pub field_radius_max: f32,
    pub anchor_size_min: f32,
    pub anchor_size_max: f32,
    pub drift_speed_min: f32,
    pub drift_speed_max: f32,

    // ── Rock Distribution ─────────────────────────────────────────────────────
    pub field_y_flatten: f32,
    pub large_center_bias: f32,
    pub min_spacing_factor: f32,
    pub placement_attempts: u32,

    // ── Growth ────────────────────────────────────────────────────────────────
    pub growth_rate_per_sec: f64,
    pub growth_max: f64,

    // ── Spawn Zone ────────────────────────────────────────────────────────────
    pub spawn_x_min: f32,
    pub spawn_x_max: f32,
    pub spawn_y_range: f32,
    pub spawn_y_offset: f32,
    pub spawn_z: f32,
    pub spawn_z_jitter: f32,

    // ── Convergence Zone ──────────────────────────────────────────────────────
    pub convergence_center: [f32; 3],
    pub convergence_radius: f32,
    pub convergence_y_flatten: f32,
    pub convergence_z_scatter: f32,
    pub drift_rate: f32,

    // ── Seeding ───────────────────────────────────────────────────────────────
    pub spawn_salt: u32,
    pub convergence_salt: u32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            // Magnitude Curve
            magnitude_log_span: MAGNITUDE_LOG_SPAN,
            rock_count_min: ROCK_COUNT_MIN,
            rock_count_max: ROCK_COUNT_MAX,
            field_radius_min: FIELD_RADIUS_MIN,
            field_radius_max: FIELD_RADIUS_MAX,
            anchor_size_min: ANCHOR_SIZE_MIN,
            anchor_size_max: ANCHOR_SIZE_MAX,
            drift_speed_min: DRIFT_SPEED_MIN,
            drift_speed_max: DRIFT_SPEED_MAX,
            // Rock Distribution
            field_y_flatten: FIELD_Y_FLATTEN,
            large_center_bias: LARGE_CENTER_BIAS,
            min_spacing_factor: MIN_SPACING_FACTOR,
            placement_attempts: PLACEMENT_ATTEMPTS,
            // Growth
            growth_rate_per_sec: GROWTH_RATE_PER_SEC,
            growth_max: GROWTH_MAX,
            // Spawn Zone
            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: SPAWN_X_MAX,
            spawn_y_range: SPAWN_Y_RANGE,
            spawn_y_offset: SPAWN_Y_OFFSET,
            spawn_z: SPAWN_Z,
            spawn_z_jitter: SPAWN_Z_JITTER,
            // Convergence Zone
            convergence_center: CONVERGENCE_CENTER,
            convergence_radius: CONVERGENCE_RADIUS,
            convergence_y_flatten: CONVERGENCE_Y_FLATTEN,
            convergence_z_scatter: CONVERGENCE_Z_SCATTER,
            drift_rate: DRIFT_RATE,
            // Seeding
            spawn_salt: SPAWN_SALT,
            convergence_salt: CONVERGENCE_SALT,
        }
    }
}

impl FieldTuning {
    /// Attempt to load a tuning file, falling back to compiled defaults.
    ///
    /// Missing keys retain their defaults. A missing file is silently fine
    /// (defaults are already in place). Parse errors and values outside
    /// their safe ranges are logged and the defaults used instead — a bad
    /// tuning file must never take the dashboard down.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<FieldTuning>(&contents) {
                Ok(loaded) => match validate_tuning(&loaded) {
                    Ok(()) => {
                        log::info!("loaded field tuning from {path}");
                        loaded
                    }
                    Err(e) => {
                        log::warn!("rejected {path}: {e}; using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("failed to parse {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no {path} found; using compiled defaults");
                Self::default()
            }
        }
    }
}
