//! Placement-engine error types.
//!
//! The generation functions themselves are total — bad inputs clamp or fall
//! back rather than erroring, because they run inside a rendering hot path
//! where a panic aborts an animation frame. Errors exist at the *tuning*
//! boundary: a [`crate::config::FieldTuning`] can be malformed, and callers
//! that load one from a file should know before handing it to the engine.

use std::fmt;

use crate::config::FieldTuning;

/// Top-level error enum for the placement engine.
#[derive(Debug)]
pub enum FieldError {
    /// A tuning value is outside its safe operating range.
    UnsafeTuning {
        /// Name of the offending field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// The spawn and convergence seed salts are equal.
    ///
    /// With a shared salt, every threat's convergence target sits at the
    /// same angle relative to its spawn point and all motion in the scene
    /// becomes uniformly radial. The two streams must stay decorrelated.
    CorrelatedSalts {
        /// The salt configured for both streams.
        salt: u32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnsafeTuning {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "tuning value '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            FieldError::CorrelatedSalts { salt } => write!(
                f,
                "spawn and convergence salts are both {}; the two placement \
                 streams must use distinct salts",
                salt
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// Convenience alias: a `Result` using `FieldError` as the error type.
pub type FieldResult<T> = Result<T, FieldError>;

// ── Validation helpers ────────────────────────────────────────────────────────

fn require_range(name: &'static str, value: f64, ok: bool, safe_range: &'static str) -> FieldResult<()> {
    if ok {
        Ok(())
    } else {
        Err(FieldError::UnsafeTuning {
            name,
            value,
            safe_range,
        })
    }
}

/// Checks every tuning value against its safe operating range.
///
/// Called by [`FieldTuning::load`] before a file-supplied tuning is
/// accepted; also usable directly by callers that build a tuning in code.
pub fn validate_tuning(tuning: &FieldTuning) -> FieldResult<()> {
    require_range(
        "magnitude_log_span",
        tuning.magnitude_log_span as f64,
        tuning.magnitude_log_span > 0.0,
        "(0.0, ∞)",
    )?;
    require_range(
        "rock_count_min",
        tuning.rock_count_min as f64,
        tuning.rock_count_min >= 1.0 && tuning.rock_count_min <= tuning.rock_count_max,
        "[1, rock_count_max]",
    )?;
    require_range(
        "rock_count_max",
        tuning.rock_count_max as f64,
        tuning.rock_count_max <= 32.0,
        "[rock_count_min, 32]",
    )?;
    require_range(
        "field_radius_min",
        tuning.field_radius_min as f64,
        tuning.field_radius_min > 0.0 && tuning.field_radius_min <= tuning.field_radius_max,
        "(0.0, field_radius_max]",
    )?;
    require_range(
        "anchor_size_min",
        tuning.anchor_size_min as f64,
        tuning.anchor_size_min > 0.0 && tuning.anchor_size_min <= tuning.anchor_size_max,
        "(0.0, anchor_size_max]",
    )?;
    require_range(
        "drift_speed_min",
        tuning.drift_speed_min as f64,
        tuning.drift_speed_min >= 0.0 && tuning.drift_speed_min <= tuning.drift_speed_max,
        "[0.0, drift_speed_max]",
    )?;
    require_range(
        "min_spacing_factor",
        tuning.min_spacing_factor as f64,
        tuning.min_spacing_factor > 0.0 && tuning.min_spacing_factor <= 0.5,
        "(0.0, 0.5]",
    )?;
    require_range(
        "placement_attempts",
        tuning.placement_attempts as f64,
        tuning.placement_attempts >= 1,
        "[1, ∞)",
    )?;
    require_range(
        "field_y_flatten",
        tuning.field_y_flatten as f64,
        tuning.field_y_flatten > 0.0 && tuning.field_y_flatten <= 1.0,
        "(0.0, 1.0]",
    )?;
    require_range(
        "large_center_bias",
        tuning.large_center_bias as f64,
        tuning.large_center_bias > 0.0 && tuning.large_center_bias <= 1.0,
        "(0.0, 1.0]",
    )?;
    require_range(
        "growth_rate_per_sec",
        tuning.growth_rate_per_sec,
        tuning.growth_rate_per_sec >= 0.0,
        "[0.0, ∞)",
    )?;
    require_range(
        "growth_max",
        tuning.growth_max,
        tuning.growth_max >= 1.0,
        "[1.0, ∞)",
    )?;
    require_range(
        "convergence_radius",
        tuning.convergence_radius as f64,
        tuning.convergence_radius > 0.0,
        "(0.0, ∞)",
    )?;
    require_range(
        "drift_rate",
        tuning.drift_rate as f64,
        tuning.drift_rate > 0.0 && tuning.drift_rate < 1.0,
        "(0.0, 1.0)",
    )?;

    if tuning.spawn_salt == tuning.convergence_salt {
        return Err(FieldError::CorrelatedSalts {
            salt: tuning.spawn_salt,
        });
    }

    Ok(())
}
