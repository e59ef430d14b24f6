//! Time-based threat growth.
//!
//! Threats left unhandled swell slowly — ≈2.4% per minute, saturating at
//! +50% after about 20 minutes. Pure in `(created_at, now)`; the wall clock
//! only enters through [`growth_factor_now`].

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::FieldTuning;

/// Growth multiplier for a threat created at `created_at_ms`.
///
/// Monotonic non-decreasing in elapsed time, bounded to
/// `[1.0, tuning.growth_max]`, and total — a `created_at` in the future is
/// a data-layer bug, so it logs a diagnostic and returns the neutral 1.0
/// instead of a negative factor (this runs inside a rendering hot path;
/// panicking would abort the frame).
pub fn growth_factor(created_at_ms: i64, now_ms: i64, tuning: &FieldTuning) -> f32 {
    if now_ms < created_at_ms {
        log::warn!(
            "growth_factor: created_at {} is in the future (now {}); clamping to 1.0",
            created_at_ms,
            now_ms
        );
        return 1.0;
    }

    let elapsed_seconds = ((now_ms - created_at_ms) as f64 / 1000.0).max(0.0);
    let factor = 1.0 + tuning.growth_rate_per_sec * elapsed_seconds;
    factor.min(tuning.growth_max) as f32
}

/// [`growth_factor`] against the current wall clock.
pub fn growth_factor_now(created_at_ms: i64, tuning: &FieldTuning) -> f32 {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    growth_factor(created_at_ms, now_ms, tuning)
}
