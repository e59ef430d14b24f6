//! Threatfield — deterministic procedural placement engine.
//!
//! Turns a financial threat's dollar magnitude and stable identity into the
//! geometry a spaceship-bridge dashboard needs: a reproducible rock cluster
//! ([`field::field_params`]), a spawn point and convergence target for its
//! approach ([`placement`]), and a bounded growth multiplier for its time on
//! screen ([`growth`]). Every function is a one-shot pure computation — same
//! inputs, same layout, no shared state — so callers can invoke them from
//! any thread and own their own caching.

pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod growth;
pub mod placement;
pub mod rng;
pub mod rocks;

pub use config::FieldTuning;
pub use error::{FieldError, FieldResult};
pub use field::{field_params, FieldParams};
pub use growth::{growth_factor, growth_factor_now};
pub use placement::{convergence_target, drift_position, spawn_position, ThreatKind};
pub use rocks::{generate_rocks, RockSpec, Tier, TrailTier};
