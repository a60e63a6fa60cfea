// ABOUTME: Polymorphic calculation layer for workout sessions
// ABOUTME: Shared base computation with per-kind speed and calorie overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout variants and their shared base computation.
//!
//! The [`Workout`] trait carries the base formulas: distance from action
//! count and action length, and speed as distance over duration. Each kind
//! overrides only what differs — [`Swimming`] replaces the speed formula
//! with pool geometry and the action length with a stroke length.
//!
//! Calorie models vary enough between kinds that [`Workout::calories_kcal`]
//! has no default: a new variant does not compile until it picks one.

/// Session factory resolving wire codes to concrete variants
pub mod factory;

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::constants::distance::{METERS_PER_KM, STRIDE_LENGTH_M};
use crate::models::{WorkoutKind, WorkoutSummary};

/// Derived-metric computation over one recorded workout session.
///
/// Implementations hold the raw readings for a single session; every
/// method is a pure function of those fields.
pub trait Workout: core::fmt::Debug {
    /// Kind of this session.
    fn kind(&self) -> WorkoutKind;

    /// Number of actions performed (steps or strokes).
    fn action_count(&self) -> u32;

    /// Session duration in hours.
    fn duration_h(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Meters covered by one action unit.
    fn action_length_m(&self) -> f64 {
        STRIDE_LENGTH_M
    }

    /// Distance covered during the session, in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.action_length_m() / METERS_PER_KM
    }

    /// Mean speed over the session, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Estimated energy expenditure in kilocalories.
    ///
    /// No default implementation: every kind carries its own calorie
    /// model.
    fn calories_kcal(&self) -> f64;

    /// Assemble the derived metrics into an owned summary record.
    fn summarize(&self) -> WorkoutSummary {
        WorkoutSummary {
            kind: self.kind(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
