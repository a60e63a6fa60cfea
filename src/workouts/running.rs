// ABOUTME: Running workout variant
// ABOUTME: Base distance and speed with a speed-scaled calorie model
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Running sessions. Distance and speed come straight from the base
//! computation; only the calorie model is specific to this kind.

use crate::constants::calories::running::{SPEED_FACTOR, SPEED_OFFSET, WEIGHT_SCALE};
use crate::constants::time::MINUTES_PER_HOUR;
use crate::models::WorkoutKind;

use super::Workout;

/// One recorded running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    action_count: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    /// Create a session from raw sensor readings.
    #[must_use]
    pub const fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_h,
            weight_kg,
        }
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn calories_kcal(&self) -> f64 {
        (SPEED_FACTOR * self.mean_speed_kmh() - SPEED_OFFSET) * self.weight_kg / WEIGHT_SCALE
            * self.duration_h
            * MINUTES_PER_HOUR
    }
}
