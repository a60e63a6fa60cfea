// ABOUTME: Sports walking workout variant
// ABOUTME: Base distance and speed with a floored speed-per-height calorie term
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sports walking sessions. Distance and speed come from the base
//! computation; the calorie model adds a term derived from the athlete's
//! height.

use crate::constants::calories::walking::{SPEED_HEIGHT_FACTOR, WEIGHT_FACTOR};
use crate::constants::time::MINUTES_PER_HOUR;
use crate::models::WorkoutKind;

use super::Workout;

/// One recorded sports walking session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    action_count: u32,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl Walking {
    /// Create a session from raw sensor readings.
    #[must_use]
    pub const fn new(action_count: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action_count,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for Walking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
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
        let speed = self.mean_speed_kmh();
        // Floor division: the quotient rounds toward negative infinity,
        // not toward zero.
        let speed_height_term = (speed * speed / self.height_cm).floor();

        (WEIGHT_FACTOR * self.weight_kg + speed_height_term * SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_h
            * MINUTES_PER_HOUR
    }
}
