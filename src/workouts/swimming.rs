// ABOUTME: Swimming workout variant
// ABOUTME: Pool-geometry speed override with stroke-length distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Swimming sessions. Mean speed comes from pool geometry rather than
//! stroke count, and the action length is a stroke length instead of a
//! stride. The distance field is still reported from stroke count via the
//! base formula.

use crate::constants::calories::swimming::{SPEED_OFFSET, WEIGHT_FACTOR};
use crate::constants::distance::{METERS_PER_KM, STROKE_LENGTH_M};
use crate::models::WorkoutKind;

use super::Workout;

/// One recorded pool swimming session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    action_count: u32,
    duration_h: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    /// Create a session from raw sensor readings.
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            action_count,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
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

    fn action_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    /// Pool geometry replaces the stroke-count speed entirely.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / METERS_PER_KM / self.duration_h
    }

    /// The swimming rate already folds session length into the speed
    /// term; there is no extra multiplication by duration.
    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_OFFSET) * WEIGHT_FACTOR * self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_uses_stroke_length() {
        // 720 strokes * 1.38 m / 1000 = 0.9936 km
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!((swim.distance_km() - 0.9936).abs() < EPS);
    }

    #[test]
    fn test_speed_from_pool_geometry() {
        // 25 m * 40 laps / 1000 / 1 h = 1.0 km/h
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_speed_ignores_stroke_count() {
        let few_strokes = Swimming::new(100, 1.0, 80.0, 25.0, 40);
        let many_strokes = Swimming::new(5_000, 1.0, 80.0, 25.0, 40);
        assert!((few_strokes.mean_speed_kmh() - many_strokes.mean_speed_kmh()).abs() < EPS);
    }

    #[test]
    fn test_calories_reference_session() {
        // (1.0 + 1.1) * 2 * 80 = 336.0
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!((swim.calories_kcal() - 336.0).abs() < EPS);
    }

    #[test]
    fn test_calories_do_not_scale_with_duration_beyond_speed() {
        // Doubling duration halves speed; the rate is otherwise weight
        // bound: (0.5 + 1.1) * 2 * 80 = 256.0
        let swim = Swimming::new(720, 2.0, 80.0, 25.0, 40);
        assert!((swim.calories_kcal() - 256.0).abs() < EPS);
    }
}
