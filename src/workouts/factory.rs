// ABOUTME: Session factory mapping raw wire records to workout variants
// ABOUTME: Validates kind codes and field arity before construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session factory.
//!
//! Raw session records arrive as a three-letter wire code plus a flat
//! numeric field list. The factory resolves the code to a
//! [`WorkoutKind`], checks the field arity, and constructs the matching
//! variant. Counts travel in the flat `f64` record and are cast back on
//! construction.

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::WorkoutKind;

use super::{Running, Swimming, Walking, Workout};

/// Construct the workout variant matching a raw session record.
///
/// Field order per code: `RUN` carries (action count, duration h,
/// weight kg); `WLK` adds height cm; `SWM` adds pool length m and lap
/// count.
///
/// # Errors
///
/// Returns [`AppError::UnknownWorkoutKind`] for a code outside
/// {`RUN`, `WLK`, `SWM`}, and [`AppError::MalformedArguments`] when the
/// field count does not match the resolved kind's arity.
pub fn build_workout(code: &str, fields: &[f64]) -> AppResult<Box<dyn Workout>> {
    let kind = code.parse::<WorkoutKind>()?;
    debug!(code, field_count = fields.len(), "building workout session");

    match (kind, fields) {
        (WorkoutKind::Running, &[action_count, duration_h, weight_kg]) => Ok(Box::new(
            Running::new(action_count as u32, duration_h, weight_kg),
        )),
        (WorkoutKind::Walking, &[action_count, duration_h, weight_kg, height_cm]) => Ok(Box::new(
            Walking::new(action_count as u32, duration_h, weight_kg, height_cm),
        )),
        (
            WorkoutKind::Swimming,
            &[action_count, duration_h, weight_kg, pool_length_m, pool_laps],
        ) => Ok(Box::new(Swimming::new(
            action_count as u32,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_laps as u32,
        ))),
        (kind, fields) => Err(AppError::MalformedArguments {
            kind,
            expected: kind.arity(),
            actual: fields.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_builds_running_session() {
        let session = build_workout("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
        assert_eq!(session.kind(), WorkoutKind::Running);
        assert!((session.distance_km() - 9.75).abs() < EPS);
    }

    #[test]
    fn test_builds_walking_session() {
        let session = build_workout("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(session.kind(), WorkoutKind::Walking);
        assert!((session.calories_kcal() - 157.5).abs() < EPS);
    }

    #[test]
    fn test_builds_swimming_session() {
        let session = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(session.kind(), WorkoutKind::Swimming);
        assert!((session.mean_speed_kmh() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rejects_unknown_code() {
        let err = build_workout("CYC", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AppError::UnknownWorkoutKind(code) if code == "CYC"));
    }

    #[test]
    fn test_rejects_short_record() {
        let err = build_workout("RUN", &[15_000.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedArguments {
                kind: WorkoutKind::Running,
                expected: 3,
                actual: 2,
            }
        ));
    }

    #[test]
    fn test_rejects_long_record() {
        let err = build_workout("WLK", &[9_000.0, 1.0, 75.0, 180.0, 5.0]).unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedArguments {
                kind: WorkoutKind::Walking,
                expected: 4,
                actual: 5,
            }
        ));
    }
}
