// ABOUTME: Core data models for workout sessions
// ABOUTME: Defines WorkoutKind wire codes and the derived WorkoutSummary record
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Core data structures shared by the calculation layer, the session
//! factory, and the formatters.
//!
//! - [`WorkoutKind`]: closed enumeration of supported session kinds
//! - [`WorkoutSummary`]: derived metrics for one finished session

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Enumeration of supported workout kinds.
///
/// The set is closed: session records identify their kind with a three
/// letter wire code, and nothing adds kinds at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Running session, distance derived from step count
    Running,
    /// Sports walking session, distance derived from step count
    Walking,
    /// Pool swimming session, speed derived from pool geometry
    Swimming,
}

impl WorkoutKind {
    /// Wire code identifying this kind in raw session records.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Number of numeric fields a record of this kind must carry.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl Display for WorkoutKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        };
        write!(f, "{name}")
    }
}

impl FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::Walking),
            "SWM" => Ok(Self::Swimming),
            other => Err(AppError::UnknownWorkoutKind(other.to_owned())),
        }
    }
}

/// Derived metrics for one finished workout session.
///
/// Produced by [`Workout::summarize`](crate::workouts::Workout::summarize)
/// and immutable once computed. The record is owned solely by the caller
/// that requested it; no shared state exists anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Kind of the summarized session
    pub kind: WorkoutKind,
    /// Session duration in hours
    pub duration_h: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Duration-normalized speed in km/h
    pub mean_speed_kmh: f64,
    /// Estimated energy expenditure in kilocalories
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_all_wire_codes() {
        assert_eq!("RUN".parse::<WorkoutKind>().ok(), Some(WorkoutKind::Running));
        assert_eq!("WLK".parse::<WorkoutKind>().ok(), Some(WorkoutKind::Walking));
        assert_eq!("SWM".parse::<WorkoutKind>().ok(), Some(WorkoutKind::Swimming));
    }

    #[test]
    fn test_kind_rejects_unknown_code() {
        assert!("CYC".parse::<WorkoutKind>().is_err());
        assert!("run".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for kind in [
            WorkoutKind::Running,
            WorkoutKind::Walking,
            WorkoutKind::Swimming,
        ] {
            assert_eq!(kind.code().parse::<WorkoutKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn test_display_uses_human_names() {
        assert_eq!(WorkoutKind::Walking.to_string(), "Walking");
        assert_eq!(WorkoutKind::Swimming.to_string(), "Swimming");
    }
}
