// ABOUTME: Library entry point for the fitsum workout summary calculator
// ABOUTME: Exposes models, workout variants, session factory, formatters, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Fitsum
//!
//! A small calculation library that turns raw workout sensor readings into
//! derived fitness metrics (distance, mean speed, calories burned) and
//! renders them as one-line summaries.
//!
//! ## Architecture
//!
//! - **Models**: session kinds and the derived [`WorkoutSummary`] record
//! - **Workouts**: shared base computation with per-kind speed and calorie
//!   overrides, behind the [`Workout`] trait
//! - **Factory**: maps a wire code plus flat numeric field list to a
//!   constructed variant
//! - **Formatters**: fixed text template or JSON output
//! - **Logging**: env-driven `tracing` subscriber setup for the binary
//!
//! ## Example
//!
//! ```rust
//! use fitsum::formatters::{format_summary, OutputFormat};
//! use fitsum::{build_workout, AppResult};
//!
//! fn main() -> AppResult<()> {
//!     let session = build_workout("RUN", &[15_000.0, 1.0, 75.0])?;
//!     let line = format_summary(&session.summarize(), OutputFormat::Text)?;
//!     println!("{line}");
//!     Ok(())
//! }
//! ```

/// Physiological and unit constants used by the calculation layer
pub mod constants;

/// Unified error handling with `AppError` and the `AppResult` alias
pub mod errors;

/// Output format abstraction (text template, JSON) for summaries
pub mod formatters;

/// Logging configuration and tracing subscriber initialization
pub mod logging;

/// Core data models (`WorkoutKind`, `WorkoutSummary`)
pub mod models;

/// Workout variants, shared base computation, and the session factory
pub mod workouts;

pub use errors::{AppError, AppResult};
pub use models::{WorkoutKind, WorkoutSummary};
pub use workouts::factory::build_workout;
pub use workouts::Workout;
