// ABOUTME: Unified error types for session parsing and summary rendering
// ABOUTME: Defines AppError variants and the AppResult alias used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unified error handling.
//!
//! Every fallible operation in the crate returns [`AppResult`]. The variants
//! cover the two ways a raw session record can be rejected and the one way
//! rendering can fail. Calorie computation has no error path at all: each
//! workout kind must supply a formula at compile time, so the "unimplemented
//! calorie model" fault class of the original design is unrepresentable.

use thiserror::Error;

use crate::models::WorkoutKind;

/// Errors produced while turning raw session records into summaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// The session record carried a type code outside {RUN, WLK, SWM}.
    #[error("unknown workout code: {0}")]
    UnknownWorkoutKind(String),

    /// The field list does not match the arity of the resolved kind.
    #[error("{kind} record expects {expected} fields, got {actual}")]
    MalformedArguments {
        /// Kind resolved from the type code.
        kind: WorkoutKind,
        /// Field count the kind requires.
        expected: usize,
        /// Field count actually supplied.
        actual: usize,
    },

    /// Serializing a summary to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used by all fallible functions in this crate.
pub type AppResult<T> = Result<T, AppError>;
