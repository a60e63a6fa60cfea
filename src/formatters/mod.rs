// ABOUTME: Output format abstraction for workout summaries
// ABOUTME: Renders the fixed three-decimal text template or JSON via serde
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output formatting for workout summaries.
//!
//! Text is the default and renders the fixed summary template with three
//! decimal digits on every numeric field. JSON serializes the
//! [`WorkoutSummary`] record for downstream tooling.

use crate::errors::AppResult;
use crate::models::WorkoutSummary;

/// Output serialization format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template text line (default)
    #[default]
    Text,
    /// JSON record for downstream tooling
    Json,
}

impl OutputFormat {
    /// Parse a format from a CLI parameter (case-insensitive).
    /// Returns `Text` for unrecognized values.
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Render a summary as the fixed single-line text template.
#[must_use]
pub fn render_text(summary: &WorkoutSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Speed: {:.3} km/h; Calories: {:.3}.",
        summary.kind,
        summary.duration_h,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal
    )
}

/// Render a summary in the requested output format.
///
/// # Errors
///
/// Returns [`AppError::Serialization`](crate::errors::AppError) if JSON
/// encoding fails.
pub fn format_summary(summary: &WorkoutSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutKind;

    fn sample_summary() -> WorkoutSummary {
        WorkoutSummary {
            kind: WorkoutKind::Swimming,
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        }
    }

    #[test]
    fn test_text_template_is_exact() {
        assert_eq!(
            render_text(&sample_summary()),
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_text_always_has_three_decimals() {
        let summary = WorkoutSummary {
            kind: WorkoutKind::Running,
            duration_h: 0.5,
            distance_km: 9.75,
            mean_speed_kmh: 19.5,
            calories_kcal: 123.456_789,
        };
        let line = render_text(&summary);
        assert!(line.contains("Duration: 0.500 h."));
        assert!(line.contains("Distance: 9.750 km"));
        assert!(line.contains("Speed: 19.500 km/h"));
        assert!(line.ends_with("Calories: 123.457."));
    }

    #[test]
    fn test_from_str_param_is_case_insensitive() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("text"), OutputFormat::Text);
    }

    #[test]
    fn test_from_str_param_falls_back_to_text() {
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str_param(""), OutputFormat::Text);
    }

    #[test]
    fn test_json_round_trips() {
        let original = sample_summary();
        let encoded = format_summary(&original, OutputFormat::Json).unwrap();
        let decoded: WorkoutSummary = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
