// ABOUTME: Physiological and unit constants for workout metric calculations
// ABOUTME: Groups stride geometry, time conversions, and per-kind calorie coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants used by the calculation layer, grouped by domain so the
//! formulas read without magic numbers.

/// Distance geometry shared by the workout variants
pub mod distance {
    /// Meters covered by one step when running or walking
    pub const STRIDE_LENGTH_M: f64 = 0.65;

    /// Meters covered by one stroke when swimming
    pub const STROKE_LENGTH_M: f64 = 1.38;

    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
}

/// Time unit conversions
pub mod time {
    /// Minutes in one hour; the running and walking calorie models are
    /// per-minute rates scaled by session length
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Calorie model coefficients, one module per workout kind
pub mod calories {
    /// Running calorie model: speed-scaled per-minute rate
    pub mod running {
        /// Multiplier applied to mean speed
        pub const SPEED_FACTOR: f64 = 18.0;

        /// Offset subtracted from the scaled speed
        pub const SPEED_OFFSET: f64 = 20.0;

        /// Divisor scaling the weight term to a kcal-per-minute rate
        pub const WEIGHT_SCALE: f64 = 1000.0;
    }

    /// Sports walking calorie model: weight term plus a floored
    /// speed-per-height term
    pub mod walking {
        /// Coefficient on the bare weight term
        pub const WEIGHT_FACTOR: f64 = 0.035;

        /// Coefficient on the floored speed-per-height term
        pub const SPEED_HEIGHT_FACTOR: f64 = 0.029;
    }

    /// Swimming calorie model: speed-offset rate scaled by weight only
    pub mod swimming {
        /// Offset added to mean speed
        pub const SPEED_OFFSET: f64 = 1.1;

        /// Multiplier on the weight term
        pub const WEIGHT_FACTOR: f64 = 2.0;
    }
}
