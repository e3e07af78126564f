//! Swimming.
//!
//! Speed comes from pool geometry instead of strokes:
//!
//! ```notrust
//! speed_kmh = pool_length * pool_laps / 1000 / duration
//! calories = (speed_kmh + 1.1) * 2 * weight
//! ```
//!
//! _Note_: [`Workout::distance_km`] isn't overridden and still counts
//! strokes, so it doesn't match the pool distance used for speed.

use crate::{M_IN_KM, Workout, WorkoutKind, WorkoutRecord};

/// Distance covered by one stroke in meters
pub const STROKE_LENGTH_M: f64 = 1.38;

const SPEED_SHIFT: f64 = 1.1;
const WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Swimming {
    record: WorkoutRecord,
    /// Pool length in meters
    pool_length: f64,
    /// How many times pool was crossed
    pool_laps: u64,
}

impl Swimming {
    /// # Params
    /// - `action` - number of strokes
    /// - `duration` - workout length in hours
    /// - `weight` - weight of person in kilograms
    /// - `pool_length` - pool length in meters
    /// - `pool_laps` - how many times pool was crossed
    pub const fn new(
        action: u64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_laps: u64,
    ) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
            pool_length,
            pool_laps,
        }
    }

    pub const fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub const fn pool_laps(&self) -> u64 {
        self.pool_laps
    }

    /// Distance swum according to pool geometry, in meters
    pub fn pool_distance_m(&self) -> f64 {
        self.pool_length * self.pool_laps as f64
    }
}

impl Workout for Swimming {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn stride_length(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_distance_m() / M_IN_KM / self.record.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.record.weight
    }
}
