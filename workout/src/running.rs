//! Running.
//!
//! ```notrust
//! calories = (18 * speed_kmh - 20) * weight / 1000 * duration * 60
//! ```

use crate::{M_IN_KM, MIN_IN_H, Workout, WorkoutKind, WorkoutRecord};

const SPEED_MULTIPLIER: f64 = 18.0;
const SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    /// # Params
    /// - `action` - number of steps
    /// - `duration` - workout length in hours
    /// - `weight` - weight of person in kilograms
    pub const fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
        }
    }
}

impl Workout for Running {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn spent_calories(&self) -> f64 {
        // Evaluated left to right, hours are converted last
        (SPEED_MULTIPLIER * self.mean_speed_kmh() - SPEED_SHIFT) * self.record.weight / M_IN_KM
            * self.record.duration
            * MIN_IN_H
    }
}
