//! # Workout
//!
//! Turns raw sensor packets from a fitness tracker into a workout summary:
//! distance, average speed and burnt calories.
//!
//! Every activity shares the same distance and speed formulas:
//!
//! ```notrust
//! distance_km = action * stride_length / 1000
//! speed_kmh = distance_km / duration
//! ```
//!
//! Where:
//!
//! - action - number of steps or strokes
//! - stride_length - meters covered by one action, `0.65` for steps and `1.38` for strokes
//! - duration - workout length in hours
//!
//! Calories are activity specific, see [`Running`], [`RaceWalking`] and [`Swimming`].

mod error;
mod kind;
mod package;
mod race_walking;
mod running;
mod summary;
mod swimming;

pub use self::error::*;
pub use self::kind::*;
pub use self::package::*;
pub use self::race_walking::RaceWalking;
pub use self::running::Running;
pub use self::summary::WorkoutSummary;
pub use self::swimming::{STROKE_LENGTH_M, Swimming};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Distance covered by one step in meters
pub const STEP_LENGTH_M: f64 = 0.65;

/// Raw measurements common to every activity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WorkoutRecord {
    /// Count of steps or strokes
    pub action: u64,
    /// Elapsed time in hours
    pub duration: f64,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl WorkoutRecord {
    pub const fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Activity which can report distance, speed and burnt calories.
///
/// There is no calories formula for a bare [`WorkoutRecord`], every
/// activity has to provide its own.
pub trait Workout {
    fn record(&self) -> &WorkoutRecord;

    fn kind(&self) -> WorkoutKind;

    /// Burnt kilocalories
    fn spent_calories(&self) -> f64;

    /// Meters covered by one action
    fn stride_length(&self) -> f64 {
        STEP_LENGTH_M
    }

    fn distance_km(&self) -> f64 {
        self.record().action as f64 * self.stride_length() / M_IN_KM
    }

    /// Average speed in km/h.
    ///
    /// Caller must guarantee non zero duration.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration
    }

    fn duration_min(&self) -> f64 {
        self.record().duration * MIN_IN_H
    }

    fn summary(&self) -> Result<WorkoutSummary, WorkoutError> {
        let duration = self.record().duration;

        if duration == 0.0 {
            return Err(WorkoutError::DivisionByZero { kind: self.kind() });
        }

        let summary = WorkoutSummary {
            kind: self.kind(),
            duration,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        };

        tracing::trace!(?summary, "workout summary assembled");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_never_negative() {
        for action in [0, 1, 100, 15_000, u32::MAX as u64] {
            let running = Running::new(action, 1.0, 70.0);
            let walking = RaceWalking::new(action, 1.0, 70.0, 175.0);
            let swimming = Swimming::new(action, 1.0, 70.0, 25.0, 10);

            assert!(running.distance_km() >= 0.0);
            assert!(walking.distance_km() >= 0.0);
            assert!(swimming.distance_km() >= 0.0);
        }
    }

    #[test]
    fn test_speed_is_distance_over_duration() {
        let running = Running::new(12_000, 1.5, 70.0);
        let walking = RaceWalking::new(7_000, 0.75, 70.0, 175.0);

        assert!((running.mean_speed_kmh() - running.distance_km() / 1.5).abs() < EPS);
        assert!((walking.mean_speed_kmh() - walking.distance_km() / 0.75).abs() < EPS);
    }

    #[test]
    fn test_swimming_speed_uses_pool() {
        let swimming = Swimming::new(720, 2.0, 80.0, 50.0, 30);

        assert!((swimming.mean_speed_kmh() - (50.0 * 30.0) / 1000.0 / 2.0).abs() < EPS);
        assert!((swimming.mean_speed_kmh() - swimming.distance_km() / 2.0).abs() > EPS);
    }

    #[test]
    fn test_duration_in_minutes() {
        let running = Running::new(1_000, 1.25, 70.0);

        assert!((running.duration_min() - 75.0).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_fails_summary() {
        let err = Running::new(1_000, 0.0, 70.0)
            .summary()
            .expect_err("zero duration");

        assert!(matches!(
            err,
            WorkoutError::DivisionByZero {
                kind: WorkoutKind::Running
            }
        ));
    }

    #[test]
    fn test_negative_duration_is_not_validated() {
        let summary = Running::new(1_000, -1.0, 70.0)
            .summary()
            .expect("no range validation");

        assert!(summary.speed < 0.0);
    }

    #[test]
    fn test_summary_fields() {
        let summary = Running::new(15_000, 1.0, 75.0).summary().expect("valid");

        assert_eq!(summary.kind, WorkoutKind::Running);
        assert!((summary.duration - 1.0).abs() < EPS);
        assert!((summary.distance - 9.75).abs() < EPS);
        assert!((summary.speed - 9.75).abs() < EPS);
        assert!((summary.calories - 699.75).abs() < EPS);
    }
}
