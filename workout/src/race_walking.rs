//! Race walking.
//!
//! ```notrust
//! calories = (0.035 * weight + floor(speed_kmh ^ 2 / height) * 0.029 * weight) * duration_min
//! ```
//!
//! _Note_: the speed term is floor divided by height, so it stays `0`
//! until squared speed reaches person height in centimeters.

use crate::{Workout, WorkoutKind, WorkoutRecord};

const WEIGHT_MULTIPLIER: f64 = 0.035;
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RaceWalking {
    record: WorkoutRecord,
    /// Height of person in centimeters
    height: f64,
}

impl RaceWalking {
    /// # Params
    /// - `action` - number of steps
    /// - `duration` - workout length in hours
    /// - `weight` - weight of person in kilograms
    /// - `height` - height of person in centimeters
    pub const fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
            height,
        }
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Workout for RaceWalking {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::RaceWalking
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.record.weight;
        let speed_term = (self.mean_speed_kmh().powi(2) / self.height).floor();

        (WEIGHT_MULTIPLIER * weight + speed_term * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.duration_min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_reference_walk() {
        let walking = RaceWalking::new(9_000, 1.0, 75.0, 180.0);

        assert!((walking.distance_km() - 5.85).abs() < EPS);
        assert!((walking.mean_speed_kmh() - 5.85).abs() < EPS);
        // 34.2225 floor divided by 180 is 0, only weight term is left
        assert!((walking.spent_calories() - 157.5).abs() < EPS);
    }

    #[test]
    fn test_speed_term_is_floored() {
        // 20 km/h squared is 400, 400 // 180 == 2
        let walking = RaceWalking::new(20_000, 0.65, 75.0, 180.0);
        let expected = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 0.65 * 60.0;

        assert!((walking.mean_speed_kmh() - 20.0).abs() < EPS);
        assert!((walking.spent_calories() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_calories_jump_at_floor_boundary() {
        // Squared speed just below and just above height
        let below = RaceWalking::new(20_000, 1.0, 75.0, 170.0);
        let above = RaceWalking::new(21_000, 1.0, 75.0, 170.0);

        assert!(below.mean_speed_kmh().powi(2) < 170.0);
        assert!(above.mean_speed_kmh().powi(2) >= 170.0);
        assert!((above.spent_calories() - below.spent_calories() - 0.029 * 75.0 * 60.0).abs() < 1e-6);
    }
}
