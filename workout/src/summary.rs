use std::fmt;

use crate::WorkoutKind;

/// Result of a single workout
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutSummary {
    pub kind: WorkoutKind,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Kilometers per hour
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            kind,
            duration,
            distance,
            speed,
            calories,
        } = self;

        write!(
            f,
            "Workout type: {kind}; Duration: {duration:.3} h; Distance: {distance:.3} km; \
             Avg speed: {speed:.3} km/h; Calories burned: {calories:.3}."
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Workout, read_package};

    fn line(code: &str, data: &[f64]) -> String {
        read_package(code, data)
            .and_then(|this| this.summary())
            .expect("valid package")
            .to_string()
    }

    #[test]
    fn test_swimming_line() {
        assert_eq!(
            line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_running_line() {
        assert_eq!(
            line("RUN", &[15_000.0, 1.0, 75.0]),
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_race_walking_line() {
        assert_eq!(
            line("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
            "Workout type: RaceWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 157.500."
        );
    }

    #[test]
    fn test_negative_calories_are_printed() {
        assert_eq!(
            line("RUN", &[1_000.0, 1.0, 75.0]),
            "Workout type: Running; Duration: 1.000 h; Distance: 0.650 km; \
             Avg speed: 0.650 km/h; Calories burned: -37.350."
        );
    }
}
