use std::{fmt, str::FromStr};

use crate::{RaceWalking, Running, Swimming, Workout, WorkoutError, WorkoutRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkoutKind {
    Running,
    RaceWalking,
    Swimming,
}

impl WorkoutKind {
    /// Short code used by the tracker in sensor packets
    pub const fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::RaceWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::RaceWalking => "RaceWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of parameters in a sensor packet
    pub const fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::RaceWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::RaceWalking),
            "SWM" => Ok(Self::Swimming),
            _ => Err(WorkoutError::UnrecognizedWorkoutType(s.to_owned())),
        }
    }
}

/// Any workout which could be built from a sensor packet.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum AnyWorkout {
    Running(Running),
    RaceWalking(RaceWalking),
    Swimming(Swimming),
}

impl AnyWorkout {
    fn inner(&self) -> &dyn Workout {
        match self {
            Self::Running(this) => this,
            Self::RaceWalking(this) => this,
            Self::Swimming(this) => this,
        }
    }
}

impl Workout for AnyWorkout {
    fn record(&self) -> &WorkoutRecord {
        self.inner().record()
    }

    fn kind(&self) -> WorkoutKind {
        self.inner().kind()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }

    fn stride_length(&self) -> f64 {
        self.inner().stride_length()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.inner().mean_speed_kmh()
    }
}

impl From<Running> for AnyWorkout {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<RaceWalking> for AnyWorkout {
    fn from(value: RaceWalking) -> Self {
        Self::RaceWalking(value)
    }
}

impl From<Swimming> for AnyWorkout {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

fn count(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        return Ok(value as u64);
    }

    Err(WorkoutError::NotACount { field, value })
}

/// Build workout from sensor packet.
///
/// Parameters are bound by position:
/// - `RUN` - action, duration, weight
/// - `WLK` - action, duration, weight, height
/// - `SWM` - action, duration, weight, pool length, pool laps
pub fn read_package(code: &str, data: &[f64]) -> Result<AnyWorkout, WorkoutError> {
    let kind = code.parse::<WorkoutKind>()?;

    let workout: AnyWorkout = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Running::new(count("action", action)?, duration, weight).into()
        }
        (WorkoutKind::RaceWalking, &[action, duration, weight, height]) => {
            RaceWalking::new(count("action", action)?, duration, weight, height).into()
        }
        (WorkoutKind::Swimming, &[action, duration, weight, pool_length, pool_laps]) => {
            Swimming::new(
                count("action", action)?,
                duration,
                weight,
                pool_length,
                count("pool_laps", pool_laps)?,
            )
            .into()
        }
        _ => {
            return Err(WorkoutError::ArityMismatch {
                kind,
                expected: kind.arity(),
                found: data.len(),
            });
        }
    };

    tracing::debug!(%kind, ?data, "sensor packet resolved");

    Ok(workout)
}
