use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Workout kinds understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    /// Sensor code used in incoming packages.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Label printed in the training report.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values a package of this type carries.
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SWM" => Ok(WorkoutType::Swimming),
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            other => Err(TrainingError::UnsupportedWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measurements shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    /// Base movements performed: steps or strokes.
    pub action: u64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingInput {
    pub base: WorkoutInput,
    /// Centimeters.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingInput {
    pub base: WorkoutInput,
    /// Meters.
    pub pool_length: f64,
    pub lap_count: u64,
}

/// A validated workout ready for calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(WorkoutInput),
    SportsWalking(WalkingInput),
    Swimming(SwimmingInput),
}

/// Computed overview of a single workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoMessage {
    pub training_type: WorkoutType,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    #[error("Unsupported workout type: {0}")]
    UnsupportedWorkoutType(String),
    #[error("Invalid workout input: {0}")]
    InvalidInput(String),
}
