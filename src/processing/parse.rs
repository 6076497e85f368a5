use crate::processing::types::{
    SwimmingInput, TrainingError, WalkingInput, Workout, WorkoutInput, WorkoutType,
};

impl WorkoutInput {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            action,
            duration: require_positive("duration", duration)?,
            weight: require_positive("weight", weight)?,
        })
    }
}

impl Workout {
    pub fn running(action: u64, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Workout::Running(WorkoutInput::new(action, duration, weight)?))
    }

    pub fn sports_walking(
        action: u64,
        duration: f64,
        weight: f64,
        height: f64,
    ) -> Result<Self, TrainingError> {
        Ok(Workout::SportsWalking(WalkingInput {
            base: WorkoutInput::new(action, duration, weight)?,
            height: require_positive("height", height)?,
        }))
    }

    pub fn swimming(
        action: u64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        lap_count: u64,
    ) -> Result<Self, TrainingError> {
        Ok(Workout::Swimming(SwimmingInput {
            base: WorkoutInput::new(action, duration, weight)?,
            pool_length: require_positive("pool_length", pool_length)?,
            lap_count,
        }))
    }

    /// Re-check the measurement invariants. Needed for workouts assembled from
    /// public fields instead of the constructors above.
    pub fn validate(&self) -> Result<(), TrainingError> {
        let base = self.base();
        require_positive("duration", base.duration)?;
        require_positive("weight", base.weight)?;
        match self {
            Workout::Running(_) => {}
            Workout::SportsWalking(input) => {
                require_positive("height", input.height)?;
            }
            Workout::Swimming(input) => {
                require_positive("pool_length", input.pool_length)?;
            }
        }
        Ok(())
    }
}

/// Build a workout from a sensor package.
///
/// `data` is positional and must match the workout kind selected by `code`:
///
/// * `RUN`: action, duration, weight
/// * `WLK`: action, duration, weight, height
/// * `SWM`: action, duration, weight, pool length, lap count
///
/// The code is resolved before any value is looked at, so an unknown code
/// never yields a partially checked workout.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, TrainingError> {
    let workout_type: WorkoutType = code.parse()?;
    tracing::debug!(code, values = data.len(), "reading sensor package");

    match (workout_type, data) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Workout::running(to_count("action", action)?, duration, weight)
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            Workout::sports_walking(to_count("action", action)?, duration, weight, height)
        }
        (WorkoutType::Swimming, &[action, duration, weight, pool_length, lap_count]) => {
            Workout::swimming(
                to_count("action", action)?,
                duration,
                weight,
                pool_length,
                to_count("lap_count", lap_count)?,
            )
        }
        (workout_type, values) => Err(TrainingError::InvalidInput(format!(
            "{} package expects {} values, got {}",
            workout_type.code(),
            workout_type.arity(),
            values.len()
        ))),
    }
}

fn require_positive(name: &str, value: f64) -> Result<f64, TrainingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::InvalidInput(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

fn to_count(name: &str, value: f64) -> Result<u64, TrainingError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(TrainingError::InvalidInput(format!(
            "{name} must be a whole non-negative count, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_workout_kinds() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0, 75.0]),
            Ok(Workout::Running(_))
        ));
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Ok(Workout::SportsWalking(_))
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            Ok(Workout::Swimming(_))
        ));
    }

    #[test]
    fn unknown_code_is_rejected_before_arguments() {
        let err = read_package("XYZ", &[]).unwrap_err();
        assert_eq!(err, TrainingError::UnsupportedWorkoutType("XYZ".into()));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(TrainingError::UnsupportedWorkoutType(_))
        ));
    }

    #[test]
    fn wrong_argument_count_is_invalid_input() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert_eq!(
            err,
            TrainingError::InvalidInput("WLK package expects 4 values, got 3".into())
        );
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
            Err(TrainingError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_or_negative_duration_is_invalid_input() {
        for duration in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                read_package("RUN", &[15000.0, duration, 75.0]),
                Err(TrainingError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn fractional_counts_are_rejected() {
        assert!(matches!(
            read_package("RUN", &[150.5, 1.0, 75.0]),
            Err(TrainingError::InvalidInput(_))
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -4.0]),
            Err(TrainingError::InvalidInput(_))
        ));
    }

    #[test]
    fn counts_beyond_u64_range_are_rejected() {
        // 2^64 would otherwise saturate to u64::MAX
        assert!(matches!(
            read_package("RUN", &[18446744073709551616.0, 1.0, 75.0]),
            Err(TrainingError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_catches_hand_built_workouts() {
        let walking = Workout::SportsWalking(WalkingInput {
            base: WorkoutInput {
                action: 9000,
                duration: 1.0,
                weight: 75.0,
            },
            height: -180.0,
        });
        assert!(matches!(
            walking.validate(),
            Err(TrainingError::InvalidInput(_))
        ));

        let swimming = Workout::swimming(720, 1.0, 80.0, 25.0, 40).expect("valid input");
        assert!(swimming.validate().is_ok());
    }

    #[test]
    fn zero_laps_are_allowed() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 0.0]).expect("valid package");
        assert_eq!(workout.mean_speed(), 0.0);
    }

    #[test]
    fn zero_height_is_invalid_input() {
        assert!(matches!(
            Workout::sports_walking(9000, 1.0, 75.0, 0.0),
            Err(TrainingError::InvalidInput(_))
        ));
    }
}
