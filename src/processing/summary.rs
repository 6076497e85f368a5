use crate::processing::types::{InfoMessage, TrainingError, Workout, WorkoutInput, WorkoutType};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
/// Step length in meters for running and walking.
const STEP_LENGTH: f64 = 0.65;

mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    /// Stroke length in meters.
    pub const STROKE_LENGTH: f64 = 1.38;
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl Workout {
    pub fn training_type(&self) -> WorkoutType {
        match self {
            Workout::Running(_) => WorkoutType::Running,
            Workout::SportsWalking(_) => WorkoutType::SportsWalking,
            Workout::Swimming(_) => WorkoutType::Swimming,
        }
    }

    pub fn base(&self) -> &WorkoutInput {
        match self {
            Workout::Running(base) => base,
            Workout::SportsWalking(input) => &input.base,
            Workout::Swimming(input) => &input.base,
        }
    }

    fn step_length(&self) -> f64 {
        match self {
            Workout::Swimming(_) => swimming::STROKE_LENGTH,
            _ => STEP_LENGTH,
        }
    }

    /// Distance covered in kilometers.
    pub fn distance(&self) -> f64 {
        self.base().action as f64 * self.step_length() / M_IN_KM
    }

    /// Average speed in km/h. Swimming measures it from completed laps rather
    /// than strokes.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Swimming(input) => {
                input.pool_length * input.lap_count as f64 / M_IN_KM / input.base.duration
            }
            _ => self.distance() / self.base().duration,
        }
    }

    /// Energy spent in kilocalories, one formula per workout kind.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match self {
            Workout::Running(base) => {
                (running::SPEED_MULTIPLIER * speed - running::SPEED_SHIFT) * base.weight / M_IN_KM
                    * (base.duration * MIN_IN_H)
            }
            Workout::SportsWalking(input) => {
                let base = &input.base;
                // Floor division is applied after squaring the speed.
                let speed_height = (speed.powi(2) / input.height).floor();
                (walking::WEIGHT_MULTIPLIER * base.weight
                    + speed_height * walking::SPEED_HEIGHT_MULTIPLIER * base.weight)
                    * base.duration
                    * MIN_IN_H
            }
            Workout::Swimming(input) => {
                (speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * input.base.weight
            }
        }
    }

    /// Compute the report values for this workout.
    ///
    /// Measurements are re-validated first, since a `Workout` can be assembled
    /// from public fields without the validating constructors. Infinite or NaN
    /// metrics are rejected as well.
    pub fn show_training_info(&self) -> Result<InfoMessage, TrainingError> {
        self.validate()?;

        let message = InfoMessage {
            training_type: self.training_type(),
            duration: self.base().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        };

        let metrics = [
            ("duration", message.duration),
            ("distance", message.distance),
            ("speed", message.speed),
            ("calories", message.calories),
        ];
        if let Some((name, value)) = metrics.iter().find(|(_, value)| !value.is_finite()) {
            return Err(TrainingError::InvalidInput(format!(
                "{} produced a non-finite {name}: {value}",
                message.training_type
            )));
        }

        tracing::debug!(
            workout = %message.training_type,
            distance = message.distance,
            speed = message.speed,
            calories = message.calories,
            "computed training info"
        );

        Ok(message)
    }
}
