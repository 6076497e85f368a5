pub mod display;
pub mod parse;
pub mod summary;
pub mod types;

pub use display::render_message;
pub use parse::read_package;
pub use types::{
    InfoMessage, SwimmingInput, TrainingError, WalkingInput, Workout, WorkoutInput, WorkoutType,
};

/// Sample sensor packages printed by the `FitTrack` binary.
pub const DEMO_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Turn one sensor package into its report line.
///
/// The function performs three stages:
/// 1. [`parse::read_package`] resolves the workout code and validates the
///    positional values.
/// 2. [`Workout::show_training_info`] computes distance, speed, and calories.
/// 3. [`display::render_message`] formats the result.
pub fn process_package(code: &str, data: &[f64]) -> Result<String, TrainingError> {
    let workout = read_package(code, data)?;
    let info = workout.show_training_info()?;
    Ok(render_message(&info))
}

/// Process packages in order, one result per package. A rejected package does
/// not stop the ones after it.
pub fn process_packages<'a, I>(packages: I) -> Vec<Result<String, TrainingError>>
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
{
    packages
        .into_iter()
        .map(|(code, data)| process_package(code, data))
        .collect()
}
