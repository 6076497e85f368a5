//! Workout calculator for step and stroke sensor packages.
//!
//! A package is a workout code (`RUN`, `WLK`, `SWM`) plus positional
//! measurements. [`processing::read_package`] turns it into a
//! [`processing::Workout`], which computes distance, mean speed, and calories
//! and renders a one-line report.

pub mod processing;

pub use processing::{
    InfoMessage, TrainingError, Workout, WorkoutType, process_package, process_packages,
    read_package, render_message,
};
