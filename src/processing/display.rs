use crate::processing::types::InfoMessage;
use std::fmt;

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type.label(),
            self.duration,
            self.distance,
            self.speed,
            self.calories
        )
    }
}

/// Render the one-line training report.
pub fn render_message(message: &InfoMessage) -> String {
    message.to_string()
}
