use crate::tick::TickClass;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Empty value range: min {min} is greater than max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("Initial value {initial} is outside [{min}, {max}]")]
    InitialOutOfRange { initial: i32, min: i32, max: i32 },
    #[error("Track width {track_width} is too wide for radius {radius}")]
    TrackTooWide { radius: f64, track_width: f64 },
    #[error("{field} must be a positive length, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{class} tick length must be positive, got {length}")]
    NonPositiveTick { class: TickClass, length: f64 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencingError {
    #[error("Drag move received with no active drag session")]
    MoveWithoutSession,
    #[error("Drag end received with no active drag session")]
    EndWithoutSession,
}
