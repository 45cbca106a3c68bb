pub mod color;
pub mod config;
pub mod dial;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod primitive;
pub mod tick;

pub use color::Color;
pub use config::{ScaleConfig, ScaleStyle, TickStyle, TickStyles, ValueRange};
pub use dial::ScaleDial;
pub use error::{ConfigurationError, SequencingError};
pub use geometry::{Point, Rect};
pub use gesture::{DragEvent, GestureTracker};
pub use layout::{AngleSource, ScaleGeometry, layout};
pub use primitive::DrawPrimitive;
pub use tick::TickClass;
