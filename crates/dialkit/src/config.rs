use crate::color::Color;
use crate::error::ConfigurationError;
use crate::tick::TickClass;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
    pub initial: i32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: 20,
            max: 250,
            initial: 80,
        }
    }
}

impl ValueRange {
    pub fn new(min: i32, max: i32, initial: i32) -> Self {
        Self { min, max, initial }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min > self.max {
            return Err(ConfigurationError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if !self.contains(self.initial) {
            return Err(ConfigurationError::InitialOutOfRange {
                initial: self.initial,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn values(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// `(min_angle, max_angle)`, one degree per unit value.
    pub fn angle_limits(&self) -> (f64, f64) {
        (
            f64::from(self.initial) - f64::from(self.max),
            f64::from(self.initial) - f64::from(self.min),
        )
    }

    pub fn value_at(&self, angle: f64) -> i32 {
        (f64::from(self.initial) - angle).round() as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub length: f64,
    pub color: Color,
}

impl TickStyle {
    pub fn new(length: f64, color: Color) -> Self {
        Self { length, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickStyles {
    pub minor: TickStyle,
    pub mid: TickStyle,
    pub major: TickStyle,
}

impl Default for TickStyles {
    fn default() -> Self {
        Self {
            minor: TickStyle::new(15.0, Color::light_gray()),
            mid: TickStyle::new(25.0, Color::green()),
            major: TickStyle::new(35.0, Color::black()),
        }
    }
}

impl TickStyles {
    pub fn get(&self, class: TickClass) -> &TickStyle {
        match class {
            TickClass::Minor => &self.minor,
            TickClass::Mid => &self.mid,
            TickClass::Major => &self.major,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleStyle {
    pub radius: f64,
    pub track_width: f64,
    pub track_color: Color,
    /// Blur radius of the soft shadow under the track ring; 0 disables it.
    pub shadow_blur: f64,
    pub shadow_color: Color,
    pub ticks: TickStyles,
    pub indicator_length: f64,
    pub indicator_color: Color,
    pub label_text_size: f64,
    pub label_color: Color,
}

impl Default for ScaleStyle {
    fn default() -> Self {
        Self {
            radius: 550.0,
            track_width: 150.0,
            track_color: Color::white(),
            shadow_blur: 60.0,
            shadow_color: Color::from_rgba8(0, 0, 0, 50),
            ticks: TickStyles::default(),
            indicator_length: 60.0,
            indicator_color: Color::green(),
            label_text_size: 18.0,
            label_color: Color::black(),
        }
    }
}

impl ScaleStyle {
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.track_width / 2.0
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius - self.track_width / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let lengths = [
            ("radius", self.radius),
            ("track_width", self.track_width),
            ("indicator_length", self.indicator_length),
            ("label_text_size", self.label_text_size),
        ];
        if let Some((field, value)) = lengths
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigurationError::NonPositive { field, value });
        }

        for class in TickClass::iter() {
            let length = self.ticks.get(class).length;
            if !(length.is_finite() && length > 0.0) {
                return Err(ConfigurationError::NonPositiveTick { class, length });
            }
        }

        if self.radius <= self.track_width / 2.0 {
            return Err(ConfigurationError::TrackTooWide {
                radius: self.radius,
                track_width: self.track_width,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub range: ValueRange,
    pub style: ScaleStyle,
}

impl ScaleConfig {
    pub fn new(range: ValueRange, style: ScaleStyle) -> Self {
        Self { range, style }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.range.validate()?;
        self.style.validate()
    }
}
