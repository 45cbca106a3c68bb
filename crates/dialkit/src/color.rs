use palette::Srgba;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Written in config files as `#rrggbb`, `#rrggbbaa` or a CSS color name.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(Srgba::<u8>::new(red, green, blue, alpha).into_format())
    }

    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, u8::MAX)
    }

    pub fn white() -> Self {
        Self::from_rgb8(0xff, 0xff, 0xff)
    }

    pub fn black() -> Self {
        Self::from_rgb8(0x00, 0x00, 0x00)
    }

    pub fn green() -> Self {
        Self::from_rgb8(0x00, 0xff, 0x00)
    }

    pub fn light_gray() -> Self {
        Self::from_rgb8(0xcc, 0xcc, 0xcc)
    }

    pub fn into_components(self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color '{0}': expected #rrggbb, #rrggbbaa or a CSS color name")]
pub struct ColorParseError(String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(named) = palette::named::from_str(&trimmed.to_ascii_lowercase()) {
            return Ok(Self::from_rgb8(named.red, named.green, named.blue));
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError(s.to_string()))?;

        match hex.len() {
            6 => {
                let [_, r, g, b] = packed.to_be_bytes();
                Ok(Self::from_rgb8(r, g, b))
            }
            8 => {
                let [r, g, b, a] = packed.to_be_bytes();
                Ok(Self::from_rgba8(r, g, b, a))
            }
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c: Srgba<u8> = self.0.into_format();
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            c.red, c.green, c.blue, c.alpha
        )
    }
}
