// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loosely typed values carried by data points and style maps.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use peniko::Color;

/// A single datum field or style property value.
#[derive(Clone, Debug)]
pub enum Value {
    /// A plain number.
    Number(f64),
    /// A timestamp, in seconds.
    Time(f64),
    /// A string (colour names, font families, category labels, ...).
    Text(String),
    /// A boolean flag.
    Bool(bool),
    /// A colour.
    Color(Color),
}

impl Value {
    /// Returns the numeric interpretation of this value, if it has one.
    ///
    /// Numbers and times map to themselves, booleans to `0`/`1`. Text and colours have no
    /// numeric form.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Time(v) => Some(*v),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(_) | Self::Color(_) => None,
        }
    }

    /// Returns the string payload of a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for a time value.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Time(_))
    }

    /// Truthiness as used when deciding whether a bubble property is present.
    ///
    /// `0`, `NaN`, the empty string and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(v) | Self::Time(v) => *v != 0.0 && !v.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Color(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) | (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => a.components == b.components,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) | Self::Time(v) => write!(f, "{}", crate::path::Num(*v)),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Color(c) => {
                let rgba = c.to_rgba8();
                write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn truthiness_follows_loose_rules() {
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Number(-2.0).is_truthy());
        assert!(Value::from("a").is_truthy());
    }

    #[test]
    fn colors_display_as_hex() {
        assert_eq!(Value::Color(css::RED).to_string(), "#ff0000");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
    }
}
