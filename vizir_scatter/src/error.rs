// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// A malformed chart configuration, rejected before any rendering work starts.
#[derive(Clone, Debug, PartialEq)]
pub enum ScatterError {
    /// A symbol name outside the supported set.
    UnknownSymbol(String),
    /// `width` or `height` is not a positive finite number.
    InvalidDimension {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A padding side is negative or not finite.
    InvalidPadding(f64),
    /// A constant point size is not finite.
    InvalidSize(f64),
    /// `max_bubble_size` is not a positive finite number.
    InvalidMaxBubbleSize(f64),
    /// Sampled data was requested with a sample count of zero or above the cap.
    InvalidSamples,
}

impl fmt::Display for ScatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(name) => write!(f, "unknown symbol: {name:?}"),
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} must be positive and finite, got {value}")
            }
            Self::InvalidPadding(v) => write!(f, "padding must be non-negative, got {v}"),
            Self::InvalidSize(v) => write!(f, "point size must be finite, got {v}"),
            Self::InvalidMaxBubbleSize(v) => {
                write!(f, "max bubble size must be positive and finite, got {v}")
            }
            Self::InvalidSamples => write!(
                f,
                "sample count must be between 1 and {}",
                crate::data::MAX_SAMPLES
            ),
        }
    }
}

impl core::error::Error for ScatterError {}
