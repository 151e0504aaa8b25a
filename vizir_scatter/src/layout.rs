// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart padding and size.

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 300.0,
        }
    }
}

/// Space reserved between the chart edges and the plotted points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
    /// Right padding.
    pub right: f64,
}

impl Padding {
    /// The same padding on all four sides.
    pub fn uniform(padding: f64) -> Self {
        Self {
            top: padding,
            bottom: padding,
            left: padding,
            right: padding,
        }
    }

    /// Per-side padding.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The smallest of the four sides.
    pub fn min_side(&self) -> f64 {
        self.top.min(self.bottom).min(self.left).min(self.right)
    }

    pub(crate) fn sides(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}
