// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol shapes for scatter points.

extern crate alloc;

use alloc::string::String;
use core::f64::consts::{PI, SQRT_2};
use core::fmt;
use core::str::FromStr;

use kurbo::Point;
use smallvec::smallvec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::error::ScatterError;
use crate::path::{Outline, Vertices};

/// π/5 (not provided by `core::f64::consts`).
const FRAC_PI_5: f64 = PI / 5.0;

/// The fixed set of glyph shapes a point can be drawn with.
///
/// For every shape `size` is a radius-like measure: the circle radius, the half-width of the
/// square, and so on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A circle of radius `size`.
    #[default]
    Circle,
    /// An axis-aligned square with half-width `size`.
    Square,
    /// A square rotated by 45 degrees, vertices `size * sqrt(2)` from the center.
    Diamond,
    /// A triangle pointing up.
    TriangleUp,
    /// A triangle pointing down.
    TriangleDown,
    /// A 12-vertex cross.
    Plus,
    /// A 5-pointed star.
    Star,
}

impl Symbol {
    /// Every symbol, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Circle,
        Self::Square,
        Self::Diamond,
        Self::TriangleUp,
        Self::TriangleDown,
        Self::Plus,
        Self::Star,
    ];

    /// Returns the camel-case name of this symbol (`"triangleUp"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::TriangleUp => "triangleUp",
            Self::TriangleDown => "triangleDown",
            Self::Plus => "plus",
            Self::Star => "star",
        }
    }

    /// Returns SVG path data for this symbol centered at `x, y`.
    pub fn path(self, x: f64, y: f64, size: f64) -> String {
        self.outline(x, y, size).path_data()
    }

    /// Returns the outline geometry for this symbol centered at `x, y`.
    pub fn outline(self, x: f64, y: f64, size: f64) -> Outline {
        match self {
            Self::Circle => Outline::Circle {
                center: Point::new(x, y),
                radius: size,
            },
            Self::Square => Outline::Polygon(smallvec![
                Point::new(x - size, y + size),
                Point::new(x + size, y + size),
                Point::new(x + size, y - size),
                Point::new(x - size, y - size),
            ]),
            Self::Diamond => {
                let length = SQRT_2 * size;
                Outline::Polygon(smallvec![
                    Point::new(x, y + length),
                    Point::new(x + length, y),
                    Point::new(x, y - length),
                    Point::new(x - length, y),
                ])
            }
            Self::TriangleUp => {
                let height = triangle_height(size);
                Outline::Polygon(smallvec![
                    Point::new(x - size, y + size),
                    Point::new(x + size, y + size),
                    Point::new(x, y - height),
                ])
            }
            Self::TriangleDown => {
                let height = triangle_height(size);
                Outline::Polygon(smallvec![
                    Point::new(x - size, y - size),
                    Point::new(x + size, y - size),
                    Point::new(x, y + height),
                ])
            }
            Self::Plus => {
                let half = size / 2.0;
                Outline::Polygon(smallvec![
                    Point::new(x - half, y + size),
                    Point::new(x + half, y + size),
                    Point::new(x + half, y + half),
                    Point::new(x + size, y + half),
                    Point::new(x + size, y - half),
                    Point::new(x + half, y - half),
                    Point::new(x + half, y - size),
                    Point::new(x - half, y - size),
                    Point::new(x - half, y - half),
                    Point::new(x - size, y - half),
                    Point::new(x - size, y + half),
                    Point::new(x - half, y + half),
                ])
            }
            Self::Star => Outline::Polygon(star_vertices(x, y, size)),
        }
    }
}

fn triangle_height(size: f64) -> f64 {
    size / 2.0 * 3.0_f64.sqrt()
}

/// Ten vertices alternating between radius `size` and `size / 2`, starting straight up and
/// advancing clockwise by `PI / 5`.
fn star_vertices(x: f64, y: f64, size: f64) -> Vertices {
    (0..10_u32)
        .map(|i| {
            let length = if i % 2 == 0 { size } else { size / 2.0 };
            let angle = FRAC_PI_5 * f64::from(i);
            Point::new(x + length * angle.sin(), y - length * angle.cos())
        })
        .collect()
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.name() == s)
            .ok_or_else(|| ScatterError::UnknownSymbol(s.into()))
    }
}
