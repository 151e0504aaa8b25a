// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph outlines and SVG path-data formatting.
//!
//! Every symbol is described as an [`Outline`]: either a circle, or a closed polygon whose
//! vertices are listed in drawing order. The same outline feeds both the SVG path string
//! emitted into the scene and the [`BezPath`] used by geometry consumers (bounds, hit tests).

extern crate alloc;

use alloc::string::String;
use core::fmt::{self, Write};

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use smallvec::SmallVec;

/// Vertex storage for polygon outlines; the largest glyph (`plus`) has 12 vertices.
pub type Vertices = SmallVec<[Point; 12]>;

/// The geometric outline of one glyph.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// A full circle.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
    },
    /// A closed polygon; the first vertex is the move-to point.
    Polygon(Vertices),
}

impl Outline {
    /// Formats this outline as SVG path data.
    ///
    /// Circles are written as two half-circle arcs starting from the center:
    /// `M x,y m -r, 0 a r,r 0 1,0 2r,0 a r,r 0 1,0 -2r,0`.
    /// Polygons are written as `M x0,y0 L x1,y1 ... z`.
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_path_data(&mut out);
        out
    }

    fn write_path_data(&self, out: &mut String) -> fmt::Result {
        match self {
            Self::Circle { center, radius } => {
                let r = *radius;
                write!(out, "M {},{} ", Num(center.x), Num(center.y))?;
                write!(out, "m {}, 0 ", Num(-r))?;
                write!(out, "a {},{} 0 1,0 {},0 ", Num(r), Num(r), Num(r * 2.0))?;
                write!(out, "a {},{} 0 1,0 {},0", Num(r), Num(r), Num(-r * 2.0))
            }
            Self::Polygon(vertices) => {
                let mut iter = vertices.iter();
                let Some(first) = iter.next() else {
                    return Ok(());
                };
                write!(out, "M {},{}", Num(first.x), Num(first.y))?;
                for p in iter {
                    write!(out, " L {},{}", Num(p.x), Num(p.y))?;
                }
                out.push_str(" z");
                Ok(())
            }
        }
    }

    /// Builds a [`BezPath`] for this outline.
    pub fn to_bez_path(&self) -> BezPath {
        match self {
            Self::Circle { center, radius } => {
                // Renderers normally pick a tolerance from the device pixel size; 0.1 is plenty
                // for glyph-sized shapes.
                Circle::new(*center, *radius).path_elements(0.1).collect()
            }
            Self::Polygon(vertices) => {
                let mut p = BezPath::new();
                let mut iter = vertices.iter().copied();
                if let Some(first) = iter.next() {
                    p.move_to(first);
                    for v in iter {
                        p.line_to(v);
                    }
                    p.close_path();
                }
                p
            }
        }
    }

    /// Returns the axis-aligned bounding box of this outline.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            Self::Polygon(vertices) => {
                let mut iter = vertices.iter().copied();
                let Some(first) = iter.next() else {
                    return Rect::ZERO;
                };
                iter.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
            }
        }
    }
}

/// Number formatting for path data.
///
/// Uses the shortest round-trip representation and writes negative zero as `0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Num(pub(crate) f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use smallvec::smallvec;

    use super::*;

    #[test]
    fn empty_polygon_has_no_path_data() {
        let outline = Outline::Polygon(SmallVec::new());
        assert_eq!(outline.path_data(), "");
        assert_eq!(outline.bounding_box(), Rect::ZERO);
    }

    #[test]
    fn polygon_path_data_closes() {
        let outline = Outline::Polygon(smallvec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, -1.5),
        ]);
        assert_eq!(outline.path_data(), "M 0,0 L 2,0 L 1,-1.5 z");
        assert_eq!(outline.bounding_box(), Rect::new(0.0, -1.5, 2.0, 0.0));
        assert_eq!(outline.to_bez_path().elements().len(), 4);
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        let outline = Outline::Circle {
            center: Point::new(-0.0, 0.0),
            radius: 1.0,
        };
        assert!(outline.path_data().starts_with("M 0,0 "));
    }
}
