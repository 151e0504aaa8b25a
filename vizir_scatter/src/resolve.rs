// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis domain, range and scale resolution.
//!
//! Resolution order for the domain of an axis:
//! 1. an explicit domain on the chart,
//! 2. the `[min, max]` of the data on that axis,
//! 3. the intrinsic domain of the axis's base scale (warning when degenerate).
//!
//! Both axes resolve their domain in natural `[min, max]` order. The y axis is flipped into
//! screen space by its range, which runs from the bottom edge up to the top edge.

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use crate::datum::Datum;
use crate::diagnostics::{DegenerateReason, Warning, Warnings};
use crate::scale::{Scale, ScaleLinear};
use crate::scatter_chart::ScatterChartSpec;

/// The base scale used for axes that do not configure one.
///
/// It is only ever read; resolution works on a copy.
static DEFAULT_SCALE: ScaleLinear = ScaleLinear::new((0.0, 1.0), (0.0, 1.0));

/// A chart axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// Both axes, x first.
    pub const BOTH: [Self; 2] = [Self::X, Self::Y];

    /// Returns this axis' coordinate of `datum`.
    pub fn value_of(self, datum: &Datum) -> Option<f64> {
        match self {
            Self::X => datum.x.as_f64(),
            Self::Y => datum.y.as_f64(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// A chart property that is either shared by both axes or given per axis.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisProp<T> {
    /// One value used for both axes.
    Shared(T),
    /// Separate, optional values for each axis.
    PerAxis {
        /// Value for the x axis.
        x: Option<T>,
        /// Value for the y axis.
        y: Option<T>,
    },
}

impl<T> AxisProp<T> {
    /// Values for both axes.
    pub fn both(x: T, y: T) -> Self {
        Self::PerAxis {
            x: Some(x),
            y: Some(y),
        }
    }

    /// A value for the x axis only.
    pub fn x_only(x: T) -> Self {
        Self::PerAxis {
            x: Some(x),
            y: None,
        }
    }

    /// A value for the y axis only.
    pub fn y_only(y: T) -> Self {
        Self::PerAxis {
            x: None,
            y: Some(y),
        }
    }

    /// Returns the value that applies to `axis`.
    pub fn get(&self, axis: Axis) -> Option<&T> {
        match (self, axis) {
            (Self::Shared(v), _) => Some(v),
            (Self::PerAxis { x, .. }, Axis::X) => x.as_ref(),
            (Self::PerAxis { y, .. }, Axis::Y) => y.as_ref(),
        }
    }
}

/// Returns the base scale template for `axis`.
pub fn base_scale(axis: Axis, spec: &ScatterChartSpec) -> &dyn Scale {
    match spec.scale.as_ref().and_then(|s| s.get(axis)) {
        Some(scale) => &**scale,
        None => &DEFAULT_SCALE,
    }
}

/// Resolves the pixel range for `axis`.
///
/// An explicit range wins. Otherwise the range spans the chart inside its padding; the y range
/// runs bottom-to-top so larger values are drawn higher.
pub fn range_for(axis: Axis, spec: &ScatterChartSpec) -> (f64, f64) {
    if let Some(range) = spec.range.as_ref().and_then(|r| r.get(axis)) {
        return *range;
    }
    let p = spec.padding;
    match axis {
        Axis::X => (p.left, spec.width - p.right),
        Axis::Y => (spec.height - p.bottom, p.top),
    }
}

/// Resolves the data domain for `axis`.
pub fn domain_for(
    axis: Axis,
    spec: &ScatterChartSpec,
    data: &[Datum],
    warnings: &mut Warnings,
) -> (f64, f64) {
    if let Some(domain) = spec.domain.as_ref().and_then(|d| d.get(axis)) {
        return *domain;
    }
    if let Some(domain) = infer_domain(axis, data) {
        return domain;
    }
    intrinsic_domain(axis, base_scale(axis, spec), warnings)
}

/// Infers a `(min, max)` domain for one axis of `data`.
///
/// Non-numeric and non-finite values are ignored. Returns `None` if no finite values are
/// present. The data does not need to be sorted.
pub fn infer_domain(axis: Axis, data: &[Datum]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in data.iter().filter_map(|d| axis.value_of(d)) {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

fn intrinsic_domain(axis: Axis, scale: &dyn Scale, warnings: &mut Warnings) -> (f64, f64) {
    let domain = scale.domain();
    let resolved = match domain.as_slice() {
        [] => {
            warnings.push(Warning::DegenerateDomain {
                axis,
                reason: DegenerateReason::Empty,
            });
            (0.0, 0.0)
        }
        [v] => {
            warnings.push(Warning::DegenerateDomain {
                axis,
                reason: DegenerateReason::SinglePoint,
            });
            (*v, *v)
        }
        [first, .., last] => (*first, *last),
    };
    if scale.is_time() {
        warnings.push(Warning::DegenerateDomain {
            axis,
            reason: DegenerateReason::UnboundedTime,
        });
    }
    resolved
}

/// Builds the scale for `axis` from a copy of its base scale.
///
/// If the copy does not report exactly `range` after it was applied (identity-like scales
/// ignore ranges), the domain and range are both reset to `range` and a warning is recorded.
pub fn scale_for(
    axis: Axis,
    spec: &ScatterChartSpec,
    domain: (f64, f64),
    range: (f64, f64),
    warnings: &mut Warnings,
) -> Box<dyn Scale> {
    let mut scale = base_scale(axis, spec).clone_box();
    scale.set_domain(domain);
    scale.set_range(range);
    if !same_bits(scale.range().as_slice(), range) {
        warnings.push(Warning::IdentityScale { axis, range });
        scale.set_domain(range);
        scale.set_range(range);
    }
    scale
}

fn same_bits(actual: &[f64], expected: (f64, f64)) -> bool {
    matches!(actual, [a, b] if a.to_bits() == expected.0.to_bits() && b.to_bits() == expected.1.to_bits())
}
