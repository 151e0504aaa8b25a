// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-point symbol and size resolution, including bubble sizing.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::datum::{Accessor, Datum};
use crate::scatter_chart::ScatterChartSpec;
use crate::symbol::Symbol;

/// Smallest radius a bubble may shrink to, used when no padding is available.
const MIN_DEFAULT_BUBBLE_RADIUS: f64 = 5.0;

/// Smallest size any point is drawn with.
const MIN_SIZE: f64 = 1.0;

/// Bubble sizing for one render: the z extent of the data and the largest radius.
///
/// Bubble *area* varies linearly with z, from zero at the smallest z to
/// `PI * max_radius^2` at the largest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleScale {
    /// `(min, max)` of the bubble property across the data.
    pub z_domain: (f64, f64),
    /// Radius of the bubble with the largest z.
    pub max_radius: f64,
}

impl BubbleScale {
    /// Builds the bubble scale for `spec`, or `None` if it has no bubble property.
    ///
    /// The z extent covers every datum with a finite numeric value at the key.
    pub fn new(spec: &ScatterChartSpec, data: &[Datum]) -> Option<Self> {
        let key = spec.bubble_property.as_deref()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for z in data.iter().filter_map(|d| numeric_value(d, key)) {
            min = min.min(z);
            max = max.max(z);
        }
        let z_domain = if min <= max { (min, max) } else { (0.0, 0.0) };
        Some(Self {
            z_domain,
            max_radius: max_bubble_radius(spec),
        })
    }

    /// Returns the radius for bubble property value `z`, at least 1.
    ///
    /// A zero-width z extent gives every bubble the maximum radius.
    pub fn radius(&self, z: f64) -> f64 {
        let (z_min, z_max) = self.z_domain;
        let t = if z_max > z_min {
            (z - z_min) / (z_max - z_min)
        } else {
            1.0
        };
        let max_area = PI * self.max_radius * self.max_radius;
        let area = t * max_area;
        let radius = (area / PI).sqrt();
        radius.max(MIN_SIZE)
    }
}

/// Returns the radius of the largest bubble.
///
/// This is `max_bubble_size` when set, otherwise the smallest padding side (at least 5).
pub fn max_bubble_radius(spec: &ScatterChartSpec) -> f64 {
    spec.max_bubble_size
        .unwrap_or_else(|| spec.padding.min_side().max(MIN_DEFAULT_BUBBLE_RADIUS))
}

/// Returns the finite numeric value of `key` on `datum`, zero included.
fn numeric_value(datum: &Datum, key: &str) -> Option<f64> {
    datum
        .get(key)
        .and_then(|v| v.as_f64())
        .filter(|z| z.is_finite())
}

/// Returns the bubble property of `datum` if it is numeric and truthy.
///
/// A falsy value (such as `0`) still counts toward the z extent, but its point is not drawn as
/// a bubble.
fn bubble_value(datum: &Datum, key: &str) -> Option<f64> {
    datum
        .get(key)
        .filter(|v| v.is_truthy())
        .and_then(|_| numeric_value(datum, key))
}

/// Resolves the symbol for `datum`.
///
/// Bubble charts always draw circles. Otherwise the datum's symbol wins over the chart's.
pub fn resolve_symbol(datum: &Datum, spec: &ScatterChartSpec) -> Accessor<Symbol> {
    if spec.bubble_property.is_some() {
        return Accessor::Const(Symbol::Circle);
    }
    datum.symbol.clone().unwrap_or_else(|| spec.symbol.clone())
}

/// Resolves the size for `datum`.
///
/// In order: the datum's own size, the bubble radius (when `bubble` is set and the datum has a
/// truthy value for the bubble property), the chart size. Constant sizes are clamped to at
/// least 1; functions are passed through and evaluated by the point renderer.
pub fn resolve_size(
    datum: &Datum,
    spec: &ScatterChartSpec,
    bubble: Option<&BubbleScale>,
) -> Accessor<f64> {
    if let Some(size) = &datum.size {
        return clamp_size(size);
    }
    if let (Some(bubble), Some(key)) = (bubble, spec.bubble_property.as_deref())
        && let Some(z) = bubble_value(datum, key)
    {
        return Accessor::Const(bubble.radius(z));
    }
    clamp_size(&spec.size)
}

/// Computes the bubble radius of `datum` against the whole data set.
///
/// Returns `None` if `spec` has no bubble property or `datum` has no usable value for it.
/// Rendering builds one [`BubbleScale`] per pass instead of calling this per point.
pub fn bubble_size(datum: &Datum, spec: &ScatterChartSpec, data: &[Datum]) -> Option<f64> {
    let key = spec.bubble_property.as_deref()?;
    let z = bubble_value(datum, key)?;
    BubbleScale::new(spec, data).map(|b| b.radius(z))
}

fn clamp_size(size: &Accessor<f64>) -> Accessor<f64> {
    match size {
        Accessor::Const(v) => Accessor::Const(v.max(MIN_SIZE)),
        Accessor::Func(_) => size.clone(),
    }
}
