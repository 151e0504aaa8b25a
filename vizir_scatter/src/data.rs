// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data normalization.
//!
//! A chart either carries explicit data, or describes it as x values plus a y function or
//! y values. Either way rendering works on one uniform list of [`Datum`] records.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::datum::Datum;
use crate::diagnostics::Warnings;
use crate::resolve::{Axis, domain_for};
use crate::scatter_chart::ScatterChartSpec;

/// The y side of generated data.
#[derive(Clone)]
pub enum YSource {
    /// Explicit y values, zipped with the x values.
    Values(Vec<f64>),
    /// A function evaluated at each x value.
    Func(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl YSource {
    /// Wraps a closure.
    pub fn func(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }
}

impl fmt::Debug for YSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(v) => f.debug_tuple("Values").field(v).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<Vec<f64>> for YSource {
    fn from(value: Vec<f64>) -> Self {
        Self::Values(value)
    }
}

/// Returns the data to plot for `spec`.
///
/// Explicit data is returned as is. Otherwise x values come from `spec.x`, or are sampled
/// evenly across the x domain, and are zipped with the y values (truncating to the shorter
/// side). No y source means no data.
pub fn normalize(spec: &ScatterChartSpec, warnings: &mut Warnings) -> Vec<Datum> {
    if let Some(data) = &spec.data {
        return data.clone();
    }
    let Some(y) = &spec.y else {
        return Vec::new();
    };

    let xs = match &spec.x {
        Some(xs) => xs.clone(),
        None => {
            let count = match y {
                YSource::Values(ys) => ys.len(),
                YSource::Func(_) => spec.samples,
            };
            let (min, max) = domain_for(Axis::X, spec, &[], warnings);
            sample_domain(min, max, count)
        }
    };

    match y {
        YSource::Values(ys) => xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Datum::new(x, y))
            .collect(),
        YSource::Func(f) => xs.iter().map(|&x| Datum::new(x, f(x))).collect(),
    }
}

/// Largest number of sampling steps used when generating x values.
pub const MAX_SAMPLES: usize = 100_000;

/// Returns `count` evenly spaced values starting at `min`, followed by `max`.
///
/// The step is `(max - min) / count`, so the maximum is the one extra value closing the
/// sequence. When the step is zero (an empty span, or no samples) only the endpoints remain.
/// `count` is capped at [`MAX_SAMPLES`].
pub fn sample_domain(min: f64, max: f64, count: usize) -> Vec<f64> {
    let count = count.min(MAX_SAMPLES);
    let span = max - min;
    let mut out = Vec::with_capacity(count + 1);
    if count > 0 && span != 0.0 && span.is_finite() {
        let step = span / count as f64;
        out.extend((0..count).map(|i| min + step * i as f64));
    } else {
        out.push(min);
    }
    if out.last() != Some(&max) {
        out.push(max);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::resolve::AxisProp;

    #[test]
    fn explicit_data_is_returned_verbatim() {
        let spec = ScatterChartSpec::new()
            .with_data(vec![Datum::new(3.0, 1.0), Datum::new(1.0, 2.0)])
            .with_y(YSource::func(|x| x * 100.0));
        let data = normalize(&spec, &mut Warnings::new());
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].x.as_f64(), Some(3.0));
        assert_eq!(data[1].y.as_f64(), Some(2.0));
    }

    #[test]
    fn samples_include_the_domain_max() {
        assert_eq!(sample_domain(0.0, 10.0, 4), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(sample_domain(0.0, 1.0, 3).last(), Some(&1.0));
        assert_eq!(sample_domain(2.0, 2.0, 5), vec![2.0]);
        assert_eq!(sample_domain(0.0, 4.0, 0), vec![0.0, 4.0]);
    }

    #[test]
    fn huge_sample_counts_are_capped() {
        let xs = sample_domain(0.0, 1.0, usize::MAX);
        assert_eq!(xs.len(), MAX_SAMPLES + 1);
        assert_eq!(xs.first(), Some(&0.0));
        assert_eq!(xs.last(), Some(&1.0));
    }

    #[test]
    fn y_function_is_applied_to_sampled_x() {
        let spec = ScatterChartSpec::new()
            .with_domain(AxisProp::x_only((0.0, 4.0)))
            .with_samples(4)
            .with_y(YSource::func(|x| x * x));
        let data = normalize(&spec, &mut Warnings::new());
        let ys: Vec<_> = data.iter().filter_map(|d| d.y.as_f64()).collect();
        assert_eq!(ys, vec![0.0, 1.0, 4.0, 9.0, 16.0]);
    }

    #[test]
    fn y_values_are_zipped_and_truncated() {
        let spec = ScatterChartSpec::new()
            .with_x(vec![1.0, 2.0, 3.0])
            .with_y(vec![10.0, 20.0]);
        let data = normalize(&spec, &mut Warnings::new());
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].x.as_f64(), Some(2.0));
        assert_eq!(data[1].y.as_f64(), Some(20.0));
    }

    #[test]
    fn y_values_without_x_sample_the_default_domain() {
        let spec = ScatterChartSpec::new().with_y(vec![5.0, 6.0, 7.0]);
        let data = normalize(&spec, &mut Warnings::new());
        let xs: Vec<_> = data.iter().filter_map(|d| d.x.as_f64()).collect();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], 0.0);
        assert!((xs[1] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn nothing_to_plot_is_empty_not_an_error() {
        let spec = ScatterChartSpec::new().with_x(vec![1.0, 2.0]);
        assert!(normalize(&spec, &mut Warnings::new()).is_empty());
        let spec = ScatterChartSpec::new().with_data(Vec::new());
        assert!(normalize(&spec, &mut Warnings::new()).is_empty());
    }
}
