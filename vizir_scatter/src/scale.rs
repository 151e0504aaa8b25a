// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales.
//!
//! A chart holds its base scales as shared, immutable templates (`Arc<dyn Scale>`). Resolving
//! an axis always starts from [`Scale::clone_box`] and configures the copy, so one template can
//! back many charts and many renders without its domain or range ever changing.

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use smallvec::{SmallVec, smallvec};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Domain or range values reported by a scale.
///
/// Well-formed scales report exactly two values; fewer means the scale is degenerate.
pub type Extent = SmallVec<[f64; 2]>;

/// A mapping from data space (domain) into pixel space (range).
pub trait Scale: fmt::Debug + Send + Sync {
    /// Returns an independent copy of this scale.
    fn clone_box(&self) -> Box<dyn Scale>;

    /// Returns the current domain.
    fn domain(&self) -> Extent;

    /// Sets the domain.
    fn set_domain(&mut self, domain: (f64, f64));

    /// Returns the current range.
    fn range(&self) -> Extent;

    /// Sets the range.
    fn set_range(&mut self, range: (f64, f64));

    /// Maps a value from domain space into range space.
    fn map(&self, value: f64) -> f64;

    /// Returns `true` for scales over timestamps.
    fn is_time(&self) -> bool {
        false
    }
}

impl Clone for Box<dyn Scale> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
}

impl Default for ScaleLinear {
    /// The unit scale: domain and range both `[0, 1]`.
    fn default() -> Self {
        Self::new((0.0, 1.0), (0.0, 1.0))
    }
}

impl Scale for ScaleLinear {
    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(*self)
    }

    fn domain(&self) -> Extent {
        smallvec![self.domain.0, self.domain.1]
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    fn range(&self) -> Extent {
        smallvec![self.range.0, self.range.1]
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A log-scale mapping from a positive domain to a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new log scale (base 10).
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }
}

impl Default for ScaleLog {
    fn default() -> Self {
        Self::new((1.0, 10.0), (0.0, 1.0))
    }
}

impl Scale for ScaleLog {
    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(*self)
    }

    fn domain(&self) -> Extent {
        smallvec![self.domain.0, self.domain.1]
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    fn range(&self) -> Extent {
        smallvec![self.range.0, self.range.1]
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A time scale (a linear scale over timestamps in seconds).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }
}

impl Scale for ScaleTime {
    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(*self)
    }

    fn domain(&self) -> Extent {
        self.inner.domain()
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.inner.set_domain(domain);
    }

    fn range(&self) -> Extent {
        self.inner.range()
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.inner.set_range(range);
    }

    fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    fn is_time(&self) -> bool {
        true
    }
}

/// The identity scale: every value maps to itself.
///
/// Its range is always its domain, so it ignores [`Scale::set_range`]. The axis resolver
/// detects this and falls back to using the requested range as the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleIdentity {
    domain: (f64, f64),
}

impl ScaleIdentity {
    /// Creates an identity scale over `domain`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }
}

impl Default for ScaleIdentity {
    fn default() -> Self {
        Self::new((0.0, 1.0))
    }
}

impl Scale for ScaleIdentity {
    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(*self)
    }

    fn domain(&self) -> Extent {
        smallvec![self.domain.0, self.domain.1]
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    fn range(&self) -> Extent {
        self.domain()
    }

    fn set_range(&mut self, _range: (f64, f64)) {}

    fn map(&self, x: f64) -> f64 {
        x
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_and_degenerate_domain() {
        let s = ScaleLinear::new((0.0, 10.0), (50.0, 450.0));
        assert_eq!(s.map(0.0), 50.0);
        assert_eq!(s.map(10.0), 450.0);
        assert_eq!(s.map(5.0), 250.0);
        let flat = ScaleLinear::new((3.0, 3.0), (50.0, 450.0));
        assert_eq!(flat.map(3.0), 50.0);
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
        assert!((s.map(10.0) - 5.0).abs() < 1e-9);
        assert_eq!(s.map(-1.0), 0.0);
    }

    #[test]
    fn clone_box_is_independent() {
        let base = ScaleLinear::default();
        let mut copy = base.clone_box();
        copy.set_domain((0.0, 10.0));
        copy.set_range((0.0, 100.0));
        assert_eq!(base.domain().as_slice(), &[0.0, 1.0]);
        assert_eq!(copy.map(5.0), 50.0);
    }

    #[test]
    fn identity_scale_ignores_range() {
        let mut s = ScaleIdentity::default();
        s.set_range((10.0, 20.0));
        assert_eq!(s.range().as_slice(), &[0.0, 1.0]);
        assert_eq!(s.map(7.0), 7.0);
    }

    #[test]
    fn time_scale_is_flagged() {
        let s = ScaleTime::new((0.0, 60.0), (0.0, 600.0));
        assert!(s.is_time());
        assert_eq!(s.map(30.0), 300.0);
        assert!(!ScaleLinear::default().is_time());
    }
}
