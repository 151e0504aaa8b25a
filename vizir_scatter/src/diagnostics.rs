// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal render diagnostics.
//!
//! Degenerate configurations never abort a render. They are logged through the `log` facade
//! and collected so callers (and tests) can inspect them on the render output.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::resolve::Axis;

/// Why a resolved domain is degenerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegenerateReason {
    /// The scale reported no domain values at all.
    Empty,
    /// The scale reported a single domain value.
    SinglePoint,
    /// A time scale was used without explicit domain bounds.
    UnboundedTime,
}

/// A recoverable problem found while resolving a chart.
#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
    /// The domain for `axis` is degenerate and will collapse points.
    DegenerateDomain {
        /// The affected axis.
        axis: Axis,
        /// What makes the domain degenerate.
        reason: DegenerateReason,
    },
    /// The base scale for `axis` ignored the requested range; domain and range were both
    /// reset to `range`.
    IdentityScale {
        /// The affected axis.
        axis: Axis,
        /// The requested (and now applied) range.
        range: (f64, f64),
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDomain { axis, reason } => {
                let why = match reason {
                    DegenerateReason::Empty => "the scale domain is empty",
                    DegenerateReason::SinglePoint => "the scale domain has a single value",
                    DegenerateReason::UnboundedTime => "time scales need an explicit domain",
                };
                write!(f, "{axis} domain is not valid for plotting: {why}")
            }
            Self::IdentityScale { axis, range } => write!(
                f,
                "{axis} scale ignored range [{}, {}]; using it as both domain and range",
                range.0, range.1
            ),
        }
    }
}

/// Collects warnings for one render and forwards each to `log::warn!`.
#[derive(Clone, Debug, Default)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs and records a warning.
    pub fn push(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.0.push(warning);
    }

    /// Returns the recorded warnings.
    pub fn as_slice(&self) -> &[Warning] {
        &self.0
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the sink, returning the recorded warnings.
    pub fn into_vec(self) -> Vec<Warning> {
        self.0
    }
}
