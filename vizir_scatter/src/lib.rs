// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter and bubble plots.
//!
//! This crate turns a list of data records into a tree of positioned glyphs:
//! - **Scales** map each axis from data space into pixel space.
//! - **Symbols** give every point an SVG outline (circle, square, diamond, triangles, plus,
//!   star).
//! - **Styles** are layered from built-in defaults, the chart and the datum itself, and may be
//!   computed per datum.
//! - **Bubble charts** size each circle so that its area tracks a data property.
//!
//! The output is a [`Rendered`] tree that a host can draw directly or serialize with
//! [`to_svg_string`]. Text shaping and layout are out of scope; labels store unshaped strings.
//!
//! ```
//! use vizir_scatter::{Datum, ScatterChartSpec};
//!
//! let chart = ScatterChartSpec::new()
//!     .with_width(500.0)
//!     .with_height(500.0)
//!     .with_data(vec![Datum::new(0.0, 0.0), Datum::new(10.0, 10.0).with_label("top")]);
//! let out = chart.render().unwrap();
//! assert_eq!(out.tree.points().count(), 2);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod animation;
mod data;
mod datum;
mod diagnostics;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod label;
mod layout;
mod path;
mod point_mark;
mod resolve;
mod scale;
mod scatter_chart;
mod scene;
mod sizing;
mod style;
mod svg;
mod symbol;
mod value;

pub use animation::{AnimatedScatter, AnimationConfig, Immediate, Interpolator};
pub use data::{MAX_SAMPLES, YSource, normalize, sample_domain};
pub use datum::{Accessor, Datum};
pub use diagnostics::{DegenerateReason, Warning, Warnings};
pub use error::ScatterError;
pub use label::{LabelComponent, has_label, label_node};
pub use layout::{Padding, Size};
pub use path::{Outline, Vertices};
pub use point_mark::PointMarkSpec;
pub use resolve::{Axis, AxisProp, base_scale, domain_for, infer_domain, range_for, scale_for};
pub use scale::{Extent, Scale, ScaleIdentity, ScaleLinear, ScaleLog, ScaleTime};
pub use scatter_chart::{AxisPair, CalculatedProps, RenderOutput, ScatterChart, ScatterChartSpec};
pub use scene::{
    Canvas, Group, Node, PathNode, Rendered, ShapeRendering, TextAnchor, TextNode, VerticalAnchor,
};
pub use sizing::{BubbleScale, bubble_size, max_bubble_radius, resolve_size, resolve_symbol};
pub use style::{
    DEFAULT_FILL, FILL, FONT_FAMILY, FONT_SIZE, OPACITY, PADDING, PointStyle, RESERVED_KEYS,
    ResolvedStyle, STROKE, STROKE_WIDTH, Style, StyleMap, TEXT_ANCHOR, ValueMap,
    default_data_style, default_label_style, is_reserved, resolve_data_style,
    resolve_label_style, resolve_style,
};
pub use svg::to_svg_string;
pub use symbol::Symbol;
pub use value::Value;
