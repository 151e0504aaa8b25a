// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scatter chart: its configuration, its derived layout, and rendering.
//!
//! Rendering runs in one pass:
//! 1. validate the configuration,
//! 2. normalize the data,
//! 3. resolve the domain, range and scale of each axis,
//! 4. resolve and render every point,
//! 5. wrap the point units in a [`Canvas`] when the chart is standalone.
//!
//! Steps 2 and 3 only depend on the configuration, so [`ScatterChart`] keeps their result in a
//! [`CalculatedProps`] that is rebuilt whenever the configuration is replaced.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Point;

use crate::animation::AnimationConfig;
use crate::data::{MAX_SAMPLES, YSource, normalize};
use crate::datum::{Accessor, Datum};
use crate::diagnostics::{Warning, Warnings};
use crate::error::ScatterError;
use crate::label::LabelComponent;
use crate::layout::{Padding, Size};
use crate::point_mark::PointMarkSpec;
use crate::resolve::{Axis, AxisProp, domain_for, range_for, scale_for};
use crate::scale::Scale;
use crate::scene::{Canvas, Group, Rendered};
use crate::sizing::{BubbleScale, resolve_size, resolve_symbol};
use crate::style::{Style, resolve_style};
use crate::symbol::Symbol;

/// Configuration of a scatter chart.
///
/// Every field has a default; build on [`ScatterChartSpec::new`] with the `with_*` methods.
#[derive(Clone, Debug)]
pub struct ScatterChartSpec {
    /// Explicit data. Takes precedence over `x`/`y`.
    pub data: Option<Vec<Datum>>,
    /// X values for generated data.
    ///
    /// When absent, x values are sampled across the x domain.
    pub x: Option<Vec<f64>>,
    /// Y values or function for generated data.
    pub y: Option<YSource>,
    /// Number of sampling steps when x values are sampled, from 1 to [`MAX_SAMPLES`].
    ///
    /// Default: `50`.
    pub samples: usize,
    /// Explicit data domain.
    pub domain: Option<AxisProp<(f64, f64)>>,
    /// Explicit pixel range.
    pub range: Option<AxisProp<(f64, f64)>>,
    /// Base scales. Never mutated; each render configures its own copy.
    ///
    /// Default: linear on both axes.
    pub scale: Option<AxisProp<Arc<dyn Scale>>>,
    /// Point size, used when neither the datum nor bubble sizing provides one.
    ///
    /// Default: `3`.
    pub size: Accessor<f64>,
    /// Point symbol, used when the datum does not provide one.
    ///
    /// Default: [`Symbol::Circle`].
    pub symbol: Accessor<Symbol>,
    /// Datum key whose value sizes bubbles. Setting it makes this a bubble chart.
    pub bubble_property: Option<String>,
    /// Radius of the largest bubble.
    ///
    /// Default: the smallest padding side, at least 5.
    pub max_bubble_size: Option<f64>,
    /// Whether labelled data get labels.
    ///
    /// Default: `true`.
    pub show_labels: bool,
    /// Template for labels.
    pub label_component: Option<LabelComponent>,
    /// Canvas, point and label styles.
    pub style: Style,
    /// Padding inside the chart bounds.
    ///
    /// Default: `50` on every side.
    pub padding: Padding,
    /// Chart width in pixels.
    ///
    /// Default: `450`.
    pub width: f64,
    /// Chart height in pixels.
    ///
    /// Default: `300`.
    pub height: f64,
    /// Whether to wrap the output in its own canvas.
    ///
    /// Default: `true`.
    pub standalone: bool,
    /// Animation settings, consumed by [`AnimatedScatter`](crate::AnimatedScatter).
    pub animate: Option<AnimationConfig>,
}

impl Default for ScatterChartSpec {
    fn default() -> Self {
        let size = Size::default();
        Self {
            data: None,
            x: None,
            y: None,
            samples: 50,
            domain: None,
            range: None,
            scale: None,
            size: Accessor::Const(3.0),
            symbol: Accessor::Const(Symbol::Circle),
            bubble_property: None,
            max_bubble_size: None,
            show_labels: true,
            label_component: None,
            style: Style::default(),
            padding: Padding::default(),
            width: size.width,
            height: size.height,
            standalone: true,
            animate: None,
        }
    }
}

impl ScatterChartSpec {
    /// Creates a chart with default settings and no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets explicit data.
    pub fn with_data(mut self, data: Vec<Datum>) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the x values of generated data.
    pub fn with_x(mut self, x: Vec<f64>) -> Self {
        self.x = Some(x);
        self
    }

    /// Sets the y values or y function of generated data.
    pub fn with_y(mut self, y: impl Into<YSource>) -> Self {
        self.y = Some(y.into());
        self
    }

    /// Sets the number of sampling steps.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets an explicit domain.
    pub fn with_domain(mut self, domain: AxisProp<(f64, f64)>) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets an explicit pixel range.
    pub fn with_range(mut self, range: AxisProp<(f64, f64)>) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the base scales.
    pub fn with_scale(mut self, scale: AxisProp<Arc<dyn Scale>>) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the default point size.
    pub fn with_size(mut self, size: impl Into<Accessor<f64>>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the default point symbol.
    pub fn with_symbol(mut self, symbol: impl Into<Accessor<Symbol>>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Turns the chart into a bubble chart sized by `key`.
    pub fn with_bubble_property(mut self, key: impl Into<String>) -> Self {
        self.bubble_property = Some(key.into());
        self
    }

    /// Sets the radius of the largest bubble.
    pub fn with_max_bubble_size(mut self, radius: f64) -> Self {
        self.max_bubble_size = Some(radius);
        self
    }

    /// Enables or disables labels.
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Sets the label template.
    pub fn with_label_component(mut self, component: LabelComponent) -> Self {
        self.label_component = Some(component);
        self
    }

    /// Sets the styles.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the padding, either uniform (`f64`) or per side ([`Padding`]).
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the chart width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the chart height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets width and height together.
    pub fn with_dimensions(self, size: Size) -> Self {
        self.with_width(size.width).with_height(size.height)
    }

    /// Chooses between a standalone canvas and an embeddable group.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Sets the animation settings.
    pub fn with_animate(mut self, animate: AnimationConfig) -> Self {
        self.animate = Some(animate);
        self
    }

    /// The chart dimensions.
    pub fn dimensions(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ScatterError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScatterError::InvalidDimension { name, value });
            }
        }
        if let Some(side) = self
            .padding
            .sides()
            .into_iter()
            .find(|p| !(p.is_finite() && *p >= 0.0))
        {
            return Err(ScatterError::InvalidPadding(side));
        }
        if let Some(&size) = self.size.as_const()
            && !size.is_finite()
        {
            return Err(ScatterError::InvalidSize(size));
        }
        if let Some(radius) = self.max_bubble_size
            && !(radius.is_finite() && radius > 0.0)
        {
            return Err(ScatterError::InvalidMaxBubbleSize(radius));
        }
        let samples_x = self.data.is_none()
            && self.x.is_none()
            && matches!(self.y, Some(YSource::Func(_)));
        if samples_x && !(1..=MAX_SAMPLES).contains(&self.samples) {
            return Err(ScatterError::InvalidSamples);
        }
        Ok(())
    }

    /// Renders the chart.
    pub fn render(&self) -> Result<RenderOutput, ScatterError> {
        let calculated = CalculatedProps::new(self)?;
        Ok(render_points(self, &calculated))
    }
}

/// A value for each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPair<T> {
    /// The x axis value.
    pub x: T,
    /// The y axis value.
    pub y: T,
}

impl<T> AxisPair<T> {
    fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        let x = f(Axis::X);
        let y = f(Axis::Y);
        Self { x, y }
    }

    /// Returns the value for `axis`.
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Everything derived from a [`ScatterChartSpec`] before points are rendered.
#[derive(Clone, Debug)]
pub struct CalculatedProps {
    /// Normalized data.
    pub data: Vec<Datum>,
    /// Resolved domains.
    pub domain: AxisPair<(f64, f64)>,
    /// Resolved pixel ranges.
    pub range: AxisPair<(f64, f64)>,
    /// Configured scales, owned by this computation.
    pub scale: AxisPair<Box<dyn Scale>>,
    /// Bubble sizing, for bubble charts.
    pub bubble: Option<BubbleScale>,
    /// The chart style.
    pub style: Style,
    /// The chart padding.
    pub padding: Padding,
    /// Warnings raised while resolving.
    pub warnings: Vec<Warning>,
}

impl CalculatedProps {
    /// Validates `spec` and derives its data, domains, ranges and scales.
    pub fn new(spec: &ScatterChartSpec) -> Result<Self, ScatterError> {
        spec.validate()?;
        let mut warnings = Warnings::new();
        let data = normalize(spec, &mut warnings);
        let domain = AxisPair::from_fn(|axis| domain_for(axis, spec, &data, &mut warnings));
        let range = AxisPair::from_fn(|axis| range_for(axis, spec));
        let scale = AxisPair::from_fn(|axis| {
            scale_for(
                axis,
                spec,
                *domain.get(axis),
                *range.get(axis),
                &mut warnings,
            )
        });
        let bubble = BubbleScale::new(spec, &data);
        log::debug!(
            "scatter layout: {} points, x domain {:?}, y domain {:?}",
            data.len(),
            domain.x,
            domain.y
        );
        Ok(Self {
            data,
            domain,
            range,
            scale,
            bubble,
            style: spec.style.clone(),
            padding: spec.padding,
            warnings: warnings.into_vec(),
        })
    }

    /// Maps `datum` into pixel space, or `None` if either coordinate is not numeric.
    pub fn position(&self, datum: &Datum) -> Option<Point> {
        let x = datum.x.as_f64()?;
        let y = datum.y.as_f64()?;
        Some(Point::new(self.scale.x.map(x), self.scale.y.map(y)))
    }
}

/// The result of a render.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// The output tree.
    pub tree: Rendered,
    /// Warnings raised while rendering. Each was also logged.
    pub warnings: Vec<Warning>,
}

fn render_points(spec: &ScatterChartSpec, calculated: &CalculatedProps) -> RenderOutput {
    let mut content = Group::new();
    for (index, datum) in calculated.data.iter().enumerate() {
        let Some(position) = calculated.position(datum) else {
            log::debug!("skipping point {index}: non-numeric coordinates");
            continue;
        };
        let size = resolve_size(datum, spec, calculated.bubble.as_ref()).eval(datum);
        let mark = PointMarkSpec {
            index,
            datum,
            position,
            symbol: resolve_symbol(datum, spec).eval(datum),
            size,
            style: resolve_style(
                datum,
                &calculated.style,
                size,
                spec.bubble_property.as_deref(),
            ),
            show_labels: spec.show_labels,
            label_component: spec.label_component.as_ref(),
        };
        content.push(mark.mark());
    }
    log::trace!("rendered {} point units", content.children.len());

    let tree = if spec.standalone {
        Rendered::Canvas(Canvas {
            width: spec.width,
            height: spec.height,
            style: calculated.style.parent.clone(),
            content,
        })
    } else {
        Rendered::Group(content)
    };
    RenderOutput {
        tree,
        warnings: calculated.warnings.clone(),
    }
}

/// A scatter chart that keeps its derived layout in sync with its configuration.
#[derive(Clone, Debug)]
pub struct ScatterChart {
    spec: ScatterChartSpec,
    calculated: CalculatedProps,
}

impl ScatterChart {
    /// Creates a chart, deriving its layout.
    pub fn new(spec: ScatterChartSpec) -> Result<Self, ScatterError> {
        let calculated = CalculatedProps::new(&spec)?;
        Ok(Self { spec, calculated })
    }

    /// The current configuration.
    pub fn spec(&self) -> &ScatterChartSpec {
        &self.spec
    }

    /// The layout derived from the current configuration.
    pub fn calculated(&self) -> &CalculatedProps {
        &self.calculated
    }

    /// Replaces the configuration and recomputes the derived layout.
    ///
    /// On error the chart keeps its previous configuration.
    pub fn set_spec(&mut self, spec: ScatterChartSpec) -> Result<(), ScatterError> {
        self.calculated = CalculatedProps::new(&spec)?;
        self.spec = spec;
        Ok(())
    }

    /// Renders the chart with the cached layout.
    pub fn render(&self) -> RenderOutput {
        render_points(&self.spec, &self.calculated)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn defaults() {
        let spec = ScatterChartSpec::new();
        assert_eq!(spec.dimensions(), Size::new(450.0, 300.0));
        assert_eq!(spec.padding, Padding::uniform(50.0));
        assert_eq!(spec.size.as_const(), Some(&3.0));
        assert_eq!(spec.symbol.as_const(), Some(&Symbol::Circle));
        assert_eq!(spec.samples, 50);
        assert!(spec.show_labels);
        assert!(spec.standalone);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        assert_eq!(
            ScatterChartSpec::new().with_width(0.0).validate(),
            Err(ScatterError::InvalidDimension {
                name: "width",
                value: 0.0
            })
        );
        assert!(matches!(
            ScatterChartSpec::new().with_height(f64::NAN).validate(),
            Err(ScatterError::InvalidDimension { name: "height", .. })
        ));
        assert_eq!(
            ScatterChartSpec::new()
                .with_padding(Padding::new(1.0, -2.0, 1.0, 1.0))
                .validate(),
            Err(ScatterError::InvalidPadding(-2.0))
        );
        assert_eq!(
            ScatterChartSpec::new().with_size(f64::INFINITY).validate(),
            Err(ScatterError::InvalidSize(f64::INFINITY))
        );
        assert_eq!(
            ScatterChartSpec::new().with_max_bubble_size(0.0).validate(),
            Err(ScatterError::InvalidMaxBubbleSize(0.0))
        );
        assert_eq!(
            ScatterChartSpec::new()
                .with_y(YSource::func(|x| x))
                .with_samples(0)
                .validate(),
            Err(ScatterError::InvalidSamples)
        );
        assert_eq!(
            ScatterChartSpec::new()
                .with_y(YSource::func(|x| x))
                .with_samples(usize::MAX)
                .validate(),
            Err(ScatterError::InvalidSamples)
        );
        assert!(ScatterChartSpec::new().with_samples(0).validate().is_ok());
    }

    #[test]
    fn render_fails_before_any_work_on_bad_config() {
        let spec = ScatterChartSpec::new()
            .with_data(vec![Datum::new(0.0, 0.0)])
            .with_width(-1.0);
        assert!(spec.render().is_err());
        assert!(ScatterChart::new(spec).is_err());
    }

    #[test]
    fn non_numeric_points_are_skipped_but_keep_their_index() {
        let spec = ScatterChartSpec::new().with_data(vec![
            Datum::new("a", 1.0),
            Datum::new(1.0, 1.0),
            Datum::new(2.0, 2.0),
        ]);
        let out = spec.render().expect("valid");
        let keys: Vec<_> = out
            .tree
            .points()
            .filter_map(|p| p.key.as_deref())
            .collect();
        assert_eq!(keys, vec!["point-1", "point-2"]);
    }

    #[test]
    fn embedded_charts_are_plain_groups() {
        let spec = ScatterChartSpec::new()
            .with_data(vec![Datum::new(0.0, 0.0)])
            .with_standalone(false);
        let out = spec.render().expect("valid");
        assert!(matches!(out.tree, Rendered::Group(_)));
        assert_eq!(out.tree.points().count(), 1);
    }
}
