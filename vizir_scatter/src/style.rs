// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered point and label styles.
//!
//! Style maps are flat `property name -> value` maps whose entries may be functions of the
//! datum. Layers are merged lowest-precedence first and then evaluated once against the datum;
//! a [`ResolvedStyle`] never holds a function.
//!
//! Point body (`data`) precedence, lowest first:
//! 1. built-in defaults,
//! 2. the chart's `style.data`,
//! 3. the datum's own fields, minus [`RESERVED_KEYS`] and the bubble property.
//!
//! Label precedence, lowest first:
//! 1. `padding` of a quarter of the point size,
//! 2. `opacity` and `fill` of the resolved point body,
//! 3. built-in label defaults,
//! 4. the chart's `style.labels`,
//! 5. the label component's own style.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;

use crate::datum::{Accessor, Datum};
use crate::value::Value;

/// A style layer: property name to constant or datum function.
pub type StyleMap = BTreeMap<String, Accessor<Value>>;

/// A map of already evaluated properties.
pub type ValueMap = BTreeMap<String, Value>;

/// Datum keys that are never treated as style properties.
pub const RESERVED_KEYS: [&str; 7] = ["x", "y", "z", "size", "symbol", "name", "label"];

/// Fill paint.
pub const FILL: &str = "fill";
/// Opacity in `[0, 1]`.
pub const OPACITY: &str = "opacity";
/// Stroke paint.
pub const STROKE: &str = "stroke";
/// Stroke width.
pub const STROKE_WIDTH: &str = "strokeWidth";
/// Distance between a point and its label.
pub const PADDING: &str = "padding";
/// Horizontal label anchor (`start`, `middle`, `end`).
pub const TEXT_ANCHOR: &str = "textAnchor";
/// Label font size.
pub const FONT_SIZE: &str = "fontSize";
/// Label font family.
pub const FONT_FAMILY: &str = "fontFamily";

/// Default point fill.
pub const DEFAULT_FILL: &str = "#756f6a";

/// Chart style: the outer container, the point bodies, and the labels.
#[derive(Clone, Debug, Default)]
pub struct Style {
    /// Style for the outer canvas (standalone charts only).
    pub parent: ValueMap,
    /// Style for the point bodies.
    pub data: StyleMap,
    /// Style for the point labels.
    pub labels: StyleMap,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a canvas style property.
    pub fn with_parent(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parent.insert(key.into(), value.into());
        self
    }

    /// Sets a point style property.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Accessor<Value>>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Sets a point style property computed from each datum.
    pub fn with_data_fn(
        self,
        key: impl Into<String>,
        f: impl Fn(&Datum) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.with_data(key, Accessor::func(f))
    }

    /// Sets a label style property.
    pub fn with_labels(
        mut self,
        key: impl Into<String>,
        value: impl Into<Accessor<Value>>,
    ) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}

impl From<f64> for Accessor<Value> {
    fn from(value: f64) -> Self {
        Self::Const(value.into())
    }
}

impl From<&str> for Accessor<Value> {
    fn from(value: &str) -> Self {
        Self::Const(value.into())
    }
}

impl From<peniko::Color> for Accessor<Value> {
    fn from(value: peniko::Color) -> Self {
        Self::Const(value.into())
    }
}

/// Returns `true` if `key` may not be read from a datum as a style property.
pub fn is_reserved(key: &str, bubble_property: Option<&str>) -> bool {
    RESERVED_KEYS.contains(&key) || bubble_property == Some(key)
}

/// Built-in point body style.
pub fn default_data_style() -> StyleMap {
    let mut m = StyleMap::new();
    m.insert(FILL.into(), DEFAULT_FILL.into());
    m.insert(OPACITY.into(), 1.0.into());
    m.insert(STROKE.into(), "transparent".into());
    m.insert(STROKE_WIDTH.into(), 0.0.into());
    m
}

/// Built-in label style.
///
/// `fill`, `opacity` and `padding` are absent; labels take them from their point.
pub fn default_label_style() -> StyleMap {
    let mut m = StyleMap::new();
    m.insert(FONT_FAMILY.into(), "Helvetica".into());
    m.insert(FONT_SIZE.into(), 10.0.into());
    m.insert(TEXT_ANCHOR.into(), "middle".into());
    m.insert(STROKE.into(), "transparent".into());
    m
}

/// A fully evaluated style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle(ValueMap);

impl ResolvedStyle {
    /// Evaluates every entry of `layer` against `datum`, overriding existing properties.
    pub fn apply(&mut self, layer: &StyleMap, datum: &Datum) {
        for (key, value) in layer {
            self.0.insert(key.clone(), value.eval(datum));
        }
    }

    /// Sets a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns a property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a numeric property.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// The fill paint.
    pub fn fill(&self) -> Option<&Value> {
        self.get(FILL)
    }

    /// The opacity.
    pub fn opacity(&self) -> Option<f64> {
        self.number(OPACITY)
    }

    /// The stroke paint.
    pub fn stroke(&self) -> Option<&Value> {
        self.get(STROKE)
    }

    /// The stroke width.
    pub fn stroke_width(&self) -> Option<f64> {
        self.number(STROKE_WIDTH)
    }

    /// The label padding.
    pub fn padding(&self) -> Option<f64> {
        self.number(PADDING)
    }

    /// Iterates over the properties in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

/// The resolved styles for one point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStyle {
    /// Style of the point body.
    pub data: ResolvedStyle,
    /// Style of the point label.
    pub labels: ResolvedStyle,
}

/// Resolves the point body style for `datum`.
pub fn resolve_data_style(
    datum: &Datum,
    style: &Style,
    bubble_property: Option<&str>,
) -> ResolvedStyle {
    let mut out = ResolvedStyle::default();
    out.apply(&default_data_style(), datum);
    out.apply(&style.data, datum);
    for (key, value) in &datum.fields {
        if !is_reserved(key, bubble_property) {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

/// Resolves the label style for `datum`, given its resolved body style and point size.
pub fn resolve_label_style(
    datum: &Datum,
    style: &Style,
    size: f64,
    data_style: &ResolvedStyle,
) -> ResolvedStyle {
    let mut out = ResolvedStyle::default();
    out.insert(PADDING, size * 0.25);
    for key in [OPACITY, FILL] {
        if let Some(v) = data_style.get(key) {
            out.insert(key, v.clone());
        }
    }
    out.apply(&default_label_style(), datum);
    out.apply(&style.labels, datum);
    out
}

/// Resolves both the body and label styles for `datum`.
pub fn resolve_style(
    datum: &Datum,
    style: &Style,
    size: f64,
    bubble_property: Option<&str>,
) -> PointStyle {
    let data = resolve_data_style(datum, style, bubble_property);
    let labels = resolve_label_style(datum, style, size, &data);
    PointStyle { data, labels }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn datum_fill_beats_chart_and_default_fill() {
        let style = Style::new().with_data(FILL, "blue");
        let datum = Datum::new(1.0, 1.0).with_field(FILL, "tomato");
        let resolved = resolve_data_style(&datum, &style, None);
        assert_eq!(resolved.fill(), Some(&Value::from("tomato")));

        let plain = resolve_data_style(&Datum::new(1.0, 1.0), &style, None);
        assert_eq!(plain.fill(), Some(&Value::from("blue")));

        let defaults = resolve_data_style(&Datum::new(1.0, 1.0), &Style::new(), None);
        assert_eq!(defaults.fill(), Some(&Value::from(DEFAULT_FILL)));
        assert_eq!(defaults.opacity(), Some(1.0));
    }

    #[test]
    fn reserved_and_bubble_keys_never_leak_into_style() {
        let datum = Datum::new(1.0, 2.0)
            .with_field("name", "not a style")
            .with_field("size", 12.0)
            .with_field("amount", 40.0)
            .with_field("cursor", "pointer");
        let resolved = resolve_data_style(&datum, &Style::new(), Some("amount"));
        for key in RESERVED_KEYS.iter().chain(&["amount"]) {
            assert!(resolved.get(key).is_none(), "{key} leaked into style");
        }
        assert_eq!(resolved.get("cursor"), Some(&Value::from("pointer")));
    }

    #[test]
    fn function_styles_are_evaluated_per_datum() {
        let style = Style::new().with_data_fn(FILL, |d| {
            if d.y.as_f64().unwrap_or(0.0) > 0.0 {
                "red".into()
            } else {
                "blue".into()
            }
        });
        let up = resolve_data_style(&Datum::new(0.0, 3.0), &style, None);
        let down = resolve_data_style(&Datum::new(0.0, -3.0), &style, None);
        assert_eq!(up.fill(), Some(&Value::from("red")));
        assert_eq!(down.fill(), Some(&Value::from("blue")));
    }

    #[test]
    fn labels_inherit_point_fill_and_padding_defaults_to_quarter_size() {
        let datum = Datum::new(0.0, 0.0)
            .with_field(FILL, "gold")
            .with_field(OPACITY, 0.5);
        let point = resolve_style(&datum, &Style::new(), 8.0, None);
        assert_eq!(point.labels.fill(), Some(&Value::from("gold")));
        assert_eq!(point.labels.opacity(), Some(0.5));
        assert_eq!(point.labels.padding(), Some(2.0));
        assert_eq!(
            point.labels.get(TEXT_ANCHOR),
            Some(&Value::from("middle"))
        );
    }

    #[test]
    fn chart_label_style_overrides_inherited_values() {
        let style = Style::new()
            .with_labels(FILL, "black")
            .with_labels(PADDING, 10.0);
        let datum = Datum::new(0.0, 0.0).with_field(FILL, "gold");
        let point = resolve_style(&datum, &style, 8.0, None);
        assert_eq!(point.labels.fill(), Some(&Value::from("black")));
        assert_eq!(point.labels.padding(), Some(10.0));
        assert_eq!(point.data.fill(), Some(&Value::from("gold")));
    }
}
