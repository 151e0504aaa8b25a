// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point labels.
//!
//! A caller may supply a [`LabelComponent`] as a template. Every field it sets is kept as is;
//! the rest is filled in from the point: the label sits centered above the point, `padding`
//! pixels above its center.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;

use crate::datum::{Accessor, Datum};
use crate::scene::{TextAnchor, TextNode, VerticalAnchor};
use crate::style::{ResolvedStyle, StyleMap, TEXT_ANCHOR};
use crate::value::Value;

/// A label template, cloned for every labelled point.
#[derive(Clone, Debug, Default)]
pub struct LabelComponent {
    /// Fixed anchor x.
    pub x: Option<f64>,
    /// Fixed anchor y.
    pub y: Option<f64>,
    /// Vertical offset.
    pub dy: Option<f64>,
    /// Horizontal anchor.
    pub text_anchor: Option<TextAnchor>,
    /// Vertical anchor.
    pub vertical_anchor: Option<VerticalAnchor>,
    /// Style applied on top of the chart's label style.
    pub style: StyleMap,
    /// Fixed text, replacing the datum's label.
    pub text: Option<String>,
}

impl LabelComponent {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the anchor position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Sets the vertical offset.
    pub fn with_dy(mut self, dy: f64) -> Self {
        self.dy = Some(dy);
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.text_anchor = Some(anchor);
        self
    }

    /// Sets the vertical anchor.
    pub fn with_vertical_anchor(mut self, anchor: VerticalAnchor) -> Self {
        self.vertical_anchor = Some(anchor);
        self
    }

    /// Sets a style property.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<Accessor<Value>>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Replaces the label text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Returns `true` if `datum` gets a label.
pub fn has_label(datum: &Datum, show_labels: bool) -> bool {
    show_labels && datum.label.as_deref().is_some_and(|l| !l.is_empty())
}

/// Builds the label for a point drawn at `position`.
pub fn label_node(
    datum: &Datum,
    position: Point,
    style: &ResolvedStyle,
    component: Option<&LabelComponent>,
) -> TextNode {
    let mut style = style.clone();
    if let Some(c) = component {
        style.apply(&c.style, datum);
    }
    let padding = style.padding().unwrap_or(0.0);
    let text_anchor = component
        .and_then(|c| c.text_anchor)
        .or_else(|| {
            style
                .get(TEXT_ANCHOR)
                .and_then(Value::as_str)
                .and_then(TextAnchor::from_keyword)
        })
        .unwrap_or_default();
    let text = component
        .and_then(|c| c.text.clone())
        .or_else(|| datum.label.clone())
        .unwrap_or_default();

    TextNode {
        x: component.and_then(|c| c.x).unwrap_or(position.x),
        y: component.and_then(|c| c.y).unwrap_or(position.y - padding),
        dy: component.and_then(|c| c.dy),
        text,
        text_anchor,
        vertical_anchor: component
            .and_then(|c| c.vertical_anchor)
            .unwrap_or(VerticalAnchor::End),
        style,
        datum: datum.clone(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::style::{FILL, PADDING, Style, resolve_style};

    #[test]
    fn labels_need_text_and_show_labels() {
        assert!(!has_label(&Datum::new(0.0, 0.0), true));
        assert!(!has_label(&Datum::new(0.0, 0.0).with_label(""), true));
        assert!(!has_label(&Datum::new(0.0, 0.0).with_label("a"), false));
        assert!(has_label(&Datum::new(0.0, 0.0).with_label("a"), true));
    }

    #[test]
    fn default_label_sits_above_the_point() {
        let datum = Datum::new(0.0, 0.0).with_label("peak");
        let style = resolve_style(&datum, &Style::new(), 8.0, None);
        let node = label_node(&datum, Point::new(100.0, 200.0), &style.labels, None);
        assert_eq!(node.x, 100.0);
        assert_eq!(node.y, 198.0);
        assert_eq!(node.text, "peak");
        assert_eq!(node.text_anchor, TextAnchor::Middle);
        assert_eq!(node.vertical_anchor, VerticalAnchor::End);
        assert_eq!(node.dy, None);
    }

    #[test]
    fn component_overrides_placement_and_style() {
        let datum = Datum::new(0.0, 0.0).with_label("peak");
        let style = resolve_style(&datum, &Style::new(), 8.0, None);
        let component = LabelComponent::new()
            .with_position(5.0, 6.0)
            .with_dy(-2.0)
            .with_text_anchor(TextAnchor::Start)
            .with_style(FILL, "purple")
            .with_style(PADDING, 30.0);
        let node = label_node(
            &datum,
            Point::new(100.0, 200.0),
            &style.labels,
            Some(&component),
        );
        assert_eq!((node.x, node.y), (5.0, 6.0));
        assert_eq!(node.dy, Some(-2.0));
        assert_eq!(node.text_anchor, TextAnchor::Start);
        assert_eq!(node.style.fill(), Some(&Value::from("purple")));
        assert_eq!(node.style.padding(), Some(30.0));

        let padded = LabelComponent::new().with_style(PADDING, 30.0);
        let node = label_node(&datum, Point::new(100.0, 200.0), &style.labels, Some(&padded));
        assert_eq!(node.y, 170.0);
    }
}
