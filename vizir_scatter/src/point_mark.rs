// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

extern crate alloc;

use alloc::format;

use kurbo::Point;

use crate::datum::Datum;
use crate::label::{LabelComponent, has_label, label_node};
use crate::scene::{Group, PathNode, ShapeRendering};
use crate::style::PointStyle;
use crate::symbol::Symbol;

/// One fully resolved point, ready to be turned into a point unit.
#[derive(Clone, Debug)]
pub struct PointMarkSpec<'a> {
    /// Index of the datum; keys the point unit.
    pub index: usize,
    /// The datum.
    pub datum: &'a Datum,
    /// Center in pixel space.
    pub position: Point,
    /// Glyph shape.
    pub symbol: Symbol,
    /// Glyph size.
    pub size: f64,
    /// Resolved body and label styles.
    pub style: PointStyle,
    /// Whether labels are drawn at all.
    pub show_labels: bool,
    /// Optional label template.
    pub label_component: Option<&'a LabelComponent>,
}

impl PointMarkSpec<'_> {
    /// Generates the point unit: a group keyed `point-{index}` holding the glyph and, when the
    /// datum has a label and labels are shown, the label.
    pub fn mark(&self) -> Group {
        let outline = self
            .symbol
            .outline(self.position.x, self.position.y, self.size);
        let path = PathNode {
            d: outline.path_data(),
            outline,
            position: self.position,
            size: self.size,
            symbol: self.symbol,
            style: self.style.data.clone(),
            shape_rendering: ShapeRendering::OptimizeSpeed,
        };

        let mut unit = Group::keyed(format!("point-{}", self.index));
        unit.push(path);
        if has_label(self.datum, self.show_labels) {
            unit.push(label_node(
                self.datum,
                self.position,
                &self.style.labels,
                self.label_component,
            ));
        }
        unit
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::style::{FILL, Style, resolve_style};
    use crate::value::Value;

    fn spec<'a>(datum: &'a Datum, show_labels: bool) -> PointMarkSpec<'a> {
        PointMarkSpec {
            index: 3,
            datum,
            position: Point::new(10.0, 20.0),
            symbol: Symbol::Square,
            size: 2.0,
            style: resolve_style(datum, &Style::new(), 2.0, None),
            show_labels,
            label_component: None,
        }
    }

    #[test]
    fn unit_holds_path_and_label() {
        let datum = Datum::new(1.0, 1.0)
            .with_label("a")
            .with_field(FILL, "red");
        let unit = spec(&datum, true).mark();
        assert_eq!(unit.key.as_deref(), Some("point-3"));
        let path = unit.path().expect("path");
        assert_eq!(path.d, Symbol::Square.path(10.0, 20.0, 2.0));
        assert_eq!(path.fill(), Some(&Value::from("red")));
        assert_eq!(path.shape_rendering, ShapeRendering::OptimizeSpeed);
        assert_eq!(path.bounds(), kurbo::Rect::new(8.0, 18.0, 12.0, 22.0));
        let text = unit.text().expect("label");
        assert_eq!(text.y, 19.5);
    }

    #[test]
    fn labels_are_suppressed() {
        let unlabelled = Datum::new(1.0, 1.0);
        assert!(spec(&unlabelled, true).mark().text().is_none());
        let labelled = Datum::new(1.0, 1.0).with_label("a");
        assert!(spec(&labelled, false).mark().text().is_none());
    }
}
