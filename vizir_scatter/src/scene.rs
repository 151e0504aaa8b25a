// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderable output tree.
//!
//! A render produces a group of point units. Each unit is a group holding the glyph path and,
//! optionally, its label. Units are keyed by data index so hosts can keep identity stable
//! across re-renders.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::datum::Datum;
use crate::path::Outline;
use crate::style::{ResolvedStyle, ValueMap};
use crate::symbol::Symbol;
use crate::value::Value;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    #[default]
    Middle,
    /// Text ends at the anchor point.
    End,
}

impl TextAnchor {
    /// Parses an SVG `text-anchor` keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "start" => Some(Self::Start),
            "middle" => Some(Self::Middle),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    /// The SVG keyword for this anchor.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// The top of the text is at the anchor point.
    Start,
    /// The text is vertically centered on the anchor point.
    Middle,
    /// The bottom of the text is at the anchor point.
    #[default]
    End,
}

/// Rendering quality hint for shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeRendering {
    /// Let the renderer decide.
    #[default]
    Auto,
    /// Favor speed over geometric precision.
    OptimizeSpeed,
}

/// A glyph shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    /// SVG path data.
    pub d: String,
    /// Outline geometry that `d` was formatted from.
    pub outline: Outline,
    /// Center in pixel space.
    pub position: Point,
    /// Resolved size.
    pub size: f64,
    /// Resolved symbol.
    pub symbol: Symbol,
    /// Resolved point style.
    pub style: ResolvedStyle,
    /// Rendering hint.
    pub shape_rendering: ShapeRendering,
}

impl PathNode {
    /// The fill paint, if any.
    pub fn fill(&self) -> Option<&Value> {
        self.style.fill()
    }

    /// Bounding box of the glyph.
    pub fn bounds(&self) -> Rect {
        self.outline.bounding_box()
    }
}

/// A text label.
#[derive(Clone, Debug)]
pub struct TextNode {
    /// Anchor x in pixel space.
    pub x: f64,
    /// Anchor y in pixel space.
    pub y: f64,
    /// Extra vertical offset.
    pub dy: Option<f64>,
    /// Text content.
    pub text: String,
    /// Horizontal anchor.
    pub text_anchor: TextAnchor,
    /// Vertical anchor.
    pub vertical_anchor: VerticalAnchor,
    /// Resolved label style.
    pub style: ResolvedStyle,
    /// The datum being labelled.
    pub datum: Datum,
}

/// A group of nodes.
#[derive(Clone, Debug, Default)]
pub struct Group {
    /// Stable key, for point units `point-{index}`.
    pub key: Option<String>,
    /// Children in paint order.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates an unkeyed, empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group with a key.
    pub fn keyed(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            children: Vec::new(),
        }
    }

    /// Appends a child.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Iterates over direct child groups.
    pub fn groups(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|n| match n {
            Node::Group(g) => Some(g),
            _ => None,
        })
    }

    /// Returns the first direct path child.
    pub fn path(&self) -> Option<&PathNode> {
        self.children.iter().find_map(|n| match n {
            Node::Path(p) => Some(p),
            _ => None,
        })
    }

    /// Returns the first direct text child.
    pub fn text(&self) -> Option<&TextNode> {
        self.children.iter().find_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }
}

/// A node of the output tree.
#[derive(Clone, Debug)]
pub enum Node {
    /// A group.
    Group(Group),
    /// A glyph shape.
    Path(PathNode),
    /// A label.
    Text(TextNode),
}

impl From<Group> for Node {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}

impl From<PathNode> for Node {
    fn from(value: PathNode) -> Self {
        Self::Path(value)
    }
}

impl From<TextNode> for Node {
    fn from(value: TextNode) -> Self {
        Self::Text(value)
    }
}

/// A top-level drawing surface.
#[derive(Clone, Debug)]
pub struct Canvas {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Canvas style (the chart's `style.parent`).
    pub style: ValueMap,
    /// The chart content.
    pub content: Group,
}

/// The result of rendering a chart.
#[derive(Clone, Debug)]
pub enum Rendered {
    /// A standalone chart wrapped in its own canvas.
    Canvas(Canvas),
    /// A group meant to be embedded in a caller-provided canvas.
    Group(Group),
}

impl Rendered {
    /// The group holding the point units.
    pub fn content(&self) -> &Group {
        match self {
            Self::Canvas(c) => &c.content,
            Self::Group(g) => g,
        }
    }

    /// Iterates over the point units.
    pub fn points(&self) -> impl Iterator<Item = &Group> {
        self.content().groups()
    }
}
