// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a rendered chart.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::path::Num;
use crate::scene::{
    Canvas, Group, Node, PathNode, Rendered, ShapeRendering, TextNode, VerticalAnchor,
};
use crate::style::{FILL, PADDING, ResolvedStyle, STROKE, TEXT_ANCHOR, ValueMap};
use crate::value::Value;

/// Serializes `tree` as SVG markup.
///
/// A standalone chart becomes an `<svg>` document; an embedded chart becomes a bare `<g>`
/// fragment.
pub fn to_svg_string(tree: &Rendered) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_tree(&mut out, tree);
    out
}

fn write_tree(out: &mut String, tree: &Rendered) -> fmt::Result {
    match tree {
        Rendered::Canvas(canvas) => write_canvas(out, canvas),
        Rendered::Group(group) => write_group(out, group),
    }
}

fn write_canvas(out: &mut String, canvas: &Canvas) -> fmt::Result {
    let (w, h) = (Num(canvas.width), Num(canvas.height));
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#
    )?;
    write_css(out, &canvas.style)?;
    out.push_str(">\n");
    write_group(out, &canvas.content)?;
    out.push_str("</svg>\n");
    Ok(())
}

fn write_group(out: &mut String, group: &Group) -> fmt::Result {
    out.push_str("<g");
    if let Some(key) = &group.key {
        write!(out, r#" data-key="{}""#, escape_xml(key))?;
    }
    out.push_str(">\n");
    for child in &group.children {
        match child {
            Node::Group(g) => write_group(out, g)?,
            Node::Path(p) => write_path(out, p)?,
            Node::Text(t) => write_text(out, t)?,
        }
    }
    out.push_str("</g>\n");
    Ok(())
}

fn write_path(out: &mut String, path: &PathNode) -> fmt::Result {
    write!(out, r#"<path d="{}""#, path.d)?;
    write_style_attrs(out, &path.style, &[])?;
    if path.shape_rendering == ShapeRendering::OptimizeSpeed {
        out.push_str(r#" shape-rendering="optimizeSpeed""#);
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_text(out: &mut String, text: &TextNode) -> fmt::Result {
    write!(out, r#"<text x="{}" y="{}""#, Num(text.x), Num(text.y))?;
    if let Some(dy) = text.dy {
        write!(out, r#" dy="{}""#, Num(dy))?;
    }
    write!(out, r#" text-anchor="{}""#, text.text_anchor.keyword())?;
    match text.vertical_anchor {
        VerticalAnchor::Start => out.push_str(r#" dominant-baseline="hanging""#),
        VerticalAnchor::Middle => out.push_str(r#" dominant-baseline="middle""#),
        VerticalAnchor::End => {}
    }
    write_style_attrs(out, &text.style, &[PADDING, TEXT_ANCHOR])?;
    out.push('>');
    out.push_str(&escape_xml(&text.text));
    out.push_str("</text>\n");
    Ok(())
}

/// Writes style properties as presentation attributes, skipping `skip`.
fn write_style_attrs(out: &mut String, style: &ResolvedStyle, skip: &[&str]) -> fmt::Result {
    for (key, value) in style.iter() {
        if skip.contains(&key.as_str()) {
            continue;
        }
        write_value_attr(out, &kebab_case(key), value)?;
    }
    Ok(())
}

fn write_value_attr(out: &mut String, name: &str, value: &Value) -> fmt::Result {
    match value {
        Value::Color(color) => {
            let rgba = color.to_rgba8();
            write!(
                out,
                r##" {name}="#{:02x}{:02x}{:02x}""##,
                rgba.r, rgba.g, rgba.b
            )?;
            if rgba.a != 255 && (name == FILL || name == STROKE) {
                write!(out, r#" {name}-opacity="{}""#, Num(f64::from(rgba.a) / 255.0))?;
            }
            Ok(())
        }
        other => write!(out, r#" {name}="{}""#, escape_xml(&format!("{other}"))),
    }
}

fn write_css(out: &mut String, style: &ValueMap) -> fmt::Result {
    if style.is_empty() {
        return Ok(());
    }
    let mut css = String::new();
    for (key, value) in style {
        write!(css, "{}:{value};", kebab_case(key))?;
    }
    write!(out, r#" style="{}""#, escape_xml(&css))
}

/// Converts a camelCase property name into its SVG/CSS spelling.
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::datum::Datum;
    use crate::scatter_chart::ScatterChartSpec;
    use crate::style::Style;

    #[test]
    fn standalone_chart_is_a_document() {
        let spec = ScatterChartSpec::new()
            .with_width(100.0)
            .with_height(80.0)
            .with_padding(10.0)
            .with_style(Style::new().with_parent("backgroundColor", "white"))
            .with_data(vec![
                Datum::new(0.0, 0.0).with_label("a<b"),
                Datum::new(1.0, 1.0).with_field("strokeWidth", 2.0),
            ]);
        let svg = to_svg_string(&spec.render().expect("valid").tree);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="80""#));
        assert!(svg.contains(r#"style="background-color:white;""#));
        assert!(svg.contains(r#"data-key="point-0""#));
        assert!(svg.contains(r#"shape-rendering="optimizeSpeed""#));
        assert!(svg.contains(r##"fill="#756f6a""##));
        assert!(svg.contains(r#"stroke-width="2""#));
        assert!(svg.contains(">a&lt;b</text>"));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(!svg.contains("padding"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn embedded_chart_is_a_fragment() {
        let spec = ScatterChartSpec::new()
            .with_data(vec![Datum::new(0.0, 0.0)])
            .with_standalone(false);
        let svg = to_svg_string(&spec.render().expect("valid").tree);
        assert!(svg.starts_with("<g>"));
        assert!(!svg.contains("<svg"));
    }

    #[test]
    fn translucent_colors_get_an_opacity_attribute() {
        let spec = ScatterChartSpec::new()
            .with_style(Style::new().with_data(FILL, peniko::Color::from_rgba8(255, 0, 0, 128)))
            .with_data(vec![Datum::new(0.0, 0.0)])
            .with_standalone(false);
        let svg = to_svg_string(&spec.render().expect("valid").tree);
        assert!(svg.contains(r##"fill="#ff0000""##), "{svg}");
        assert!(svg.contains(r#"fill-opacity=""#), "{svg}");
    }

    #[test]
    fn property_names_are_kebab_cased() {
        assert_eq!(kebab_case("strokeWidth"), "stroke-width");
        assert_eq!(kebab_case("fill"), "fill");
        assert_eq!(kebab_case("fontFamily"), "font-family");
    }
}
