// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering of a walk's frames.

use std::borrow::Cow;
use std::fmt;
use std::io;

use crate::{Canvas, DrawCommand, Line, Rect};

/// A [`Canvas`] that renders the current frame as a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    stroke: String,
    stroke_width: f64,
    elements: Vec<DrawCommand>,
}

impl SvgCanvas {
    /// An empty canvas of the given size, drawing in black.
    pub fn new(width: f64, height: f64) -> Self {
        SvgCanvas {
            width,
            height,
            stroke: "black".to_string(),
            stroke_width: 1.0,
            elements: Vec::new(),
        }
    }

    /// Use `stroke` as the SVG paint for every outline.
    ///
    /// The paint is escaped when rendered, so any string yields a
    /// well-formed document.
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }

    /// Number of primitives in the current frame.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the current frame is blank.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The current frame as an SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Write the current frame as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn oval(&mut self, bounds: Rect) {
        self.elements.push(DrawCommand::Oval(bounds));
    }

    fn line(&mut self, line: Line) {
        self.elements.push(DrawCommand::Line(line));
    }
}

impl fmt::Display for SvgCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        let paint = format!(
            r#"stroke="{}" stroke-width="{}" fill="none""#,
            escape_attr(&self.stroke),
            self.stroke_width
        );
        for el in &self.elements {
            match el {
                DrawCommand::Oval(r) => {
                    let c = r.center();
                    writeln!(
                        f,
                        r#"  <ellipse cx="{}" cy="{}" rx="{}" ry="{}" {paint} />"#,
                        c.x,
                        c.y,
                        0.5 * r.width(),
                        0.5 * r.height()
                    )?;
                }
                DrawCommand::Line(l) => {
                    writeln!(
                        f,
                        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {paint} />"#,
                        l.p0.x, l.p0.y, l.p1.x, l.p1.y
                    )?;
                }
                DrawCommand::Clear => {}
            }
        }
        writeln!(f, "</svg>")
    }
}

/// Escape `value` for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Circle;

    #[test]
    fn renders_primitives() {
        let mut canvas = SvgCanvas::new(500.0, 500.0);
        canvas.oval(Circle::new((250.0, 250.0), 200.0).bounding_box());
        canvas.line(Line::new((50.0, 250.0), (225.0, 448.43)));
        let svg = canvas.to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="500""#));
        assert!(svg.contains(
            r#"<ellipse cx="250" cy="250" rx="200" ry="200" stroke="black" stroke-width="1" fill="none" />"#
        ));
        assert!(svg.contains(r#"<line x1="50" y1="250" x2="225" y2="448.43""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn clear_starts_new_frame() {
        let mut canvas = SvgCanvas::new(10.0, 10.0).with_stroke("red", 0.5);
        canvas.line(Line::new((0.0, 0.0), (1.0, 1.0)));
        assert_eq!(canvas.len(), 1);
        canvas.clear();
        assert!(canvas.is_empty());
        assert!(!canvas.to_svg().contains("<line"));
    }

    #[test]
    fn write_to_matches_display() {
        let mut canvas = SvgCanvas::new(100.0, 100.0);
        canvas.oval(Rect::new(10.0, 20.0, 30.0, 60.0));
        let mut buf = Vec::new();
        canvas.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, canvas.to_svg());
        assert!(text.contains(r#"cx="20" cy="40" rx="10" ry="20""#));
    }

    #[test]
    fn stroke_is_escaped() {
        let mut canvas = SvgCanvas::new(10.0, 10.0).with_stroke(r#"red" onload="x" & <b>"#, 2.0);
        canvas.line(Line::new((0.0, 0.0), (1.0, 1.0)));
        let svg = canvas.to_svg();
        assert!(svg.contains(
            r#"stroke="red&quot; onload=&quot;x&quot; &amp; &lt;b&gt;" stroke-width="2""#
        ));
        assert!(!svg.contains("onload=\""));
        assert_eq!(escape_attr("black"), Cow::Borrowed("black"));
    }
}
