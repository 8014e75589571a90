//! Drawing primitives and SVG serialization.

use std::fmt::Write;

use crate::geometry::Point;

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polygon {
        points: Vec<Point>,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Line {
        from: Point,
        to: Point,
        stroke: String,
        width: f64,
        dash: Option<String>,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: String,
        stroke: String,
    },
    Text {
        at: Point,
        text: String,
        fill: String,
        size: f64,
        font_family: String,
    },
}

impl Primitive {
    /// Colors this primitive paints with.
    pub fn colors(&self) -> Vec<&str> {
        match self {
            Self::Polygon { fill, stroke, .. } | Self::Circle { fill, stroke, .. } => {
                vec![fill.as_str(), stroke.as_str()]
            }
            Self::Line { stroke, .. } => vec![stroke.as_str()],
            Self::Text { fill, .. } => vec![fill.as_str()],
        }
    }
}

/// Primitives in paint order on a fixed-size canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    width: f64,
    height: f64,
    background: String,
    primitives: Vec<Primitive>,
}

impl Diagram {
    pub fn new(width: f64, height: f64, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background: background.into(),
            primitives: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: &str, width: f64) {
        self.push(Primitive::Line {
            from,
            to,
            stroke: stroke.to_string(),
            width,
            dash: None,
        });
    }

    pub fn dashed_line(&mut self, from: Point, to: Point, stroke: &str, width: f64, dash: &str) {
        self.push(Primitive::Line {
            from,
            to,
            stroke: stroke.to_string(),
            width,
            dash: Some(dash.to_string()),
        });
    }

    /// Self-contained `<svg>` element.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(256 + self.primitives.len() * 96);
        let (w, h) = (num(self.width), num(self.height));
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
            escape_xml_attr(&self.background)
        );
        for p in &self.primitives {
            write_primitive(&mut svg, p);
        }
        svg.push_str("</svg>");
        svg
    }
}

fn write_primitive(svg: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Polygon {
            points,
            fill,
            stroke,
            stroke_width,
        } => {
            let pts: Vec<String> = points
                .iter()
                .map(|p| format!("{},{}", num(p.x), num(p.y)))
                .collect();
            let _ = write!(
                svg,
                r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                pts.join(" "),
                escape_xml_attr(fill),
                escape_xml_attr(stroke),
                num(*stroke_width)
            );
        }
        Primitive::Line {
            from,
            to,
            stroke,
            width,
            dash,
        } => {
            let _ = write!(
                svg,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="butt""#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                escape_xml_attr(stroke),
                num(*width)
            );
            if let Some(dash) = dash {
                let _ = write!(svg, r#" stroke-dasharray="{}""#, escape_xml_attr(dash));
            }
            svg.push_str("/>");
        }
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let _ = write!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
                num(center.x),
                num(center.y),
                num(*radius),
                escape_xml_attr(fill),
                escape_xml_attr(stroke)
            );
        }
        Primitive::Text {
            at,
            text,
            fill,
            size,
            font_family,
        } => {
            let _ = write!(
                svg,
                r#"<text x="{}" y="{}" fill="{}" font-size="{}" font-family="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                num(at.x),
                num(at.y),
                escape_xml_attr(fill),
                num(*size),
                escape_xml_attr(font_family),
                escape_xml_text(text)
            );
        }
    }
}

/// Shortest decimal form with at most two fractional digits.
fn num(n: f64) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').to_string()
    }
}

fn escape_xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_xml_attr(s: &str) -> String {
    escape_xml_text(s).replace('"', "&quot;")
}
