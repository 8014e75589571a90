//! Fixed layout of the nine center shapes.
//!
//! Coordinates are SVG pixels on a [`CANVAS_WIDTH`] × [`CANVAS_HEIGHT`]
//! canvas, x to the right and y down. Side `i` of a shape runs from vertex
//! `i` to vertex `i + 1` (wrapping). The layout never depends on chart data.

use hd_chart::Center;

pub const CANVAS_WIDTH: f64 = 500.0;
pub const CANVAS_HEIGHT: f64 = 760.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point a fraction `t` of the way from `self` to `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move up to `pixels` toward `target`, stopping on it.
    pub fn toward(self, target: Point, pixels: f64) -> Point {
        let d = self.distance(target);
        if d <= pixels || d == 0.0 {
            target
        } else {
            self.lerp(target, pixels / d)
        }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Square,
    Diamond,
}

/// Outline of one center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterShape {
    pub center: Center,
    pub kind: ShapeKind,
    pub vertices: &'static [Point],
}

impl CenterShape {
    /// Endpoints of side `index`.
    pub fn side(&self, index: usize) -> Option<(Point, Point)> {
        let n = self.vertices.len();
        if index >= n {
            return None;
        }
        Some((self.vertices[index], self.vertices[(index + 1) % n]))
    }

    pub fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }
}

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Shapes in [`hd_chart::ALL_CENTERS`] order.
pub static SHAPES: [CenterShape; 9] = [
    CenterShape {
        center: Center::Head,
        kind: ShapeKind::TriangleUp,
        vertices: &[p(250.0, 35.0), p(295.0, 115.0), p(205.0, 115.0)],
    },
    CenterShape {
        center: Center::Ajna,
        kind: ShapeKind::TriangleDown,
        vertices: &[p(205.0, 145.0), p(295.0, 145.0), p(250.0, 225.0)],
    },
    CenterShape {
        center: Center::Throat,
        kind: ShapeKind::Square,
        vertices: &[p(210.0, 260.0), p(290.0, 260.0), p(290.0, 340.0), p(210.0, 340.0)],
    },
    CenterShape {
        center: Center::G,
        kind: ShapeKind::Diamond,
        vertices: &[p(250.0, 365.0), p(305.0, 420.0), p(250.0, 475.0), p(195.0, 420.0)],
    },
    CenterShape {
        center: Center::Ego,
        kind: ShapeKind::TriangleUp,
        vertices: &[p(345.0, 440.0), p(375.0, 490.0), p(315.0, 490.0)],
    },
    CenterShape {
        center: Center::Spleen,
        kind: ShapeKind::TriangleRight,
        vertices: &[p(80.0, 480.0), p(150.0, 540.0), p(80.0, 600.0)],
    },
    CenterShape {
        center: Center::SolarPlexus,
        kind: ShapeKind::TriangleLeft,
        vertices: &[p(420.0, 480.0), p(420.0, 600.0), p(350.0, 540.0)],
    },
    CenterShape {
        center: Center::Sacral,
        kind: ShapeKind::Square,
        vertices: &[p(210.0, 520.0), p(290.0, 520.0), p(290.0, 600.0), p(210.0, 600.0)],
    },
    CenterShape {
        center: Center::Root,
        kind: ShapeKind::Square,
        vertices: &[p(210.0, 640.0), p(290.0, 640.0), p(290.0, 720.0), p(210.0, 720.0)],
    },
];

pub fn shape(center: Center) -> &'static CenterShape {
    &SHAPES[center.index()]
}
