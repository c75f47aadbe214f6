//! Geometry primitives for laid-out trees

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Cubic Bézier segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicCurve {
    /// S-shaped edge: both control points sit at the vertical midpoint, above
    /// `from` and `to` respectively
    pub fn vertical(from: Point, to: Point) -> Self {
        let mid_y = (from.y + to.y) / 2.0;
        CubicCurve {
            from,
            ctrl1: Point::new(from.x, mid_y),
            ctrl2: Point::new(to.x, mid_y),
            to,
        }
    }

    /// Point at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        Point::new(
            a * self.from.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.to.x,
            a * self.from.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.to.y,
        )
    }

    /// `segments + 1` evenly spaced points along the curve, endpoints included
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        CubicCurve {
            from: self.from.offset(dx, dy),
            ctrl1: self.ctrl1.offset(dx, dy),
            ctrl2: self.ctrl2.offset(dx, dy),
            to: self.to.offset(dx, dy),
        }
    }

    /// SVG path data, `M x y C x1 y1, x2 y2, x y`
    pub fn to_svg_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CubicCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} C {} {}, {} {}, {} {}",
            self.from.x,
            self.from.y,
            self.ctrl1.x,
            self.ctrl1.y,
            self.ctrl2.x,
            self.ctrl2.y,
            self.to.x,
            self.to.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_curve() {
        let curve = CubicCurve::vertical(Point::new(0.0, 10.0), Point::new(40.0, 50.0));
        assert_eq!(curve.ctrl1, Point::new(0.0, 30.0));
        assert_eq!(curve.ctrl2, Point::new(40.0, 30.0));
        assert_eq!(curve.to_svg_path(), "M 0 10 C 0 30, 40 30, 40 50");
    }

    #[test]
    fn test_sample_endpoints_and_midpoint() {
        let curve = CubicCurve::vertical(Point::new(0.0, 0.0), Point::new(40.0, 40.0));
        let points = curve.sample(4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], curve.from);
        assert_eq!(points[4], curve.to);
        // Symmetric S-curve passes through the center
        assert!(points[2].distance(Point::new(20.0, 20.0)) < 1e-9);
    }
}
