//! # Shapes and Contours
//!
//! Geometric path data: shapes made of chained cubic Bézier contours with
//! fill and stroke properties.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One cubic Bézier segment of a contour.
///
/// Segments chain Unity-style: `p0` is the segment's starting anchor and
/// `p1`/`p2` are its control points. The segment's ending anchor is the
/// next segment's `p0` (wrapping to the first segment for closed contours).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    /// Starting anchor point.
    pub p0: DVec2,
    /// First control point.
    pub p1: DVec2,
    /// Second control point.
    pub p2: DVec2,
}

impl BezierSegment {
    /// Creates a segment whose control points lie on the straight line
    /// towards `end`, producing a linear edge when chained before `end`.
    pub fn line_towards(start: DVec2, end: DVec2) -> Self {
        Self {
            p0: start,
            p1: start.lerp(end, 1.0 / 3.0),
            p2: start.lerp(end, 2.0 / 3.0),
        }
    }
}

/// One closed or open path within a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    /// Chained cubic segments, in path order.
    pub segments: Vec<BezierSegment>,
    /// Whether the last segment connects back to the first anchor.
    pub closed: bool,
}

impl Contour {
    /// Builds a closed contour of straight edges through the given points.
    pub fn closed_polyline(points: &[DVec2]) -> Self {
        let n = points.len();
        let segments = points
            .iter()
            .enumerate()
            .map(|(i, &p)| BezierSegment::line_towards(p, points[(i + 1) % n]))
            .collect();
        Self {
            segments,
            closed: true,
        }
    }

    /// Returns the number of cubic curves described by this contour.
    ///
    /// Open contours use their last segment purely as the terminal anchor.
    pub fn curve_count(&self) -> usize {
        if self.closed {
            self.segments.len()
        } else {
            self.segments.len().saturating_sub(1)
        }
    }

    /// Returns the four control points of curve `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= curve_count()`.
    pub fn curve(&self, index: usize) -> [DVec2; 4] {
        let seg = &self.segments[index];
        let end = self.segments[(index + 1) % self.segments.len()].p0;
        [seg.p0, seg.p1, seg.p2, end]
    }
}

/// A color gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// RGBA stop color.
    pub color: [f32; 4],
    /// Position along the gradient axis, in `[0, 1]`.
    pub position: f32,
}

/// A color gradient fill definition.
///
/// The extrusion core reads gradients but does not interpolate them across
/// depth; gradient-filled shapes receive the neutral vertex color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Ordered gradient stops.
    pub stops: Vec<GradientStop>,
}

/// Fill applied to a shape's interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// Uniform RGBA color.
    Solid([f32; 4]),
    /// Color gradient; not depth-rendered by the extrusion core.
    Gradient(Gradient),
    /// No fill.
    None,
}

/// Stroke description for a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// RGBA stroke color.
    pub color: [f32; 4],
    /// Half of the stroke width.
    pub half_thickness: f64,
}

/// Path-level properties of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PathProps {
    /// Optional stroke along the path.
    pub stroke: Option<Stroke>,
}

/// An ordered sequence of contours with fill and path properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Contours in path order.
    pub contours: Vec<Contour>,
    /// Interior fill.
    pub fill: Fill,
    /// Stroke and related path properties.
    pub path_props: PathProps,
}

impl Shape {
    /// Creates a solid-filled shape from contours.
    pub fn solid(contours: Vec<Contour>, color: [f32; 4]) -> Self {
        Self {
            contours,
            fill: Fill::Solid(color),
            path_props: PathProps::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_towards_controls_on_chord() {
        let seg = BezierSegment::line_towards(DVec2::ZERO, DVec2::new(3.0, 0.0));
        assert_eq!(seg.p1, DVec2::new(1.0, 0.0));
        assert_eq!(seg.p2, DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_closed_polyline_wraps() {
        let contour = Contour::closed_polyline(&[
            DVec2::ZERO,
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ]);
        assert_eq!(contour.curve_count(), 3);
        let last = contour.curve(2);
        assert_eq!(last[3], DVec2::ZERO);
    }

    #[test]
    fn test_open_contour_drops_terminal_segment() {
        let mut contour = Contour::closed_polyline(&[
            DVec2::ZERO,
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ]);
        contour.closed = false;
        assert_eq!(contour.curve_count(), 2);
    }
}
