//! # Contour Tracing
//!
//! Turns one contour into an ordered 2D boundary polyline by adaptive
//! flattening of its cubic segments.
//!
//! ## Tessellation Knobs
//!
//! Four knobs control subdivision density ([`TessellationOptions`]):
//! - `step_distance`: uniform spacing along the path (infinite = disabled)
//! - `max_cord_deviation`: allowed distance between curve and its chord
//! - `max_tan_angle_deviation`: allowed tangent swing across a piece (radians)
//! - `sampling_step_size`: smallest parametric interval considered, the
//!   inverse of the sampling density
//!
//! ## Winding
//!
//! Closed boundaries are returned in counter-clockwise order regardless of
//! the input path direction, so downstream extrusion can rely on outward
//! side-wall normals.

use config::constants::{
    DEFAULT_MAX_CORD_DEVIATION, DEFAULT_MAX_TANGENT_ANGLE, DEFAULT_SAMPLING_STEP_DISTANCE, EPSILON,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::shape::{Contour, Stroke};

/// Numeric knobs controlling how finely curves are subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TessellationOptions {
    /// Uniform step distance along the path. `f64::INFINITY` disables
    /// uniform stepping.
    pub step_distance: f64,
    /// Maximum distance between a curve piece and its straight chord.
    pub max_cord_deviation: f64,
    /// Maximum tangent swing across a curve piece, in radians.
    pub max_tan_angle_deviation: f64,
    /// Smallest parametric interval evaluated per curve (inverse of the
    /// sampling density).
    pub sampling_step_size: f64,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            step_distance: f64::INFINITY,
            max_cord_deviation: DEFAULT_MAX_CORD_DEVIATION,
            max_tan_angle_deviation: DEFAULT_MAX_TANGENT_ANGLE,
            sampling_step_size: 1.0 / DEFAULT_SAMPLING_STEP_DISTANCE,
        }
    }
}

/// Traces a contour into a 2D boundary polyline.
///
/// Closed contours (and stroke ribbons) come back in counter-clockwise
/// order. Open contours without a stroke trace their centerline; open
/// contours with a stroke trace the stroke's closed ribbon outline.
///
/// Degenerate contours trace to an empty polyline rather than an error.
pub fn trace_contour(
    contour: &Contour,
    stroke: Option<&Stroke>,
    options: &TessellationOptions,
) -> Vec<DVec2> {
    let curves = contour.curve_count();
    if curves == 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    points.push(contour.curve(0)[0]);
    for i in 0..curves {
        flatten_cubic(contour.curve(i), options, &mut points);
    }

    dedupe_consecutive(&mut points);
    if contour.closed && points.len() > 1 {
        // The last curve wraps back to the starting anchor.
        if points[0].distance_squared(points[points.len() - 1]) < EPSILON * EPSILON {
            points.pop();
        }
    }

    if points.len() < 2 {
        return Vec::new();
    }

    if !contour.closed {
        if let Some(stroke) = stroke {
            if stroke.half_thickness > EPSILON {
                let mut ribbon = stroke_ribbon(&points, stroke.half_thickness);
                ensure_counter_clockwise(&mut ribbon);
                return ribbon;
            }
        }
        return points;
    }

    ensure_counter_clockwise(&mut points);
    points
}

/// Adaptively flattens one cubic, appending everything after its starting
/// anchor to `out`.
fn flatten_cubic(curve: [DVec2; 4], options: &TessellationOptions, out: &mut Vec<DVec2>) {
    // The parametric floor keeps recursion bounded for pathological curves.
    let min_span = options.sampling_step_size.max(1.0e-4);
    flatten_piece(curve, 1.0, min_span, options, out);
}

fn flatten_piece(
    piece: [DVec2; 4],
    span: f64,
    min_span: f64,
    options: &TessellationOptions,
    out: &mut Vec<DVec2>,
) {
    if span <= min_span || piece_is_flat(&piece, options) {
        out.push(piece[3]);
        return;
    }
    let (left, right) = split_cubic(&piece);
    flatten_piece(left, span * 0.5, min_span, options, out);
    flatten_piece(right, span * 0.5, min_span, options, out);
}

/// Whether a cubic piece satisfies every active tessellation constraint.
fn piece_is_flat(piece: &[DVec2; 4], options: &TessellationOptions) -> bool {
    let chord = piece[3] - piece[0];
    let chord_len = chord.length();

    if chord_len < EPSILON {
        // Closed-on-itself piece: flat once the control net has collapsed.
        let spread = piece[1]
            .distance(piece[0])
            .max(piece[2].distance(piece[3]));
        return spread <= options.max_cord_deviation;
    }

    if options.step_distance.is_finite() && chord_len > options.step_distance {
        return false;
    }

    let dir = chord / chord_len;
    let d1 = (piece[1] - piece[0]).perp_dot(dir).abs();
    let d2 = (piece[2] - piece[0]).perp_dot(dir).abs();
    if d1.max(d2) > options.max_cord_deviation {
        return false;
    }

    let start_tangent = tangent_or(piece[1] - piece[0], chord);
    let end_tangent = tangent_or(piece[3] - piece[2], chord);
    let swing = start_tangent
        .angle_between(dir)
        .abs()
        .max(end_tangent.angle_between(dir).abs());
    swing <= options.max_tan_angle_deviation
}

fn tangent_or(delta: DVec2, fallback: DVec2) -> DVec2 {
    let len = delta.length();
    if len < EPSILON {
        fallback.normalize()
    } else {
        delta / len
    }
}

/// De Casteljau split at the parametric midpoint.
fn split_cubic(piece: &[DVec2; 4]) -> ([DVec2; 4], [DVec2; 4]) {
    let mid = |a: DVec2, b: DVec2| (a + b) * 0.5;
    let q0 = mid(piece[0], piece[1]);
    let q1 = mid(piece[1], piece[2]);
    let q2 = mid(piece[2], piece[3]);
    let r0 = mid(q0, q1);
    let r1 = mid(q1, q2);
    let s = mid(r0, r1);
    ([piece[0], q0, r0, s], [s, r1, q2, piece[3]])
}

fn dedupe_consecutive(points: &mut Vec<DVec2>) {
    points.dedup_by(|a, b| a.distance_squared(*b) < EPSILON * EPSILON);
}

/// Reverses the polyline in place when its signed area is clockwise.
fn ensure_counter_clockwise(points: &mut [DVec2]) {
    if signed_area(points) < 0.0 {
        points.reverse();
    }
}

/// Twice the signed (shoelace) area of a closed polyline.
fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        area += a.perp_dot(b);
    }
    area
}

/// Builds the closed ribbon outline of a stroked open polyline: forward
/// along one offset side, back along the other.
fn stroke_ribbon(center: &[DVec2], half_thickness: f64) -> Vec<DVec2> {
    let n = center.len();
    let edge_normal = |a: DVec2, b: DVec2| -> Option<DVec2> {
        let e = b - a;
        let len = e.length();
        if len < EPSILON {
            None
        } else {
            Some(DVec2::new(e.y, -e.x) / len)
        }
    };

    let mut forward = Vec::with_capacity(n);
    let mut backward = Vec::with_capacity(n);
    for i in 0..n {
        let incoming = if i == 0 {
            None
        } else {
            edge_normal(center[i - 1], center[i])
        };
        let outgoing = if i + 1 == n {
            None
        } else {
            edge_normal(center[i], center[i + 1])
        };
        let normal = match (incoming, outgoing) {
            (Some(a), Some(b)) => {
                let sum = a + b;
                if sum.length() < EPSILON {
                    a
                } else {
                    sum.normalize()
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => DVec2::X,
        };
        forward.push(center[i] + normal * half_thickness);
        backward.push(center[i] - normal * half_thickness);
    }

    forward.extend(backward.into_iter().rev());
    forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::BezierSegment;
    use approx::assert_relative_eq;

    fn unit_square() -> Contour {
        Contour::closed_polyline(&[
            DVec2::ZERO,
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ])
    }

    /// One closed quarter-circle-ish arc for curvature tests.
    fn arc_contour() -> Contour {
        let k = 0.5522847498307936;
        Contour {
            segments: vec![
                BezierSegment {
                    p0: DVec2::new(1.0, 0.0),
                    p1: DVec2::new(1.0, k),
                    p2: DVec2::new(k, 1.0),
                },
                BezierSegment::line_towards(DVec2::new(0.0, 1.0), DVec2::new(0.0, 0.0)),
                BezierSegment::line_towards(DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)),
            ],
            closed: true,
        }
    }

    #[test]
    fn test_empty_contour_traces_empty() {
        let contour = Contour {
            segments: vec![],
            closed: true,
        };
        assert!(trace_contour(&contour, None, &TessellationOptions::default()).is_empty());
    }

    #[test]
    fn test_single_anchor_open_contour_is_degenerate() {
        let contour = Contour {
            segments: vec![BezierSegment::line_towards(DVec2::ZERO, DVec2::X)],
            closed: false,
        };
        assert!(trace_contour(&contour, None, &TessellationOptions::default()).is_empty());
    }

    #[test]
    fn test_square_traces_to_four_corners() {
        let points = trace_contour(&unit_square(), None, &TessellationOptions::default());
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_closed_output_is_counter_clockwise() {
        // Clockwise input must come back counter-clockwise.
        let cw = Contour::closed_polyline(&[
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
            DVec2::ZERO,
        ]);
        let traced = trace_contour(&cw, None, &TessellationOptions::default());
        assert!(signed_area(&traced) > 0.0);
    }

    #[test]
    fn test_tighter_cord_deviation_adds_points() {
        // Neutralize the tangent constraint so the cord criterion dominates.
        let coarse = TessellationOptions {
            max_cord_deviation: 0.5,
            max_tan_angle_deviation: 1.5,
            ..Default::default()
        };
        let fine = TessellationOptions {
            max_cord_deviation: 0.0001,
            max_tan_angle_deviation: 1.5,
            ..Default::default()
        };
        let arc = arc_contour();
        let coarse_points = trace_contour(&arc, None, &coarse);
        let fine_points = trace_contour(&arc, None, &fine);
        assert!(fine_points.len() > coarse_points.len());
    }

    #[test]
    fn test_step_distance_splits_straight_edges() {
        let options = TessellationOptions {
            step_distance: 0.25,
            ..Default::default()
        };
        let points = trace_contour(&unit_square(), None, &options);
        // Each unit edge must split into pieces no longer than the step.
        assert!(points.len() >= 16);
    }

    #[test]
    fn test_determinism() {
        let options = TessellationOptions::default();
        let arc = arc_contour();
        let a = trace_contour(&arc, None, &options);
        let b = trace_contour(&arc, None, &options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_open_stroked_contour_builds_closed_ribbon() {
        let contour = Contour {
            segments: vec![
                BezierSegment::line_towards(DVec2::ZERO, DVec2::new(2.0, 0.0)),
                BezierSegment::line_towards(DVec2::new(2.0, 0.0), DVec2::new(4.0, 0.0)),
            ],
            closed: false,
        };
        let stroke = Stroke {
            color: [0.0, 0.0, 0.0, 1.0],
            half_thickness: 0.5,
        };
        let options = TessellationOptions::default();
        let ribbon = trace_contour(&contour, Some(&stroke), &options);
        assert!(ribbon.len() >= 4);
        assert!(signed_area(&ribbon) > 0.0);
        // Ribbon spans the stroke width.
        let min_y = ribbon.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = ribbon.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(max_y - min_y, 1.0, epsilon = 1.0e-9);
    }
}
