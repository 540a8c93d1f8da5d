//! # Extrusion Meshing
//!
//! Builds 3D side-wall meshes connecting a front copy (z = 0) of each
//! contour to a back copy (z = depth).
//!
//! Each boundary point contributes two vertices (front and back) and six
//! indices forming a continuous quad strip around the ring. With the
//! counter-clockwise boundaries the tracer guarantees, the strip's face
//! normals point outward from the contour.

use glam::DVec3;
use log::debug;

use crate::flatten::FlatShapeEntry;
use crate::mesh::Mesh;
use crate::tessellation::TessellationOptions;
use vector_scene::{trace_contour, Fill};

/// Extrudes the side walls of every contour in the flattened shape list.
///
/// Emits one mesh per contour, in shape order, so vertex and index buffers
/// stay bounded and each wall can be combined independently. A contour
/// tracing to fewer than two points yields an empty mesh; the combiner
/// drops those.
pub fn extrude_side_walls(
    entries: &[FlatShapeEntry<'_>],
    options: &TessellationOptions,
    depth: f64,
) -> Vec<Mesh> {
    let mut walls = Vec::new();

    for entry in entries {
        let stroke = entry.shape.path_props.stroke;
        for contour in &entry.shape.contours {
            let boundary = trace_contour(contour, stroke.as_ref(), options);
            if boundary.len() < 2 {
                debug!(
                    "dropping degenerate contour: traced to {} points",
                    boundary.len()
                );
                walls.push(Mesh::new());
                continue;
            }

            let ring_len = boundary.len();
            let vertex_count = ring_len * 2;
            let mut wall = Mesh::with_capacity(vertex_count, ring_len * 2);

            let solid_color = match &entry.shape.fill {
                Fill::Solid(color) => Some(*color),
                // Gradient and absent fills keep the neutral vertex color.
                Fill::Gradient(_) | Fill::None => None,
            };

            for point in &boundary {
                let world = entry.transform.transform_point2(*point);
                let front = DVec3::new(world.x, world.y, 0.0);
                let back = DVec3::new(world.x, world.y, depth);
                match solid_color {
                    Some(color) => {
                        wall.add_colored_vertex(front, color);
                        wall.add_colored_vertex(back, color);
                    }
                    None => {
                        wall.add_vertex(front);
                        wall.add_vertex(back);
                    }
                }
            }

            // Quad strip around the cyclic ring: point N-1 connects back to
            // point 0 through the modulo.
            for k in 0..ring_len {
                let vi = (k * 2) as u32;
                let n = vertex_count as u32;
                wall.add_triangle(vi % n, (vi + 3) % n, (vi + 1) % n);
                wall.add_triangle((vi + 3) % n, vi % n, (vi + 2) % n);
            }

            walls.push(wall);
        }
    }

    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use approx::assert_relative_eq;
    use glam::{DAffine2, DVec2};
    use vector_scene::{Contour, Gradient, SceneNode, Shape};

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn square_entry_walls(depth: f64) -> Vec<Mesh> {
        let node = SceneNode::with_shapes(vec![Shape::solid(
            vec![Contour::closed_polyline(&[
                DVec2::new(-1.0, -1.0),
                DVec2::new(1.0, -1.0),
                DVec2::new(1.0, 1.0),
                DVec2::new(-1.0, 1.0),
            ])],
            RED,
        )]);
        let entries = flatten(&node);
        extrude_side_walls(&entries, &TessellationOptions::default(), depth)
    }

    #[test]
    fn test_square_wall_counts() {
        let walls = square_entry_walls(2.0);
        assert_eq!(walls.len(), 1);
        let wall = &walls[0];
        // 4 boundary points: 8 vertices, 8 triangles, every index valid.
        assert_eq!(wall.vertex_count(), 8);
        assert_eq!(wall.triangle_count(), 8);
        assert!(wall.validate());
    }

    #[test]
    fn test_front_back_vertex_pairs() {
        let walls = square_entry_walls(3.0);
        let wall = &walls[0];
        for k in 0..wall.vertex_count() / 2 {
            let front = wall.vertex((k * 2) as u32);
            let back = wall.vertex((k * 2 + 1) as u32);
            assert_relative_eq!(front.z, 0.0);
            assert_relative_eq!(back.z, 3.0);
            assert_relative_eq!(front.x, back.x);
            assert_relative_eq!(front.y, back.y);
        }
    }

    #[test]
    fn test_index_pattern_matches_ring_layout() {
        let walls = square_entry_walls(1.0);
        let wall = &walls[0];
        let n = wall.vertex_count() as u32;
        for k in 0..4u32 {
            let vi = k * 2;
            assert_eq!(wall.triangle((k * 2) as usize), [
                vi % n,
                (vi + 3) % n,
                (vi + 1) % n
            ]);
            assert_eq!(wall.triangle((k * 2 + 1) as usize), [
                (vi + 3) % n,
                vi % n,
                (vi + 2) % n
            ]);
        }
    }

    #[test]
    fn test_face_normals_point_outward() {
        let walls = square_entry_walls(2.0);
        let wall = &walls[0];
        // Centroid of the square ring is the origin.
        for tri in wall.triangles() {
            let v0 = wall.vertex(tri[0]);
            let v1 = wall.vertex(tri[1]);
            let v2 = wall.vertex(tri[2]);
            let normal = (v1 - v0).cross(v2 - v0);
            let center = (v0 + v1 + v2) / 3.0;
            let outward = DVec3::new(center.x, center.y, 0.0);
            assert!(
                normal.dot(outward) > 0.0,
                "inward-facing side triangle {tri:?}"
            );
        }
    }

    #[test]
    fn test_solid_fill_colors_both_ring_vertices() {
        let walls = square_entry_walls(1.0);
        let colors = walls[0].colors().unwrap();
        assert!(colors.iter().all(|c| *c == RED));
    }

    #[test]
    fn test_gradient_fill_leaves_neutral_color() {
        let shape = Shape {
            contours: vec![Contour::closed_polyline(&[
                DVec2::ZERO,
                DVec2::X,
                DVec2::ONE,
            ])],
            fill: Fill::Gradient(Gradient { stops: vec![] }),
            path_props: Default::default(),
        };
        let node = SceneNode::with_shapes(vec![shape]);
        let entries = flatten(&node);
        let walls = extrude_side_walls(&entries, &TessellationOptions::default(), 1.0);
        assert!(walls[0].colors().is_none());
    }

    #[test]
    fn test_transform_applied_before_extrusion() {
        let mut node = SceneNode::with_shapes(vec![Shape::solid(
            vec![Contour::closed_polyline(&[
                DVec2::ZERO,
                DVec2::X,
                DVec2::ONE,
            ])],
            RED,
        )]);
        node.transform = DAffine2::from_translation(DVec2::new(10.0, 0.0));
        let entries = flatten(&node);
        let walls = extrude_side_walls(&entries, &TessellationOptions::default(), 1.0);
        let (min, _) = walls[0].bounding_box();
        assert!(min.x >= 10.0);
    }

    #[test]
    fn test_empty_contour_yields_empty_mesh() {
        let shape = Shape::solid(
            vec![
                Contour {
                    segments: vec![],
                    closed: true,
                },
                Contour::closed_polyline(&[DVec2::ZERO, DVec2::X, DVec2::ONE]),
            ],
            RED,
        );
        let node = SceneNode::with_shapes(vec![shape]);
        let entries = flatten(&node);
        let walls = extrude_side_walls(&entries, &TessellationOptions::default(), 1.0);
        assert_eq!(walls.len(), 2);
        assert!(walls[0].is_empty());
        assert!(!walls[1].is_empty());
    }

    #[test]
    fn test_determinism() {
        let a = square_entry_walls(2.0);
        let b = square_entry_walls(2.0);
        assert_eq!(a[0].vertices(), b[0].vertices());
        assert_eq!(a[0].triangles(), b[0].triangles());
        assert_eq!(a[0].colors(), b[0].colors());
    }
}
