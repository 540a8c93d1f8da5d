//! # Flat Front-Face Tessellation
//!
//! Triangulates the flattened shape list into a flat mesh at z = 0, used
//! as the front face of an extrusion (and as the whole output when no
//! depth is requested).
//!
//! Each traced boundary is fan-triangulated from its first point. This
//! handles convex and simple star-shaped boundaries; self-intersecting
//! contours may produce overlapping triangles, which mirrors the accepted
//! limitation of the side-wall extrusion.

use glam::DVec3;
use log::debug;

use crate::flatten::FlatShapeEntry;
use crate::mesh::Mesh;
use crate::tessellation::TessellationOptions;
use vector_scene::{trace_contour, Fill};

/// Builds the flat front mesh for the flattened shape list.
///
/// Boundaries with fewer than three points contribute no triangles.
pub fn tessellate_front(entries: &[FlatShapeEntry<'_>], options: &TessellationOptions) -> Mesh {
    let mut mesh = Mesh::new();

    for entry in entries {
        let stroke = entry.shape.path_props.stroke;
        let solid_color = match &entry.shape.fill {
            Fill::Solid(color) => Some(*color),
            Fill::Gradient(_) | Fill::None => None,
        };

        for contour in &entry.shape.contours {
            let boundary = trace_contour(contour, stroke.as_ref(), options);
            if boundary.len() < 3 {
                debug!(
                    "skipping contour in front tessellation: traced to {} points",
                    boundary.len()
                );
                continue;
            }

            let base = mesh.vertex_count() as u32;
            for point in &boundary {
                let world = entry.transform.transform_point2(*point);
                let position = DVec3::new(world.x, world.y, 0.0);
                match solid_color {
                    Some(color) => mesh.add_colored_vertex(position, color),
                    None => mesh.add_vertex(position),
                };
            }

            // Fan triangulation, wound clockwise so the cap faces -z,
            // away from the solid extruded towards +z.
            for i in 1..boundary.len() as u32 - 1 {
                mesh.add_triangle(base, base + i + 1, base + i);
            }
        }
    }

    mesh
}
