//! # Mesh Combination
//!
//! Merges the side walls, the flat front mesh, and a winding-reversed back
//! copy into one final mesh, then recomputes normals and tangents.
//!
//! The back mesh reuses the front mesh's vertex positions; its transform
//! gains an extra local translation of the extrusion depth along z, so the
//! back face lands flush with the far end of the side walls.

use glam::{DMat4, DVec3};

use crate::mesh::Mesh;

/// Combines extrusion geometry into one mesh.
///
/// Every sub-mesh is transformed by `root_transform` during the merge; the
/// back mesh additionally by a local z translation of `depth`. Empty
/// sub-meshes (degenerate contours) are dropped. The merged topology keeps
/// the outward-facing winding convention, which the recomputed smooth
/// normals inherit.
pub fn combine_extrusion(
    side_walls: &[Mesh],
    front: &Mesh,
    depth: f64,
    root_transform: &DMat4,
) -> Mesh {
    let mut back = front.clone();
    back.reverse_winding();

    let back_transform = *root_transform * DMat4::from_translation(DVec3::new(0.0, 0.0, depth));

    let mut combined = Mesh::new();
    for wall in side_walls {
        if wall.is_empty() {
            continue;
        }
        combined.merge_transformed(wall, root_transform);
    }
    if !front.is_empty() {
        combined.merge_transformed(front, root_transform);
        combined.merge_transformed(&back, &back_transform);
    }

    combined.compute_normals();
    combined.compute_tangents();
    combined
}
