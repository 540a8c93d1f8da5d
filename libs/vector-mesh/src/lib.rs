//! # Vector Mesh
//!
//! Converts a parsed vector-graphics scene into flat 2D triangle meshes
//! and, optionally, into extruded 3D solids with front, back, and side
//! faces.
//!
//! ## Architecture
//!
//! ```text
//! vector-scene (Scene tree) → vector-mesh (Mesh)
//! ```
//!
//! ## Pipeline
//!
//! 1. **Tessellation resolution**: density parameters from target display
//!    resolution, or explicit advanced settings
//! 2. **Flattening**: scene tree → ordered (shape, world transform) list
//! 3. **Front tessellation**: flat triangulated copy of the scene at z = 0
//! 4. **Extrusion**: watertight side walls between the front copy and a
//!    back copy at z = depth
//! 5. **Combination**: one merged mesh with recomputed normals and tangents
//!
//! Everything is synchronous, CPU-bound, and stateless across calls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vector_mesh::extrude_scene;
//!
//! let mesh = extrude_scene(&scene, 0.5)?;
//! ```

pub mod combine;
pub mod error;
pub mod extrude;
pub mod flatten;
pub mod front;
pub mod importer;
pub mod mesh;
pub mod tessellation;
pub mod texture;

pub use combine::combine_extrusion;
pub use error::MeshError;
pub use extrude::extrude_side_walls;
pub use flatten::{flatten, FlatShapeEntry};
pub use front::tessellate_front;
pub use importer::MeshImporter;
pub use mesh::Mesh;
pub use tessellation::{resolve_tessellation_options, AdvancedTessellation, TessellationOptions};
pub use texture::resolve_texture_dimensions;

use glam::DMat4;
use vector_scene::Scene;

/// Meshes a scene with default import settings.
///
/// This is the main entry point for the meshing pipeline. A zero depth
/// produces the flat 2D mesh; any other depth produces the combined
/// extrusion.
///
/// # Errors
///
/// [`MeshError::MalformedScene`] when the scene has no root node.
///
/// # Example
///
/// ```rust,ignore
/// use vector_mesh::extrude_scene;
///
/// let mesh = extrude_scene(&scene, 0.5)?;
/// assert!(mesh.vertex_count() > 0);
/// ```
pub fn extrude_scene(scene: &Scene, depth: f64) -> Result<Mesh, MeshError> {
    MeshImporter::default().scene_to_mesh(scene, DMat4::IDENTITY, depth)
}
