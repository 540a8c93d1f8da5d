//! # Mesh Importer
//!
//! Configuration surface and entry points for the full pipeline:
//! resolve tessellation parameters, flatten the scene, tessellate the flat
//! front face, extrude side walls, and combine everything into one mesh.

use glam::{DMat4, DVec3};

use config::constants::{
    ImportScale, DEFAULT_PIXELS_PER_UNIT, DEFAULT_RESOLUTION_MULTIPLIER,
    DEFAULT_SAMPLING_STEP_DISTANCE, DEFAULT_TARGET_RESOLUTION, DEFAULT_TEXTURE_HEIGHT,
    DEFAULT_TEXTURE_SIZE, DEFAULT_TEXTURE_WIDTH,
};
use vector_scene::{approximate_node_bounds, Scene, SceneNode};

use crate::combine::combine_extrusion;
use crate::error::MeshError;
use crate::extrude::extrude_side_walls;
use crate::flatten::flatten;
use crate::front::tessellate_front;
use crate::mesh::Mesh;
use crate::tessellation::{resolve_tessellation_options, AdvancedTessellation, TessellationOptions};
use crate::texture::resolve_texture_dimensions;

/// Pipeline configuration and entry points.
///
/// One importer can mesh any number of scenes; it retains no state between
/// calls, so a full invocation is an independently-schedulable unit of
/// work.
///
/// # Example
///
/// ```rust,ignore
/// use vector_mesh::MeshImporter;
///
/// let importer = MeshImporter::default();
/// let mesh = importer.scene_to_mesh(&scene, glam::DMat4::IDENTITY, 0.5)?;
/// ```
#[derive(Debug, Clone)]
pub struct MeshImporter {
    /// Pixels per scene unit, feeding the density heuristic.
    pub pixels_per_unit: f64,
    /// Display resolution the tessellation density targets.
    pub target_resolution: u32,
    /// Additional scale factor on the target resolution.
    pub resolution_multiplier: f64,
    /// Number of samples evaluated per path unit.
    pub sampling_step_distance: f64,
    /// Explicit tessellation settings; `None` selects automatic mode.
    pub advanced: Option<AdvancedTessellation>,
    /// Preserve the scene's aspect ratio when sizing textures.
    pub keep_texture_aspect_ratio: bool,
    /// Texture edge length when preserving aspect ratio.
    pub texture_size: u32,
    /// Explicit texture width when not preserving aspect ratio.
    pub texture_width: u32,
    /// Explicit texture height when not preserving aspect ratio.
    pub texture_height: u32,
}

impl Default for MeshImporter {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            target_resolution: DEFAULT_TARGET_RESOLUTION,
            resolution_multiplier: DEFAULT_RESOLUTION_MULTIPLIER,
            sampling_step_distance: DEFAULT_SAMPLING_STEP_DISTANCE,
            advanced: None,
            keep_texture_aspect_ratio: true,
            texture_size: DEFAULT_TEXTURE_SIZE,
            texture_width: DEFAULT_TEXTURE_WIDTH,
            texture_height: DEFAULT_TEXTURE_HEIGHT,
        }
    }
}

impl MeshImporter {
    /// Creates an importer from a validated scale configuration, keeping
    /// every other knob at its default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::ImportScale;
    /// use vector_mesh::MeshImporter;
    ///
    /// let scale = ImportScale::new(50.0, 2160).expect("valid scale");
    /// let importer = MeshImporter::with_scale(scale);
    /// assert_eq!(importer.target_resolution, 2160);
    /// ```
    pub fn with_scale(scale: ImportScale) -> Self {
        Self {
            pixels_per_unit: scale.pixels_per_unit,
            target_resolution: scale.target_resolution,
            ..Self::default()
        }
    }

    /// Returns a root transform mirroring the scene across the x axis.
    ///
    /// Vector documents use y-down coordinates; renderers with y-up
    /// conventions pass this as the root transform.
    pub fn flip_y_transform() -> DMat4 {
        DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0))
    }

    /// Resolves the tessellation options this importer would use for a
    /// scene. Exposed for diagnostics and previewing density settings.
    ///
    /// # Errors
    ///
    /// [`MeshError::MalformedScene`] when the scene has no root node.
    pub fn tessellation_options(&self, scene: &Scene) -> Result<TessellationOptions, MeshError> {
        let root = self.root_of(scene)?;
        let bounds = approximate_node_bounds(root);
        Ok(resolve_tessellation_options(
            bounds.size(),
            self.target_resolution,
            self.resolution_multiplier,
            self.sampling_step_distance,
            self.pixels_per_unit,
            self.advanced.as_ref(),
        ))
    }

    /// Meshes a scene as a flat 2D mesh at z = 0.
    ///
    /// # Errors
    ///
    /// [`MeshError::MalformedScene`] when the scene has no root node.
    pub fn scene_to_flat_mesh(
        &self,
        scene: &Scene,
        root_transform: DMat4,
    ) -> Result<Mesh, MeshError> {
        let root = self.root_of(scene)?;
        let options = self.tessellation_options(scene)?;
        let entries = flatten(root);
        let mut mesh = tessellate_front(&entries, &options);
        mesh.transform(&root_transform);
        Ok(mesh)
    }

    /// Meshes a scene, extruding it to the given depth.
    ///
    /// A zero depth short-circuits to the flat front mesh. Otherwise the
    /// output combines the side walls, the front face, and the
    /// winding-reversed back face offset by `extrusion_depth`, with
    /// recomputed normals and tangents.
    ///
    /// # Errors
    ///
    /// [`MeshError::MalformedScene`] when the scene has no root node.
    pub fn scene_to_mesh(
        &self,
        scene: &Scene,
        root_transform: DMat4,
        extrusion_depth: f64,
    ) -> Result<Mesh, MeshError> {
        if extrusion_depth == 0.0 {
            return self.scene_to_flat_mesh(scene, root_transform);
        }

        let root = self.root_of(scene)?;
        let options = self.tessellation_options(scene)?;
        let entries = flatten(root);

        let side_walls = extrude_side_walls(&entries, &options, extrusion_depth);
        let front = tessellate_front(&entries, &options);

        Ok(combine_extrusion(
            &side_walls,
            &front,
            extrusion_depth,
            &root_transform,
        ))
    }

    /// Resolves raster dimensions for this importer's texture settings.
    pub fn texture_dimensions(&self, bounds_size: glam::DVec2) -> (u32, u32) {
        resolve_texture_dimensions(
            bounds_size,
            self.texture_size,
            self.keep_texture_aspect_ratio,
            self.texture_width,
            self.texture_height,
        )
    }

    fn root_of<'a>(&self, scene: &'a Scene) -> Result<&'a SceneNode, MeshError> {
        scene.root.as_ref().ok_or(MeshError::MalformedScene)
    }
}
