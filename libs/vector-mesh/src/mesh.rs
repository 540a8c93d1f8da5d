//! # Mesh Data Structure
//!
//! Triangle mesh with per-vertex colors, normals, and tangents.

use config::constants::NEUTRAL_COLOR;
use glam::{DMat4, DVec3, DVec4};

/// A triangle mesh with vertices, indices, and optional vertex attributes.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary.
///
/// # Example
///
/// ```rust
/// use vector_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex colors (RGBA, f32 for GPU)
    colors: Option<Vec<[f32; 4]>>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
    /// Optional vertex tangents (xyz direction, w handedness)
    tangents: Option<Vec<DVec4>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            colors: None,
            normals: None,
            tangents: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
            normals: None,
            tangents: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a vertex with a color and returns its index.
    ///
    /// Vertices added through [`Mesh::add_vertex`] on a colored mesh pick up
    /// the neutral color.
    pub fn add_colored_vertex(&mut self, position: DVec3, color: [f32; 4]) -> u32 {
        let index = self.add_vertex(position);
        let colors = self.colors.get_or_insert_with(Vec::new);
        colors.resize(index as usize, NEUTRAL_COLOR);
        colors.push(color);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Sets vertex colors.
    pub fn set_colors(&mut self, colors: Vec<[f32; 4]>) {
        self.colors = Some(colors);
    }

    /// Sets a uniform color for all vertices.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        let colors = vec![color; self.vertices.len()];
        self.colors = Some(colors);
    }

    /// Returns the vertex colors.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the vertex tangents.
    pub fn tangents(&self) -> Option<&[DVec4]> {
        self.tangents.as_deref()
    }

    /// Reverses the winding of every triangle by swapping each triple's
    /// first and last index. Flips face orientation without touching
    /// vertex positions.
    pub fn reverse_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(0, 2);
        }
    }

    /// Computes smooth per-vertex normals from triangle topology.
    ///
    /// Face normals are accumulated area-weighted onto their vertices and
    /// normalized, preserving the winding convention of the triangles.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            let normal = edge1.cross(edge2);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes per-vertex tangents for downstream shading.
    ///
    /// The pipeline emits no texture coordinates, so tangents are derived
    /// directly from the normals: any stable direction orthogonal to the
    /// normal, with positive handedness. Requires normals; call
    /// [`Mesh::compute_normals`] first.
    pub fn compute_tangents(&mut self) {
        let normals = match &self.normals {
            Some(normals) => normals,
            None => return,
        };

        let tangents = normals
            .iter()
            .map(|n| {
                let reference = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
                let tangent = reference.cross(*n);
                let len = tangent.length();
                let dir = if len > 0.0 { tangent / len } else { DVec3::X };
                DVec4::new(dir.x, dir.y, dir.z, 1.0)
            })
            .collect();

        self.tangents = Some(tangents);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Normals use the inverse transpose
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize();
            }
        }
    }

    /// Merges another mesh after transforming its vertices by a 4x4 matrix.
    ///
    /// This is the sub-mesh combination primitive: the source mesh is left
    /// untouched and its triangles land in this mesh's buffers with the
    /// proper index offset. Pass [`DMat4::IDENTITY`] for an untransformed
    /// merge.
    pub fn merge_transformed(&mut self, other: &Mesh, matrix: &DMat4) {
        let offset = self.vertices.len() as u32;

        self.vertices.reserve(other.vertices.len());
        for v in &other.vertices {
            self.vertices.push(matrix.transform_point3(*v));
        }

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        // Keep color buffers aligned: pad whichever side lacks colors.
        match (&mut self.colors, &other.colors) {
            (Some(self_colors), Some(other_colors)) => {
                self_colors.extend_from_slice(other_colors);
            }
            (Some(self_colors), None) => {
                self_colors.resize(self.vertices.len(), NEUTRAL_COLOR);
            }
            (None, Some(other_colors)) => {
                let mut colors = vec![NEUTRAL_COLOR; offset as usize];
                colors.extend_from_slice(other_colors);
                self.colors = Some(colors);
            }
            (None, None) => {}
        }
    }

    /// Validates the mesh for index consistency.
    ///
    /// Every triangle index must address an existing vertex, and attribute
    /// buffers (when present) must match the vertex count.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }
        }

        if let Some(colors) = &self.colors {
            if colors.len() != self.vertices.len() {
                return false;
            }
        }
        if let Some(normals) = &self.normals {
            if normals.len() != self.vertices.len() {
                return false;
            }
        }
        if let Some(tangents) = &self.tangents {
            if tangents.len() != self.vertices.len() {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_colored_vertex_pads_earlier_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_colored_vertex(DVec3::X, [1.0, 0.0, 0.0, 1.0]);
        let colors = mesh.colors().unwrap();
        assert_eq!(colors[0], NEUTRAL_COLOR);
        assert_eq!(colors[1], [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_reverse_winding_swaps_first_and_last() {
        let mut mesh = triangle_mesh();
        mesh.reverse_winding();
        assert_eq!(mesh.triangle(0), [2, 1, 0]);
    }

    #[test]
    fn test_compute_normals_ccw_faces_plus_z() {
        let mut mesh = triangle_mesh();
        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert_relative_eq!(normals[0].z, 1.0);
    }

    #[test]
    fn test_compute_tangents_orthogonal_to_normals() {
        let mut mesh = triangle_mesh();
        mesh.compute_normals();
        mesh.compute_tangents();
        let normals = mesh.normals().unwrap();
        let tangents = mesh.tangents().unwrap();
        for (n, t) in normals.iter().zip(tangents.iter()) {
            let dir = DVec3::new(t.x, t.y, t.z);
            assert_relative_eq!(n.dot(dir), 0.0, epsilon = 1.0e-9);
            assert_relative_eq!(dir.length(), 1.0, epsilon = 1.0e-9);
            assert_eq!(t.w, 1.0);
        }
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut mesh1 = triangle_mesh();
        let mesh2 = triangle_mesh();
        mesh1.merge_transformed(&mesh2, &DMat4::IDENTITY);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]);
    }

    #[test]
    fn test_merge_pads_missing_colors() {
        let mut plain = triangle_mesh();
        let mut colored = triangle_mesh();
        colored.set_uniform_color([0.0, 1.0, 0.0, 1.0]);
        plain.merge_transformed(&colored, &DMat4::IDENTITY);
        let colors = plain.colors().unwrap();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], NEUTRAL_COLOR);
        assert_eq!(colors[3], [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_merge_transformed_moves_vertices() {
        let mut target = Mesh::new();
        let source = triangle_mesh();
        let matrix = DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0));
        target.merge_transformed(&source, &matrix);
        assert_relative_eq!(target.vertex(0).z, 5.0);
        assert_eq!(target.triangle_count(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }
}
