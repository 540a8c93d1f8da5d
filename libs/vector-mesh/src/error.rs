//! # Mesh Errors
//!
//! Error types for the meshing pipeline.
//!
//! Only malformed scenes are hard failures. Degenerate geometry (contours
//! tracing to fewer than two points, shapes without contours) and invalid
//! configuration values are absorbed locally, producing smaller or empty
//! output instead of an error.

use thiserror::Error;

/// Errors that can occur while meshing a scene.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The parsed scene has no root node. Raised before any tessellation
    /// work begins.
    #[error("malformed scene: missing root node")]
    MalformedScene,
}
