//! # Scene Tree
//!
//! Hierarchical scene representation produced by the vector parser.

use glam::DAffine2;
use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// A parsed vector-graphics scene.
///
/// The scene exclusively owns its node tree; nodes are never shared or
/// reused across scenes. A scene without a root is malformed and rejected
/// by the meshing pipeline before any tessellation work begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Root of the node tree, absent for malformed documents.
    pub root: Option<SceneNode>,
}

impl Scene {
    /// Creates a scene from a root node.
    pub fn new(root: SceneNode) -> Self {
        Self { root: Some(root) }
    }
}

/// One node of the scene tree.
///
/// Each node owns zero or more shapes, zero or more children, and a local
/// 2D affine transform. A shape's world transform is the parent-first
/// product of all ancestor transforms down to its owning node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    /// Local 2D affine transform, relative to the parent node.
    pub transform: DAffine2,
    /// Shapes owned by this node, in document order.
    pub shapes: Vec<Shape>,
    /// Child nodes, in document order.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an empty node with an identity transform.
    pub fn new() -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            shapes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a node holding the given shapes.
    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            shapes,
            children: Vec::new(),
        }
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_new_has_root() {
        let scene = Scene::new(SceneNode::new());
        assert!(scene.root.is_some());
    }

    #[test]
    fn test_node_defaults_to_identity() {
        let node = SceneNode::new();
        assert_eq!(node.transform, DAffine2::IDENTITY);
        assert!(node.shapes.is_empty());
        assert!(node.children.is_empty());
    }
}
