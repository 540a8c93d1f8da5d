//! # Scene Flattening
//!
//! Converts the hierarchical scene tree into an ordered list of shapes
//! paired with their fully-resolved world transforms.
//!
//! The traversal is a pure recursive function threading the accumulated
//! transform explicitly; no shared traversal state exists, which keeps the
//! pass deterministic and trivially testable.

use glam::DAffine2;
use vector_scene::{SceneNode, Shape};

/// One shape paired with its accumulated world transform.
///
/// The transform is the parent-first product of every ancestor transform
/// down to the node owning the shape.
#[derive(Debug, Clone, Copy)]
pub struct FlatShapeEntry<'a> {
    /// The shape, borrowed from the scene tree.
    pub shape: &'a Shape,
    /// Accumulated local-to-world 2D transform.
    pub transform: DAffine2,
}

/// Flattens a node tree depth-first pre-order.
///
/// At each node the node's own shapes are appended first (in stored order),
/// each paired with the node's accumulated transform, then children are
/// visited. No shape is skipped or duplicated; output order is stable for
/// a given tree.
pub fn flatten(root: &SceneNode) -> Vec<FlatShapeEntry<'_>> {
    let mut entries = Vec::new();
    flatten_into(root, DAffine2::IDENTITY, &mut entries);
    entries
}

fn flatten_into<'a>(
    node: &'a SceneNode,
    parent: DAffine2,
    entries: &mut Vec<FlatShapeEntry<'a>>,
) {
    let world = parent * node.transform;

    for shape in &node.shapes {
        entries.push(FlatShapeEntry {
            shape,
            transform: world,
        });
    }

    for child in &node.children {
        flatten_into(child, world, entries);
    }
}
