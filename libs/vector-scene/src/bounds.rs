//! # Approximate Scene Bounds
//!
//! Fast axis-aligned bounds over a node tree, used to derive tessellation
//! density. Control points of Bézier segments are folded directly, which
//! over-estimates curved regions slightly; that is acceptable for the
//! density heuristic.

use glam::{DAffine2, DVec2};

use crate::scene::SceneNode;

/// Axis-aligned bounding box of a scene subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    /// Minimum corner.
    pub min: DVec2,
    /// Maximum corner.
    pub max: DVec2,
}

impl SceneBounds {
    /// An empty bounds at the origin.
    pub const ZERO: Self = Self {
        min: DVec2::ZERO,
        max: DVec2::ZERO,
    };

    /// Returns the bounds extent.
    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

/// Computes the approximate world-space bounds of a node and its subtree.
///
/// Transforms are accumulated parent-first, matching the flattening pass.
/// A subtree containing no geometry yields [`SceneBounds::ZERO`].
pub fn approximate_node_bounds(node: &SceneNode) -> SceneBounds {
    let mut acc: Option<(DVec2, DVec2)> = None;
    fold_node(node, DAffine2::IDENTITY, &mut acc);
    match acc {
        Some((min, max)) => SceneBounds { min, max },
        None => SceneBounds::ZERO,
    }
}

fn fold_node(node: &SceneNode, parent: DAffine2, acc: &mut Option<(DVec2, DVec2)>) {
    let world = parent * node.transform;

    for shape in &node.shapes {
        for contour in &shape.contours {
            for segment in &contour.segments {
                for point in [segment.p0, segment.p1, segment.p2] {
                    let p = world.transform_point2(point);
                    *acc = Some(match *acc {
                        Some((min, max)) => (min.min(p), max.max(p)),
                        None => (p, p),
                    });
                }
            }
        }
    }

    for child in &node.children {
        fold_node(child, world, acc);
    }
}
