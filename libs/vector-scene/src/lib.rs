//! # Vector Scene
//!
//! Data model for parsed vector-graphics scenes and the contour tracing
//! services consumed by the meshing pipeline.
//!
//! ## Architecture
//!
//! ```text
//! parser (external) → vector-scene (Scene tree) → vector-mesh (Mesh)
//! ```
//!
//! A [`Scene`] is a tree of [`SceneNode`]s, each carrying a local 2D affine
//! transform, a list of [`Shape`]s, and child nodes. Shapes hold closed or
//! open [`Contour`]s made of chained cubic Bézier segments, plus fill and
//! stroke properties.
//!
//! The scene tree is constructed once by the parser and treated as read-only
//! by everything in this workspace.

pub mod bounds;
pub mod scene;
pub mod shape;
pub mod trace;

pub use bounds::{approximate_node_bounds, SceneBounds};
pub use scene::{Scene, SceneNode};
pub use shape::{BezierSegment, Contour, Fill, Gradient, GradientStop, PathProps, Shape, Stroke};
pub use trace::{trace_contour, TessellationOptions};
