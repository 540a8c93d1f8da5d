//! # Tessellation Parameter Resolution
//!
//! Computes tessellation density either from explicit advanced settings or
//! automatically from the scene bounding box and the target display
//! resolution.
//!
//! ## Automatic Mode
//!
//! The scene ratio (bounding-box size over effective target resolution)
//! estimates how much of the screen the scene covers; higher coverage gets
//! denser tessellation:
//!
//! ```text
//! max_dim     = max(width, height) / pixels_per_unit
//! scene_ratio = max_dim / (target_resolution * multiplier)
//! max_cord    = max(0.01, 75  * scene_ratio)
//! max_tangent = max(0.1,  100 * scene_ratio)
//! ```
//!
//! The coefficients were found by trial and error against a variety of
//! vector assets and are a fixed contract with the reference renderer.

use std::f64::consts::FRAC_PI_2;

use config::constants::{
    CORD_DEVIATION_SCENE_SCALE, EPSILON, MIN_CORD_DEVIATION, MIN_TANGENT_DEVIATION,
    TANGENT_DEVIATION_SCENE_SCALE,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};
pub use vector_scene::TessellationOptions;

/// Explicit tessellation settings used instead of the automatic heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvancedTessellation {
    /// Uniform step distance along paths.
    pub step_distance: f64,
    /// Maximum cord deviation; `None` leaves the constraint disabled
    /// (unbounded).
    pub max_cord_deviation: Option<f64>,
    /// Maximum tangent angle deviation in radians; `None` falls back to a
    /// right-angle ceiling.
    pub max_tangent_angle: Option<f64>,
}

/// Resolves tessellation options for a scene.
///
/// `bounds_size` is the world-space extent of the scene, `sampling_step_distance`
/// the number of samples evaluated per path unit. When `advanced` is absent
/// the density heuristic derives the cord and tangent constraints from the
/// scene's screen coverage.
///
/// Non-positive divisors (sampling step distance, target resolution,
/// pixels-per-unit) are clamped to a small epsilon rather than letting
/// NaN or infinity reach the mesh buffers.
pub fn resolve_tessellation_options(
    bounds_size: DVec2,
    target_resolution: u32,
    resolution_multiplier: f64,
    sampling_step_distance: f64,
    pixels_per_unit: f64,
    advanced: Option<&AdvancedTessellation>,
) -> TessellationOptions {
    let (step_distance, max_cord, max_tangent) = match advanced {
        Some(settings) => (
            settings.step_distance,
            settings.max_cord_deviation.unwrap_or(f64::INFINITY),
            settings.max_tangent_angle.unwrap_or(FRAC_PI_2),
        ),
        None => auto_constraints(
            bounds_size,
            target_resolution,
            resolution_multiplier,
            pixels_per_unit,
        ),
    };

    TessellationOptions {
        step_distance,
        max_cord_deviation: max_cord,
        max_tan_angle_deviation: max_tangent,
        sampling_step_size: 1.0 / sampling_step_distance.max(EPSILON),
    }
}

fn auto_constraints(
    bounds_size: DVec2,
    target_resolution: u32,
    resolution_multiplier: f64,
    pixels_per_unit: f64,
) -> (f64, f64, f64) {
    let max_dim = bounds_size.x.max(bounds_size.y) / pixels_per_unit.max(EPSILON);

    let effective_resolution =
        (target_resolution as f64 * resolution_multiplier).max(EPSILON);
    let scene_ratio = max_dim / effective_resolution;

    // No need for uniform step distance in automatic mode.
    let step_distance = f64::INFINITY;
    let max_cord = (CORD_DEVIATION_SCENE_SCALE * scene_ratio).max(MIN_CORD_DEVIATION);
    let max_tangent = (TANGENT_DEVIATION_SCENE_SCALE * scene_ratio).max(MIN_TANGENT_DEVIATION);

    (step_distance, max_cord, max_tangent)
}
