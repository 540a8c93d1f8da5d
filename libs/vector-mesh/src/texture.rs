//! # Texture Dimension Resolution
//!
//! Derives output raster dimensions from a shape's bounding box and a
//! target size, optionally preserving aspect ratio.

use config::constants::DEGENERATE_BOUNDS_EPSILON;
use glam::DVec2;

/// Resolves the raster dimensions for a scene with the given bounds.
///
/// With `keep_aspect_ratio` off, the explicit width and height pass
/// through unchanged. With it on, the longer bounds axis gets
/// `texture_size` pixels and the other axis is rounded to nearest; bounds
/// with near-zero height fall back to a square to avoid dividing by zero.
pub fn resolve_texture_dimensions(
    bounds_size: DVec2,
    texture_size: u32,
    keep_aspect_ratio: bool,
    explicit_width: u32,
    explicit_height: u32,
) -> (u32, u32) {
    if !keep_aspect_ratio {
        return (explicit_width, explicit_height);
    }

    if bounds_size.y < DEGENERATE_BOUNDS_EPSILON {
        return (texture_size, texture_size);
    }

    let ratio = bounds_size.x / bounds_size.y;
    if ratio >= 1.0 {
        let height = (texture_size as f64 / ratio).round() as u32;
        (texture_size, height)
    } else {
        let width = (texture_size as f64 * ratio).round() as u32;
        (width, texture_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dimensions_pass_through() {
        let dims = resolve_texture_dimensions(DVec2::new(400.0, 100.0), 1024, false, 800, 600);
        assert_eq!(dims, (800, 600));
    }

    #[test]
    fn test_wide_bounds() {
        let dims = resolve_texture_dimensions(DVec2::new(400.0, 100.0), 1024, true, 0, 0);
        assert_eq!(dims, (1024, 256));
    }

    #[test]
    fn test_tall_bounds() {
        let dims = resolve_texture_dimensions(DVec2::new(100.0, 400.0), 1024, true, 0, 0);
        assert_eq!(dims, (256, 1024));
    }

    #[test]
    fn test_square_bounds() {
        let dims = resolve_texture_dimensions(DVec2::new(250.0, 250.0), 1024, true, 0, 0);
        assert_eq!(dims, (1024, 1024));
    }

    #[test]
    fn test_degenerate_height_falls_back_to_square() {
        let dims = resolve_texture_dimensions(DVec2::new(123.0, 0.0), 1024, true, 0, 0);
        assert_eq!(dims, (1024, 1024));
    }

    #[test]
    fn test_rounding_to_nearest() {
        // ratio = 3 -> 1024 / 3 = 341.33, rounds to 341.
        let dims = resolve_texture_dimensions(DVec2::new(300.0, 100.0), 1024, true, 0, 0);
        assert_eq!(dims, (1024, 341));
    }
}
