//! Centralized configuration values shared across the vector mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used by geometry kernels.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-10;

/// Bounds below this height are treated as degenerate when deriving texture
/// dimensions, falling back to a square output.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_BOUNDS_EPSILON;
/// assert!(DEGENERATE_BOUNDS_EPSILON > 0.0);
/// ```
pub const DEGENERATE_BOUNDS_EPSILON: f64 = 1.0e-6;

/// Scene-ratio coefficient for the maximum cord deviation heuristic.
///
/// Found by trial and error against a variety of vector assets; must match
/// the reference renderer exactly to reproduce its tessellation density.
///
/// # Examples
/// ```
/// use config::constants::CORD_DEVIATION_SCENE_SCALE;
/// assert_eq!(CORD_DEVIATION_SCENE_SCALE, 75.0);
/// ```
pub const CORD_DEVIATION_SCENE_SCALE: f64 = 75.0;

/// Scene-ratio coefficient for the maximum tangent angle heuristic.
///
/// Like [`CORD_DEVIATION_SCENE_SCALE`], a fixed contract with the reference
/// renderer rather than a tunable default.
///
/// # Examples
/// ```
/// use config::constants::TANGENT_DEVIATION_SCENE_SCALE;
/// assert_eq!(TANGENT_DEVIATION_SCENE_SCALE, 100.0);
/// ```
pub const TANGENT_DEVIATION_SCENE_SCALE: f64 = 100.0;

/// Floor for the automatically derived maximum cord deviation.
///
/// Keeps tessellation density bounded for tiny or degenerate scenes.
///
/// # Examples
/// ```
/// use config::constants::MIN_CORD_DEVIATION;
/// assert_eq!(MIN_CORD_DEVIATION, 0.01);
/// ```
pub const MIN_CORD_DEVIATION: f64 = 0.01;

/// Floor for the automatically derived maximum tangent angle deviation,
/// in radians.
///
/// # Examples
/// ```
/// use config::constants::MIN_TANGENT_DEVIATION;
/// assert_eq!(MIN_TANGENT_DEVIATION, 0.1);
/// ```
pub const MIN_TANGENT_DEVIATION: f64 = 0.1;

/// Default number of pixels per scene unit.
///
/// A viewbox-sized document imported at this scale produces geometry of
/// size 1 in scene units.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PIXELS_PER_UNIT;
/// assert_eq!(DEFAULT_PIXELS_PER_UNIT, 100.0);
/// ```
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 100.0;

/// Default display resolution the tessellation density targets.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TARGET_RESOLUTION;
/// assert_eq!(DEFAULT_TARGET_RESOLUTION, 1080);
/// ```
pub const DEFAULT_TARGET_RESOLUTION: u32 = 1080;

/// Default multiplier applied on top of the target resolution.
pub const DEFAULT_RESOLUTION_MULTIPLIER: f64 = 1.0;

/// Default number of samples evaluated per path unit.
///
/// The tessellator's sampling step size is the inverse of this density.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SAMPLING_STEP_DISTANCE;
/// assert_eq!(DEFAULT_SAMPLING_STEP_DISTANCE, 100.0);
/// ```
pub const DEFAULT_SAMPLING_STEP_DISTANCE: f64 = 100.0;

/// Default uniform step distance used in advanced tessellation mode.
pub const DEFAULT_STEP_DISTANCE: f64 = 10.0;

/// Default maximum cord deviation used when the advanced-mode constraint
/// is enabled.
pub const DEFAULT_MAX_CORD_DEVIATION: f64 = 1.0;

/// Default maximum tangent angle deviation (5 degrees in radians) used when
/// the advanced-mode constraint is enabled.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_TANGENT_ANGLE;
/// assert!((DEFAULT_MAX_TANGENT_ANGLE - 5.0_f64.to_radians()).abs() < 1.0e-12);
/// ```
pub const DEFAULT_MAX_TANGENT_ANGLE: f64 = 0.08726646259971647;

/// Default edge length of a generated texture when preserving aspect ratio.
pub const DEFAULT_TEXTURE_SIZE: u32 = 1024;

/// Default explicit texture width when not preserving aspect ratio.
pub const DEFAULT_TEXTURE_WIDTH: u32 = 1024;

/// Default explicit texture height when not preserving aspect ratio.
pub const DEFAULT_TEXTURE_HEIGHT: u32 = 256;

/// Neutral RGBA vertex color assigned where a shape's fill carries no solid
/// color (gradient or absent fills).
///
/// # Examples
/// ```
/// use config::constants::NEUTRAL_COLOR;
/// assert_eq!(NEUTRAL_COLOR, [0.0, 0.0, 0.0, 0.0]);
/// ```
pub const NEUTRAL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Immutable snapshot of the scale settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ImportScale;
/// let scale = ImportScale::default();
/// assert!(scale.pixels_per_unit > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportScale {
    /// Pixels per scene unit propagated into the tessellation heuristic.
    pub pixels_per_unit: f64,
    /// Display resolution the tessellation density targets.
    pub target_resolution: u32,
}

impl ImportScale {
    /// Builds a scale configuration enforcing strict validation of the
    /// supplied values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ImportScale;
    /// let scale = ImportScale::new(100.0, 2160).expect("valid scale");
    /// assert_eq!(scale.target_resolution, 2160);
    /// ```
    pub fn new(pixels_per_unit: f64, target_resolution: u32) -> Result<Self, ConfigError> {
        if pixels_per_unit <= 0.0 {
            return Err(ConfigError::InvalidPixelsPerUnit(pixels_per_unit));
        }
        if target_resolution == 0 {
            return Err(ConfigError::InvalidTargetResolution(target_resolution));
        }
        Ok(Self {
            pixels_per_unit,
            target_resolution,
        })
    }
}

impl Default for ImportScale {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            target_resolution: DEFAULT_TARGET_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when pixels-per-unit is zero or negative.
    InvalidPixelsPerUnit(f64),
    /// Raised when the target resolution is zero.
    InvalidTargetResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPixelsPerUnit(value) => {
                write!(f, "pixels_per_unit must be positive: {value}")
            }
            ConfigError::InvalidTargetResolution(value) => {
                write!(f, "target_resolution must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
