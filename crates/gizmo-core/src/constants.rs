//! Global constants for gizmo-core
//!
//! Lengths marked "of reference" are fractions of the longest projected axis
//! (see [`crate::layout::GizmoLayout::reference_length`]). Everything else is
//! in screen pixels.

/// Axis-to-reference ratio at or below which an axis is fully hidden
pub const FADE_HIDDEN_END: f32 = 0.10;

/// Axis-to-reference ratio at or above which an axis is fully visible
pub const FADE_VISIBLE_START: f32 = 0.20;

/// Minimum visibility for an axis or plane handle to be pickable
pub const PICK_VISIBILITY_THRESHOLD: f32 = 0.2;

/// Pixel budget for axis-line picking
pub const AXIS_PICK_DISTANCE: f32 = 10.0;

/// Pixel threshold for rotation-ring picking
pub const RING_PICK_DISTANCE: f32 = 8.0;

/// Pixel threshold for the view ring and the uniform-scale ring
pub const CIRCLE_PICK_DISTANCE: f32 = 9.0;

/// Inner edge of the plane handle band (of reference)
pub const PLANE_BAND_INNER: f32 = 0.22;

/// Outer edge of the plane handle band (of reference)
pub const PLANE_BAND_OUTER: f32 = 0.38;

/// Rotation ring radius (of reference)
pub const ROTATION_RING_SCALE: f32 = 0.9;

/// Inner occluder sphere radius (of reference)
pub const INNER_OCCLUDER_SCALE: f32 = 0.86;

/// View (free) rotation ring radius (of reference)
pub const VIEW_RING_SCALE: f32 = 1.05;

/// Uniform-scale ring radius (of reference)
pub const UNIFORM_RING_SCALE: f32 = 1.25;

/// Number of samples along each rotation ring
pub const RING_SEGMENTS: usize = 64;

/// Lower bound applied to the reference length
pub const MIN_REFERENCE_LENGTH: f32 = 1.0;

/// Reference lengths below this are treated as degenerate
pub const REFERENCE_EPSILON: f32 = 1e-5;

/// Vector lengths below this normalize to zero
pub const NORMALIZE_EPSILON: f32 = 1e-5;

/// Squared segment lengths below this skip the occluder intersection
pub const QUADRATIC_EPSILON: f32 = 1e-10;
