//! Per-frame screen layout shared by picking and drawing

use glam::Vec2;

use crate::constants::{
    INNER_OCCLUDER_SCALE, MIN_REFERENCE_LENGTH, PLANE_BAND_INNER, PLANE_BAND_OUTER,
    UNIFORM_RING_SCALE, VIEW_RING_SCALE,
};
use crate::geometry::direction_or_zero;
use crate::handle::{Axis, Plane};
use crate::input::GizmoFrameInput;
use crate::visibility::AxisVisibility;

/// Screen-space gizmo geometry derived from one frame's input.
///
/// Absent axes contribute a zero vector and zero length, so they never win
/// the reference length and fade to zero visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoLayout {
    center: Vec2,
    ends: [Option<Vec2>; 3],
    vectors: [Vec2; 3],
    lengths: [f32; 3],
    reference_length: f32,
    visibility: AxisVisibility,
}

impl GizmoLayout {
    /// Derive the layout from frame input
    pub fn new(input: &GizmoFrameInput) -> Self {
        let center = input.center;
        let ends = input.axis_ends;
        let vectors = ends.map(|end| end.map_or(Vec2::ZERO, |e| e - center));
        let lengths = vectors.map(Vec2::length);
        let reference_length = lengths
            .iter()
            .copied()
            .fold(MIN_REFERENCE_LENGTH, f32::max);
        let visibility = AxisVisibility::from_lengths(lengths, reference_length);

        Self {
            center,
            ends,
            vectors,
            lengths,
            reference_length,
            visibility,
        }
    }

    /// Projected origin
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Projected axis end, if the axis is present
    pub fn axis_end(&self, axis: Axis) -> Option<Vec2> {
        self.ends[axis.index()]
    }

    /// Whether the axis is present
    pub fn has_axis(&self, axis: Axis) -> bool {
        self.ends[axis.index()].is_some()
    }

    /// Screen vector from center to axis end (zero when absent)
    pub fn axis_vector(&self, axis: Axis) -> Vec2 {
        self.vectors[axis.index()]
    }

    /// Unit screen direction of an axis (zero when absent or degenerate)
    pub fn axis_direction(&self, axis: Axis) -> Vec2 {
        direction_or_zero(self.axis_vector(axis))
    }

    /// Projected length of an axis
    pub fn axis_length(&self, axis: Axis) -> f32 {
        self.lengths[axis.index()]
    }

    /// Longest projected axis, never below one pixel
    pub fn reference_length(&self) -> f32 {
        self.reference_length
    }

    /// Fade values for this frame
    pub fn visibility(&self) -> &AxisVisibility {
        &self.visibility
    }

    /// Radius of the central occluder sphere
    pub fn inner_radius(&self) -> f32 {
        self.reference_length * INNER_OCCLUDER_SCALE
    }

    /// Radius of the free-rotation ring
    pub fn view_ring_radius(&self) -> f32 {
        self.reference_length * VIEW_RING_SCALE
    }

    /// Radius of the uniform-scale ring
    pub fn uniform_ring_radius(&self) -> f32 {
        self.reference_length * UNIFORM_RING_SCALE
    }

    /// Corners of a plane handle, or `None` if either axis is absent.
    ///
    /// The quad spans `[0.22, 0.38]` of each constituent axis vector.
    pub fn plane_quad(&self, plane: Plane) -> Option<[Vec2; 4]> {
        let (a, b) = plane.axes();
        if !self.has_axis(a) || !self.has_axis(b) {
            return None;
        }
        let va = self.axis_vector(a);
        let vb = self.axis_vector(b);
        let corner = |sa: f32, sb: f32| self.center + va * sa + vb * sb;
        Some([
            corner(PLANE_BAND_INNER, PLANE_BAND_INNER),
            corner(PLANE_BAND_OUTER, PLANE_BAND_INNER),
            corner(PLANE_BAND_OUTER, PLANE_BAND_OUTER),
            corner(PLANE_BAND_INNER, PLANE_BAND_OUTER),
        ])
    }
}
