//! Foreshortening fade for projected axes
//!
//! An axis pointing almost straight at the camera projects to a very short
//! segment. Such axes fade out smoothly between 20% and 10% of the longest
//! projected axis and stop being pickable once faded below the pick gate.

use crate::constants::{
    FADE_HIDDEN_END, FADE_VISIBLE_START, PICK_VISIBILITY_THRESHOLD, REFERENCE_EPSILON,
};
use crate::handle::{Axis, Plane};

/// Map a length ratio to an opacity in `[0, 1]`.
///
/// `r <= 0.10` is hidden, `r >= 0.20` is fully visible, linear in between.
pub fn fade_from_ratio(ratio: f32) -> f32 {
    if ratio <= FADE_HIDDEN_END {
        return 0.0;
    }
    if ratio >= FADE_VISIBLE_START {
        return 1.0;
    }
    (ratio - FADE_HIDDEN_END) / (FADE_VISIBLE_START - FADE_HIDDEN_END)
}

/// Visibility of an axis of projected length `axis_len`.
///
/// A degenerate reference length yields zero instead of dividing by it.
pub fn axis_visibility(axis_len: f32, ref_len: f32) -> f32 {
    let ratio = if ref_len > REFERENCE_EPSILON {
        axis_len / ref_len
    } else {
        0.0
    };
    fade_from_ratio(ratio)
}

/// Per-axis visibility for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisVisibility {
    axes: [f32; 3],
}

impl AxisVisibility {
    /// Compute visibilities from projected axis lengths
    pub fn from_lengths(lengths: [f32; 3], ref_len: f32) -> Self {
        Self {
            axes: lengths.map(|len| axis_visibility(len, ref_len)),
        }
    }

    /// Visibility of a single axis
    pub fn axis(&self, axis: Axis) -> f32 {
        self.axes[axis.index()]
    }

    /// Visibility of a plane: the weaker of its two axes
    pub fn plane(&self, plane: Plane) -> f32 {
        let (a, b) = plane.axes();
        self.axis(a).min(self.axis(b))
    }

    /// Whether an axis handle may be picked
    pub fn axis_pickable(&self, axis: Axis) -> bool {
        self.axis(axis) >= PICK_VISIBILITY_THRESHOLD
    }

    /// Whether a plane handle may be picked
    pub fn plane_pickable(&self, plane: Plane) -> bool {
        self.plane(plane) >= PICK_VISIBILITY_THRESHOLD
    }
}
