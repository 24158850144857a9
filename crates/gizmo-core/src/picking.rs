//! Hover picking
//!
//! Finds the handle under the cursor for one frame. Candidates are tested in a
//! fixed priority order and the closest one within its pixel budget wins:
//!
//! 1. Axis lines, gated by axis visibility.
//! 2. Plane quads (translate / scale). Containment overrides any axis hit.
//! 3. Rotation rings (rotate), measured against their clipped spans.
//! 4. The view ring (rotate).
//! 5. The inner sphere (rotate), only if nothing else matched.
//! 6. The uniform ring (scale).
//!
//! Picking is a pure function of its inputs; the caller decides whether it
//! runs at all (it must not while a handle is being dragged).

use glam::Vec2;

use crate::constants::{AXIS_PICK_DISTANCE, CIRCLE_PICK_DISTANCE, RING_PICK_DISTANCE};
use crate::geometry::{distance_to_segment, point_in_quad};
use crate::handle::{Axis, Handle, HandleKind, Plane, TransformMode};
use crate::layout::GizmoLayout;
use crate::ring::RingSet;

/// Closest candidate seen so far
struct Candidate {
    best: f32,
    handle: Option<Handle>,
}

impl Candidate {
    fn new() -> Self {
        Self {
            best: AXIS_PICK_DISTANCE,
            handle: None,
        }
    }

    /// Accept `handle` if it is strictly closer than the current best
    fn offer(&mut self, distance: f32, handle: Option<Handle>) {
        if distance < self.best {
            self.best = distance;
            self.handle = handle;
        }
    }
}

/// Compute the hover handle for the mouse position.
///
/// `rings` is only consulted in rotate mode; pass the same [`RingSet`] that
/// is used for drawing so both agree on visible ring spans. A non-finite
/// mouse position never hovers anything.
pub fn pick_handle(
    layout: &GizmoLayout,
    rings: Option<&RingSet>,
    mode: TransformMode,
    mouse: Vec2,
) -> Option<Handle> {
    if mode == TransformMode::Select || !mouse.is_finite() {
        return None;
    }

    let visibility = layout.visibility();
    let center = layout.center();
    let mut pick = Candidate::new();

    for axis in Axis::ALL {
        let Some(end) = layout.axis_end(axis) else {
            continue;
        };
        if !visibility.axis_pickable(axis) {
            continue;
        }
        pick.offer(
            distance_to_segment(mouse, center, end),
            Handle::axis_handle(mode, axis),
        );
    }

    if mode.has_plane_handles() {
        for plane in Plane::ALL {
            if !visibility.plane_pickable(plane) {
                continue;
            }
            let Some(quad) = layout.plane_quad(plane) else {
                continue;
            };
            // Containment wins outright; the distance budget is left as is.
            if point_in_quad(mouse, &quad) {
                pick.handle = Handle::plane_handle(mode, plane);
            }
        }
    }

    let from_center = mouse.distance(center);

    if mode == TransformMode::Rotate {
        if let Some(rings) = rings {
            for ring in rings.iter() {
                let axis = ring.axis();
                if !visibility.axis_pickable(axis) {
                    continue;
                }
                let d = ring.distance_to(mouse);
                if d < RING_PICK_DISTANCE {
                    pick.offer(d, Handle::axis_handle(mode, axis));
                }
            }
        }

        let d = (from_center - layout.view_ring_radius()).abs();
        if d < pick.best && d < CIRCLE_PICK_DISTANCE {
            pick.handle = Handle::new(mode, HandleKind::ViewRing);
        }

        if from_center <= layout.inner_radius() && pick.handle.is_none() {
            pick.handle = Handle::new(mode, HandleKind::InnerSphere);
        }
    }

    if mode == TransformMode::Scale {
        let d = (from_center - layout.uniform_ring_radius()).abs();
        if d < pick.best && d < CIRCLE_PICK_DISTANCE {
            pick.handle = Handle::new(mode, HandleKind::UniformRing);
        }
    }

    pick.handle
}
