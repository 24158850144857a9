//! Interaction state carried across frames
//!
//! Two states driven by a single field: idle (`active_id == 0`) and dragging
//! (any other id). A drag starts on the press edge over a hovered handle and
//! ends as soon as the button is observed up.

use tracing::debug;

use crate::handle::{Handle, handle_to_id};

/// Persistent gizmo interaction state.
///
/// The active handle is kept as its boundary id so that ids latched by the
/// host itself (for handles this crate never picks) survive a drag unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GizmoState {
    active_id: i32,
}

impl GizmoState {
    /// Create an idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a state from a host-held handle
    pub fn with_active(active: Option<Handle>) -> Self {
        Self::with_active_id(handle_to_id(active))
    }

    /// Restore a state from a host-held boundary id (`0` for idle)
    pub fn with_active_id(active_id: i32) -> Self {
        Self { active_id }
    }

    /// Handle currently being dragged, if it is one this crate knows
    pub fn active(&self) -> Option<Handle> {
        Handle::from_id(self.active_id)
    }

    /// Boundary id of the dragged handle (`0` when idle)
    pub fn active_id(&self) -> i32 {
        self.active_id
    }

    /// Whether a handle is being dragged
    pub fn is_dragging(&self) -> bool {
        self.active_id != 0
    }

    /// Top-of-frame update: a released button ends any drag
    pub fn begin_frame(&mut self, mouse_down: bool) {
        if !mouse_down {
            self.release();
        }
    }

    /// Start dragging `hover` if idle and the button was just pressed.
    ///
    /// Returns `true` when a drag started this frame.
    pub fn try_latch(&mut self, hover: Option<Handle>, mouse_clicked: bool) -> bool {
        if self.is_dragging() || !mouse_clicked {
            return false;
        }
        let Some(handle) = hover else {
            return false;
        };
        debug!("Gizmo drag started on handle {}", handle.id());
        self.active_id = handle.id();
        true
    }

    /// End any drag
    pub fn release(&mut self) {
        if self.is_dragging() {
            debug!("Gizmo drag released from handle {}", self.active_id);
            self.active_id = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{Plane, TransformMode};

    fn plane_xy() -> Option<Handle> {
        Handle::plane_handle(TransformMode::Translate, Plane::XY)
    }

    #[test]
    fn test_latch_requires_press_and_hover() {
        let mut state = GizmoState::new();
        assert!(!state.try_latch(plane_xy(), false));
        assert!(!state.try_latch(None, true));
        assert!(!state.is_dragging());
        assert!(state.try_latch(plane_xy(), true));
        assert_eq!(state.active_id(), 4);
    }

    #[test]
    fn test_dragging_is_sticky_until_release() {
        let mut state = GizmoState::new();
        state.begin_frame(true);
        state.try_latch(plane_xy(), true);

        // Button held, a different hover and another click do not steal it.
        let other = Handle::from_id(1);
        for _ in 0..5 {
            state.begin_frame(true);
            assert!(!state.try_latch(other, true));
            assert_eq!(state.active_id(), 4);
        }

        state.begin_frame(false);
        assert!(!state.is_dragging());
        assert_eq!(state.active_id(), 0);
    }

    #[test]
    fn test_unknown_host_id_is_sticky() {
        let mut state = GizmoState::with_active_id(7);
        assert!(state.is_dragging());
        assert_eq!(state.active(), None);

        state.begin_frame(true);
        assert!(!state.try_latch(plane_xy(), true));
        assert_eq!(state.active_id(), 7);

        state.begin_frame(false);
        assert_eq!(state.active_id(), 0);
    }

    #[test]
    fn test_with_active() {
        let state = GizmoState::with_active(Handle::from_id(27));
        assert!(state.is_dragging());
        assert_eq!(state.active_id(), 27);
    }
}
