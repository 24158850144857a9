//! Per-frame gizmo driver
//!
//! [`TransformGizmo::frame`] runs the whole pipeline once per rendered frame:
//!
//! ```text
//! release check → layout + visibility → pick (idle only) → latch → draw list
//! ```
//!
//! [`TransformGizmo::frame_raw`] is the same pipeline behind the integer
//! boundary used by hosts that keep the active handle as a plain `i32`.

use glam::Vec2;
use tracing::{trace, warn};

use crate::config::{GizmoConfig, GizmoStyle};
use crate::draw::{DrawList, Highlight, build_draw_list};
use crate::handle::{Handle, TransformMode};
use crate::input::{GizmoFrameInput, finite_world};
use crate::layout::GizmoLayout;
use crate::picking::pick_handle;
use crate::ring::RingSet;
use crate::state::GizmoState;

/// Output of one gizmo frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GizmoFrame {
    /// Handle under the cursor (always `None` while dragging)
    pub hover: Option<Handle>,
    /// Handle being dragged after this frame's latch
    pub active: Option<Handle>,
    /// Boundary id of the dragged handle after this frame's latch (`0` when idle)
    pub active_id: i32,
    /// Primitives to paint, in order
    pub draw_list: DrawList,
}

/// Raw per-frame input as plain numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawFrameInput {
    /// Whether the host wants the gizmo shown
    pub visible: bool,
    /// `[cx, cy, xx, xy, yx, yy, zx, zy]`, NaN for absent points
    pub screen_points: [f32; 8],
    /// Transform mode index (`0..=3`)
    pub mode: i32,
    /// Gizmo origin in world space
    pub origin_world: [f32; 3],
    /// Camera position in world space
    pub camera_world: [f32; 3],
    /// Pointer position
    pub mouse_pos: [f32; 2],
    /// Primary button held
    pub mouse_down: bool,
    /// Primary button pressed this frame
    pub mouse_clicked: bool,
}

/// The transform gizmo
#[derive(Debug, Clone, PartialEq)]
pub struct TransformGizmo {
    enabled: bool,
    style: GizmoStyle,
}

impl Default for TransformGizmo {
    fn default() -> Self {
        Self::new(GizmoStyle::default())
    }
}

impl TransformGizmo {
    /// Create an enabled gizmo with the given style
    pub fn new(style: GizmoStyle) -> Self {
        Self {
            enabled: true,
            style,
        }
    }

    /// Create a gizmo from a loaded configuration
    pub fn from_config(config: &GizmoConfig) -> Self {
        Self {
            enabled: config.enabled,
            style: config.style.clone(),
        }
    }

    /// Current style
    pub fn style(&self) -> &GizmoStyle {
        &self.style
    }

    /// Replace the style
    pub fn set_style(&mut self, style: GizmoStyle) {
        self.style = style;
    }

    /// Whether the gizmo is shown at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show or hide the gizmo
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Run one frame
    pub fn frame(&self, state: &mut GizmoState, input: &GizmoFrameInput) -> GizmoFrame {
        state.begin_frame(input.mouse_down);

        if !self.enabled || !input.is_drawable() {
            state.release();
            return GizmoFrame::default();
        }

        let active_before = state.active();
        let mode = input.mode;
        let layout = GizmoLayout::new(input);
        let rings =
            (mode == TransformMode::Rotate).then(|| RingSet::new(&layout, input.view_direction()));

        let hover = if state.is_dragging() {
            None
        } else {
            pick_handle(&layout, rings.as_ref(), mode, input.mouse_pos)
        };
        if let Some(handle) = hover {
            trace!("Gizmo hover: handle {}", handle.id());
        }

        state.try_latch(hover, input.mouse_clicked);

        let highlight = Highlight {
            hover,
            active: active_before,
            dragging: state.is_dragging(),
        };
        let draw_list = build_draw_list(&layout, rings.as_ref(), mode, &self.style, highlight);

        GizmoFrame {
            hover,
            active: state.active(),
            active_id: state.active_id(),
            draw_list,
        }
    }

    /// Run one frame from raw numbers, reading and updating the host's
    /// active handle id in place.
    ///
    /// Unknown modes degrade to select. Active ids this crate does not pick
    /// (a host-owned handle) are kept as-is while the button stays down.
    pub fn frame_raw(&self, active_id: &mut i32, raw: &RawFrameInput) -> DrawList {
        let mode = TransformMode::try_from(raw.mode).unwrap_or_else(|e| {
            warn!("{e}, falling back to select");
            TransformMode::Select
        });
        let mut input = GizmoFrameInput::from_screen_points(&raw.screen_points, mode)
            .with_mouse(
                Vec2::from_array(raw.mouse_pos),
                raw.mouse_down,
                raw.mouse_clicked,
            )
            .with_world(
                finite_world(raw.origin_world),
                finite_world(raw.camera_world),
            );
        input.visible &= raw.visible;

        let mut state = GizmoState::with_active_id(*active_id);
        let frame = self.frame(&mut state, &input);
        *active_id = frame.active_id;
        frame.draw_list
    }
}
