//! Demo viewport panel
//!
//! Owns the orbit camera and the gizmo interaction state. Each frame it
//! projects the gizmo axes, feeds the core, and paints the returned list over
//! a simple ground grid.

use egui::PointerButton;
use gizmo_core::{
    Axis, GizmoFrame, GizmoFrameInput, GizmoState, Handle, HandleKind, TransformGizmo,
    TransformMode,
};
use glam::{Vec2, Vec3};
use tracing::debug;

use crate::camera::Camera;
use crate::painter::paint_draw_list;
use crate::theme;

/// Half extent of the ground grid in world units
const GRID_EXTENT: i32 = 5;

/// Orbit sensitivity in radians per pixel
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Viewport panel
pub struct ViewportPanel {
    camera: Camera,
    gizmo_origin: Vec3,
    state: GizmoState,
    last_active: Option<Handle>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(1.0),
            gizmo_origin: Vec3::ZERO,
            state: GizmoState::new(),
            last_active: None,
        }
    }

    /// Boundary id of the handle being dragged (`0` when idle)
    pub fn active_id(&self) -> i32 {
        self.state.active_id()
    }

    /// Draw the viewport and run one gizmo frame
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        gizmo: &TransformGizmo,
        mode: TransformMode,
    ) -> GizmoFrame {
        let available_size = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let rect = response.rect;

        self.camera.update_aspect(rect.width() / rect.height());

        // Right mouse button orbits; the primary button belongs to the gizmo
        if response.dragged_by(PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera
                .orbit(-delta.x * ORBIT_SENSITIVITY, delta.y * ORBIT_SENSITIVITY);
        }

        if response.hovered() {
            let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll_delta != 0.0 {
                self.camera.zoom(scroll_delta * 0.01);
            }
        }

        painter.rect_filled(rect, 0.0, theme::BG_BASE);
        self.paint_grid(&painter, rect);

        let (pointer, mouse_down, mouse_clicked) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_down(),
                i.pointer.primary_pressed(),
            )
        });
        // Presses outside the viewport must not start a drag
        let mouse_clicked = mouse_clicked && response.hovered();
        let mouse_pos = pointer.map_or(Vec2::NAN, |p| Vec2::new(p.x, p.y));

        let input = self
            .frame_input(rect, mode)
            .with_mouse(mouse_pos, mouse_down, mouse_clicked)
            .with_world(Some(self.gizmo_origin), Some(self.camera.position));
        let frame = gizmo.frame(&mut self.state, &input);

        if frame.active != self.last_active {
            match frame.active {
                Some(handle) => debug!("Dragging {}", handle_label(handle)),
                None => debug!("Gizmo idle"),
            }
            self.last_active = frame.active;
        }

        paint_draw_list(&painter, &frame.draw_list);

        if let Some(handle) = frame.active.or(frame.hover) {
            painter.text(
                rect.left_bottom() + egui::vec2(10.0, -10.0),
                egui::Align2::LEFT_BOTTOM,
                handle_label(handle),
                egui::FontId::proportional(14.0),
                theme::TEXT_PRIMARY,
            );
        }

        frame
    }

    fn to_screen(&self, world: Vec3, rect: egui::Rect) -> Option<Vec2> {
        self.camera.world_to_screen(
            world,
            Vec2::new(rect.min.x, rect.min.y),
            Vec2::new(rect.width(), rect.height()),
        )
    }

    /// Project the gizmo origin and axis ends for this frame
    fn frame_input(&self, rect: egui::Rect, mode: TransformMode) -> GizmoFrameInput {
        let length = self.camera.gizmo_world_length(self.gizmo_origin);
        let center = self.to_screen(self.gizmo_origin, rect);
        let ends = Axis::ALL.map(|axis| self.to_screen(self.gizmo_origin + axis.unit() * length, rect));

        let mut input = GizmoFrameInput::new(center.unwrap_or(Vec2::NAN), ends, mode);
        input.visible = center.is_some();
        input
    }

    fn paint_grid(&self, painter: &egui::Painter, rect: egui::Rect) {
        let stroke = egui::Stroke::new(1.0, theme::with_alpha(theme::TEXT_SECONDARY, 40));
        let extent = GRID_EXTENT as f32;
        for i in -GRID_EXTENT..=GRID_EXTENT {
            let t = i as f32;
            let lines = [
                (Vec3::new(t, -extent, 0.0), Vec3::new(t, extent, 0.0)),
                (Vec3::new(-extent, t, 0.0), Vec3::new(extent, t, 0.0)),
            ];
            for (a, b) in lines {
                if let (Some(a), Some(b)) = (self.to_screen(a, rect), self.to_screen(b, rect)) {
                    painter.line_segment([egui::pos2(a.x, a.y), egui::pos2(b.x, b.y)], stroke);
                }
            }
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable name of a handle
pub fn handle_label(handle: Handle) -> String {
    let mode = match handle.mode {
        TransformMode::Select => "Select",
        TransformMode::Translate => "Move",
        TransformMode::Rotate => "Rotate",
        TransformMode::Scale => "Scale",
    };
    let target = match handle.kind {
        HandleKind::Axis(axis) => format!("{axis:?}"),
        HandleKind::Plane(plane) => format!("{plane:?} plane"),
        HandleKind::ViewRing => "view".to_string(),
        HandleKind::InnerSphere => "free".to_string(),
        HandleKind::UniformRing => "uniform".to_string(),
    };
    format!("{mode} {target} ({})", handle.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_label() {
        let label = Handle::from_id(5).map(handle_label);
        assert_eq!(label.as_deref(), Some("Move XZ plane (5)"));
        let label = Handle::from_id(15).map(handle_label);
        assert_eq!(label.as_deref(), Some("Rotate free (15)"));
    }

    #[test]
    fn test_frame_input_projects_all_axes() {
        let panel = ViewportPanel::new();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 800.0));
        let input = panel.frame_input(rect, TransformMode::Translate);
        assert!(input.visible);
        assert!(input.axis_ends.iter().all(Option::is_some));
        assert!(input.is_drawable());
    }
}
