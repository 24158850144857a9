//! Transform mode toggle overlay for the viewport

use gizmo_core::TransformMode;

use crate::theme;

/// Button glyph and tooltip for each mode
fn mode_button(mode: TransformMode) -> (&'static str, &'static str) {
    match mode {
        TransformMode::Select => ("⬉", "Select (Q)"),
        TransformMode::Translate => ("↔", "Move (T)"),
        TransformMode::Rotate => ("⟳", "Rotate (R)"),
        TransformMode::Scale => ("⤢", "Scale (S)"),
    }
}

/// Render the mode toolbar in the top-left corner of `rect` (floating UI).
///
/// Returns the mode picked this frame, if any.
pub fn render_mode_toolbar(
    ctx: &egui::Context,
    rect: egui::Rect,
    current: TransformMode,
) -> Option<TransformMode> {
    let panel_margin = 10.0;
    let toggle_pos = egui::pos2(rect.left() + panel_margin, rect.top() + panel_margin);
    let mut picked = None;

    egui::Area::new(egui::Id::new("mode_toolbar"))
        .fixed_pos(toggle_pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme::overlay_bg(220))
                .stroke(egui::Stroke::new(1.0, theme::BORDER_NORMAL))
                .inner_margin(2.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 2.0;

                        for mode in TransformMode::ALL {
                            let (icon, tooltip) = mode_button(mode);
                            let button = egui::Button::new(icon)
                                .selected(current == mode)
                                .min_size(egui::vec2(24.0, 24.0));
                            if ui.add(button).on_hover_text(tooltip).clicked() {
                                picked = Some(mode);
                            }
                        }
                    });
                });
        });

    picked
}

/// Mode selected by a keyboard shortcut this frame
pub fn shortcut_mode(input: &egui::InputState) -> Option<TransformMode> {
    [
        (egui::Key::Q, TransformMode::Select),
        (egui::Key::T, TransformMode::Translate),
        (egui::Key::R, TransformMode::Rotate),
        (egui::Key::S, TransformMode::Scale),
    ]
    .into_iter()
    .find_map(|(key, mode)| input.key_pressed(key).then_some(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_a_button() {
        let tooltips: Vec<_> = TransformMode::ALL
            .iter()
            .map(|m| mode_button(*m).1)
            .collect();
        assert_eq!(tooltips, ["Select (Q)", "Move (T)", "Rotate (R)", "Scale (S)"]);
    }
}
