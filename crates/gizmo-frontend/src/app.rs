//! Main application module

use std::path::PathBuf;

use gizmo_core::{GizmoConfig, TransformGizmo, TransformMode, handle_to_id};
use tracing::{error, info};

use crate::overlays::{render_mode_toolbar, shortcut_mode};
use crate::theme;
use crate::viewport::ViewportPanel;

/// Main application
pub struct GizmoDemoApp {
    gizmo: TransformGizmo,
    mode: TransformMode,
    viewport: ViewportPanel,
    /// Where the style is saved, if it came from a file
    config_path: Option<PathBuf>,
    last_hover: i32,
}

impl GizmoDemoApp {
    /// Create a new app
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: GizmoConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            gizmo: TransformGizmo::from_config(&config),
            mode: TransformMode::Translate,
            viewport: ViewportPanel::new(),
            config_path,
            last_hover: 0,
        }
    }

    fn set_mode(&mut self, mode: TransformMode) {
        if mode != self.mode {
            info!("Transform mode: {:?}", mode);
            self.mode = mode;
        }
    }

    fn save_config(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        let config = GizmoConfig {
            enabled: self.gizmo.is_enabled(),
            style: self.gizmo.style().clone(),
        };
        match config.save(path) {
            Ok(()) => info!("Saved gizmo config to {}", path.display()),
            Err(e) => error!("Failed to save gizmo config: {}", e),
        }
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut enabled = self.gizmo.is_enabled();
                if ui.checkbox(&mut enabled, "Gizmo").changed() {
                    self.gizmo.set_enabled(enabled);
                }
                ui.separator();
                ui.colored_label(theme::TEXT_SECONDARY, format!("Mode: {:?}", self.mode));
                ui.separator();
                ui.colored_label(
                    theme::TEXT_SECONDARY,
                    format!(
                        "Hover: {}  Active: {}",
                        self.last_hover,
                        self.viewport.active_id()
                    ),
                );
                if self.config_path.is_some() {
                    ui.separator();
                    if ui.button("Save style").clicked() {
                        self.save_config();
                    }
                }
            });
        });
    }
}

impl eframe::App for GizmoDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !ctx.wants_keyboard_input() {
            if let Some(mode) = ctx.input(shortcut_mode) {
                self.set_mode(mode);
            }
        }

        self.status_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let frame = self.viewport.ui(ui, &self.gizmo, self.mode);
                self.last_hover = handle_to_id(frame.hover);

                if let Some(mode) = render_mode_toolbar(ctx, rect, self.mode) {
                    self.set_mode(mode);
                }
            });
    }
}
