//! Color palette for the demo viewport

use egui::Color32;

/// Base viewport background
pub const BG_BASE: Color32 = Color32::from_rgb(24, 24, 28);
/// Elevated surfaces (overlays, popups)
pub const BG_ELEVATED: Color32 = Color32::from_rgb(38, 38, 44);

/// Normal divider line
pub const BORDER_NORMAL: Color32 = Color32::from_rgb(65, 65, 75);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 230, 235);
/// Secondary text (labels)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);

/// Create a semi-transparent version of the elevated background for overlays
pub fn overlay_bg(alpha: u8) -> Color32 {
    with_alpha(BG_ELEVATED, alpha)
}

/// Create a semi-transparent version of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
