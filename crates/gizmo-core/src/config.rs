//! Gizmo configuration structures
//!
//! Visual style only. Picking thresholds and handle proportions are fixed in
//! [`crate::constants`] because they define which handle a click selects.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::draw::Rgba;
use crate::error::GizmoError;
use crate::handle::Axis;

/// Colors and sizes used when building the draw list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GizmoStyle {
    /// Idle axis colors (X, Y, Z)
    pub axis_colors: [Rgba; 3],
    /// Hovered / active axis colors (X, Y, Z)
    pub axis_highlight_colors: [Rgba; 3],
    /// Idle rotation ring colors (X, Y, Z)
    pub ring_colors: [Rgba; 3],
    /// Idle plane handle fill
    pub plane_color: Rgba,
    /// Hovered / active plane handle fill
    pub plane_highlight_color: Rgba,
    /// Center dot fill
    pub center_color: Rgba,
    /// Center dot radius in pixels
    pub center_radius: f32,
    /// Idle view / uniform ring color
    pub circle_color: Rgba,
    /// Hovered / active view / uniform ring color
    pub circle_highlight_color: Rgba,
    /// View / uniform ring thickness
    pub circle_thickness: f32,
    /// Inner sphere fill (alpha is scaled by the two factors below)
    pub inner_color: Rgba,
    /// Inner sphere alpha factor when idle
    pub inner_alpha: f32,
    /// Inner sphere alpha factor when hovered / active
    pub inner_highlight_alpha: f32,
    /// Axis and ring thickness while idle
    pub thickness: f32,
    /// Axis and ring thickness while a handle is active
    pub active_thickness: f32,
    /// Translate arrow head length
    pub arrow_head_length: f32,
    /// Translate arrow head half-width
    pub arrow_head_width: f32,
    /// Scale square head half-size
    pub square_head_size: f32,
}

impl Default for GizmoStyle {
    fn default() -> Self {
        Self {
            axis_colors: [
                Rgba::new(230, 80, 80, 255),
                Rgba::new(80, 230, 80, 255),
                Rgba::new(80, 140, 255, 255),
            ],
            axis_highlight_colors: [
                Rgba::new(255, 220, 220, 255),
                Rgba::new(220, 255, 220, 255),
                Rgba::new(220, 220, 255, 255),
            ],
            ring_colors: [
                Rgba::new(230, 80, 80, 220),
                Rgba::new(80, 230, 80, 220),
                Rgba::new(80, 140, 255, 220),
            ],
            plane_color: Rgba::new(255, 230, 110, 90),
            plane_highlight_color: Rgba::new(255, 230, 110, 165),
            center_color: Rgba::new(255, 255, 255, 220),
            center_radius: 4.0,
            circle_color: Rgba::new(240, 240, 240, 200),
            circle_highlight_color: Rgba::WHITE,
            circle_thickness: 2.5,
            inner_color: Rgba::WHITE,
            inner_alpha: 0.12,
            inner_highlight_alpha: 0.20,
            thickness: 3.0,
            active_thickness: 4.0,
            arrow_head_length: 12.0,
            arrow_head_width: 6.0,
            square_head_size: 6.0,
        }
    }
}

impl GizmoStyle {
    /// Axis color for the given highlight state
    pub fn axis_color(&self, axis: Axis, highlighted: bool) -> Rgba {
        if highlighted {
            self.axis_highlight_colors[axis.index()]
        } else {
            self.axis_colors[axis.index()]
        }
    }

    /// Rotation ring color for the given highlight state
    pub fn ring_color(&self, axis: Axis, highlighted: bool) -> Rgba {
        if highlighted {
            self.axis_highlight_colors[axis.index()]
        } else {
            self.ring_colors[axis.index()]
        }
    }
}

/// Complete gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoConfig {
    /// Whether the gizmo is shown at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Visual style
    #[serde(default)]
    pub style: GizmoStyle,
}

fn default_enabled() -> bool {
    true
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            style: GizmoStyle::default(),
        }
    }
}

impl GizmoConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GizmoError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| GizmoError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize configuration to RON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, GizmoError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| GizmoError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GizmoError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| GizmoError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| GizmoError::Deserialize(e.to_string()))
    }

    /// Load configuration from RON bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, GizmoError> {
        let content =
            std::str::from_utf8(data).map_err(|e| GizmoError::Deserialize(e.to_string()))?;
        ron::from_str(content).map_err(|e| GizmoError::Deserialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gizmo.ron");

        let mut config = GizmoConfig::new();
        config.style.thickness = 5.0;
        config.style.plane_color = Rgba::new(1, 2, 3, 4);
        config.save(&path).unwrap();

        let loaded = GizmoConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = GizmoConfig::load_from_bytes(b"(enabled: false)").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.style, GizmoStyle::default());

        let styled = GizmoConfig::load_from_bytes(b"(style: (thickness: 2.0))").unwrap();
        assert!(styled.enabled);
        assert_eq!(styled.style.thickness, 2.0);
        assert_eq!(styled.style.active_thickness, 4.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GizmoConfig::load(dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, GizmoError::Io(_)));
    }

    #[test]
    fn test_load_garbage() {
        let err = GizmoConfig::load_from_bytes(b"not ron at all {").unwrap_err();
        assert!(matches!(err, GizmoError::Deserialize(_)));
    }

    #[test]
    fn test_axis_color_highlight() {
        let style = GizmoStyle::default();
        assert_eq!(style.axis_color(Axis::X, false), Rgba::new(230, 80, 80, 255));
        assert_eq!(style.ring_color(Axis::Z, false).a, 220);
        assert_eq!(style.ring_color(Axis::Z, true), Rgba::new(220, 220, 255, 255));
    }
}
