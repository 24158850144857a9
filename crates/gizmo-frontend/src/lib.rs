//! Gizmo Frontend
//!
//! egui host for the transform gizmo: an orbit-camera viewport that projects
//! the gizmo axes, runs the core once per frame and paints its draw list.

pub mod app;
pub mod camera;
pub mod overlays;
pub mod painter;
pub mod theme;
pub mod viewport;

// Re-exports for convenience
pub use app::GizmoDemoApp;
pub use camera::Camera;
pub use viewport::ViewportPanel;
