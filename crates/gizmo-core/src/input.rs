//! Per-frame gizmo input

use glam::{Vec2, Vec3};

use crate::handle::{Axis, TransformMode};

/// Everything the host supplies for one frame.
///
/// Screen points are already projected by the host. An absent axis end
/// (projection failed, or degenerate) is `None`, never a half-finite point.
/// A non-finite `mouse_pos` never hovers anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoFrameInput {
    /// Whether the gizmo should be shown at all this frame
    pub visible: bool,
    /// Projected gizmo origin
    pub center: Vec2,
    /// Projected end of each local axis, indexed by [`Axis::index`]
    pub axis_ends: [Option<Vec2>; 3],
    /// Current transform tool
    pub mode: TransformMode,
    /// Pointer position in the same screen space as `center`
    pub mouse_pos: Vec2,
    /// Primary button is held
    pub mouse_down: bool,
    /// Primary button went down this frame
    pub mouse_clicked: bool,
    /// Gizmo origin in world space
    pub origin_world: Option<Vec3>,
    /// Camera position in world space
    pub camera_world: Option<Vec3>,
}

impl GizmoFrameInput {
    /// Create a visible input with no pointer and no world positions
    pub fn new(center: Vec2, axis_ends: [Option<Vec2>; 3], mode: TransformMode) -> Self {
        Self {
            visible: true,
            center,
            axis_ends,
            mode,
            mouse_pos: Vec2::NAN,
            mouse_down: false,
            mouse_clicked: false,
            origin_world: None,
            camera_world: None,
        }
    }

    /// Build an input from the packed `[cx, cy, xx, xy, yx, yy, zx, zy]`
    /// screen-point array, where a NaN coordinate marks an absent point.
    pub fn from_screen_points(points: &[f32; 8], mode: TransformMode) -> Self {
        let center = finite_point(points[0], points[1]);
        let mut input = Self::new(
            center.unwrap_or(Vec2::NAN),
            [
                finite_point(points[2], points[3]),
                finite_point(points[4], points[5]),
                finite_point(points[6], points[7]),
            ],
            mode,
        );
        input.visible = center.is_some();
        input
    }

    /// Set pointer state
    pub fn with_mouse(mut self, pos: Vec2, down: bool, clicked: bool) -> Self {
        self.mouse_pos = pos;
        self.mouse_down = down;
        self.mouse_clicked = clicked;
        self
    }

    /// Set world positions used for the hemisphere clip
    pub fn with_world(mut self, origin: Option<Vec3>, camera: Option<Vec3>) -> Self {
        self.origin_world = origin.filter(|v| v.is_finite());
        self.camera_world = camera.filter(|v| v.is_finite());
        self
    }

    /// Projected end of `axis`, if present
    pub fn axis_end(&self, axis: Axis) -> Option<Vec2> {
        self.axis_ends[axis.index()]
    }

    /// Whether anything should be picked or drawn this frame
    pub fn is_drawable(&self) -> bool {
        self.visible && self.center.is_finite() && self.mode != TransformMode::Select
    }

    /// Normalized direction from the gizmo origin towards the camera.
    ///
    /// `None` when either world point is missing or they coincide, which
    /// disables the hemisphere clip.
    pub fn view_direction(&self) -> Option<Vec3> {
        let origin = self.origin_world?;
        let camera = self.camera_world?;
        (camera - origin).try_normalize()
    }
}

/// A screen point, or `None` unless both coordinates are finite
pub fn finite_point(x: f32, y: f32) -> Option<Vec2> {
    (x.is_finite() && y.is_finite()).then(|| Vec2::new(x, y))
}

/// A world point from a packed `[x, y, z]`, or `None` if any is non-finite
pub fn finite_world(xyz: [f32; 3]) -> Option<Vec3> {
    let v = Vec3::from_array(xyz);
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_screen_points_marks_absent_axes() {
        let points = [100.0, 100.0, 150.0, 100.0, f32::NAN, 40.0, 100.0, f32::NAN];
        let input = GizmoFrameInput::from_screen_points(&points, TransformMode::Translate);
        assert!(input.visible);
        assert_eq!(input.axis_end(Axis::X), Some(Vec2::new(150.0, 100.0)));
        assert_eq!(input.axis_end(Axis::Y), None);
        assert_eq!(input.axis_end(Axis::Z), None);
    }

    #[test]
    fn test_nan_center_is_hidden() {
        let points = [f32::NAN, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
        let input = GizmoFrameInput::from_screen_points(&points, TransformMode::Rotate);
        assert!(!input.is_drawable());
    }

    #[test]
    fn test_select_mode_is_not_drawable() {
        let input = GizmoFrameInput::new(Vec2::ZERO, [None; 3], TransformMode::Select);
        assert!(!input.is_drawable());
    }

    #[test]
    fn test_view_direction() {
        let input = GizmoFrameInput::new(Vec2::ZERO, [None; 3], TransformMode::Rotate)
            .with_world(Some(Vec3::ZERO), Some(Vec3::new(0.0, 0.0, 5.0)));
        assert_eq!(input.view_direction(), Some(Vec3::Z));

        let missing = input.with_world(Some(Vec3::ZERO), None);
        assert_eq!(missing.view_direction(), None);

        let coincident = input.with_world(Some(Vec3::ONE), Some(Vec3::ONE));
        assert_eq!(coincident.view_direction(), None);
    }

    #[test]
    fn test_finite_world() {
        assert_eq!(finite_world([1.0, 2.0, 3.0]), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(finite_world([1.0, f32::NAN, 3.0]), None);
    }
}
