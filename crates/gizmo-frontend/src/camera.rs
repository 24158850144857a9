//! Orbit camera for the demo viewport

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Smallest clip-space `w` accepted as in front of the camera
const MIN_CLIP_W: f32 = 1e-6;

/// Orbit camera (Z-up)
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    // Orbit state
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Camera {
    /// Create a new camera with default parameters
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov: 45.0_f32.to_radians(),
            aspect,
            near: 0.05,
            far: 1000.0,
            yaw: 45.0_f32.to_radians(),
            pitch: 30.0_f32.to_radians(),
            distance: 5.0,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    /// Zoom the camera
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(0.1, 500.0);
        self.update_position_from_orbit();
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Project a world point into a viewport.
    ///
    /// `viewport_min` is the top-left corner in screen pixels. Returns `None`
    /// for points at or behind the camera plane.
    pub fn world_to_screen(
        &self,
        world: Vec3,
        viewport_min: Vec2,
        viewport_size: Vec2,
    ) -> Option<Vec2> {
        let clip = self.projection_matrix() * self.view_matrix() * Vec4::from((world, 1.0));
        if clip.w <= MIN_CLIP_W {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let screen = viewport_min
            + Vec2::new(
                (ndc.x + 1.0) * 0.5 * viewport_size.x,
                (1.0 - ndc.y) * 0.5 * viewport_size.y,
            );
        screen.is_finite().then_some(screen)
    }

    /// World-space length of the gizmo axes at `origin`, chosen so the gizmo
    /// keeps a roughly constant size on screen
    pub fn gizmo_world_length(&self, origin: Vec3) -> f32 {
        let dist = (self.position - origin).length().max(0.1);
        (dist * 0.18).max(0.15) * 0.5
    }
}
