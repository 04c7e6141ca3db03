use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use super::picking::Ray;

/// 2D orthographic zoom limits
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Viewport mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Top-down orthographic plan
    #[default]
    #[serde(rename = "2d")]
    TopDown,
    /// Free perspective view
    #[serde(rename = "3d")]
    Perspective,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::TopDown => "2d",
            ViewMode::Perspective => "3d",
        }
    }
}

/// Top-down orthographic camera. Screen right is +X, screen up is -Z.
#[derive(Debug, Clone)]
pub struct TopDownCamera {
    /// Ground point under the view center
    pub center: Vec3,
    /// Zoom factor, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,
    /// Visible height at zoom 1.0
    pub frustum_size: f32,
}

impl TopDownCamera {
    pub fn new(garden_size: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            zoom: 1.0,
            frustum_size: garden_size * 1.1,
        }
    }

    fn eye(&self) -> Vec3 {
        self.center + Vec3::new(0.0, self.frustum_size.max(1.0), 0.0)
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.center, Vec3::NEG_Z)
    }

    fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let half_h = self.frustum_size * 0.5 / self.zoom;
        let half_w = half_h * aspect;
        Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, NEAR, FAR)
    }

    fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn pan(&mut self, delta: Vec2, viewport_height: f32) {
        let world_per_px = self.frustum_size / self.zoom / viewport_height.max(1.0);
        self.center.x -= delta.x * world_per_px;
        self.center.z -= delta.y * world_per_px;
    }
}

/// Perspective camera orbiting a target point
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl PerspectiveCamera {
    pub fn new(garden_size: f32) -> Self {
        let half = garden_size * 0.5;
        Self {
            position: Vec3::splat(half),
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
        }
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, NEAR, FAR)
    }

    fn zoom_by(&mut self, delta: f32, speed: f32) {
        self.position += self.forward() * delta * speed;
    }

    fn orbit(&mut self, dx: f32, dy: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let yaw = offset.x.atan2(offset.z) - dx.to_radians();
        let pitch = ((offset.y / radius).asin() + dy.to_radians()).clamp(0.05, 1.5);
        self.position = self.target
            + Vec3::new(
                radius * pitch.cos() * yaw.sin(),
                radius * pitch.sin(),
                radius * pitch.cos() * yaw.cos(),
            );
    }

    fn pan(&mut self, delta: Vec2, viewport_height: f32) {
        let distance = (self.position - self.target).length();
        let world_per_px = 2.0 * distance * (self.fov * 0.5).tan() / viewport_height.max(1.0);
        let fwd = self.forward();
        let right = fwd.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(fwd).normalize_or_zero();
        let offset = (-right * delta.x + up * delta.y) * world_per_px;
        self.position += offset;
        self.target += offset;
    }
}

/// Active viewport camera
#[derive(Debug, Clone)]
pub enum Camera {
    TopDown(TopDownCamera),
    Perspective(PerspectiveCamera),
}

impl Camera {
    /// Fresh camera for a view mode
    pub fn for_mode(mode: ViewMode, garden_size: f32) -> Self {
        match mode {
            ViewMode::TopDown => Camera::TopDown(TopDownCamera::new(garden_size)),
            ViewMode::Perspective => Camera::Perspective(PerspectiveCamera::new(garden_size)),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            Camera::TopDown(_) => ViewMode::TopDown,
            Camera::Perspective(_) => ViewMode::Perspective,
        }
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        match self {
            Camera::TopDown(c) => c.view_matrix(),
            Camera::Perspective(c) => c.view_matrix(),
        }
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self {
            Camera::TopDown(c) => c.projection_matrix(aspect),
            Camera::Perspective(c) => c.projection_matrix(aspect),
        }
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// 2D zoom factor adds `delta`; 3D moves the camera by `delta * speed`
    pub fn zoom(&mut self, delta: f32, speed: f32) {
        match self {
            Camera::TopDown(c) => c.zoom_by(delta),
            Camera::Perspective(c) => c.zoom_by(delta, speed),
        }
    }

    /// Orbit around the target (3D only), angles in degrees
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        if let Camera::Perspective(c) = self {
            c.orbit(dx, dy);
        }
    }

    /// Pan by a pointer delta in pixels
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32) {
        match self {
            Camera::TopDown(c) => c.pan(delta, viewport_height),
            Camera::Perspective(c) => c.pan(delta, viewport_height),
        }
    }

    /// Project a world point to NDC (x right, y up). None if behind the camera.
    pub fn project(&self, point: Vec3, aspect: f32) -> Option<Vec2> {
        let p = self.view_projection(aspect) * point.extend(1.0);
        if p.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(p.x / p.w, p.y / p.w))
    }

    /// Cast a ray from an NDC position into the scene
    pub fn ray_from_ndc(&self, ndc: Vec2, aspect: f32) -> Ray {
        let vp_inv = self.view_projection(aspect).inverse();

        let near_world = vp_inv * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        }
    }
}

/// Convert a pointer position inside a viewport rectangle to NDC
pub fn screen_to_ndc(pos: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    let local = pos - rect_min;
    Vec2::new(
        local.x / rect_size.x * 2.0 - 1.0,
        -(local.y / rect_size.y) * 2.0 + 1.0,
    )
}

/// Convert NDC back to a pointer position inside a viewport rectangle
pub fn ndc_to_screen(ndc: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    rect_min
        + Vec2::new(
            (ndc.x + 1.0) * 0.5 * rect_size.x,
            (1.0 - ndc.y) * 0.5 * rect_size.y,
        )
}
