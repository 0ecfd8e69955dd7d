//! Camera description plus the two world/screen transforms the interaction
//! engine needs: projecting anchor points to viewport pixels and casting
//! pointer rays back into the world.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Project a world-space point to viewport pixel coordinates.
///
/// `viewport_px` is the drawable size in pixels and must be re-read by the
/// caller on every call; the window may have been resized since the previous
/// frame. Pure function of (point, camera, viewport).
pub fn project_to_screen(world: Vec3, camera: &Camera, viewport_px: Vec2) -> Vec2 {
    let clip = camera.view_projection() * Vec4::from((world, 1.0));
    let w = if clip.w.abs() > 1e-6 { clip.w } else { 1e-6 };
    let ndc = clip.truncate() / w;
    let half_w = 0.5 * viewport_px.x;
    let half_h = 0.5 * viewport_px.y;
    Vec2::new(ndc.x * half_w + half_w, -ndc.y * half_h + half_h)
}

/// Compute a world-space ray through the given pointer NDC coordinates.
///
/// Returns `(ray_origin, ray_direction)` in world space; the origin is the
/// camera eye.
pub fn ndc_to_world_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (far - ro).normalize();
    (ro, rd)
}
