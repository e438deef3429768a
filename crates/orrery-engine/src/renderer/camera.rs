use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Projection result from world space to screen space.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Screen position in pixels (origin top-left, Y down).
    pub pos: Vec2,
    /// Distance along the view axis (positive = in front of the camera).
    pub depth: f32,
    /// Screen pixels per world unit at this depth.
    pub scale: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Perspective camera orbiting a target point.
///
/// Pose is azimuth/elevation/distance around the target; pointer drag
/// orbits, wheel dollies, and the distance is clamped so the viewer can
/// neither clip through the scene nor lose it in the distance.
pub struct OrbitCamera {
    /// Rotation around the Y axis, in radians.
    pub azimuth: f32,
    /// Rotation above the orbital plane, in radians. Clamped to avoid
    /// flipping over the poles.
    pub elevation: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    viewport_width: f32,
    viewport_height: f32,
    min_distance: f32,
    max_distance: f32,
}

const ORBIT_SENSITIVITY: f32 = 0.008;
/// Fractional distance change per wheel-delta unit.
const DOLLY_SPEED: f32 = 0.001;
/// ~80 degrees; keeps the up vector well-defined.
const MAX_ELEVATION: f32 = 1.4;

impl OrbitCamera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.3,
            distance: 150.0,
            target: Vec3::ZERO,
            fov_y: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            viewport_width,
            viewport_height,
            min_distance: 1.0,
            max_distance: 1000.0,
        }
    }

    /// Place the camera at `eye`, keeping the current target.
    /// Derives azimuth, elevation, and distance from the offset.
    pub fn look_from(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let distance = offset.length();
        if distance < 1e-6 {
            return;
        }
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.elevation = (offset.y / distance).asin().clamp(-MAX_ELEVATION, MAX_ELEVATION);
        self.azimuth = offset.x.atan2(offset.z);
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(cos_e * sin_a, sin_e, cos_e * cos_a)
    }

    /// Orbit the camera by a pointer delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ORBIT_SENSITIVITY;
        self.elevation = (self.elevation + dy * ORBIT_SENSITIVITY)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Dolly toward (negative delta) or away from (positive delta) the
    /// target. `delta` is in wheel units (pixels).
    pub fn dolly(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 + delta * DOLLY_SPEED))
            .clamp(self.min_distance, self.max_distance);
    }

    /// Constrain how close and how far the camera may dolly.
    pub fn set_distance_limits(&mut self, min: f32, max: f32) {
        self.min_distance = min;
        self.max_distance = max;
        self.distance = self.distance.clamp(min, max);
    }

    /// Update the viewport on resize; the aspect ratio follows.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport_width = width;
            self.viewport_height = height;
        }
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }

    /// Project a world position to screen space.
    /// Returns None for points at or behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<Projection> {
        let clip = self.view_projection() * world.extend(1.0);
        // For a right-handed perspective projection, clip.w is the distance
        // along the view axis.
        if clip.w <= self.near {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let pos = Vec2::new(
            (ndc_x * 0.5 + 0.5) * self.viewport_width,
            (0.5 - ndc_y * 0.5) * self.viewport_height,
        );
        // Pixels per world unit: one world unit of view-space height spans
        // proj[1][1]/w of NDC, i.e. half the viewport height times that.
        let scale = self.projection_matrix().col(1).y * (self.viewport_height * 0.5) / clip.w;
        Some(Projection {
            pos,
            depth: clip.w,
            scale,
        })
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_from_round_trips_through_eye() {
        let mut cam = OrbitCamera::new(1280.0, 720.0);
        cam.look_from(Vec3::new(0.0, 50.0, 150.0));
        let eye = cam.eye();
        assert!((eye - Vec3::new(0.0, 50.0, 150.0)).length() < 1e-3, "eye = {eye}");
        assert!((cam.distance - 158.113_9).abs() < 1e-2);
    }

    #[test]
    fn target_projects_to_viewport_center() {
        let mut cam = OrbitCamera::new(1280.0, 720.0);
        cam.look_from(Vec3::new(0.0, 50.0, 150.0));
        let proj = cam.project(Vec3::ZERO).unwrap();
        assert!((proj.pos.x - 640.0).abs() < 0.5);
        assert!((proj.pos.y - 360.0).abs() < 0.5);
        assert!((proj.depth - cam.distance).abs() < 1e-2);
    }

    #[test]
    fn nearer_points_project_larger() {
        let mut cam = OrbitCamera::new(1280.0, 720.0);
        cam.look_from(Vec3::new(0.0, 0.0, 150.0));
        let near = cam.project(Vec3::new(0.0, 0.0, 50.0)).unwrap();
        let far = cam.project(Vec3::new(0.0, 0.0, -50.0)).unwrap();
        assert!(near.scale > far.scale);
        assert!(near.depth < far.depth);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let mut cam = OrbitCamera::new(1280.0, 720.0);
        cam.look_from(Vec3::new(0.0, 0.0, 150.0));
        assert!(cam.project(Vec3::new(0.0, 0.0, 200.0)).is_none());
    }

    #[test]
    fn dolly_respects_distance_limits() {
        let mut cam = OrbitCamera::new(1280.0, 720.0);
        cam.set_distance_limits(50.0, 300.0);
        for _ in 0..1000 {
            cam.dolly(-120.0);
        }
        assert_eq!(cam.distance, 50.0);
        for _ in 0..1000 {
            cam.dolly(120.0);
        }
        assert_eq!(cam.distance, 300.0);
    }

    #[test]
    fn orbit_clamps_elevation() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, 10_000.0);
        assert!(cam.elevation <= MAX_ELEVATION);
        cam.orbit(0.0, -20_000.0);
        assert!(cam.elevation >= -MAX_ELEVATION);
    }

    #[test]
    fn resize_changes_aspect() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        cam.set_viewport(1920.0, 1080.0);
        assert!((cam.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
        // Degenerate sizes are ignored
        cam.set_viewport(0.0, 100.0);
        assert_eq!(cam.viewport(), (1920.0, 1080.0));
    }
}
