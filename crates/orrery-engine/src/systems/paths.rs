//! Screen-space overlays: orbit guide lines and planetary rings.
//!
//! Both are circles in the orbital plane, sampled, projected through the
//! camera, and handed to the stroke tessellator. Samples behind the near
//! plane are dropped; a loop that loses samples degrades from a closed
//! polygon to an open polyline instead of folding over the viewer.

use glam::{Vec2, Vec3};

use crate::components::ring::RingComponent;
use crate::renderer::camera::OrbitCamera;
use crate::systems::vector::{PathColor, PathState};

/// Sample count for orbit guide circles.
pub const ORBIT_GUIDE_SEGMENTS: usize = 64;
/// Sample count for ring circles.
pub const RING_SEGMENTS: usize = 48;

/// Sample a world-space circle in the y = `center.y` plane and project it.
/// Returns the on-screen points and whether every sample survived.
fn project_circle(
    camera: &OrbitCamera,
    center: Vec3,
    radius: f32,
    segments: usize,
) -> (Vec<Vec2>, bool) {
    let mut points = Vec::with_capacity(segments);
    let mut complete = true;
    for i in 0..segments {
        let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let world = center + Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin());
        match camera.project(world) {
            Some(proj) => points.push(proj.pos),
            None => complete = false,
        }
    }
    (points, complete)
}

fn stroke_loop(paths: &mut PathState, points: &[Vec2], complete: bool, width: f32, color: PathColor) {
    if complete {
        paths.stroke_polygon(points, width, color);
    } else {
        paths.stroke_polyline(points, width, color);
    }
}

/// Draw the visible revolution path for an orbit of the given distance.
pub fn draw_orbit_guide(
    paths: &mut PathState,
    camera: &OrbitCamera,
    distance: f32,
    width: f32,
    color: PathColor,
) {
    let (points, complete) = project_circle(camera, Vec3::ZERO, distance, ORBIT_GUIDE_SEGMENTS);
    stroke_loop(paths, &points, complete, width, color);
}

/// Draw a body's ring as a stroked annulus centerline.
/// The stroke width is the annulus thickness at the ring's projected scale.
pub fn draw_ring(paths: &mut PathState, camera: &OrbitCamera, center: Vec3, ring: &RingComponent) {
    let scale = match camera.project(center) {
        Some(proj) => proj.scale,
        None => return,
    };
    let (points, complete) = project_circle(camera, center, ring.mid_radius(), RING_SEGMENTS);
    let color = PathColor::new(ring.color.r, ring.color.g, ring.color.b, ring.opacity);
    stroke_loop(paths, &points, complete, ring.width() * scale, color);
}
