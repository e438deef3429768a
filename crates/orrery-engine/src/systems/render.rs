use crate::components::body::Body;
use crate::renderer::camera::OrbitCamera;
use crate::renderer::instance::{BodyBuffer, BodyInstance};

/// Build the body instance buffer from the scene.
///
/// Projects every active meshed body through the camera, culls anything at
/// or behind the near plane, and orders the result back-to-front so the
/// host can draw with the painter's algorithm.
pub fn build_body_buffer<'a>(
    bodies: impl Iterator<Item = &'a Body>,
    camera: &OrbitCamera,
    buffer: &mut BodyBuffer,
) {
    buffer.clear();

    let mut items: Vec<(f32, BodyInstance)> = Vec::new();
    for body in bodies {
        if !body.active {
            continue;
        }
        let mesh = match &body.mesh {
            Some(m) => m,
            None => continue,
        };
        let proj = match camera.project(body.position) {
            Some(p) => p,
            None => continue,
        };

        items.push((
            proj.depth,
            BodyInstance {
                x: proj.pos.x,
                y: proj.pos.y,
                radius: mesh.radius * proj.scale,
                rotation: body.spin,
                r: mesh.color.r,
                g: mesh.color.g,
                b: mesh.color.b,
                shininess: mesh.shininess,
                emissive: mesh.emissive,
                ..Default::default()
            },
        ));
    }

    // Farther bodies first
    items.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    for (_, instance) in items {
        buffer.push(instance);
    }
}
