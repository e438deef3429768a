use glam::Vec3;

use crate::api::types::BodyId;
use crate::components::mesh::MeshComponent;
use crate::components::orbit::OrbitComponent;
use crate::components::ring::RingComponent;

/// Fat body — a single struct with optional components.
/// Designed for simplicity over ECS purity; the scene holds a handful of
/// bodies, not thousands.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier.
    pub id: BodyId,
    /// String tag for finding bodies by name.
    pub tag: String,
    /// Whether this body is active (inactive bodies are skipped by systems).
    pub active: bool,
    /// Position in world space.
    pub position: Vec3,
    /// Rotation about the body's own Y axis, in radians.
    pub spin: f32,
    /// Spin rate in radians per second of simulation time.
    pub spin_speed: f32,
    /// Rendered sphere (optional — bodies without a mesh are invisible).
    pub mesh: Option<MeshComponent>,
    /// Circular orbit driving the position (optional — the sun has none).
    pub orbit: Option<OrbitComponent>,
    /// Flat annulus around the body (optional).
    pub ring: Option<RingComponent>,
}

impl Body {
    /// Create a new body with the given ID at the origin.
    pub fn new(id: BodyId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            position: Vec3::ZERO,
            spin: 0.0,
            spin_speed: 0.0,
            mesh: None,
            orbit: None,
            ring: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_spin_speed(mut self, spin_speed: f32) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Attach an orbit; position snaps to the orbit's current point.
    pub fn with_orbit(mut self, orbit: OrbitComponent) -> Self {
        self.position = orbit.position();
        self.orbit = Some(orbit);
        self
    }

    pub fn with_ring(mut self, ring: RingComponent) -> Self {
        self.ring = Some(ring);
        self
    }
}
