pub mod api;
pub mod bridge;
pub mod catalog;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::sim::{SimConfig, SimContext, Simulation};
pub use api::types::{BodyId, UiEvent};
pub use bridge::protocol::{ProtocolLayout, DEFAULT_MAX_LIGHTS, LIGHT_FLOATS};
pub use catalog::defs::{CatalogError, PlanetDef, RingDef, StarDef, SystemCatalog};
pub use catalog::spawn::{scatter_angle, spawn_system, SpawnedSystem};
pub use components::body::Body;
pub use components::mesh::{Color, MeshComponent};
pub use components::orbit::OrbitComponent;
pub use components::ring::RingComponent;
pub use crate::core::clock::{FixedStep, PlaybackClock};
pub use crate::core::scene::Scene;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraUniform, OrbitCamera, Projection};
pub use renderer::instance::{BodyBuffer, BodyInstance};
pub use systems::lighting::{LightState, PointLight};
pub use systems::motion::advance_orbits;
pub use systems::render::build_body_buffer;

#[cfg(feature = "vectors")]
pub use systems::paths::{draw_orbit_guide, draw_ring, ORBIT_GUIDE_SEGMENTS, RING_SEGMENTS};
#[cfg(feature = "vectors")]
pub use systems::vector::{PathColor, PathState, PathVertex};
