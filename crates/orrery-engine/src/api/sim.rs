use crate::api::types::{BodyId, UiEvent};
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::core::clock::PlaybackClock;
use crate::core::scene::Scene;
use crate::renderer::camera::OrbitCamera;
use crate::systems::lighting::LightState;
#[cfg(feature = "vectors")]
use crate::systems::vector::PathState;

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport width in pixels.
    pub view_width: f32,
    /// Initial viewport height in pixels.
    pub view_height: f32,
    /// Maximum number of body instances (default: 64).
    pub max_bodies: usize,
    /// Maximum number of path vertices (default: 8192).
    pub max_path_vertices: usize,
    /// Maximum number of UI events per frame (default: 16).
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            view_width: 1280.0,
            view_height: 720.0,
            max_bodies: 64,
            max_path_vertices: 8192,
            max_events: 16,
        }
    }
}

/// The core contract every visualization must fulfill.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Set up initial state: spawn bodies, pose the camera, place lights.
    fn init(&mut self, ctx: &mut SimContext);

    /// The per-tick update. Handle input, advance motion, draw overlays.
    fn update(&mut self, ctx: &mut SimContext, input: &crate::input::queue::InputQueue);
}

/// Mutable access to engine state, passed to Simulation::init and update.
pub struct SimContext {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub clock: PlaybackClock,
    pub lights: LightState,
    #[cfg(feature = "vectors")]
    pub paths: PathState,
    pub events: Vec<UiEvent>,
    next_id: u32,
}

impl SimContext {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_bodies),
            camera: OrbitCamera::new(config.view_width, config.view_height),
            clock: PlaybackClock::new(),
            lights: LightState::with_capacity(DEFAULT_MAX_LIGHTS),
            #[cfg(feature = "vectors")]
            paths: PathState::new(),
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
        }
    }

    /// Generate the next unique body ID.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a UI event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, path vertices).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        #[cfg(feature = "vectors")]
        self.paths.clear();
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = SimContext::default();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(a, BodyId(1));
        assert_eq!(b, BodyId(2));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = SimContext::default();
        ctx.emit_event(UiEvent {
            kind: 1.0,
            a: 0.0,
            b: 1.0,
            c: 0.0,
        });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn context_viewport_comes_from_config() {
        let config = SimConfig {
            view_width: 800.0,
            view_height: 600.0,
            ..SimConfig::default()
        };
        let ctx = SimContext::new(&config);
        assert_eq!(ctx.camera.viewport(), (800.0, 600.0));
    }
}
