//! The solar-system visualization: static scene setup plus the per-frame
//! position update. Camera framing and resize handling ride on the input
//! queue.

use glam::Vec3;
use orrery_engine::{
    advance_orbits, draw_orbit_guide, draw_ring, spawn_system, InputEvent, InputQueue, PathColor,
    PointLight, SimConfig, SimContext, Simulation, SystemCatalog, UiEvent,
};

use crate::planets;

const FIXED_DT: f32 = 1.0 / 60.0;

const VIEW_W: f32 = 1280.0;
const VIEW_H: f32 = 720.0;

// ── Camera framing ───────────────────────────────────────────────────

const CAMERA_EYE: Vec3 = Vec3::new(0.0, 50.0, 150.0);
const CAMERA_MIN_DISTANCE: f32 = 50.0;
const CAMERA_MAX_DISTANCE: f32 = 300.0;

// ── Lighting (dim ambient + the sun as a point light) ────────────────

const AMBIENT: f32 = 0.25;
const SUN_LIGHT_INTENSITY: f32 = 2.0;
const SUN_LIGHT_RANGE: f32 = 100.0;

// ── Orbit guides ─────────────────────────────────────────────────────

const GUIDE_WIDTH: f32 = 1.0;
const GUIDE_COLOR: PathColor = PathColor::new(0.27, 0.27, 0.27, 0.5);

// ── UI event kinds to the host page ──────────────────────────────────

/// Playback state: a = paused (0/1), b = speed multiplier.
pub const EVENT_PLAYBACK: f32 = 1.0;

pub struct SolarSystemViz {
    catalog: SystemCatalog,
    seed: u32,

    // Drag state
    dragging: bool,
    last_pointer: (f32, f32),
}

impl SolarSystemViz {
    pub fn new(seed: u32) -> Self {
        let catalog = planets::load().unwrap_or_else(|err| {
            log::error!("planet catalog failed to load: {err}");
            SystemCatalog::empty()
        });

        Self {
            catalog,
            seed,
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }

    fn handle_input(&mut self, ctx: &mut SimContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.last_pointer = (x, y);
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let (px, py) = self.last_pointer;
                        ctx.camera.orbit(x - px, y - py);
                        self.last_pointer = (x, y);
                    }
                }
                InputEvent::PointerUp { .. } => {
                    self.dragging = false;
                }
                InputEvent::Wheel { delta } => {
                    ctx.camera.dolly(delta);
                }
                InputEvent::Resize { width, height } => {
                    ctx.camera.set_viewport(width, height);
                }
                InputEvent::Custom { .. } => {}
            }
        }
    }
}

/// Orbit guides and rings, redrawn each tick through the camera.
fn draw_overlays(ctx: &mut SimContext) {
    let camera = &ctx.camera;
    let paths = &mut ctx.paths;

    for body in ctx.scene.iter() {
        if let Some(orbit) = &body.orbit {
            draw_orbit_guide(paths, camera, orbit.distance, GUIDE_WIDTH, GUIDE_COLOR);
        }
        if let Some(ring) = &body.ring {
            draw_ring(paths, camera, body.position, ring);
        }
    }
}

impl Simulation for SolarSystemViz {
    fn config(&self) -> SimConfig {
        SimConfig {
            fixed_dt: FIXED_DT,
            view_width: VIEW_W,
            view_height: VIEW_H,
            max_bodies: 16,
            max_path_vertices: 8192,
            max_events: 16,
        }
    }

    fn init(&mut self, ctx: &mut SimContext) {
        ctx.camera.set_distance_limits(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        ctx.camera.look_from(CAMERA_EYE);

        ctx.lights.set_ambient(AMBIENT, AMBIENT, AMBIENT);
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            SUN_LIGHT_INTENSITY,
            SUN_LIGHT_RANGE,
        ));

        spawn_system(ctx, &self.catalog, self.seed);
    }

    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        let dt = ctx.clock.scaled(FIXED_DT);
        advance_orbits(&mut ctx.scene, dt);

        draw_overlays(ctx);

        ctx.emit_event(UiEvent {
            kind: EVENT_PLAYBACK,
            a: if ctx.clock.paused() { 1.0 } else { 0.0 },
            b: ctx.clock.multiplier(),
            c: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booted() -> (SolarSystemViz, SimContext) {
        let mut viz = SolarSystemViz::new(42);
        let mut ctx = SimContext::new(&viz.config());
        viz.init(&mut ctx);
        (viz, ctx)
    }

    fn planet_angle(ctx: &SimContext, name: &str) -> f32 {
        ctx.scene.find_by_tag(name).unwrap().orbit.unwrap().angle
    }

    #[test]
    fn init_spawns_sun_and_eight_planets() {
        let (_, ctx) = booted();
        assert_eq!(ctx.scene.len(), 9);
        assert!(ctx.scene.find_by_tag("Sun").is_some());
        assert!(ctx.scene.find_by_tag("Mercury").is_some());
        assert!(ctx.scene.find_by_tag("Neptune").is_some());
        assert_eq!(ctx.lights.count(), 1);
        assert_eq!(ctx.lights.ambient(), [AMBIENT; 3]);
    }

    #[test]
    fn sun_glows_and_planets_do_not() {
        let (_, ctx) = booted();
        let sun = ctx.scene.find_by_tag("Sun").unwrap();
        assert!(sun.mesh.unwrap().emissive > 0.0);
        let earth = ctx.scene.find_by_tag("Earth").unwrap();
        assert_eq!(earth.mesh.unwrap().emissive, 0.0);
    }

    #[test]
    fn camera_starts_at_framing_pose() {
        let (_, ctx) = booted();
        let eye = ctx.camera.eye();
        assert!((eye - CAMERA_EYE).length() < 1e-2, "eye = {eye}");
    }

    #[test]
    fn angles_advance_by_speed_times_elapsed() {
        let (mut viz, mut ctx) = booted();
        let before = planet_angle(&ctx, "Earth");

        let input = InputQueue::new();
        for _ in 0..120 {
            viz.update(&mut ctx, &input);
        }

        // Two seconds at Earth's 0.02 rad/s
        let swept = (planet_angle(&ctx, "Earth") - before).rem_euclid(std::f32::consts::TAU);
        assert!((swept - 0.04).abs() < 1e-4, "swept = {swept}");
    }

    #[test]
    fn pause_freezes_all_orbits() {
        let (mut viz, mut ctx) = booted();
        ctx.clock.toggle_pause();

        let names = ["Mercury", "Venus", "Earth", "Mars"];
        let before: Vec<f32> = names.iter().map(|n| planet_angle(&ctx, n)).collect();

        let input = InputQueue::new();
        for _ in 0..60 {
            viz.update(&mut ctx, &input);
        }

        for (name, angle) in names.iter().zip(before) {
            assert_eq!(planet_angle(&ctx, name), angle);
        }
    }

    #[test]
    fn speed_multiplier_scales_the_sweep() {
        let (mut viz, mut ctx) = booted();
        ctx.clock.speed_up(); // ×1.5
        let before = planet_angle(&ctx, "Mercury");

        let input = InputQueue::new();
        for _ in 0..60 {
            viz.update(&mut ctx, &input);
        }

        let swept = (planet_angle(&ctx, "Mercury") - before).rem_euclid(std::f32::consts::TAU);
        assert!((swept - 0.04 * 1.5).abs() < 1e-4, "swept = {swept}");
    }

    #[test]
    fn drag_orbits_the_camera() {
        let (mut viz, mut ctx) = booted();
        let azimuth_before = ctx.camera.azimuth;

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 400.0, y: 300.0 });
        input.push(InputEvent::PointerMove { x: 460.0, y: 300.0 });
        input.push(InputEvent::PointerUp { x: 460.0, y: 300.0 });
        viz.update(&mut ctx, &input);

        assert!(ctx.camera.azimuth != azimuth_before);
        assert!(!viz.dragging);
    }

    #[test]
    fn wheel_dolly_respects_framing_limits() {
        let (mut viz, mut ctx) = booted();
        let mut input = InputQueue::new();
        for _ in 0..500 {
            input.push(InputEvent::Wheel { delta: 120.0 });
        }
        viz.update(&mut ctx, &input);
        assert_eq!(ctx.camera.distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn resize_updates_the_viewport() {
        let (mut viz, mut ctx) = booted();
        let mut input = InputQueue::new();
        input.push(InputEvent::Resize {
            width: 1920.0,
            height: 1080.0,
        });
        viz.update(&mut ctx, &input);
        assert_eq!(ctx.camera.viewport(), (1920.0, 1080.0));
    }

    #[test]
    fn overlays_and_playback_event_emitted_each_tick() {
        let (mut viz, mut ctx) = booted();
        let input = InputQueue::new();
        viz.update(&mut ctx, &input);

        // Eight orbit guides plus Saturn's ring tessellated something.
        assert!(ctx.paths.vertex_count() > 0);

        assert_eq!(ctx.events.len(), 1);
        let event = ctx.events[0];
        assert_eq!(event.kind, EVENT_PLAYBACK);
        assert_eq!(event.a, 0.0);
        assert_eq!(event.b, 1.0);
    }

    #[test]
    fn scattered_angles_differ_between_planets() {
        let (_, ctx) = booted();
        let angles: Vec<f32> = ctx
            .scene
            .iter()
            .filter_map(|b| b.orbit.map(|o| o.angle))
            .collect();
        assert_eq!(angles.len(), 8);
        let mut distinct = angles.clone();
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap());
        distinct.dedup();
        assert!(distinct.len() > 1, "angles should be scattered: {angles:?}");
    }

    #[test]
    fn different_seeds_scatter_differently() {
        let collect = |seed: u32| -> Vec<f32> {
            let mut viz = SolarSystemViz::new(seed);
            let mut ctx = SimContext::new(&viz.config());
            viz.init(&mut ctx);
            ctx.scene
                .iter()
                .filter_map(|b| b.orbit.map(|o| o.angle))
                .collect()
        };
        assert_ne!(collect(1), collect(2));
    }
}
