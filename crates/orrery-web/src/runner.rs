use orrery_engine::systems::render::build_body_buffer;
use orrery_engine::{
    BodyBuffer, FixedStep, InputEvent, InputQueue, ProtocolLayout, SimConfig, SimContext,
    Simulation,
};

/// Generic runner that wires up the simulation loop.
///
/// Each concrete visualization creates a `thread_local!` SimRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct SimRunner<S: Simulation> {
    sim: S,
    ctx: SimContext,
    input: InputQueue,
    /// Stays empty; handed to ticks after the first so per-frame input is
    /// applied exactly once.
    spent_input: InputQueue,
    bodies: BodyBuffer,
    timestep: FixedStep,
    config: SimConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<S: Simulation> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let timestep = FixedStep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let bodies = BodyBuffer::with_capacity(config.max_bodies);
        let ctx = SimContext::new(&config);

        Self {
            sim,
            ctx,
            input: InputQueue::new(),
            spent_input: InputQueue::new(),
            bodies,
            timestep,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the simulation. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.sim.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.sim.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fixed-step the simulation and rebuild draw buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let ticks = self.timestep.accumulate(dt);
        if ticks == 0 {
            // Not enough accumulated time; keep pending input for the next
            // frame and leave the previous buffers on screen.
            return;
        }

        self.ctx.clear_frame_data();

        for i in 0..ticks {
            let input = if i == 0 { &self.input } else { &self.spent_input };
            self.sim.update(&mut self.ctx, input);
        }
        self.input.drain();

        build_body_buffer(self.ctx.scene.iter(), &self.ctx.camera, &mut self.bodies);
    }

    // ---- Playback controls ----

    /// Flip the pause flag. Returns the new state (true = paused).
    pub fn toggle_pause(&mut self) -> bool {
        self.ctx.clock.toggle_pause()
    }

    /// Raise playback speed one step. Returns the new multiplier.
    pub fn speed_up(&mut self) -> f32 {
        self.ctx.clock.speed_up()
    }

    /// Lower playback speed one step. Returns the new multiplier.
    pub fn slow_down(&mut self) -> f32 {
        self.ctx.clock.slow_down()
    }

    pub fn paused(&self) -> bool {
        self.ctx.clock.paused()
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.ctx.clock.multiplier()
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.instance_count()
    }

    #[cfg(feature = "vectors")]
    pub fn path_vertices_ptr(&self) -> *const f32 {
        self.ctx.paths.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn path_vertex_count(&self) -> u32 {
        self.ctx.paths.vertex_count() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient()[2]
    }

    pub fn view_width(&self) -> f32 {
        self.ctx.camera.viewport().0
    }

    pub fn view_height(&self) -> f32 {
        self.ctx.camera.viewport().1
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_path_vertices(&self) -> u32 {
        self.layout.max_path_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
