/// Fixed timestep accumulator.
/// Ensures simulation logic runs at a consistent rate regardless of frame time.
pub struct FixedStep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 ticks per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let ticks = (self.accumulator / self.dt) as u32;
        self.accumulator -= ticks as f32 * self.dt;
        ticks
    }

    /// Interpolation alpha between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Playback state for the animation: a pause flag and a global speed
/// multiplier. Simulation time advances by `scaled(dt)` each tick, so a
/// paused clock freezes every orbit and spin without losing state.
pub struct PlaybackClock {
    paused: bool,
    multiplier: f32,
}

/// Step applied by speed_up / slow_down.
const SPEED_STEP: f32 = 1.5;
/// Multiplier bounds; repeated clicks must not drive the value to inf or 0.
const MIN_MULTIPLIER: f32 = 1.0 / 64.0;
const MAX_MULTIPLIER: f32 = 64.0;

impl PlaybackClock {
    pub fn new() -> Self {
        Self {
            paused: false,
            multiplier: 1.0,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Flip the pause flag. Returns the new state (true = paused).
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Multiply playback speed by the step. Returns the new multiplier.
    pub fn speed_up(&mut self) -> f32 {
        self.multiplier = (self.multiplier * SPEED_STEP).min(MAX_MULTIPLIER);
        self.multiplier
    }

    /// Divide playback speed by the step. Returns the new multiplier.
    pub fn slow_down(&mut self) -> f32 {
        self.multiplier = (self.multiplier / SPEED_STEP).max(MIN_MULTIPLIER);
        self.multiplier
    }

    /// Scale a real-time delta into simulation time.
    pub fn scaled(&self, dt: f32) -> f32 {
        if self.paused {
            0.0
        } else {
            dt * self.multiplier
        }
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
