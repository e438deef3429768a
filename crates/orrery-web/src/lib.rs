pub mod dom;
pub mod runner;

pub use runner::SimRunner;

/// Generate all `#[wasm_bindgen]` exports for a visualization.
///
/// Eliminates the per-crate boilerplate by generating:
/// - `thread_local!` storage for the SimRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (sim_init, sim_tick, sim_mount, input
///   handlers, playback controls, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::InputEvent;
///
/// mod viz;
/// use viz::MyViz;
///
/// orrery_web::export_sim!(MyViz, "my-viz");
/// ```
///
/// # Arguments
///
/// - `$sim_type`: The struct implementing `orrery_engine::Simulation`;
///   must provide `fn new(seed: u32) -> Self`.
/// - `$sim_name`: A string literal used in the initialization log message.
#[macro_export]
macro_rules! export_sim {
    ($sim_type:ty, $sim_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner<$sim_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner<$sim_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Simulation not initialized. Call sim_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn sim_init(seed: u32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let sim = <$sim_type>::new(seed);
            let runner = $crate::SimRunner::new(sim);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $sim_name);
        }

        /// Wire the DOM controls and start the frame loop.
        #[wasm_bindgen]
        pub fn sim_mount() -> Result<(), wasm_bindgen::JsValue> {
            $crate::dom::mount($crate::dom::MountHooks {
                tick: Box::new(|dt| with_runner(|r| r.tick(dt))),
                input: std::rc::Rc::new(|event| with_runner(|r| r.push_input(event))),
                toggle_pause: Box::new(|| with_runner(|r| r.toggle_pause())),
                speed_up: Box::new(|| with_runner(|r| r.speed_up())),
                slow_down: Box::new(|| with_runner(|r| r.slow_down())),
            })
        }

        #[wasm_bindgen]
        pub fn sim_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn sim_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn sim_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn sim_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Playback controls ----

        #[wasm_bindgen]
        pub fn sim_toggle_pause() -> bool {
            with_runner(|r| r.toggle_pause())
        }

        #[wasm_bindgen]
        pub fn sim_speed_up() -> f32 {
            with_runner(|r| r.speed_up())
        }

        #[wasm_bindgen]
        pub fn sim_slow_down() -> f32 {
            with_runner(|r| r.slow_down())
        }

        #[wasm_bindgen]
        pub fn is_paused() -> bool {
            with_runner(|r| r.paused())
        }

        #[wasm_bindgen]
        pub fn get_speed_multiplier() -> f32 {
            with_runner(|r| r.speed_multiplier())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }

        #[wasm_bindgen]
        pub fn get_view_width() -> f32 {
            with_runner(|r| r.view_width())
        }

        #[wasm_bindgen]
        pub fn get_view_height() -> f32 {
            with_runner(|r| r.view_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };

    // Variant with vectors feature
    ($sim_type:ty, $sim_name:literal, vectors) => {
        $crate::export_sim!($sim_type, $sim_name);

        // ---- Path accessors (only when vectors feature is enabled) ----

        #[wasm_bindgen]
        pub fn get_path_vertices_ptr() -> *const f32 {
            with_runner(|r| r.path_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_path_vertex_count() -> u32 {
            with_runner(|r| r.path_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_max_path_vertices() -> u32 {
            with_runner(|r| r.max_path_vertices())
        }
    };
}
