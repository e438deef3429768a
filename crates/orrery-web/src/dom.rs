//! DOM wiring for the visualization page.
//!
//! Attaches the playback buttons, pointer/wheel camera controls, and the
//! window resize handler, then drives the frame loop from
//! `requestAnimationFrame`. The host page only has to provide the four
//! elements and call the generated `sim_mount()` export.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, MouseEvent, WheelEvent, Window};

use orrery_engine::InputEvent;

/// Element that receives the canvas and the pointer/wheel listeners.
pub const CONTAINER_ID: &str = "canvas-container";
/// Pause/resume toggle button.
pub const PAUSE_BTN_ID: &str = "pause-btn";
/// Speed multiplier × 1.5 button.
pub const SPEED_UP_ID: &str = "speed-up";
/// Speed multiplier ÷ 1.5 button.
pub const SLOW_DOWN_ID: &str = "slow-down";

const PAUSE_LABEL: &str = "⏸ Pause";
const RESUME_LABEL: &str = "▶ Play";

/// Frame deltas above this are a tab-switch hiccup, not animation time.
const MAX_FRAME_DT: f32 = 0.25;

/// Shared handle to the input sink; cloned into every listener closure.
type InputSink = Rc<dyn Fn(InputEvent)>;

/// Callbacks a mounted page drives. The `export_sim!` macro builds these
/// over its thread-local runner.
pub struct MountHooks {
    pub tick: Box<dyn FnMut(f32)>,
    pub input: InputSink,
    pub toggle_pause: Box<dyn Fn() -> bool>,
    pub speed_up: Box<dyn Fn() -> f32>,
    pub slow_down: Box<dyn Fn() -> f32>,
}

/// Wire up the DOM and start the frame loop.
pub fn mount(hooks: MountHooks) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let container = element(&document, CONTAINER_ID)?;
    let input = hooks.input;

    // Initial viewport from the container's client size.
    push_resize(input.as_ref(), &container);

    attach_resize(&window, input.clone(), container.clone())?;
    attach_pointer(&container, &input)?;
    attach_wheel(&container, input.clone())?;
    attach_pause_button(&document, hooks.toggle_pause)?;
    attach_speed_button(&document, SPEED_UP_ID, hooks.speed_up)?;
    attach_speed_button(&document, SLOW_DOWN_ID, hooks.slow_down)?;

    start_frame_loop(&window, hooks.tick)
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

fn listen(target: &EventTarget, event: &str, function: &js_sys::Function) -> Result<(), JsValue> {
    target.add_event_listener_with_callback(event, function)
}

fn push_resize(input: &dyn Fn(InputEvent), container: &Element) {
    input(InputEvent::Resize {
        width: container.client_width() as f32,
        height: container.client_height() as f32,
    });
}

fn attach_resize(window: &Window, input: InputSink, container: Element) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        push_resize(input.as_ref(), &container);
    });
    listen(window, "resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_pointer(container: &Element, input: &InputSink) -> Result<(), JsValue> {
    let events: [(&str, fn(f32, f32) -> InputEvent); 3] = [
        ("mousedown", |x, y| InputEvent::PointerDown { x, y }),
        ("mousemove", |x, y| InputEvent::PointerMove { x, y }),
        ("mouseup", |x, y| InputEvent::PointerUp { x, y }),
    ];
    for (name, make) in events {
        let input = input.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            (input.as_ref())(make(ev.offset_x() as f32, ev.offset_y() as f32));
        });
        listen(container, name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn attach_wheel(container: &Element, input: InputSink) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(WheelEvent)>::new(move |ev: WheelEvent| {
        ev.prevent_default();
        (input.as_ref())(InputEvent::Wheel {
            delta: ev.delta_y() as f32,
        });
    });
    listen(container, "wheel", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_pause_button(
    document: &Document,
    toggle_pause: Box<dyn Fn() -> bool>,
) -> Result<(), JsValue> {
    let button = element(document, PAUSE_BTN_ID)?;
    let label_target = button.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let paused = toggle_pause();
        label_target.set_text_content(Some(if paused { RESUME_LABEL } else { PAUSE_LABEL }));
    });
    listen(&button, "click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_speed_button(
    document: &Document,
    id: &str,
    adjust: Box<dyn Fn() -> f32>,
) -> Result<(), JsValue> {
    let button = element(document, id)?;
    let closure = Closure::<dyn FnMut()>::new(move || {
        let multiplier = adjust();
        log::debug!("playback speed ×{multiplier}");
    });
    listen(&button, "click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Drive `tick` from requestAnimationFrame, deriving clamped per-frame
/// deltas from the callback timestamp.
fn start_frame_loop(window: &Window, mut tick: Box<dyn FnMut(f32)>) -> Result<(), JsValue> {
    let raf: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let raf_next = raf.clone();
    let window_next = window.clone();
    let last_ms = Cell::new(None::<f64>);

    *raf.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let dt = match last_ms.replace(Some(now_ms)) {
            Some(prev) => ((now_ms - prev) / 1000.0) as f32,
            None => 0.0,
        };
        tick(dt.clamp(0.0, MAX_FRAME_DT));

        if let Some(callback) = raf_next.borrow().as_ref() {
            let _ = window_next.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = raf.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
