use orrery_engine::InputEvent;
use wasm_bindgen::prelude::*;

mod planets;
mod viz;
use viz::SolarSystemViz;

orrery_web::export_sim!(SolarSystemViz, "solar-system", vectors);
