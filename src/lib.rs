//! Diatonic Voice-Leading Circle WASM Module
//!
//! Places the degrees of a scale on a circle and draws how each voice of one
//! chord moves to the next. The geometry core lives in [`layout`]; chord
//! symbols are turned into degrees by [`theory`] and drawn by [`renderers`].

pub mod api;
pub mod layout;
pub mod models;
pub mod renderers;
pub mod theory;

// Re-export commonly used types
pub use layout::{
    calculate_degree_angles, calculate_voice_leading_vectors, LayoutError, Vector,
    DEFAULT_TOTAL_SEMITONES,
};
pub use models::{Chord, Degree, Inversion, Key, ShellChord};
pub use renderers::{CircleStyle, RenderError};
pub use theory::TheoryError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already initialized: {}", e)));
    }

    log::info!("Voice-leading circle WASM module initialized");
}
