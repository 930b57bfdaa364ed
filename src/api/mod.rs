//! Voice-leading circle WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `layout`: Angle table and voice-leading vector geometry
//! - `voicing`: Chord spelling, degree mapping and voice leading
//! - `render`: SVG output of the degree circle

pub mod helpers;
pub mod layout;
pub mod render;
pub mod voicing;

pub use layout::{calculate_degree_angles, calculate_voice_leading_vectors};
pub use render::{render_diatonic_circle, render_voice_leading};
pub use voicing::{
    all_inversion_pairs, chord_to_degrees, make_chord, make_shell, rotate_progression,
    voice_leading,
};
