//! Renderers module for the voice-leading circle
//!
//! This module contains the output formats the circle can be drawn in.

pub mod svg;

// Re-export commonly used types
pub use svg::{render_diatonic_circle, render_shell_progression, CircleStyle, RenderError};
