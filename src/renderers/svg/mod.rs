//! SVG rendering output
//!
//! Draws the degree circle: an outer ring, one marker per scale degree
//! coloured by which chord uses it, and an arrow per voice.

pub mod config;
pub mod defaults;
pub mod document;
pub mod elements;

pub use config::CircleStyle;
pub use document::{render_diatonic_circle, CircleContext};

use thiserror::Error;

use crate::layout::LayoutError;
use crate::models::{Inversion, Key};
use crate::theory::{self, TheoryError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("theory error: {0}")]
    Theory(#[from] TheoryError),

    #[error("template error: {0}")]
    Template(#[from] mustache::Error),

    #[error("invalid style: {0}")]
    Config(String),
}

/// Render the voice leading between two shell chords in `key`.
///
/// `render_shell_progression("Em7", First, "Am7", Root, &"C".parse()?, &style)`
/// draws G-D-E moving to A-C-G on the C major circle.
pub fn render_shell_progression(
    from_symbol: &str,
    from_inversion: Inversion,
    to_symbol: &str,
    to_inversion: Inversion,
    key: &Key,
    style: &CircleStyle,
) -> Result<String, RenderError> {
    let from = theory::make_shell(from_symbol, from_inversion)?;
    let to = theory::make_shell(to_symbol, to_inversion)?;

    let from_degrees = theory::chord_to_degrees(&from, key)?;
    let to_degrees = theory::chord_to_degrees(&to, key)?;
    log::debug!(
        "{} {:?} -> {} {:?} in {}: {:?} -> {:?}",
        from_symbol,
        from_inversion,
        to_symbol,
        to_inversion,
        key,
        from_degrees,
        to_degrees
    );

    render_diatonic_circle(&from_degrees, &to_degrees, style)
}
