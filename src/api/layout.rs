//! Circle geometry exports
//!
//! Degrees arrive from JavaScript as plain numbers and angles as a
//! `Float64Array`; vectors go back as `{x1, y1, x2, y2}` objects.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{js_error, serialize};
use crate::layout::{self, degrees_from_numbers, DEFAULT_TOTAL_SEMITONES};
use crate::wasm_log;

/// Angle in radians for each semitone offset, first one at 12 o'clock
///
/// # Parameters
/// - `semitone_offsets`: scale steps from the root, degree 1 first
/// - `total_semitones`: semitones per octave, 12 when omitted
#[wasm_bindgen(js_name = calculateDegreeAngles)]
pub fn calculate_degree_angles(semitone_offsets: Vec<u32>, total_semitones: Option<u32>) -> Vec<f64> {
    let total = total_semitones.unwrap_or(DEFAULT_TOTAL_SEMITONES);
    wasm_log!(
        "calculateDegreeAngles: {} offsets over {} semitones",
        semitone_offsets.len(),
        total
    );
    layout::calculate_degree_angles(&semitone_offsets, total)
}

/// Inset voice-leading segments between paired degrees
///
/// # Returns
/// Array of `{x1, y1, x2, y2}`, one per pair (shorter input wins)
#[wasm_bindgen(js_name = calculateVoiceLeadingVectors)]
pub fn calculate_voice_leading_vectors(
    from_degrees: Vec<u32>,
    to_degrees: Vec<u32>,
    degree_angles: Vec<f64>,
    radius: f64,
    node_radius: f64,
) -> Result<JsValue, JsValue> {
    let table_len = degree_angles.len();
    let from = degrees_from_numbers(&from_degrees, table_len)
        .map_err(|e| js_error("calculateVoiceLeadingVectors", e))?;
    let to = degrees_from_numbers(&to_degrees, table_len)
        .map_err(|e| js_error("calculateVoiceLeadingVectors", e))?;

    let vectors = layout::calculate_voice_leading_vectors(
        &from,
        &to,
        &degree_angles,
        radius,
        node_radius,
    )
    .map_err(|e| js_error("calculateVoiceLeadingVectors", e))?;

    serialize(&vectors, "Failed to serialize vectors")
}
