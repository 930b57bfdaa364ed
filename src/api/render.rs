//! SVG rendering exports

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, js_error};
use crate::api::voicing::{parse_inversion, parse_key};
use crate::layout::degrees_from_numbers;
use crate::renderers::svg::{self, CircleStyle};
use crate::{wasm_info, wasm_log};

fn parse_style(style: JsValue) -> Result<CircleStyle, JsValue> {
    let style: CircleStyle = deserialize_or_default(style, "Invalid circle style")?;
    style.validate().map_err(|e| js_error("Invalid circle style", e))
}

/// Render the degree circle for two degree sequences as an SVG string
///
/// `style` is an optional partial `CircleStyle` object.
#[wasm_bindgen(js_name = renderDiatonicCircle)]
pub fn render_diatonic_circle(
    from_degrees: Vec<u32>,
    to_degrees: Vec<u32>,
    style: JsValue,
) -> Result<String, JsValue> {
    let style = parse_style(style)?;
    let table_len = style.semitone_offsets.len();
    let from = degrees_from_numbers(&from_degrees, table_len)
        .map_err(|e| js_error("renderDiatonicCircle", e))?;
    let to = degrees_from_numbers(&to_degrees, table_len)
        .map_err(|e| js_error("renderDiatonicCircle", e))?;

    let svg = svg::render_diatonic_circle(&from, &to, &style)
    .map_err(|e| js_error("renderDiatonicCircle", e))?;

    wasm_log!("renderDiatonicCircle: {} bytes", svg.len());
    Ok(svg)
}

/// Render the voice leading between two shell chords in `key`
#[wasm_bindgen(js_name = renderVoiceLeading)]
pub fn render_voice_leading(
    from_symbol: &str,
    from_inversion: Option<u8>,
    to_symbol: &str,
    to_inversion: Option<u8>,
    key: &str,
    style: JsValue,
) -> Result<String, JsValue> {
    wasm_info!(
        "renderVoiceLeading: {} -> {} in {}",
        from_symbol,
        to_symbol,
        key
    );
    let style = parse_style(style)?;
    let key = parse_key(key)?;

    svg::render_shell_progression(
        from_symbol,
        parse_inversion(from_inversion)?,
        to_symbol,
        parse_inversion(to_inversion)?,
        &key,
        &style,
    )
    .map_err(|e| js_error("renderVoiceLeading", e))
}
