//! Chord-theory exports
//!
//! Chords cross the boundary as `{symbol, inversion, notes}` objects, keys
//! as names (`"C"`, `"a"`, `"F# major"`).

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, serialize};
use crate::models::{Chord, Degree, Inversion, Key};
use crate::theory;
use crate::wasm_info;

pub(crate) fn parse_key(key: &str) -> Result<Key, JsValue> {
    key.parse::<Key>().map_err(|e| js_error("Invalid key", e))
}

pub(crate) fn parse_inversion(inversion: Option<u8>) -> Result<Inversion, JsValue> {
    Inversion::try_from(inversion.unwrap_or(0)).map_err(|e| js_error("Invalid inversion", e))
}

/// Shell chord (root, third, seventh) for a symbol in the given inversion
#[wasm_bindgen(js_name = makeShell)]
pub fn make_shell(symbol: &str, inversion: Option<u8>) -> Result<JsValue, JsValue> {
    let shell = theory::make_shell(symbol, parse_inversion(inversion)?)
        .map_err(|e| js_error("makeShell", e))?;
    serialize(&shell, "Failed to serialize shell chord")
}

/// Chord with octave-qualified note names for a symbol in the given inversion
#[wasm_bindgen(js_name = makeChord)]
pub fn make_chord(symbol: &str, inversion: Option<u8>) -> Result<JsValue, JsValue> {
    let chord = theory::make_chord(symbol, parse_inversion(inversion)?)
        .map_err(|e| js_error("makeChord", e))?;
    serialize(&chord, "Failed to serialize chord")
}

/// Scale degrees (1-7) of a chord's notes in `key`
#[wasm_bindgen(js_name = chordToDegrees)]
pub fn chord_to_degrees(chord: JsValue, key: &str) -> Result<Vec<u8>, JsValue> {
    let chord: Chord = deserialize(chord, "Invalid chord")?;
    let key = parse_key(key)?;
    let degrees = theory::chord_to_degrees(&chord, &key).map_err(|e| js_error("chordToDegrees", e))?;
    Ok(degrees.into_iter().map(Degree::value).collect())
}

/// Signed diatonic step (-3..=3) per voice from chord `a` to chord `b`
#[wasm_bindgen(js_name = voiceLeading)]
pub fn voice_leading(a: JsValue, b: JsValue, key: &str) -> Result<Vec<i8>, JsValue> {
    let a: Chord = deserialize(a, "Invalid chord a")?;
    let b: Chord = deserialize(b, "Invalid chord b")?;
    let key = parse_key(key)?;
    theory::voice_leading(&a, &b, &key).map_err(|e| js_error("voiceLeading", e))
}

/// Move every note of every chord up `steps` scale degrees
#[wasm_bindgen(js_name = rotateProgression)]
pub fn rotate_progression(chords: JsValue, steps: u8, key: &str) -> Result<JsValue, JsValue> {
    let chords: Vec<Chord> = deserialize(chords, "Invalid chord list")?;
    let key = parse_key(key)?;
    let rotated = theory::rotate_progression(&chords, steps, &key)
        .map_err(|e| js_error("rotateProgression", e))?;
    serialize(&rotated, "Failed to serialize progression")
}

/// All nine shell inversion pairs between two chord symbols with their voice leading
#[wasm_bindgen(js_name = allInversionPairs)]
pub fn all_inversion_pairs(from_symbol: &str, to_symbol: &str, key: &str) -> Result<JsValue, JsValue> {
    wasm_info!("allInversionPairs: {} -> {} in {}", from_symbol, to_symbol, key);
    let key = parse_key(key)?;
    let pairs = theory::all_inversion_pairs(from_symbol, to_symbol, &key)
        .map_err(|e| js_error("allInversionPairs", e))?;
    serialize(&pairs, "Failed to serialize inversion pairs")
}
