//! Chord voicings in scale-degree space
//!
//! Builds shell and full voicings from chord symbols, maps them to degrees
//! of a key and computes the signed diatonic step each voice moves by.

use serde::{Deserialize, Serialize};

use super::chord_symbol::ChordSymbol;
use super::Result;
use crate::models::chord::rotate_tones;
use crate::models::{Chord, ChordTones, Degree, Inversion, Key, PitchName, ShellChord};

/// Degrees in the diatonic circle voice-leading is measured on
const DIATONIC_SIZE: i8 = 7;

/// One combination of shell inversions and its voice leading
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InversionPair {
    pub from: ShellChord,
    pub to: ShellChord,
    pub vl: Vec<i8>,
}

/// Shell voicing (root, third, seventh) with `inversion`'s tone in the bass
pub fn make_shell(symbol: &str, inversion: Inversion) -> Result<ShellChord> {
    let chord_symbol = ChordSymbol::parse(symbol)?;
    let tones: Vec<String> = chord_symbol
        .shell_pitches()?
        .iter()
        .map(|p| p.to_string())
        .collect();
    let rotated = rotate_tones(&tones, inversion);

    Ok(ShellChord {
        symbol: symbol.to_string(),
        inversion,
        notes: [rotated[0].clone(), rotated[1].clone(), rotated[2].clone()],
    })
}

/// Chord voicing with octave-qualified note names, rotated like [`make_shell`]
pub fn make_chord(symbol: &str, inversion: Inversion) -> Result<Chord> {
    let chord_symbol = ChordSymbol::parse(symbol)?;
    let tones: Vec<String> = chord_symbol
        .chord_pitches()?
        .iter()
        .map(|p| p.to_string())
        .collect();

    Ok(Chord {
        symbol: symbol.to_string(),
        inversion,
        notes: rotate_tones(&tones, inversion),
    })
}

/// Scale degree of every note of `chord` in `key`, in voice order.
///
/// Notes spelled as one of the key's scale pitches get that degree. Anything
/// else falls back to its letter name read in C (C=1 … B=7).
pub fn chord_to_degrees<C: ChordTones + ?Sized>(chord: &C, key: &Key) -> Result<Vec<Degree>> {
    chord
        .notes()
        .iter()
        .map(|note| -> Result<Degree> {
            let pitch: PitchName = note.parse()?;
            match key.degree_of(&pitch)? {
                Some(degree) => Ok(degree),
                None => {
                    let fallback = Degree(pitch.letter.index() as u8 + 1);
                    log::debug!(
                        "{}: {} is not diatonic in {}, using letter degree {}",
                        chord.symbol(),
                        note,
                        key,
                        fallback
                    );
                    Ok(fallback)
                }
            }
        })
        .collect()
}

/// Signed diatonic step per voice from `a` to `b`, in [-3, 3].
///
/// Voices are paired positionally; the longer chord's extra voices are ignored.
pub fn voice_leading<A, B>(a: &A, b: &B, key: &Key) -> Result<Vec<i8>>
where
    A: ChordTones + ?Sized,
    B: ChordTones + ?Sized,
{
    let from = chord_to_degrees(a, key)?;
    let to = chord_to_degrees(b, key)?;

    Ok(from
        .iter()
        .zip(to.iter())
        .map(|(f, t)| shortest_step(*f, *t))
        .collect())
}

fn shortest_step(from: Degree, to: Degree) -> i8 {
    let raw = (to.value() as i8 - from.value() as i8).rem_euclid(DIATONIC_SIZE);
    if raw <= 3 {
        raw
    } else {
        raw - DIATONIC_SIZE
    }
}

/// Move every note of every chord up `steps` scale degrees (mod 7).
///
/// Notes are respelled from the major scale on the key's tonic and lose
/// their octave.
pub fn rotate_progression(chords: &[Chord], steps: u8, key: &Key) -> Result<Vec<Chord>> {
    let scale = key.relative_major_scale()?;

    chords
        .iter()
        .map(|chord| -> Result<Chord> {
            let notes = chord_to_degrees(chord, key)?
                .into_iter()
                .map(|d| {
                    let rotated = d.rotate(steps);
                    scale[rotated.value() as usize - 1].name()
                })
                .collect();
            Ok(Chord {
                notes,
                ..chord.clone()
            })
        })
        .collect()
}

/// All nine shell inversion combinations between two chord symbols
pub fn all_inversion_pairs(
    from_symbol: &str,
    to_symbol: &str,
    key: &Key,
) -> Result<Vec<InversionPair>> {
    let mut pairs = Vec::with_capacity(Inversion::ALL.len() * Inversion::ALL.len());
    for from_inversion in Inversion::ALL {
        for to_inversion in Inversion::ALL {
            let from = make_shell(from_symbol, from_inversion)?;
            let to = make_shell(to_symbol, to_inversion)?;
            let vl = voice_leading(&from, &to, key)?;
            pairs.push(InversionPair { from, to, vl });
        }
    }
    Ok(pairs)
}
