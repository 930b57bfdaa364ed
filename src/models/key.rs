//! Musical key (tonic + mode) and its spelled diatonic scale
//!
//! Key names follow the usual convention of chord-theory libraries:
//! an upper-case tonic is major, a lower-case tonic is (natural) minor.
//! An explicit " major" / " minor" suffix overrides the case rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::degree::Degree;
use super::pitch::{Accidental, PitchName};
use crate::theory::TheoryError;

/// Semitone offsets of the major scale from its tonic
pub const MAJOR_SCALE_OFFSETS: [u32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offsets of the natural minor scale from its tonic
pub const MINOR_SCALE_OFFSETS: [u32; 7] = [0, 2, 3, 5, 7, 8, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    pub fn offsets(self) -> [u32; 7] {
        match self {
            Mode::Major => MAJOR_SCALE_OFFSETS,
            Mode::Minor => MINOR_SCALE_OFFSETS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub tonic: PitchName,
    pub mode: Mode,
}

impl Key {
    pub fn new(tonic: PitchName, mode: Mode) -> Self {
        Self {
            tonic: tonic.without_octave(),
            mode,
        }
    }

    /// The seven scale pitches, degree 1 first, spelled on consecutive letters
    pub fn scale(&self) -> Result<[PitchName; 7], TheoryError> {
        spell_scale(self.tonic, self.mode)
    }

    /// Same tonic, major mode
    pub fn relative_major_scale(&self) -> Result<[PitchName; 7], TheoryError> {
        spell_scale(self.tonic, Mode::Major)
    }

    /// Degree of `pitch` when its spelling is one of the scale's pitches
    pub fn degree_of(&self, pitch: &PitchName) -> Result<Option<Degree>, TheoryError> {
        let scale = self.scale()?;
        Ok(scale
            .iter()
            .position(|p| p.same_spelling(pitch))
            .map(|i| Degree(i as u8 + 1)))
    }
}

fn spell_scale(tonic: PitchName, mode: Mode) -> Result<[PitchName; 7], TheoryError> {
    let tonic_pc = tonic.pitch_class() as u32;
    let mut pitches = [PitchName::new(tonic.letter, Accidental::Natural); 7];
    for (i, offset) in mode.offsets().iter().enumerate() {
        let target = ((tonic_pc + offset) % 12) as u8;
        pitches[i] = PitchName::spell(tonic.letter.step(i), target)?;
    }
    Ok(pitches)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            Mode::Major => "major",
            Mode::Minor => "minor",
        };
        write!(f, "{} {}", self.tonic.name(), mode)
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let tonic_str = parts
            .next()
            .ok_or_else(|| TheoryError::InvalidKey(s.to_string()))?;

        let explicit_mode = match parts.next().map(|m| m.to_lowercase()) {
            None => None,
            Some(m) if m == "major" || m == "maj" => Some(Mode::Major),
            Some(m) if m == "minor" || m == "min" => Some(Mode::Minor),
            Some(_) => return Err(TheoryError::InvalidKey(s.to_string())),
        };
        if parts.next().is_some() {
            return Err(TheoryError::InvalidKey(s.to_string()));
        }

        let tonic: PitchName = tonic_str
            .parse()
            .map_err(|_| TheoryError::InvalidKey(s.to_string()))?;
        if tonic.octave.is_some() {
            return Err(TheoryError::InvalidKey(s.to_string()));
        }

        let case_mode = if tonic_str.starts_with(|c: char| c.is_ascii_lowercase()) {
            Mode::Minor
        } else {
            Mode::Major
        };

        Ok(Key::new(tonic, explicit_mode.unwrap_or(case_mode)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(scale: &[PitchName; 7]) -> Vec<String> {
        scale.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_parse_case_selects_mode() {
        let c: Key = "C".parse().unwrap();
        assert_eq!(c.mode, Mode::Major);
        let a: Key = "a".parse().unwrap();
        assert_eq!(a.mode, Mode::Minor);
        assert_eq!(a.tonic.name(), "A");
    }

    #[test]
    fn test_parse_explicit_mode() {
        let key: Key = "A minor".parse().unwrap();
        assert_eq!(key.mode, Mode::Minor);
        let key: Key = "f# Major".parse().unwrap();
        assert_eq!(key.mode, Mode::Major);
        assert_eq!(key.to_string(), "F# major");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Key>().is_err());
        assert!("H".parse::<Key>().is_err());
        assert!("C dorian".parse::<Key>().is_err());
        assert!("C4".parse::<Key>().is_err());
    }

    #[test]
    fn test_major_scales_spelled_on_consecutive_letters() {
        let c: Key = "C".parse().unwrap();
        assert_eq!(names(&c.scale().unwrap()), vec!["C", "D", "E", "F", "G", "A", "B"]);

        let e: Key = "E".parse().unwrap();
        assert_eq!(names(&e.scale().unwrap()), vec!["E", "F#", "G#", "A", "B", "C#", "D#"]);

        let bb: Key = "Bb".parse().unwrap();
        assert_eq!(names(&bb.scale().unwrap()), vec!["Bb", "C", "D", "Eb", "F", "G", "A"]);
    }

    #[test]
    fn test_minor_scale() {
        let a: Key = "a".parse().unwrap();
        assert_eq!(names(&a.scale().unwrap()), vec!["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(
            names(&a.relative_major_scale().unwrap()),
            vec!["A", "B", "C#", "D", "E", "F#", "G#"]
        );
    }

    #[test]
    fn test_degree_of_matches_spelling() {
        let c: Key = "C".parse().unwrap();
        let g: PitchName = "G4".parse().unwrap();
        assert_eq!(c.degree_of(&g).unwrap(), Some(Degree(5)));
        let gb: PitchName = "Gb".parse().unwrap();
        assert_eq!(c.degree_of(&gb).unwrap(), None);
    }
}
