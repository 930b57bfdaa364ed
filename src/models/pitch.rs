//! Pitch spelling
//!
//! Letter names, accidentals and spelled pitch names (`C`, `F#`, `Bb4`).
//! Spelling matters here: degree lookup within a key compares spelled names,
//! not pitch classes, so `Gb` is not degree 5 of C major.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::theory::TheoryError;

static PITCH_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Ga-g])(##|#|bb|b|♯|♭)?(\d)?$").expect("pitch name pattern is valid")
});

/// Natural letter name, ordered from C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Position from C (C=0 … B=6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class of the natural letter (C=0 … B=11)
    pub fn pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Letter `steps` positions above this one, wrapping B → C
    pub fn step(self, steps: usize) -> Letter {
        Letter::ALL[(self.index() + steps) % 7]
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Chromatic alteration applied to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    pub fn semitone_offset(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn from_semitones(offset: i8) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Accidental> {
        match symbol {
            "" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "##" => Some(Accidental::DoubleSharp),
            "b" | "♭" => Some(Accidental::Flat),
            "bb" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}

/// Spelled pitch with an optional octave number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchName {
    pub letter: Letter,
    pub accidental: Accidental,
    pub octave: Option<u8>,
}

impl PitchName {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self {
            letter,
            accidental,
            octave: None,
        }
    }

    pub fn with_octave(self, octave: u8) -> Self {
        Self {
            octave: Some(octave),
            ..self
        }
    }

    /// Same spelling, octave dropped
    pub fn without_octave(self) -> Self {
        Self {
            octave: None,
            ..self
        }
    }

    pub fn pitch_class(&self) -> u8 {
        (self.letter.pitch_class() as i8 + self.accidental.semitone_offset()).rem_euclid(12) as u8
    }

    /// Spell the pitch class `letter.pitch_class() + distance` on `letter`.
    ///
    /// `target_pitch_class` is reached with the smallest accidental; anything
    /// further than a double accidental cannot be spelled on that letter.
    pub fn spell(letter: Letter, target_pitch_class: u8) -> Result<PitchName, TheoryError> {
        let raw = (target_pitch_class as i8 - letter.pitch_class() as i8).rem_euclid(12);
        let offset = if raw > 6 { raw - 12 } else { raw };
        let accidental = Accidental::from_semitones(offset).ok_or_else(|| {
            TheoryError::UnsupportedSpelling(format!(
                "pitch class {} on letter {}",
                target_pitch_class,
                letter.as_char()
            ))
        })?;
        Ok(PitchName::new(letter, accidental))
    }

    /// Name with accidental but no octave (`F#`)
    pub fn name(&self) -> String {
        format!("{}{}", self.letter.as_char(), self.accidental.symbol())
    }

    /// Spelling equality ignoring octave
    pub fn same_spelling(&self, other: &PitchName) -> bool {
        self.letter == other.letter && self.accidental == other.accidental
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.octave {
            Some(octave) => write!(f, "{}{}", self.name(), octave),
            None => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for PitchName {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = PITCH_NAME
            .captures(trimmed)
            .ok_or_else(|| TheoryError::InvalidPitch(s.to_string()))?;

        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidPitch(s.to_string()))?;
        let accidental = Accidental::from_symbol(caps.get(2).map_or("", |m| m.as_str()))
            .ok_or_else(|| TheoryError::InvalidPitch(s.to_string()))?;
        let octave = caps.get(3).and_then(|m| m.as_str().parse::<u8>().ok());

        Ok(PitchName {
            letter,
            accidental,
            octave,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naturals_and_accidentals() {
        let c: PitchName = "C".parse().unwrap();
        assert_eq!(c.letter, Letter::C);
        assert_eq!(c.accidental, Accidental::Natural);
        assert_eq!(c.octave, None);

        let fs: PitchName = "F#".parse().unwrap();
        assert_eq!(fs.accidental, Accidental::Sharp);

        let bb: PitchName = "bb".parse().unwrap();
        assert_eq!(bb.letter, Letter::B);
        assert_eq!(bb.accidental, Accidental::Flat);

        let ebb: PitchName = "Ebb".parse().unwrap();
        assert_eq!(ebb.accidental, Accidental::DoubleFlat);
    }

    #[test]
    fn test_parse_with_octave() {
        let e4: PitchName = "E4".parse().unwrap();
        assert_eq!(e4.octave, Some(4));
        assert_eq!(e4.to_string(), "E4");
        assert_eq!(e4.without_octave().to_string(), "E");
    }

    #[test]
    fn test_parse_unicode_accidentals() {
        let p: PitchName = "B♭".parse().unwrap();
        assert_eq!(p.name(), "Bb");
        let p: PitchName = "C♯".parse().unwrap();
        assert_eq!(p.name(), "C#");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("H".parse::<PitchName>().is_err());
        assert!("".parse::<PitchName>().is_err());
        assert!("C###".parse::<PitchName>().is_err());
    }

    #[test]
    fn test_pitch_class() {
        assert_eq!("C".parse::<PitchName>().unwrap().pitch_class(), 0);
        assert_eq!("Cb".parse::<PitchName>().unwrap().pitch_class(), 11);
        assert_eq!("B#".parse::<PitchName>().unwrap().pitch_class(), 0);
        assert_eq!("F##".parse::<PitchName>().unwrap().pitch_class(), 7);
    }

    #[test]
    fn test_spell_on_letter() {
        assert_eq!(PitchName::spell(Letter::F, 6).unwrap().name(), "F#");
        assert_eq!(PitchName::spell(Letter::E, 3).unwrap().name(), "Eb");
        assert_eq!(PitchName::spell(Letter::B, 0).unwrap().name(), "B#");
        assert!(PitchName::spell(Letter::C, 6).is_err());
    }

    #[test]
    fn test_letter_step_wraps() {
        assert_eq!(Letter::A.step(2), Letter::C);
        assert_eq!(Letter::E.step(6), Letter::D);
    }
}
