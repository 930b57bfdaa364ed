//! Chord symbol parsing (`Em7`, `Bbmaj7`, `F#m7b5`, `G7`)
//!
//! Only root and quality are recognised. Extensions and alterations after
//! the quality (`G7b9`, `Cmaj9#11`) are accepted but do not change the shell.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Result, TheoryError};
use crate::models::pitch::{Accidental, Letter, PitchName};
use crate::models::ChordQuality;

static CHORD_SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Ga-g])(#|b|♯|♭)?(.*)$").expect("chord symbol pattern is valid")
});

/// Octave the root of a fully spelled chord is placed in
pub const ROOT_OCTAVE: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    pub symbol: String,
    pub root: PitchName,
    pub quality: ChordQuality,
}

impl ChordSymbol {
    pub fn parse(symbol: &str) -> Result<Self> {
        let trimmed = symbol.trim();
        let caps = CHORD_SYMBOL
            .captures(trimmed)
            .ok_or_else(|| TheoryError::InvalidChordSymbol(symbol.to_string()))?;

        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidChordSymbol(symbol.to_string()))?;
        let accidental = match caps.get(2).map(|m| m.as_str()) {
            Some("#") | Some("♯") => Accidental::Sharp,
            Some("b") | Some("♭") => Accidental::Flat,
            _ => Accidental::Natural,
        };
        let suffix = caps.get(3).map_or("", |m| m.as_str());
        let quality = quality_from_suffix(suffix).ok_or_else(|| TheoryError::UnknownQuality {
            symbol: symbol.to_string(),
            quality: suffix.to_string(),
        })?;

        Ok(Self {
            symbol: trimmed.to_string(),
            root: PitchName::new(letter, accidental),
            quality,
        })
    }

    /// Root, third and seventh, spelled on the letters a third and a seventh
    /// above the root. No octaves.
    pub fn shell_pitches(&self) -> Result<[PitchName; 3]> {
        let root_pc = self.root.pitch_class();
        let third = PitchName::spell(
            self.root.letter.step(2),
            (root_pc + self.quality.third()) % 12,
        )?;
        let seventh = PitchName::spell(
            self.root.letter.step(6),
            (root_pc + self.quality.seventh()) % 12,
        )?;
        Ok([self.root, third, seventh])
    }

    /// Shell tones with octaves, root in [`ROOT_OCTAVE`] and the upper tones
    /// stacked above it
    pub fn chord_pitches(&self) -> Result<[PitchName; 3]> {
        let [root, third, seventh] = self.shell_pitches()?;
        let base = self.root.letter.index();
        let octave_for = |steps: usize| ROOT_OCTAVE + ((base + steps) / 7) as u8;
        Ok([
            root.with_octave(octave_for(0)),
            third.with_octave(octave_for(2)),
            seventh.with_octave(octave_for(6)),
        ])
    }
}

fn quality_from_suffix(suffix: &str) -> Option<ChordQuality> {
    let s = suffix.trim();
    let starts = |prefixes: &[&str]| prefixes.iter().any(|p| s.starts_with(p));
    let has_extension = s.chars().any(|c| c.is_ascii_digit());

    if s.is_empty() || starts(&["add"]) {
        Some(ChordQuality::Major)
    } else if starts(&["madd", "m(add", "minadd", "min(add", "miadd", "-add"]) {
        Some(ChordQuality::Minor)
    } else if starts(&[
        "m7b5", "m7(b5)", "mi7b5", "mi7(b5)", "min7b5", "min7(b5)", "-7b5", "-7(b5)", "ø",
    ]) {
        Some(ChordQuality::HalfDiminished)
    } else if starts(&["mMaj", "mM", "m(maj", "minMaj", "-Δ", "-maj"]) {
        Some(ChordQuality::MinorMajorSeventh)
    } else if starts(&["maj", "Maj", "M", "Δ"]) || s == "ma" || is_ma_seventh(s) {
        if matches!(s, "maj" | "Maj" | "M" | "ma" | "major") {
            Some(ChordQuality::Major)
        } else {
            Some(ChordQuality::MajorSeventh)
        }
    } else if starts(&["dim", "o", "°"]) {
        Some(ChordQuality::Diminished)
    } else if starts(&["min", "mi", "m", "-"]) {
        if has_extension {
            Some(ChordQuality::MinorSeventh)
        } else {
            Some(ChordQuality::Minor)
        }
    } else if s.starts_with(|c: char| c.is_ascii_digit()) || starts(&["sus", "alt", "dom"]) {
        Some(ChordQuality::Dominant)
    } else {
        None
    }
}

/// `ma7`, `ma9`, `ma13`: the short major-seventh spelling, always followed by
/// a number
fn is_ma_seventh(s: &str) -> bool {
    s.strip_prefix("ma")
        .map_or(false, |rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_names(symbol: &str) -> Vec<String> {
        ChordSymbol::parse(symbol)
            .unwrap()
            .shell_pitches()
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_parse_root_and_quality() {
        let cs = ChordSymbol::parse("Em7").unwrap();
        assert_eq!(cs.root.name(), "E");
        assert_eq!(cs.quality, ChordQuality::MinorSeventh);

        let cs = ChordSymbol::parse("Bbmaj7").unwrap();
        assert_eq!(cs.root.name(), "Bb");
        assert_eq!(cs.quality, ChordQuality::MajorSeventh);

        let cs = ChordSymbol::parse("f#m7b5").unwrap();
        assert_eq!(cs.root.name(), "F#");
        assert_eq!(cs.quality, ChordQuality::HalfDiminished);
    }

    #[test]
    fn test_quality_suffixes() {
        assert_eq!(quality_from_suffix(""), Some(ChordQuality::Major));
        assert_eq!(quality_from_suffix("m"), Some(ChordQuality::Minor));
        assert_eq!(quality_from_suffix("-7"), Some(ChordQuality::MinorSeventh));
        assert_eq!(quality_from_suffix("7"), Some(ChordQuality::Dominant));
        assert_eq!(quality_from_suffix("13"), Some(ChordQuality::Dominant));
        assert_eq!(quality_from_suffix("7b9"), Some(ChordQuality::Dominant));
        assert_eq!(quality_from_suffix("M7"), Some(ChordQuality::MajorSeventh));
        assert_eq!(quality_from_suffix("Δ"), Some(ChordQuality::MajorSeventh));
        assert_eq!(quality_from_suffix("mMaj7"), Some(ChordQuality::MinorMajorSeventh));
        assert_eq!(quality_from_suffix("ø7"), Some(ChordQuality::HalfDiminished));
        assert_eq!(quality_from_suffix("dim7"), Some(ChordQuality::Diminished));
        assert_eq!(quality_from_suffix("ma"), Some(ChordQuality::Major));
        assert_eq!(quality_from_suffix("ma7"), Some(ChordQuality::MajorSeventh));
        assert_eq!(quality_from_suffix("madd9"), Some(ChordQuality::Minor));
        assert_eq!(quality_from_suffix("m(add9)"), Some(ChordQuality::Minor));
        assert_eq!(quality_from_suffix("mi7"), Some(ChordQuality::MinorSeventh));
        assert_eq!(quality_from_suffix("mi7b5"), Some(ChordQuality::HalfDiminished));
        assert_eq!(quality_from_suffix("mi7(b5)"), Some(ChordQuality::HalfDiminished));
        assert_eq!(quality_from_suffix("xyz"), None);
    }

    #[test]
    fn test_unknown_quality_is_an_error() {
        let err = ChordSymbol::parse("Cxyz").unwrap_err();
        assert!(matches!(err, TheoryError::UnknownQuality { .. }));
        assert!(ChordSymbol::parse("H7").is_err());
        assert!(ChordSymbol::parse("").is_err());
    }

    #[test]
    fn test_shell_pitches() {
        assert_eq!(shell_names("Dm7"), vec!["D", "F", "C"]);
        assert_eq!(shell_names("Em7"), vec!["E", "G", "D"]);
        assert_eq!(shell_names("G7"), vec!["G", "B", "F"]);
        assert_eq!(shell_names("Cmaj7"), vec!["C", "E", "B"]);
        assert_eq!(shell_names("Bbmaj7"), vec!["Bb", "D", "A"]);
        assert_eq!(shell_names("F#m7b5"), vec!["F#", "A", "E"]);
        assert_eq!(shell_names("Cdim7"), vec!["C", "Eb", "Bbb"]);
        assert_eq!(shell_names("Cmadd9"), vec!["C", "Eb", "Bb"]);
        assert_eq!(shell_names("Cmi7b5"), vec!["C", "Eb", "Bb"]);
    }

    #[test]
    fn test_chord_pitches_stack_octaves() {
        let pitches = ChordSymbol::parse("Am7").unwrap().chord_pitches().unwrap();
        let names: Vec<String> = pitches.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["A4", "C5", "G5"]);

        let pitches = ChordSymbol::parse("C7").unwrap().chord_pitches().unwrap();
        let names: Vec<String> = pitches.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["C4", "E4", "Bb4"]);
    }
}
