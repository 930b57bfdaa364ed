//! Chord voicings as ordered pitch-name lists (bass → top)

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::theory::TheoryError;

/// Which chord tone sits in the lowest voice
///
/// Serialized as its number (0, 1, 2) to match the JavaScript side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Inversion {
    #[default]
    Root = 0,
    First = 1,
    Second = 2,
}

impl Inversion {
    pub const ALL: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

    /// How far chord tones are rotated left
    pub fn rotation(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Inversion {
    type Error = TheoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Inversion::Root),
            1 => Ok(Inversion::First),
            2 => Ok(Inversion::Second),
            other => Err(TheoryError::InvalidInversion(other)),
        }
    }
}

/// Chord quality, reduced to what a shell voicing needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordQuality {
    Major,
    Minor,
    MajorSeventh,
    Dominant,
    MinorSeventh,
    MinorMajorSeventh,
    HalfDiminished,
    Diminished,
}

impl ChordQuality {
    /// Semitones from root to third
    pub fn third(self) -> u8 {
        match self {
            ChordQuality::Major | ChordQuality::MajorSeventh | ChordQuality::Dominant => 4,
            _ => 3,
        }
    }

    /// Semitones from root to seventh. Bare triads take the seventh their
    /// seventh-chord counterpart would have.
    pub fn seventh(self) -> u8 {
        match self {
            ChordQuality::Major | ChordQuality::MajorSeventh | ChordQuality::MinorMajorSeventh => 11,
            ChordQuality::Diminished => 9,
            ChordQuality::Dominant
            | ChordQuality::Minor
            | ChordQuality::MinorSeventh
            | ChordQuality::HalfDiminished => 10,
        }
    }
}

/// Anything exposing an ordered list of note names
pub trait ChordTones {
    fn symbol(&self) -> &str;
    fn notes(&self) -> &[String];
}

/// A chord voicing of any size, note names may carry octaves (`E4`)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Chord {
    pub symbol: String,
    #[serde(default)]
    pub inversion: Inversion,
    pub notes: Vec<String>,
}

/// Root, third and seventh only, rotated by inversion
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShellChord {
    pub symbol: String,
    pub inversion: Inversion,
    pub notes: [String; 3],
}

impl ChordTones for Chord {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl ChordTones for ShellChord {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl From<ShellChord> for Chord {
    fn from(shell: ShellChord) -> Self {
        Chord {
            symbol: shell.symbol,
            inversion: shell.inversion,
            notes: shell.notes.to_vec(),
        }
    }
}

/// Rotate `tones` left so the tone selected by `inversion` comes first
pub fn rotate_tones<T: Clone>(tones: &[T], inversion: Inversion) -> Vec<T> {
    if tones.is_empty() {
        return Vec::new();
    }
    let shift = inversion.rotation() % tones.len();
    tones[shift..]
        .iter()
        .chain(tones[..shift].iter())
        .cloned()
        .collect()
}
