//! Chord-theory utility
//!
//! The narrow slice of music theory the circle needs: parse a chord symbol,
//! spell its shell tones, map spelled pitches to scale degrees in a key and
//! measure the diatonic voice leading between two chords.

pub mod chord_symbol;
pub mod voicing;

pub use chord_symbol::ChordSymbol;
pub use voicing::{
    all_inversion_pairs, chord_to_degrees, make_chord, make_shell, rotate_progression,
    voice_leading, InversionPair,
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("invalid pitch name: '{0}'")]
    InvalidPitch(String),

    #[error("invalid key: '{0}' (expected a tonic such as C, F#, Bb or a lower-case minor tonic)")]
    InvalidKey(String),

    #[error("invalid chord symbol: '{0}'")]
    InvalidChordSymbol(String),

    #[error("unknown chord quality '{quality}' in symbol '{symbol}'")]
    UnknownQuality { symbol: String, quality: String },

    #[error("invalid inversion {0} (must be 0, 1 or 2)")]
    InvalidInversion(u8),

    #[error("cannot spell {0} with at most a double accidental")]
    UnsupportedSpelling(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
