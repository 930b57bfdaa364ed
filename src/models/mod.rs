//! Models module for the voice-leading circle
//!
//! Value types shared by the layout, theory and rendering layers.

pub mod chord;
pub mod degree;
pub mod key;
pub mod pitch;

// Re-export commonly used types
pub use chord::{Chord, ChordQuality, ChordTones, Inversion, ShellChord};
pub use degree::Degree;
pub use key::{Key, Mode, MAJOR_SCALE_OFFSETS, MINOR_SCALE_OFFSETS};
pub use pitch::{Accidental, Letter, PitchName};
