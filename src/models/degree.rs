//! Scale degree label
//!
//! A degree is a 1-based position within a scale. It is a logical label only:
//! the angle table built from a scale's semitone offsets is keyed by position,
//! so degree `d` refers to entry `d - 1` of that table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::TryFromIntError;

/// 1-based scale degree (1-7 for heptatonic scales)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degree(pub u8);

impl Degree {
    pub const fn new(value: u8) -> Self {
        Degree(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based table index, `None` for degree 0
    pub fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// Rotate within a heptatonic scale by `steps` degrees, wrapping 7 → 1
    pub fn rotate(self, steps: u8) -> Degree {
        let zero_based = (self.0 as u16 + steps as u16 + 6) % 7;
        Degree(zero_based as u8 + 1)
    }

    /// Upper-case Roman numeral used for node labels
    pub fn roman(self) -> String {
        const NUMERALS: [(u8, &str); 7] = [
            (50, "L"),
            (40, "XL"),
            (10, "X"),
            (9, "IX"),
            (5, "V"),
            (4, "IV"),
            (1, "I"),
        ];

        let mut remaining = self.0;
        let mut out = String::new();
        for &(value, numeral) in NUMERALS.iter() {
            while remaining >= value {
                out.push_str(numeral);
                remaining -= value;
            }
        }
        out
    }
}

impl From<u8> for Degree {
    fn from(value: u8) -> Self {
        Degree(value)
    }
}

impl TryFrom<u32> for Degree {
    type Error = TryFromIntError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value).map(Degree)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrap small literals into degrees
#[cfg(test)]
pub fn degrees_from_raw(raw: &[u8]) -> Vec<Degree> {
    raw.iter().copied().map(Degree).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_zero_based() {
        assert_eq!(Degree(1).index(), Some(0));
        assert_eq!(Degree(7).index(), Some(6));
        assert_eq!(Degree(0).index(), None);
    }

    #[test]
    fn test_rotate_wraps_within_octave() {
        assert_eq!(Degree(1).rotate(1), Degree(2));
        assert_eq!(Degree(7).rotate(1), Degree(1));
        assert_eq!(Degree(5).rotate(3), Degree(1));
        assert_eq!(Degree(3).rotate(7), Degree(3));
    }

    #[test]
    fn test_roman_labels() {
        let labels: Vec<String> = (1..=7).map(|d| Degree(d).roman()).collect();
        assert_eq!(labels, vec!["I", "II", "III", "IV", "V", "VI", "VII"]);
        assert_eq!(Degree(12).roman(), "XII");
    }

    #[test]
    fn test_try_from_wide_integer() {
        assert_eq!(Degree::try_from(7u32).unwrap(), Degree(7));
        assert!(Degree::try_from(256u32).is_err());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&vec![Degree(2), Degree(4), Degree(1)]).unwrap();
        assert_eq!(json, "[2,4,1]");
    }
}
