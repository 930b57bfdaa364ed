//! Angle table and voice-leading vector geometry
//!
//! Coordinates are circle-centred with y growing downwards (SVG convention),
//! so an angle of -π/2 is 12 o'clock and angles grow clockwise.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{LayoutError, Result};
use crate::models::Degree;

/// Semitones per octave in twelve-tone equal temperament
pub const DEFAULT_TOTAL_SEMITONES: u32 = 12;

/// Extra gap left between a vector's end and the target node edge for the
/// arrowhead marker
pub const ARROW_GAP: f64 = 5.0;

/// Circle-centred point
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Directed segment from (x1, y1) to (x2, y2)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Vector {
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    /// Both endpoints coincide (a common tone)
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

/// Angle in radians for each scale step, first entry at 12 o'clock.
///
/// `angle = offset * (2π / total_semitones) - π/2`. The divisor is always
/// `total_semitones`, never the number of offsets, so a four-note division
/// of twelve semitones still spaces its nodes by semitone distance.
pub fn calculate_degree_angles(semitone_offsets: &[u32], total_semitones: u32) -> Vec<f64> {
    let semitone_angle = 2.0 * PI / total_semitones as f64;
    semitone_offsets
        .iter()
        .map(|&offset| offset as f64 * semitone_angle - PI / 2.0)
        .collect()
}

/// Centre of `degree`'s node on a circle of `radius`
pub fn degree_position(degree: Degree, degree_angles: &[f64], radius: f64) -> Result<Point> {
    let angle = degree
        .index()
        .and_then(|i| degree_angles.get(i))
        .ok_or(LayoutError::DegreeOutOfRange {
            degree: u32::from(degree.value()),
            table_len: degree_angles.len(),
        })?;

    Ok(Point {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
    })
}

/// Checked conversion of raw degree numbers (as they arrive from
/// JavaScript). A number no degree can hold is out of range for any table,
/// wherever it sits in the sequence.
pub fn degrees_from_numbers(raw: &[u32], table_len: usize) -> Result<Vec<Degree>> {
    raw.iter()
        .map(|&n| {
            Degree::try_from(n).map_err(|_| LayoutError::DegreeOutOfRange {
                degree: n,
                table_len,
            })
        })
        .collect()
}

/// One segment per positional (from, to) pair, inset to the node edges.
///
/// Only `min(from.len(), to.len())` pairs are produced; unpaired trailing
/// degrees draw nothing. A segment starts `node_radius` away from the "from"
/// centre and ends `node_radius + ARROW_GAP` short of the "to" centre. Pairs
/// sharing a position come back as a zero-length segment on that centre.
pub fn calculate_voice_leading_vectors(
    from_degrees: &[Degree],
    to_degrees: &[Degree],
    degree_angles: &[f64],
    radius: f64,
    node_radius: f64,
) -> Result<Vec<Vector>> {
    if from_degrees.len() != to_degrees.len() {
        log::warn!(
            "Pairing {} from-degrees with {} to-degrees, dropping {} unpaired",
            from_degrees.len(),
            to_degrees.len(),
            from_degrees.len().abs_diff(to_degrees.len())
        );
    }

    from_degrees
        .iter()
        .zip(to_degrees.iter())
        .map(|(&from, &to)| -> Result<Vector> {
            let start = degree_position(from, degree_angles, radius)?;
            let end = degree_position(to, degree_angles, radius)?;
            Ok(inset_segment(start, end, node_radius))
        })
        .collect()
}

fn inset_segment(from: Point, to: Point, node_radius: f64) -> Vector {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance > 0.0 {
        let start = node_radius / distance;
        let end = (distance - node_radius - ARROW_GAP) / distance;
        Vector {
            x1: from.x + dx * start,
            y1: from.y + dy * start,
            x2: from.x + dx * end,
            y2: from.y + dy * end,
        }
    } else {
        Vector {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}
