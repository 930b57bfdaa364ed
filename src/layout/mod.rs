//! Circle layout for the diatonic voice-leading diagram
//!
//! Turns a scale (semitone offsets) into angular node positions and a pair
//! of degree sequences into inset line segments between those nodes.

pub mod circle;
pub mod nodes;

pub use circle::{
    calculate_degree_angles, calculate_voice_leading_vectors, degree_position,
    degrees_from_numbers, Point, Vector, ARROW_GAP, DEFAULT_TOTAL_SEMITONES,
};
pub use nodes::{layout_nodes, NodeLayout, NodeState, MAX_NODES};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Degrees are 1-based positions into the angle table
    #[error("degree {degree} out of range (angle table has {table_len} entries)")]
    DegreeOutOfRange { degree: u32, table_len: usize },

    #[error("angle table has {table_len} entries, at most {max} nodes can be labelled")]
    TooManyNodes { table_len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
