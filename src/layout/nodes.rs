//! Node placement on the degree circle

use serde::{Deserialize, Serialize};

use super::circle::{degree_position, Point};
use super::{LayoutError, Result};
use crate::models::Degree;

/// Which chord(s) a scale degree belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    Idle,
    From,
    To,
    /// Present in both chords
    Common,
}

impl NodeState {
    fn classify(degree: Degree, from: &[Degree], to: &[Degree]) -> NodeState {
        match (from.contains(&degree), to.contains(&degree)) {
            (true, true) => NodeState::Common,
            (true, false) => NodeState::From,
            (false, true) => NodeState::To,
            (false, false) => NodeState::Idle,
        }
    }

    pub fn is_active(self) -> bool {
        self != NodeState::Idle
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeLayout {
    pub degree: Degree,
    pub label: String,
    pub center: Point,
    pub state: NodeState,
}

/// Largest angle table whose entries all have a degree label
pub const MAX_NODES: usize = u8::MAX as usize;

/// One node per entry of the angle table, in degree order.
///
/// Degrees in `from`/`to` outside the table simply mark nothing; the vector
/// calculation is where they are rejected.
pub fn layout_nodes(
    degree_angles: &[f64],
    from: &[Degree],
    to: &[Degree],
    radius: f64,
) -> Result<Vec<NodeLayout>> {
    if degree_angles.len() > MAX_NODES {
        return Err(LayoutError::TooManyNodes {
            table_len: degree_angles.len(),
            max: MAX_NODES,
        });
    }

    (1..=MAX_NODES as u8)
        .zip(degree_angles.iter())
        .map(|(n, _)| -> Result<NodeLayout> {
            let degree = Degree(n);
            Ok(NodeLayout {
                degree,
                label: degree.roman(),
                center: degree_position(degree, degree_angles, radius)?,
                state: NodeState::classify(degree, from, to),
            })
        })
        .collect()
}
