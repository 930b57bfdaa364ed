//! Diagram style configuration
//!
//! Every field has a default, so a JSON or YAML document only needs the
//! fields it wants to change:
//!
//! ```yaml
//! node_radius: 22
//! from_color: "#2b8a3e"
//! semitone_offsets: [0, 2, 3, 5, 7, 8, 10]
//! ```

use serde::{Deserialize, Serialize};

use super::defaults::*;
use super::RenderError;
use crate::layout::{DEFAULT_TOTAL_SEMITONES, MAX_NODES};
use crate::models::MAJOR_SCALE_OFFSETS;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CircleStyle {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub node_radius: f64,

    /// Scale drawn around the circle, degree 1 first
    pub semitone_offsets: Vec<u32>,
    pub total_semitones: u32,

    pub from_color: String,
    pub to_color: String,
    pub ring_color: String,
    pub idle_fill: String,
    pub idle_stroke: String,
    pub idle_stroke_width: f64,
    pub idle_label_color: String,
    pub active_label_color: String,
    pub font_size: f64,
    pub vector_color: String,
    pub vector_width: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            node_radius: DEFAULT_NODE_RADIUS,
            semitone_offsets: MAJOR_SCALE_OFFSETS.to_vec(),
            total_semitones: DEFAULT_TOTAL_SEMITONES,
            from_color: DEFAULT_FROM_COLOR.to_string(),
            to_color: DEFAULT_TO_COLOR.to_string(),
            ring_color: DEFAULT_RING_COLOR.to_string(),
            idle_fill: DEFAULT_IDLE_FILL.to_string(),
            idle_stroke: DEFAULT_IDLE_STROKE.to_string(),
            idle_stroke_width: DEFAULT_IDLE_STROKE_WIDTH,
            idle_label_color: DEFAULT_IDLE_LABEL_COLOR.to_string(),
            active_label_color: DEFAULT_ACTIVE_LABEL_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            vector_color: DEFAULT_VECTOR_COLOR.to_string(),
            vector_width: DEFAULT_VECTOR_WIDTH,
        }
    }
}

impl CircleStyle {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let style: CircleStyle =
            serde_json::from_str(json).map_err(|e| RenderError::Config(e.to_string()))?;
        style.validate()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        let style: CircleStyle =
            serde_yaml::from_str(yaml).map_err(|e| RenderError::Config(e.to_string()))?;
        style.validate()
    }

    /// Circle radius left after the margin
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 - self.margin
    }

    pub fn validate(self) -> Result<Self, RenderError> {
        if self.total_semitones == 0 {
            return Err(RenderError::Config(
                "total_semitones must be positive".to_string(),
            ));
        }
        if self.semitone_offsets.len() > MAX_NODES {
            return Err(RenderError::Config(format!(
                "{} semitone_offsets, at most {} nodes can be drawn",
                self.semitone_offsets.len(),
                MAX_NODES
            )));
        }
        if self.radius() <= 0.0 {
            return Err(RenderError::Config(format!(
                "margin {} leaves no room for a circle on a {}x{} canvas",
                self.margin, self.width, self.height
            )));
        }
        if self.node_radius < 0.0 {
            return Err(RenderError::Config(format!(
                "node_radius must not be negative (got {})",
                self.node_radius
            )));
        }
        Ok(self)
    }
}
