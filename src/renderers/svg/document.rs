//! SVG document generation for the degree circle
//!
//! The circle is centred on the canvas; node markers sit on the ring at the
//! angles of the configured scale and voice-leading lines run between them.

use serde::Serialize;

use super::config::CircleStyle;
use super::elements::{fmt_coord, NodeElement, VectorElement};
use super::RenderError;
use crate::layout::{calculate_degree_angles, calculate_voice_leading_vectors, layout_nodes};
use crate::models::Degree;

const CIRCLE_TEMPLATE: &str = include_str!("templates/diatonic_circle.svg.mustache");

/// Context data for the circle template
#[derive(Debug, Clone, Serialize)]
pub struct CircleContext {
    pub width: String,
    pub height: String,
    pub center_x: String,
    pub center_y: String,
    pub radius: String,
    pub ring_color: String,
    pub from_color: String,
    pub to_color: String,
    pub font_size: String,
    pub vector_color: String,
    pub vector_width: String,
    pub nodes: Vec<NodeElement>,
    pub vectors: Vec<VectorElement>,
}

impl CircleContext {
    /// Lay out nodes and vectors for a chord pair
    pub fn build(from: &[Degree], to: &[Degree], style: &CircleStyle) -> Result<Self, RenderError> {
        let radius = style.radius();
        let angles = calculate_degree_angles(&style.semitone_offsets, style.total_semitones);

        let nodes = layout_nodes(&angles, from, to, radius)?
            .iter()
            .map(|node| NodeElement::from_layout(node, style))
            .collect();
        let vectors = calculate_voice_leading_vectors(from, to, &angles, radius, style.node_radius)?
            .iter()
            .map(VectorElement::from)
            .collect();

        Ok(Self {
            width: fmt_coord(style.width),
            height: fmt_coord(style.height),
            center_x: fmt_coord(style.width / 2.0),
            center_y: fmt_coord(style.height / 2.0),
            radius: fmt_coord(radius),
            ring_color: style.ring_color.clone(),
            from_color: style.from_color.clone(),
            to_color: style.to_color.clone(),
            font_size: fmt_coord(style.font_size),
            vector_color: style.vector_color.clone(),
            vector_width: fmt_coord(style.vector_width),
            nodes,
            vectors,
        })
    }
}

/// Render the degree circle for a chord pair as a standalone SVG document
pub fn render_diatonic_circle(
    from: &[Degree],
    to: &[Degree],
    style: &CircleStyle,
) -> Result<String, RenderError> {
    let context = CircleContext::build(from, to, style)?;
    log::debug!(
        "Rendering circle: {} nodes, {} vectors",
        context.nodes.len(),
        context.vectors.len()
    );

    let template = mustache::compile_str(CIRCLE_TEMPLATE)?;
    Ok(template.render_to_string(&context)?)
}
