//! Default values for the circle diagram
//!
//! Matches the layout the diagram has always been drawn with: a 500×500
//! canvas, blue for the chord being left and red for the chord arrived at.

/// Canvas width in pixels
pub const DEFAULT_WIDTH: f64 = 500.0;

/// Canvas height in pixels
pub const DEFAULT_HEIGHT: f64 = 500.0;

/// Space between the circle and the canvas edge
pub const DEFAULT_MARGIN: f64 = 40.0;

/// Radius of each degree node marker
pub const DEFAULT_NODE_RADIUS: f64 = 18.0;

pub const DEFAULT_FROM_COLOR: &str = "#4dabf7";
pub const DEFAULT_TO_COLOR: &str = "#ff6b6b";
pub const DEFAULT_RING_COLOR: &str = "#ccc";

pub const DEFAULT_IDLE_FILL: &str = "white";
pub const DEFAULT_IDLE_STROKE: &str = "#e0e0e0";
pub const DEFAULT_IDLE_STROKE_WIDTH: f64 = 1.5;
pub const DEFAULT_IDLE_LABEL_COLOR: &str = "#333";
pub const DEFAULT_ACTIVE_LABEL_COLOR: &str = "white";

pub const DEFAULT_FONT_SIZE: f64 = 14.0;

pub const DEFAULT_VECTOR_COLOR: &str = "black";
pub const DEFAULT_VECTOR_WIDTH: f64 = 2.0;
