//! SVG element contexts
//!
//! Flat, pre-formatted records handed to the Mustache template. Numbers are
//! formatted here so the template never has to.

use serde::Serialize;

use super::config::CircleStyle;
use crate::layout::{NodeLayout, NodeState, Vector};

/// Format a coordinate with two decimals, without a "-0.00"
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Upper half-disc of a node marker (9 o'clock → 12 → 3 o'clock)
pub fn upper_half_disc_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {} {} A {} {} 0 0 1 {} {} Z",
        fmt_coord(cx - r),
        fmt_coord(cy),
        fmt_coord(r),
        fmt_coord(r),
        fmt_coord(cx + r),
        fmt_coord(cy)
    )
}

/// Lower half-disc of a node marker (3 o'clock → 6 → 9 o'clock)
pub fn lower_half_disc_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {} {} A {} {} 0 0 1 {} {} Z",
        fmt_coord(cx + r),
        fmt_coord(cy),
        fmt_coord(r),
        fmt_coord(r),
        fmt_coord(cx - r),
        fmt_coord(cy)
    )
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NodeElement {
    pub x: String,
    pub y: String,
    pub r: String,
    pub label: String,
    pub label_color: String,
    /// Common tone, drawn as two half-discs
    pub split: bool,
    pub upper_path: String,
    pub lower_path: String,
    pub fill: String,
    /// Idle nodes get an outline
    pub outlined: bool,
    pub stroke: String,
    pub stroke_width: String,
}

impl NodeElement {
    pub fn from_layout(node: &NodeLayout, style: &CircleStyle) -> Self {
        let (cx, cy, r) = (node.center.x, node.center.y, style.node_radius);
        let fill = match node.state {
            NodeState::Idle => style.idle_fill.clone(),
            NodeState::From | NodeState::Common => style.from_color.clone(),
            NodeState::To => style.to_color.clone(),
        };
        let label_color = if node.state.is_active() {
            style.active_label_color.clone()
        } else {
            style.idle_label_color.clone()
        };
        let split = node.state == NodeState::Common;

        Self {
            x: fmt_coord(cx),
            y: fmt_coord(cy),
            r: fmt_coord(r),
            label: node.label.clone(),
            label_color,
            split,
            upper_path: if split { upper_half_disc_path(cx, cy, r) } else { String::new() },
            lower_path: if split { lower_half_disc_path(cx, cy, r) } else { String::new() },
            fill,
            outlined: node.state == NodeState::Idle,
            stroke: style.idle_stroke.clone(),
            stroke_width: fmt_coord(style.idle_stroke_width),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct VectorElement {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
}

impl From<&Vector> for VectorElement {
    fn from(v: &Vector) -> Self {
        Self {
            x1: fmt_coord(v.x1),
            y1: fmt_coord(v.y1),
            x2: fmt_coord(v.x2),
            y2: fmt_coord(v.y2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crate::models::Degree;

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(0.0), "0");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(-192.61333), "-192.61");
        assert_eq!(fmt_coord(210.0), "210");
        assert_eq!(fmt_coord(1.5), "1.5");
    }

    #[test]
    fn test_half_disc_paths() {
        assert_eq!(upper_half_disc_path(0.0, -210.0, 18.0), "M -18 -210 A 18 18 0 0 1 18 -210 Z");
        assert_eq!(lower_half_disc_path(0.0, -210.0, 18.0), "M 18 -210 A 18 18 0 0 1 -18 -210 Z");
    }

    #[test]
    fn test_common_node_is_split() {
        let node = NodeLayout {
            degree: Degree(5),
            label: "V".to_string(),
            center: Point { x: -105.0, y: 181.87 },
            state: NodeState::Common,
        };
        let element = NodeElement::from_layout(&node, &CircleStyle::default());
        assert!(element.split);
        assert!(!element.outlined);
        assert_eq!(element.label_color, "white");
        assert!(element.upper_path.starts_with("M -123 181.87"));
    }

    #[test]
    fn test_idle_node_is_outlined() {
        let node = NodeLayout {
            degree: Degree(4),
            label: "IV".to_string(),
            center: Point { x: 0.0, y: 0.0 },
            state: NodeState::Idle,
        };
        let element = NodeElement::from_layout(&node, &CircleStyle::default());
        assert!(!element.split);
        assert!(element.outlined);
        assert_eq!(element.fill, "white");
        assert_eq!(element.label_color, "#333");
        assert_eq!(element.stroke_width, "1.5");
    }
}
