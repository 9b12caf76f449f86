use kurbo::{BezPath, Point, Vec2};

use crate::{
    graph::model::{Edge, GraphState},
    sequence::visibility::VisibilitySet,
};

pub const VIEW_WIDTH: f64 = 600.0;
pub const VIEW_HEIGHT: f64 = 400.0;
pub const VERTEX_RADIUS: f64 = 20.0;

const HIGHLIGHT: &str = "#3b82f6";
const VERTEX_FILL: &str = "#94a3b8";
const EDGE_STROKE: &str = "#64748b";

const DASH_LEN: f64 = 10.0;
const GAP_LEN: f64 = 10.0;

#[derive(Clone, Debug)]
/// Everything the renderer draws for one instant, edges below vertices.
pub struct Scene {
    /// View-box width.
    pub width: f64,
    /// View-box height.
    pub height: f64,
    /// Edge strokes in authoring order.
    pub edges: Vec<EdgeStroke>,
    /// Vertex discs in authoring order.
    pub vertices: Vec<VertexSprite>,
}

#[derive(Clone, Debug)]
/// A stroked edge path.
pub struct EdgeStroke {
    pub id: String,
    pub path: BezPath,
    pub stroke: String,
    pub width: f64,
    pub opacity: f64,
    /// Also drawn with a `5,3` dash array.
    pub dashed: bool,
}

#[derive(Clone, Debug)]
/// A filled vertex disc with its label.
pub struct VertexSprite {
    pub id: String,
    pub center: Point,
    pub radius: f64,
    pub fill: String,
    pub opacity: f64,
    pub label: String,
}

/// Geometry and styling for the visible part of `state`.
///
/// An edge is drawn only when it is visible, both endpoints resolve in `state`, and both
/// endpoints are visible.
pub fn build_scene(state: &GraphState, visible: &VisibilitySet) -> Scene {
    let edges = state
        .edges
        .iter()
        .filter(|e| visible.contains_edge(&e.id))
        .filter_map(|e| {
            let (from, to) = state.endpoints(e)?;
            if !(visible.contains_vertex(&from.id) && visible.contains_vertex(&to.id)) {
                return None;
            }
            Some(EdgeStroke {
                id: e.id.clone(),
                path: edge_path(from.position(), to.position(), e),
                stroke: (if e.highlighted { HIGHLIGHT } else { EDGE_STROKE }).to_string(),
                width: if e.highlighted { 3.0 } else { 2.0 },
                opacity: e.opacity.clamp(0.0, 1.0),
                dashed: e.dashed,
            })
        })
        .collect();

    let vertices = state
        .vertices
        .iter()
        .filter(|v| visible.contains_vertex(&v.id))
        .map(|v| VertexSprite {
            id: v.id.clone(),
            center: v.position(),
            radius: VERTEX_RADIUS,
            fill: match &v.color {
                Some(c) => c.clone(),
                None if v.highlighted => HIGHLIGHT.to_string(),
                None => VERTEX_FILL.to_string(),
            },
            opacity: v.opacity.clamp(0.0, 1.0),
            label: v.label.clone(),
        })
        .collect();

    Scene {
        width: VIEW_WIDTH,
        height: VIEW_HEIGHT,
        edges,
        vertices,
    }
}

/// Dashed segments if `edge.dashed`, else a quadratic bulge if it has a curvature, else a line.
pub fn edge_path(from: Point, to: Point, edge: &Edge) -> BezPath {
    if edge.dashed {
        return dashed_path(from, to);
    }
    let mut path = BezPath::new();
    path.move_to(from);
    match edge.curvature {
        Some(c) => {
            let ctrl = Point::new(from.x + (to.x - from.x) * 0.5, from.y - c);
            path.quad_to(ctrl, to);
        }
        None => path.line_to(to),
    }
    path
}

/// `DASH_LEN` on, `GAP_LEN` off, whole dashes only.
fn dashed_path(from: Point, to: Point) -> BezPath {
    let mut path = BezPath::new();
    let d: Vec2 = to - from;
    let len = d.hypot();
    if len <= f64::EPSILON {
        return path;
    }
    let n = (len / (DASH_LEN + GAP_LEN)).floor() as usize;
    let dir = d / len;
    for i in 0..n {
        let start = i as f64 * (DASH_LEN + GAP_LEN);
        path.move_to(from + dir * start);
        path.line_to(from + dir * (start + DASH_LEN));
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
