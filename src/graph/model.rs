use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A labeled vertex placed at pre-authored coordinates.
///
/// Identity is [`Vertex::id`]; position and visual attributes may change between steps without
/// changing identity.
pub struct Vertex {
    /// Identifier, unique within one [`GraphState`].
    pub id: String,
    /// Text drawn at the vertex center (may be empty).
    #[serde(default)]
    pub label: String,
    /// Center x in view-box units.
    pub x: f64,
    /// Center y in view-box units.
    pub y: f64,
    /// Draw with the highlight color.
    #[serde(default)]
    pub highlighted: bool,
    /// Fill opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Explicit fill color; wins over the highlight color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An edge between two vertex ids.
///
/// Edge identity is its own id, independent of its endpoints.
pub struct Edge {
    /// Identifier, unique within one [`GraphState`].
    pub id: String,
    /// Source vertex id.
    pub from: String,
    /// Target vertex id.
    pub to: String,
    /// Draw with the highlight color and a wider stroke.
    #[serde(default)]
    pub highlighted: bool,
    /// Draw as dashed segments instead of a solid path.
    #[serde(default)]
    pub dashed: bool,
    /// Stroke opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Upward bulge of a quadratic curve; straight line when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curvature: Option<f64>,
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Complete snapshot of one proof step.
pub struct GraphState {
    /// Vertices in authoring order.
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    /// Edges in authoring order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Vertex {
    /// A plain vertex with an empty label and default styling.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            x,
            y,
            highlighted: false,
            opacity: 1.0,
            color: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }

    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl Edge {
    /// A plain solid edge with default styling.
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            highlighted: false,
            dashed: false,
            opacity: 1.0,
            curvature: None,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn with_curvature(mut self, curvature: f64) -> Self {
        self.curvature = Some(curvature);
        self
    }

    /// Whether `vertex_id` is one of this edge's endpoints.
    pub fn touches(&self, vertex_id: &str) -> bool {
        self.from == vertex_id || self.to == vertex_id
    }
}

impl GraphState {
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn vertex_ids(&self) -> BTreeSet<&str> {
        self.vertices.iter().map(|v| v.id.as_str()).collect()
    }

    pub fn edge_ids(&self) -> BTreeSet<&str> {
        self.edges.iter().map(|e| e.id.as_str()).collect()
    }

    /// Both endpoints of `edge`, or `None` when either id is missing from this state.
    ///
    /// Dangling edges are tolerated rather than rejected: callers skip them.
    pub fn endpoints(&self, edge: &Edge) -> Option<(&Vertex, &Vertex)> {
        Some((self.vertex(&edge.from)?, self.vertex(&edge.to)?))
    }

    /// Edges whose endpoints do not both resolve in this state.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |e| self.endpoints(e).is_none())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
