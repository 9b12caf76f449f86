use crate::graph::model::{Edge, GraphState, Vertex};
use crate::render::scene::build_scene;
use crate::sequence::visibility::VisibilitySet;

fn sample() -> GraphState {
    GraphState::new(
        vec![
            Vertex::new("x0", 100.0, 200.0).with_label("x₀ <&>"),
            Vertex::new("x1", 160.0, 200.0),
        ],
        vec![Edge::new("e1", "x0", "x1").dashed()],
    )
}

#[test]
fn svg_contains_visible_elements() {
    let g = sample();
    let svg = build_scene(&g, &VisibilitySet::all_of(&g)).to_svg();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 600 400""#));
    assert!(svg.contains(r#"id="edge-e1""#));
    assert!(svg.contains(r#"stroke-dasharray="5,3""#));
    assert!(svg.contains(r#"id="vertex-x0""#));
    assert!(svg.contains("x₀ &lt;&amp;&gt;"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn hidden_elements_are_absent() {
    let g = sample();
    let svg = build_scene(&g, &VisibilitySet::new()).to_svg();
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn svg_parses() {
    let g = sample();
    let svg = build_scene(&g, &VisibilitySet::all_of(&g)).to_svg();
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
    assert!(tree.is_ok(), "{svg}");
}
