use trackgraph::render::drawer::{DrawCommand, DrawList, GraphDrawer, Stroke};
use trackgraph::render::svg::to_svg;
use trackgraph::{EdgeDescriptor, Graph, GraphConfig, Point, Segment};

fn graph() -> Graph {
    Graph::from_parts(
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        vec![EdgeDescriptor::new(
            0,
            1,
            10.0,
            vec![Segment::new(0.0, 3.0), Segment::new(5.0, 5.0)],
        )],
        GraphConfig::default(),
    )
    .expect("graph")
}

#[test]
fn draws_edges_segments_then_vertices() {
    let g = graph();
    let list = DrawList::record(&GraphDrawer::for_graph(&g), &g);
    let ops: Vec<&str> = list
        .commands
        .iter()
        .map(|c| match c {
            DrawCommand::Line { stroke: Stroke::Edge, .. } => "edge",
            DrawCommand::Line { stroke: Stroke::Segment, .. } => "segment",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Text { .. } => "text",
        })
        .collect();
    assert_eq!(ops, ["edge", "segment", "segment", "circle", "text", "circle", "text"]);
}

#[test]
fn edge_runs_between_centres_and_segments_between_bounds() {
    let g = graph();
    let list = DrawList::record(&GraphDrawer::for_graph(&g), &g);
    match &list.commands[0] {
        DrawCommand::Line { from, to, width, .. } => {
            assert_eq!(*from, Point::new(0.0, 0.0));
            assert_eq!(*to, Point::new(100.0, 0.0));
            assert_eq!(*width, 3.0);
        }
        other => panic!("unexpected {:?}", other),
    }
    match &list.commands[1] {
        DrawCommand::Line { from, to, .. } => {
            assert!((from.x - 15.0).abs() < 1e-9);
            assert!((to.x - 36.0).abs() < 1e-9);
        }
        other => panic!("unexpected {:?}", other),
    }
    // zero-length segment is stretched by the epsilon (0.1 units = 0.7 px here)
    match &list.commands[2] {
        DrawCommand::Line { from, to, .. } => {
            assert!((from.x - 50.0).abs() < 1e-9);
            assert!((to.x - 50.7).abs() < 1e-9);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn vertices_are_labelled_with_their_id() {
    let g = graph();
    let list = DrawList::record(&GraphDrawer::for_graph(&g), &g);
    let labels: Vec<(Point, String)> = list
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { at, text } => Some((*at, text.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        vec![(Point::new(0.0, 0.0), "0".to_string()), (Point::new(100.0, 0.0), "1".to_string())]
    );
    assert!(list
        .commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Circle { radius, .. } if *radius == 15.0)));
}

#[test]
fn svg_output_contains_every_command() {
    let g = graph();
    let list = DrawList::record(&GraphDrawer::for_graph(&g), &g);
    let svg = to_svg(&list, 300.0, 200.0);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<line").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("stroke=\"lightgreen\""));
    assert!(svg.contains(">1</text>"));
}

#[test]
fn draw_list_serializes_with_op_tags() {
    let g = graph();
    let list = DrawList::record(&GraphDrawer::for_graph(&g), &g);
    let v = serde_json::to_value(&list).unwrap();
    assert_eq!(v["commands"][0]["op"], "line");
    assert_eq!(v["commands"][0]["stroke"], "edge");
    assert_eq!(v["commands"][3]["op"], "circle");
}
