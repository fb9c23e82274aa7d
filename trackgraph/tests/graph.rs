use rand::rngs::SmallRng;
use rand::SeedableRng;
use trackgraph::{EdgeDescriptor, Graph, GraphConfig, GraphError, Point, Segment};

fn close(a: Point, b: Point) -> bool {
    a.distance_to(b) < 1e-9
}

fn two_vertex_graph() -> Graph {
    Graph::from_parts(
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        vec![EdgeDescriptor::new(0, 1, 10.0, vec![Segment::new(0.0, 3.0)])],
        GraphConfig::default(),
    )
    .expect("graph")
}

#[test]
fn bound_points_and_edge_positions() {
    let g = two_vertex_graph();
    let e = g.edge(0).expect("edge");
    let (s, t) = g.edge_bound_points(e);
    assert!(close(s, Point::new(15.0, 0.0)));
    assert!(close(t, Point::new(85.0, 0.0)));
    assert!(close(g.edge_point_to_xy(e, 0.0), Point::new(15.0, 0.0)));
    assert!(close(g.edge_point_to_xy(e, 10.0), Point::new(85.0, 0.0)));
    assert!(close(g.edge_point_to_xy(e, 5.0), Point::new(50.0, 0.0)));
    // clamped
    assert!(close(g.edge_point_to_xy(e, -4.0), Point::new(15.0, 0.0)));
    assert!(close(g.edge_point_to_xy(e, 40.0), Point::new(85.0, 0.0)));
}

#[test]
fn bound_points_follow_edge_direction() {
    let g = Graph::from_parts(
        vec![Point::new(100.0, 100.0), Point::new(100.0, 0.0)],
        vec![EdgeDescriptor::new(0, 1, 4.0, vec![])],
        GraphConfig::default(),
    )
    .unwrap();
    let (s, t) = g.edge_bound_points(&g.edges()[0]);
    assert!(close(s, Point::new(100.0, 85.0)));
    assert!(close(t, Point::new(100.0, 15.0)));
    assert!(close(g.edge_point_to_xy(&g.edges()[0], 1.0), Point::new(100.0, 67.5)));
}

#[test]
fn degenerate_edge_falls_back_to_origin() {
    let mut g = two_vertex_graph();
    assert!(g.move_vertex(1, Point::new(20.0, 0.0)));
    let e = g.edge(0).unwrap().clone();
    assert_eq!(g.edge_bound_points(&e), (Point::ORIGIN, Point::ORIGIN));
    assert_eq!(g.edge_point_to_xy(&e, 5.0), Point::ORIGIN);
    // exactly two radii apart is still valid
    assert!(g.move_vertex(1, Point::new(30.0, 0.0)));
    let (s, t) = g.edge_bound_points(&e);
    assert!(close(s, Point::new(15.0, 0.0)));
    assert!(close(t, Point::new(15.0, 0.0)));
}

#[test]
fn vertex_lookup_out_of_range_is_none() {
    let g = two_vertex_graph();
    assert_eq!(g.vertex_point(1), Some(Point::new(100.0, 0.0)));
    assert_eq!(g.vertex_point(2), None);
    assert_eq!(g.vertex_point(u32::MAX), None);
}

#[test]
fn move_vertex_ignores_invalid_input() {
    let mut g = two_vertex_graph();
    let before = g.vertex_points().to_vec();
    assert!(!g.move_vertex(2, Point::new(1.0, 1.0)));
    assert!(!g.move_vertex(0, Point::new(f64::NAN, 1.0)));
    assert_eq!(g.vertex_points(), &before[..]);
    assert!(g.move_vertex(0, Point::new(-5.0, 7.0)));
    assert_eq!(g.vertex_point(0), Some(Point::new(-5.0, 7.0)));
}

#[test]
fn move_vertex_refuses_out_of_bounds_points() {
    let mut g = two_vertex_graph();
    let before = g.vertex_points().to_vec();
    assert!(!g.move_vertex(0, Point::new(2.0e7, 0.0)));
    assert!(!g.move_vertex(1, Point::new(0.0, -2.0e7)));
    assert_eq!(g.vertex_points(), &before[..]);

    let err = g.try_move_vertex(0, Point::new(2.0e7, 0.0)).unwrap_err();
    assert_eq!(err.code(), "out_of_range");
    let err = g.try_move_vertex(7, Point::new(1.0, 1.0)).unwrap_err();
    assert_eq!(err, GraphError::InvalidId { kind: "vertex", id: 7 });

    // the snapshot stays loadable
    let mut g2 = Graph::default();
    g2.from_json_value_strict(g.to_json_value()).unwrap();
    assert_eq!(g2.vertex_points(), &before[..]);
}

#[test]
fn construction_rejects_bad_descriptors() {
    let pts = || vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
    let cfg = GraphConfig::default();

    let err = Graph::from_parts(pts(), vec![EdgeDescriptor::new(0, 5, 1.0, vec![])], cfg).unwrap_err();
    assert_eq!(err, GraphError::InvalidId { kind: "vertex", id: 5 });

    let err = Graph::from_parts(pts(), vec![EdgeDescriptor::new(1, 1, 1.0, vec![])], cfg).unwrap_err();
    assert_eq!(err.code(), "invalid_edge");

    let err = Graph::from_parts(pts(), vec![EdgeDescriptor::new(0, 1, 0.0, vec![])], cfg).unwrap_err();
    assert_eq!(err.code(), "out_of_range");

    let err = Graph::from_parts(pts(), vec![EdgeDescriptor::new(0, 1, f64::INFINITY, vec![])], cfg).unwrap_err();
    assert_eq!(err.code(), "non_finite");

    let bad_seg = vec![Segment::new(0.0, f64::NAN)];
    let err = Graph::from_parts(pts(), vec![EdgeDescriptor::new(0, 1, 1.0, bad_seg)], cfg).unwrap_err();
    assert_eq!(err, GraphError::NonFinite { param: "segment.end" });

    let err = Graph::from_parts(vec![Point::new(f64::NAN, 0.0)], vec![], cfg).unwrap_err();
    assert_eq!(err.code(), "non_finite");

    let bad_cfg = GraphConfig { vertex_radius: -1.0, ..GraphConfig::default() };
    let err = Graph::from_parts(pts(), vec![], bad_cfg).unwrap_err();
    assert_eq!(err.code(), "out_of_range");
}

#[test]
fn segments_out_of_order_are_kept() {
    let g = Graph::from_parts(
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        vec![EdgeDescriptor::new(0, 1, 10.0, vec![Segment::labelled(7.0, 5.0, "jam")])],
        GraphConfig::default(),
    )
    .unwrap();
    let s = &g.edges()[0].segments()[0];
    assert_eq!((s.start, s.end), (7.0, 5.0));
    assert_eq!(s.label.as_deref(), Some("jam"));
    assert_eq!(s.length(), 2.0);
}

#[test]
fn ring_layout_keeps_edges_drawable() {
    let edges = vec![
        EdgeDescriptor::new(0, 1, 10.0, vec![Segment::new(0.0, 3.0), Segment::new(5.0, 7.0)]),
        EdgeDescriptor::new(1, 2, 20.0, vec![Segment::new(5.0, 10.0)]),
        EdgeDescriptor::new(2, 3, 50.0, vec![Segment::new(10.0, 20.0)]),
        EdgeDescriptor::new(1, 3, 50.0, vec![Segment::new(10.0, 20.0)]),
        EdgeDescriptor::new(0, 2, 10.0, vec![Segment::new(5.0, 5.0)]),
    ];
    let g = Graph::with_vertex_count(4, edges, GraphConfig::default()).unwrap();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 5);
    let r = g.config().vertex_radius;
    for e in g.edges() {
        let up = g.vertex_point(e.u()).unwrap();
        let vp = g.vertex_point(e.v()).unwrap();
        assert!(up.distance_to(vp) >= 2.0 * r);
        let (s, _) = g.edge_bound_points(e);
        assert_ne!(s, Point::ORIGIN);
    }
    for p in g.vertex_points() {
        assert!(p.x >= 0.0 && p.y >= 0.0);
    }
}

#[test]
fn scattered_layout_uses_integer_coordinates() {
    let mut rng = SmallRng::seed_from_u64(7);
    let g = Graph::scattered(16, vec![], GraphConfig::default(), 300, &mut rng).unwrap();
    assert_eq!(g.vertex_count(), 16);
    for p in g.vertex_points() {
        assert!(p.x >= 0.0 && p.x < 300.0 && p.x.fract() == 0.0);
        assert!(p.y >= 0.0 && p.y < 300.0 && p.y.fract() == 0.0);
    }
}

#[test]
fn add_edge_and_find() {
    let mut g = two_vertex_graph();
    let c = g.add_vertex(Point::new(0.0, 100.0)).unwrap();
    assert_eq!(c, 2);
    let id = g.add_edge(EdgeDescriptor::new(2, 0, 3.0, vec![])).unwrap();
    assert_eq!(id, 1);
    assert_eq!(g.find_edge(2, 0), Some(1));
    assert_eq!(g.find_edge(0, 2), None);
    assert_eq!(g.find_edge_undirected(0, 2), Some(1));
    assert!(g.add_vertex(Point::new(f64::INFINITY, 0.0)).is_err());
    g.clear();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
}
