use crate::model::{Edge, EdgeId, Point, PointedEdge, PointedPart, VertexId};
use crate::Graph;

// Hit tests scan in table order and return the first match, not the closest.

pub fn pointed_vertex(g: &Graph, p: Point) -> Option<VertexId> {
    let r = g.config.vertex_radius;
    g.vertex_points
        .iter()
        .position(|vp| p.is_in_circle(*vp, r))
        .map(|i| i as VertexId)
}

/// First edge whose bound-point line lies within the edge width of `p`. The
/// payload is the segment under `p` when there is one, edge-level data otherwise.
pub fn pointed_edge(g: &Graph, p: Point) -> Option<PointedEdge> {
    let w = g.config.edge_width;
    for (i, e) in g.edges.iter().enumerate() {
        let (sup, svp) = g.edge_bound_points(e);
        if !p.is_on_line(sup, svp, w) {
            continue;
        }
        let part = match pointed_segment(g, e, p) {
            Some(index) => PointedPart::Segment { index, segment: e.segments()[index].clone() },
            None => PointedPart::Edge { weight: e.weight(), segments: e.segments().to_vec() },
        };
        return Some(PointedEdge { edge: i as EdgeId, part });
    }
    None
}

pub fn pointed_segment(g: &Graph, e: &Edge, p: Point) -> Option<usize> {
    let w = g.config.edge_width;
    e.segments().iter().position(|s| {
        let pa = g.edge_point_to_xy(e, s.start);
        let pb = g.edge_point_to_xy(e, s.end);
        p.is_on_line(pa, pb, w)
    })
}
