pub mod config;
pub mod error;
pub mod info_panel;
pub mod interaction;
pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod point;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod layout;
    pub mod picking;
    pub mod segments;
}
pub mod render {
    pub mod drawer;
    pub mod svg;
}
mod json;

pub use config::GraphConfig;
pub use error::GraphError;
pub use model::{Edge, EdgeDescriptor, EdgeId, Point, PointedEdge, PointedPart, Segment, VertexId};

use geometry::limits;
use rand::Rng;

/// Vertex positions plus the weighted edges between them. Vertices are an arena
/// indexed by `VertexId`; edges refer to them by index only.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) config: GraphConfig,
    pub(crate) vertex_points: Vec<Point>, // id is index
    pub(crate) edges: Vec<Edge>,          // id is index
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new(GraphConfig::default())
    }
}

impl Graph {
    pub fn new(config: GraphConfig) -> Self {
        Graph {
            config,
            vertex_points: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Graph from explicit vertex positions and edge descriptors.
    pub fn from_parts(
        points: Vec<Point>,
        edges: Vec<EdgeDescriptor>,
        config: GraphConfig,
    ) -> Result<Self, GraphError> {
        config.validate()?;
        if points.len() > limits::MAX_VERTICES {
            return Err(GraphError::LimitExceeded { what: "vertices", limit: limits::MAX_VERTICES });
        }
        if edges.len() > limits::MAX_EDGES {
            return Err(GraphError::LimitExceeded { what: "edges", limit: limits::MAX_EDGES });
        }
        let mut g = Graph::new(config);
        for p in points {
            g.add_vertex(p)?;
        }
        let mut total_segments = 0usize;
        for d in edges {
            total_segments += d.segments.len();
            if total_segments > limits::MAX_SEGMENTS_TOTAL {
                return Err(GraphError::LimitExceeded { what: "segments", limit: limits::MAX_SEGMENTS_TOTAL });
            }
            g.add_edge(d)?;
        }
        Ok(g)
    }

    /// `count` vertices placed on a ring large enough to keep neighbours apart.
    pub fn with_vertex_count(
        count: usize,
        edges: Vec<EdgeDescriptor>,
        config: GraphConfig,
    ) -> Result<Self, GraphError> {
        let r = config.vertex_radius;
        let ring_radius = r * count.max(4) as f64;
        let center = Point::new(ring_radius + 2.0 * r, ring_radius + 2.0 * r);
        Self::from_parts(algorithms::layout::ring(count, center, ring_radius), edges, config)
    }

    /// `count` vertices scattered at integer coordinates in `[0, extent)`.
    pub fn scattered<R: Rng>(
        count: usize,
        edges: Vec<EdgeDescriptor>,
        config: GraphConfig,
        extent: u32,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        Self::from_parts(algorithms::layout::scatter(count, extent, rng), edges, config)
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // Vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_points.len()
    }
    pub fn vertex_points(&self) -> &[Point] {
        &self.vertex_points
    }
    pub fn add_vertex(&mut self, p: Point) -> Result<VertexId, GraphError> {
        check_point(p)?;
        if self.vertex_points.len() >= limits::MAX_VERTICES {
            return Err(GraphError::LimitExceeded { what: "vertices", limit: limits::MAX_VERTICES });
        }
        let id = self.vertex_points.len() as VertexId;
        self.vertex_points.push(p);
        Ok(id)
    }
    /// Position of vertex `v`; `None` (and a warning) when `v` is out of range.
    pub fn vertex_point(&self, v: VertexId) -> Option<Point> {
        let p = self.vertex_points.get(v as usize).copied();
        if p.is_none() {
            log::warn!("vertex {} out of bounds (count {})", v, self.vertex_points.len());
        }
        p
    }
    /// The only vertex mutation. Invalid ids and points outside the coordinate
    /// bounds are ignored.
    pub fn move_vertex(&mut self, u: VertexId, p: Point) -> bool {
        match self.try_move_vertex(u, p) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("move_vertex {} rejected: {}", u, e);
                false
            }
        }
    }
    pub fn try_move_vertex(&mut self, u: VertexId, p: Point) -> Result<(), GraphError> {
        check_point(p)?;
        let slot = self
            .vertex_points
            .get_mut(u as usize)
            .ok_or(GraphError::InvalidId { kind: "vertex", id: u })?;
        *slot = p;
        Ok(())
    }

    // Edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    /// Segments held by all edges together.
    pub fn segment_count(&self) -> usize {
        self.edges.iter().map(|e| e.segments().len()).sum()
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id as usize)
    }
    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id as usize)
    }
    /// First edge with exactly these endpoints, in list order.
    pub fn find_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.edges.iter().position(|e| e.connects(u, v)).map(|i| i as EdgeId)
    }
    /// First edge joining `u` and `v` in either direction.
    pub fn find_edge_undirected(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.edges.iter().position(|e| e.joins(u, v)).map(|i| i as EdgeId)
    }
    pub fn add_edge(&mut self, d: EdgeDescriptor) -> Result<EdgeId, GraphError> {
        if self.edges.len() >= limits::MAX_EDGES {
            return Err(GraphError::LimitExceeded { what: "edges", limit: limits::MAX_EDGES });
        }
        let n = self.vertex_points.len();
        if d.u as usize >= n {
            return Err(GraphError::InvalidId { kind: "vertex", id: d.u });
        }
        if d.v as usize >= n {
            return Err(GraphError::InvalidId { kind: "vertex", id: d.v });
        }
        if d.u == d.v {
            return Err(GraphError::InvalidEdge { u: d.u, v: d.v, reason: "endpoints cannot be the same vertex" });
        }
        if !d.weight.is_finite() {
            return Err(GraphError::NonFinite { param: "weight" });
        }
        if !limits::in_weight_bounds(d.weight) {
            return Err(GraphError::OutOfRange { param: "weight", min: 0.0, max: limits::WEIGHT_MAX, got: d.weight });
        }
        check_segments(&d.segments, 0)?;
        let id = self.edges.len() as EdgeId;
        self.edges.push(Edge::new(d.u, d.v, d.weight, d.segments));
        Ok(id)
    }

    // Edge geometry
    /// Anchors for segment overlays: each vertex centre moved towards the other
    /// endpoint by the vertex radius. Degenerate edges (shorter than two radii)
    /// yield two origin points.
    pub fn edge_bound_points(&self, edge: &Edge) -> (Point, Point) {
        let (up, vp) = match (self.vertex_point(edge.u()), self.vertex_point(edge.v())) {
            (Some(up), Some(vp)) => (up, vp),
            _ => return (Point::ORIGIN, Point::ORIGIN),
        };
        let r = self.config.vertex_radius;
        let edge_len = up.distance_to(vp);
        if edge_len < r * 2.0 {
            log::warn!(
                "cannot place segment bounds on edge ({}, {}): length {} < {}",
                edge.u(),
                edge.v(),
                edge_len,
                r * 2.0
            );
            return (Point::ORIGIN, Point::ORIGIN);
        }
        let lambda = r / edge_len;
        (up.lerp(vp, lambda), up.lerp(vp, 1.0 - lambda))
    }

    /// Maps position `d` along the weight axis (clamped to `[0, weight]`) onto
    /// the line between the edge's bound points.
    pub fn edge_point_to_xy(&self, edge: &Edge, d: f64) -> Point {
        let d = geometry::tolerance::clamp(d, 0.0, edge.weight());
        let lambda = geometry::tolerance::safe_div(d, edge.weight(), 0.0);
        let (sup, svp) = self.edge_bound_points(edge);
        sup.lerp(svp, lambda)
    }

    // Picking
    pub fn pointed_vertex(&self, p: Point) -> Option<VertexId> {
        algorithms::picking::pointed_vertex(self, p)
    }
    pub fn pointed_edge(&self, p: Point) -> Option<PointedEdge> {
        algorithms::picking::pointed_edge(self, p)
    }
    pub fn pointed_segment(&self, edge: &Edge, p: Point) -> Option<usize> {
        algorithms::picking::pointed_segment(self, edge, p)
    }

    // Segments
    pub fn set_segments(&mut self, edges: &[EdgeDescriptor]) -> usize {
        algorithms::segments::set_segments(self, edges)
    }
    pub fn add_segments(&mut self, edges: &[EdgeDescriptor]) -> usize {
        algorithms::segments::add_segments(self, edges)
    }
    pub fn merge_edges(&mut self, edges: Vec<EdgeDescriptor>) -> Result<usize, GraphError> {
        algorithms::segments::merge_edges(self, edges)
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> bool {
        match json::from_json_impl_strict(self, v) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("rejected graph document: {}", e);
                false
            }
        }
    }
    pub fn from_json_value_strict(&mut self, v: serde_json::Value) -> Result<(), GraphError> {
        json::from_json_impl_strict(self, v)
    }

    pub fn clear(&mut self) {
        self.vertex_points.clear();
        self.edges.clear();
    }
}

pub(crate) fn check_point(p: Point) -> Result<(), GraphError> {
    if !p.x.is_finite() {
        return Err(GraphError::NonFinite { param: "x" });
    }
    if !p.y.is_finite() {
        return Err(GraphError::NonFinite { param: "y" });
    }
    if !limits::in_coord_bounds(p.x) {
        return Err(GraphError::OutOfRange { param: "x", min: limits::COORD_MIN, max: limits::COORD_MAX, got: p.x });
    }
    if !limits::in_coord_bounds(p.y) {
        return Err(GraphError::OutOfRange { param: "y", min: limits::COORD_MIN, max: limits::COORD_MAX, got: p.y });
    }
    Ok(())
}

/// Checks `segments` about to join an edge that already holds `existing` of them.
pub(crate) fn check_segments(segments: &[Segment], existing: usize) -> Result<(), GraphError> {
    if existing + segments.len() > limits::MAX_SEGMENTS_PER_EDGE {
        return Err(GraphError::LimitExceeded { what: "segments per edge", limit: limits::MAX_SEGMENTS_PER_EDGE });
    }
    for s in segments {
        if !s.start.is_finite() {
            return Err(GraphError::NonFinite { param: "segment.start" });
        }
        if !s.end.is_finite() {
            return Err(GraphError::NonFinite { param: "segment.end" });
        }
        if s.label.as_ref().map_or(false, |l| l.len() > limits::MAX_LABEL_LEN) {
            return Err(GraphError::LimitExceeded { what: "label bytes", limit: limits::MAX_LABEL_LEN });
        }
    }
    Ok(())
}
