use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

pub use crate::geometry::point::Point;

/// Index into the graph's vertex table.
pub type VertexId = u32;
/// Index into the graph's edge list.
pub type EdgeId = u32;

/// Sub-range `[start, end]` along an edge's weight axis. The bounds may come in
/// either order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "SegmentRepr")]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub label: Option<String>,
}

impl Segment {
    pub fn new(start: f64, end: f64) -> Self {
        Segment { start, end, label: None }
    }

    pub fn labelled(start: f64, end: f64, label: impl Into<String>) -> Self {
        Segment { start, end, label: Some(label.into()) }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).abs()
    }
}

// Wire forms: [start, end] | [start, end, label] | {start, end, label?}
#[derive(Deserialize)]
#[serde(untagged)]
enum SegmentRepr {
    Pair(f64, f64),
    Labelled(f64, f64, String),
    Object {
        start: f64,
        end: f64,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<SegmentRepr> for Segment {
    fn from(r: SegmentRepr) -> Self {
        match r {
            SegmentRepr::Pair(start, end) => Segment::new(start, end),
            SegmentRepr::Labelled(start, end, label) => Segment::labelled(start, end, label),
            SegmentRepr::Object { start, end, label } => Segment { start, end, label },
        }
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match &self.label {
            None => {
                let mut t = s.serialize_tuple(2)?;
                t.serialize_element(&self.start)?;
                t.serialize_element(&self.end)?;
                t.end()
            }
            Some(label) => {
                let mut t = s.serialize_tuple(3)?;
                t.serialize_element(&self.start)?;
                t.serialize_element(&self.end)?;
                t.serialize_element(label)?;
                t.end()
            }
        }
    }
}

/// Weighted connection between two vertices. Endpoints and weight are fixed at
/// construction; only the segment list changes afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
    weight: f64,
    segments: Vec<Segment>,
}

impl Edge {
    pub(crate) fn new(u: VertexId, v: VertexId, weight: f64, segments: Vec<Segment>) -> Self {
        Edge { u, v, weight, segments }
    }

    pub fn u(&self) -> VertexId { self.u }
    pub fn v(&self) -> VertexId { self.v }
    pub fn weight(&self) -> f64 { self.weight }
    pub fn segments(&self) -> &[Segment] { &self.segments }

    pub(crate) fn segments_mut(&mut self) -> &mut Vec<Segment> { &mut self.segments }

    /// Exact, direction-sensitive endpoint match.
    pub fn connects(&self, u: VertexId, v: VertexId) -> bool {
        self.u == u && self.v == v
    }

    /// Endpoint match in either direction.
    pub fn joins(&self, u: VertexId, v: VertexId) -> bool {
        self.connects(u, v) || self.connects(v, u)
    }
}

/// Edge as supplied by callers: construction input and the argument of the
/// segment mutation calls (which ignore `weight`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub u: VertexId,
    pub v: VertexId,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl EdgeDescriptor {
    pub fn new(u: VertexId, v: VertexId, weight: f64, segments: Vec<Segment>) -> Self {
        EdgeDescriptor { u, v, weight, segments }
    }

    /// Descriptor carrying only endpoints and segments, for `set_segments`/`add_segments`.
    pub fn segments_for(u: VertexId, v: VertexId, segments: Vec<Segment>) -> Self {
        EdgeDescriptor { u, v, weight: 0.0, segments }
    }
}

impl From<&Edge> for EdgeDescriptor {
    fn from(e: &Edge) -> Self {
        EdgeDescriptor::new(e.u, e.v, e.weight, e.segments.clone())
    }
}

/// What an edge hit resolved to.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointedPart {
    /// The point is over one of the edge's segments.
    Segment { index: usize, segment: Segment },
    /// No segment under the point: edge-level information.
    Edge { weight: f64, segments: Vec<Segment> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointedEdge {
    pub edge: EdgeId,
    pub part: PointedPart,
}
