use crate::config::GraphConfig;
use crate::geometry::limits;
use crate::model::{EdgeDescriptor, Point};
use crate::{Graph, GraphError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DOC_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct VertexSer {
    id: u32,
    x: f64,
    y: f64,
}

#[derive(Serialize, Deserialize)]
struct Doc {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    config: GraphConfig,
    vertices: Vec<VertexSer>,
    #[serde(default)]
    edges: Vec<EdgeDescriptor>,
}

fn default_version() -> u32 {
    DOC_VERSION
}

pub fn to_json_impl(g: &Graph) -> Value {
    let doc = Doc {
        version: DOC_VERSION,
        config: g.config,
        vertices: g
            .vertex_points
            .iter()
            .enumerate()
            .map(|(i, p)| VertexSer { id: i as u32, x: p.x, y: p.y })
            .collect(),
        edges: g.edges.iter().map(EdgeDescriptor::from).collect(),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

/// Replaces `g` with the document's contents; `g` is untouched on error.
pub fn from_json_impl_strict(g: &mut Graph, v: Value) -> Result<(), GraphError> {
    let doc: Doc = serde_json::from_value(v)?;
    if doc.version != DOC_VERSION {
        return Err(GraphError::OutOfRange {
            param: "version",
            min: DOC_VERSION as f64,
            max: DOC_VERSION as f64,
            got: doc.version as f64,
        });
    }
    if doc.vertices.len() > limits::MAX_VERTICES {
        return Err(GraphError::LimitExceeded { what: "vertices", limit: limits::MAX_VERTICES });
    }
    // Vertex ids must be dense: 0..n in any order.
    let n = doc.vertices.len();
    let mut slots: Vec<Option<Point>> = vec![None; n];
    for vs in &doc.vertices {
        let slot = slots
            .get_mut(vs.id as usize)
            .filter(|s| s.is_none())
            .ok_or(GraphError::InvalidId { kind: "vertex", id: vs.id })?;
        *slot = Some(Point::new(vs.x, vs.y));
    }
    let points: Vec<Point> = slots.into_iter().flatten().collect();
    *g = Graph::from_parts(points, doc.edges, doc.config)?;
    Ok(())
}
