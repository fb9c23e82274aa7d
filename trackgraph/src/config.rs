use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::geometry::limits;

/// Fixed geometry shared by the graph, its hit tests and the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Radius of a vertex circle; also the inward offset of segment bound points.
    pub vertex_radius: f64,
    /// Stroke width of edges and hit tolerance around them.
    pub edge_width: f64,
    /// Minimum drawn length of a segment along the weight axis.
    pub segment_epsilon: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            vertex_radius: 15.0,
            edge_width: 3.0,
            segment_epsilon: 0.1,
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> Result<(), GraphError> {
        let fields = [
            ("vertex_radius", self.vertex_radius),
            ("edge_width", self.edge_width),
            ("segment_epsilon", self.segment_epsilon),
        ];
        for (param, value) in fields {
            if !value.is_finite() {
                return Err(GraphError::NonFinite { param });
            }
            if !limits::in_width_bounds(value) {
                return Err(GraphError::OutOfRange { param, min: 0.0, max: limits::WIDTH_MAX, got: value });
            }
        }
        Ok(())
    }
}
