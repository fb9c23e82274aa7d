use crate::geometry::limits;
use crate::model::{EdgeDescriptor, EdgeId, Segment};
use crate::{check_segments, Graph, GraphError};

/// Replaces the segment list of the first edge with exactly `(u, v)` for each
/// descriptor. Returns how many descriptors found an edge.
pub fn set_segments(g: &mut Graph, edges: &[EdgeDescriptor]) -> usize {
    let mut matched = 0;
    for d in edges {
        let Some(id) = g.find_edge(d.u, d.v) else {
            log::warn!("set_segments: no edge ({}, {})", d.u, d.v);
            continue;
        };
        if let Err(e) = check_segments(&d.segments, 0).and_then(|()| check_total(g, Some(id), d.segments.len())) {
            log::warn!("set_segments: edge ({}, {}) skipped: {}", d.u, d.v, e);
            continue;
        }
        if replace(g, id, d.segments.clone()) {
            matched += 1;
        }
    }
    matched
}

/// Appends each descriptor's segments to the first edge joining its endpoints in
/// either direction. Returns how many descriptors found an edge.
pub fn add_segments(g: &mut Graph, edges: &[EdgeDescriptor]) -> usize {
    let mut matched = 0;
    for d in edges {
        let Some(id) = g.find_edge_undirected(d.u, d.v) else {
            log::warn!("add_segments: no edge joining {} and {}", d.u, d.v);
            continue;
        };
        match append(g, id, &d.segments) {
            Ok(()) => matched += 1,
            Err(e) => log::warn!("add_segments: edge ({}, {}) skipped: {}", d.u, d.v, e),
        }
    }
    matched
}

/// Like `add_segments`, but descriptors without a matching edge become new
/// edges. Returns the number of edges inserted. All or nothing: on error `g`
/// is left as it was.
pub fn merge_edges(g: &mut Graph, edges: Vec<EdgeDescriptor>) -> Result<usize, GraphError> {
    let mut staged = g.clone();
    let mut inserted = 0;
    for d in edges {
        match staged.find_edge_undirected(d.u, d.v) {
            Some(id) => append(&mut staged, id, &d.segments)?,
            None => {
                check_total(&staged, None, d.segments.len())?;
                staged.add_edge(d)?;
                inserted += 1;
            }
        }
    }
    *g = staged;
    Ok(inserted)
}

/// Graph-wide cap once edge `replaced` (if any) holds `incoming` segments in
/// place of its current ones.
fn check_total(g: &Graph, replaced: Option<EdgeId>, incoming: usize) -> Result<(), GraphError> {
    let current = replaced.and_then(|id| g.edge(id)).map_or(0, |e| e.segments().len());
    if g.segment_count() - current + incoming > limits::MAX_SEGMENTS_TOTAL {
        return Err(GraphError::LimitExceeded { what: "segments", limit: limits::MAX_SEGMENTS_TOTAL });
    }
    Ok(())
}

fn replace(g: &mut Graph, id: EdgeId, segments: Vec<Segment>) -> bool {
    match g.edge_mut(id) {
        Some(edge) => {
            log::debug!("edge {}: {} segments replaced by {}", id, edge.segments().len(), segments.len());
            *edge.segments_mut() = segments;
            true
        }
        None => false,
    }
}

fn append(g: &mut Graph, id: EdgeId, segments: &[Segment]) -> Result<(), GraphError> {
    let existing = g.edge(id).ok_or(GraphError::InvalidId { kind: "edge", id })?.segments().len();
    check_segments(segments, existing)?;
    check_total(g, None, segments.len())?;
    let edge = g.edge_mut(id).ok_or(GraphError::InvalidId { kind: "edge", id })?;
    edge.segments_mut().extend_from_slice(segments);
    log::debug!("edge {}: appended {} segments", id, segments.len());
    Ok(())
}
