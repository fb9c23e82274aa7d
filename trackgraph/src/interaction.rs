use serde::Serialize;

use crate::info_panel::InfoPanel;
use crate::model::{Point, PointedEdge, VertexId};
use crate::Graph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Grab,
    Pointer,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Hover {
    Dragging { vertex: VertexId },
    Edge(PointedEdge),
    Nothing,
}

/// Pointer gesture state. A held vertex drag takes precedence over edge hover.
#[derive(Clone, Copy, Debug, Default)]
pub struct Editor {
    dragging: Option<VertexId>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<VertexId> {
        self.dragging
    }

    /// Starts dragging the vertex under `p`, if any.
    pub fn pointer_down(&mut self, g: &Graph, p: Point) -> Option<VertexId> {
        self.dragging = g.pointed_vertex(p);
        if let Some(v) = self.dragging {
            log::debug!("drag start: vertex {}", v);
        }
        self.dragging
    }

    pub fn pointer_move<P: InfoPanel + ?Sized>(&mut self, g: &mut Graph, p: Point, panel: &mut P) -> Hover {
        if let Some(v) = self.dragging {
            g.move_vertex(v, p);
            panel.hide();
            return Hover::Dragging { vertex: v };
        }
        match g.pointed_edge(p) {
            Some(hit) => {
                panel.show(p, &hit.part);
                Hover::Edge(hit)
            }
            None => {
                panel.hide();
                Hover::Nothing
            }
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(v) = self.dragging.take() {
            log::debug!("drag end: vertex {}", v);
        }
    }

    pub fn cursor(&self, g: &Graph, p: Point) -> Cursor {
        if self.dragging.is_some() || g.pointed_vertex(p).is_some() {
            Cursor::Grab
        } else if g.pointed_edge(p).is_some() {
            Cursor::Pointer
        } else {
            Cursor::Default
        }
    }
}
