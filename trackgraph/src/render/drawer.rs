use serde::Serialize;

use crate::config::GraphConfig;
use crate::model::Point;
use crate::Graph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    /// Full edge between vertex centres.
    Edge,
    /// Segment overlay between bound points.
    Segment,
}

/// Drawing surface supplied by the host.
pub trait Canvas {
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, stroke: Stroke);
    fn fill_circle(&mut self, center: Point, radius: f64);
    fn fill_text(&mut self, at: Point, text: &str);
}

/// Paints a graph onto a `Canvas`: edges first, then their segments, vertices on top.
#[derive(Clone, Copy, Debug)]
pub struct GraphDrawer {
    config: GraphConfig,
}

impl GraphDrawer {
    pub fn new(config: GraphConfig) -> Self {
        GraphDrawer { config }
    }

    /// Drawer sharing the graph's geometry, so strokes match its hit tests.
    pub fn for_graph(g: &Graph) -> Self {
        GraphDrawer::new(*g.config())
    }

    pub fn draw<C: Canvas + ?Sized>(&self, g: &Graph, canvas: &mut C) {
        self.draw_edges(g, canvas);
        self.draw_vertices(g, canvas);
    }

    pub fn draw_edges<C: Canvas + ?Sized>(&self, g: &Graph, canvas: &mut C) {
        let width = self.config.edge_width;
        let eps = self.config.segment_epsilon;
        for e in g.edges() {
            let (Some(up), Some(vp)) = (g.vertex_point(e.u()), g.vertex_point(e.v())) else {
                continue;
            };
            canvas.stroke_line(up, vp, width, Stroke::Edge);
            for s in e.segments() {
                let a = s.start;
                let mut b = s.end;
                if (a - b).abs() < eps {
                    b += eps;
                }
                let pa = g.edge_point_to_xy(e, a);
                let pb = g.edge_point_to_xy(e, b);
                canvas.stroke_line(pa, pb, width, Stroke::Segment);
            }
        }
    }

    pub fn draw_vertices<C: Canvas + ?Sized>(&self, g: &Graph, canvas: &mut C) {
        let r = self.config.vertex_radius;
        for (v, vp) in g.vertex_points().iter().enumerate() {
            canvas.fill_circle(*vp, r);
            canvas.fill_text(*vp, &v.to_string());
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Line { from: Point, to: Point, width: f64, stroke: Stroke },
    Circle { center: Point, radius: f64 },
    Text { at: Point, text: String },
}

/// Canvas that records commands for later replay (JS host, SVG export).
#[derive(Clone, Debug, Default, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(drawer: &GraphDrawer, g: &Graph) -> Self {
        let mut list = DrawList::new();
        drawer.draw(g, &mut list);
        list
    }
}

impl Canvas for DrawList {
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, width, stroke });
    }
    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }
    fn fill_text(&mut self, at: Point, text: &str) {
        self.commands.push(DrawCommand::Text { at, text: text.to_string() });
    }
}
