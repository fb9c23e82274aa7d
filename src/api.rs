use crate::TrackGraph;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use trackgraph::info_panel::InfoPanel;
use trackgraph::interaction::{Cursor, Editor};
use trackgraph::render::drawer::{DrawList, GraphDrawer};
use trackgraph::{EdgeDescriptor, Graph, GraphConfig, Point};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_config(v: JsValue) -> Result<GraphConfig, JsValue> {
    if v.is_undefined() || v.is_null() {
        return Ok(GraphConfig::default());
    }
    serde_wasm_bindgen::from_value::<GraphConfig>(v)
        .map_err(|e| error::invalid_input("config", e.to_string()))
}

fn parse_descriptors(v: JsValue) -> Result<Vec<EdgeDescriptor>, JsValue> {
    serde_wasm_bindgen::from_value::<Vec<EdgeDescriptor>>(v)
        .map_err(|e| error::invalid_input("edges", e.to_string()))
}

fn parse_descriptor(v: JsValue) -> Result<EdgeDescriptor, JsValue> {
    serde_wasm_bindgen::from_value::<EdgeDescriptor>(v)
        .map_err(|e| error::invalid_input("edge", e.to_string()))
}

fn finite_xy(x: f64, y: f64) -> Result<Point, JsValue> {
    if !x.is_finite() {
        return Err(error::non_finite("x"));
    }
    if !y.is_finite() {
        return Err(error::non_finite("y"));
    }
    Ok(Point::new(x, y))
}

#[wasm_bindgen]
impl TrackGraph {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TrackGraph {
        TrackGraph::rs_wrap(Graph::default())
    }

    /// `vertex_count` vertices on a ring plus the given edges. Throws a typed error object.
    pub fn build(vertex_count: u32, edges: JsValue, config: JsValue) -> Result<TrackGraph, JsValue> {
        let config = parse_config(config)?;
        let edges = parse_descriptors(edges)?;
        Graph::with_vertex_count(vertex_count as usize, edges, config)
            .map(TrackGraph::rs_wrap)
            .map_err(|e| error::from_graph(&e))
    }

    /// Random integer placement in `[0, extent)`, reproducible from `seed`.
    pub fn scattered(
        vertex_count: u32,
        edges: JsValue,
        config: JsValue,
        extent: u32,
        seed: u32,
    ) -> Result<TrackGraph, JsValue> {
        let config = parse_config(config)?;
        let edges = parse_descriptors(edges)?;
        let mut rng = SmallRng::seed_from_u64(seed as u64);
        Graph::scattered(vertex_count as usize, edges, config, extent, &mut rng)
            .map(TrackGraph::rs_wrap)
            .map_err(|e| error::from_graph(&e))
    }

    pub fn config(&self) -> JsValue {
        interop::to_js(self.inner.config())
    }

    // Vertices
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }
    pub fn add_vertex_res(&mut self, x: f64, y: f64) -> JsValue {
        let p = match finite_xy(x, y) {
            Ok(p) => p,
            Err(e) => return e,
        };
        match self.inner.add_vertex(p) {
            Ok(id) => error::ok(JsValue::from_f64(id as f64)),
            Err(e) => error::from_graph(&e),
        }
    }
    pub fn get_vertex_point(&self, v: u32) -> JsValue {
        self.inner.vertex_point(v).map_or(JsValue::NULL, interop::point)
    }
    pub fn get_vertex_point_res(&self, v: u32) -> JsValue {
        match self.inner.vertex_point(v) {
            Some(p) => error::ok(interop::point(p)),
            None => error::invalid_id("vertex", v),
        }
    }
    pub fn get_vertex_data(&self) -> JsValue {
        let pts = self.inner.vertex_points();
        let ids: Vec<u32> = (0..pts.len() as u32).collect();
        let pos: Vec<f64> = pts.iter().flat_map(|p| [p.x, p.y]).collect();
        let obj = interop::new_obj();
        interop::set_kv(&obj, "ids", &interop::arr_u32(&ids).into());
        interop::set_kv(&obj, "positions", &interop::arr_f64(&pos).into());
        obj.into()
    }
    pub fn move_vertex(&mut self, u: u32, x: f64, y: f64) -> bool {
        self.inner.move_vertex(u, Point::new(x, y))
    }
    pub fn move_vertex_res(&mut self, u: u32, x: f64, y: f64) -> JsValue {
        let p = match finite_xy(x, y) {
            Ok(p) => p,
            Err(e) => return e,
        };
        match self.inner.try_move_vertex(u, p) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_graph(&e),
        }
    }

    // Edges
    pub fn edge_count(&self) -> u32 {
        self.inner.edge_count() as u32
    }
    pub fn get_edges(&self) -> JsValue {
        let edges: Vec<EdgeDescriptor> = self.inner.edges().iter().map(EdgeDescriptor::from).collect();
        interop::to_js(&edges)
    }
    pub fn add_edge_res(&mut self, edge: JsValue) -> JsValue {
        let d = match parse_descriptor(edge) {
            Ok(d) => d,
            Err(e) => return e,
        };
        match self.inner.add_edge(d) {
            Ok(id) => error::ok(JsValue::from_f64(id as f64)),
            Err(e) => error::from_graph(&e),
        }
    }
    pub fn get_edge_bound_points(&self, edge: u32) -> JsValue {
        match self.inner.edge(edge) {
            Some(e) => {
                let (s, t) = self.inner.edge_bound_points(e);
                let arr = js_sys::Array::new();
                arr.push(&interop::point(s));
                arr.push(&interop::point(t));
                arr.into()
            }
            None => JsValue::NULL,
        }
    }
    pub fn convert_edge_point_to_xy(&self, edge: u32, d: f64) -> JsValue {
        match self.inner.edge(edge) {
            Some(e) => interop::point(self.inner.edge_point_to_xy(e, d)),
            None => JsValue::NULL,
        }
    }
    pub fn convert_edge_point_to_xy_res(&self, edge: u32, d: f64) -> JsValue {
        if !d.is_finite() {
            return error::non_finite("d");
        }
        match self.inner.edge(edge) {
            Some(e) => error::ok(interop::point(self.inner.edge_point_to_xy(e, d))),
            None => error::invalid_id("edge", edge),
        }
    }

    // Picking
    pub fn get_pointed_vertex(&self, x: f64, y: f64) -> Option<u32> {
        self.inner.pointed_vertex(Point::new(x, y))
    }
    pub fn get_pointed_edge(&self, x: f64, y: f64) -> JsValue {
        match self.inner.pointed_edge(Point::new(x, y)) {
            Some(hit) => interop::to_js(&hit),
            None => JsValue::NULL,
        }
    }
    pub fn get_pointed_edge_res(&self, x: f64, y: f64) -> JsValue {
        match finite_xy(x, y) {
            Ok(_) => error::ok(self.get_pointed_edge(x, y)),
            Err(e) => e,
        }
    }

    // Segments
    pub fn set_segments(&mut self, edges: JsValue) -> u32 {
        match parse_descriptors(edges) {
            Ok(d) => self.inner.set_segments(&d) as u32,
            Err(_) => 0,
        }
    }
    pub fn set_segments_res(&mut self, edges: JsValue) -> JsValue {
        match parse_descriptors(edges) {
            Ok(d) => error::ok(JsValue::from_f64(self.inner.set_segments(&d) as f64)),
            Err(e) => e,
        }
    }
    pub fn add_segments(&mut self, edges: JsValue) -> u32 {
        match parse_descriptors(edges) {
            Ok(d) => self.inner.add_segments(&d) as u32,
            Err(_) => 0,
        }
    }
    pub fn add_segments_res(&mut self, edges: JsValue) -> JsValue {
        match parse_descriptors(edges) {
            Ok(d) => error::ok(JsValue::from_f64(self.inner.add_segments(&d) as f64)),
            Err(e) => e,
        }
    }
    pub fn merge_edges_res(&mut self, edges: JsValue) -> JsValue {
        let d = match parse_descriptors(edges) {
            Ok(d) => d,
            Err(e) => return e,
        };
        match self.inner.merge_edges(d) {
            Ok(n) => error::ok(JsValue::from_f64(n as f64)),
            Err(e) => error::from_graph(&e),
        }
    }

    // Drawing
    pub fn draw_commands(&self) -> JsValue {
        let list = DrawList::record(&GraphDrawer::for_graph(&self.inner), &self.inner);
        interop::to_js(&list.commands)
    }
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let list = DrawList::record(&GraphDrawer::for_graph(&self.inner), &self.inner);
        trackgraph::render::svg::to_svg(&list, width, height)
    }

    // Pointer input
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<u32> {
        self.editor.pointer_down(&self.inner, Point::new(x, y))
    }
    pub fn pointer_move(&mut self, x: f64, y: f64) -> JsValue {
        let hover = self.editor.pointer_move(&mut self.inner, Point::new(x, y), &mut self.panel);
        interop::to_js(&hover)
    }
    pub fn pointer_up(&mut self) {
        self.editor.pointer_up();
    }
    pub fn pointer_leave(&mut self) {
        self.editor.pointer_up();
        self.panel.hide();
    }
    pub fn cursor(&self, x: f64, y: f64) -> String {
        let name = match self.editor.cursor(&self.inner, Point::new(x, y)) {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Pointer => "pointer",
        };
        name.to_string()
    }
    /// `{x, y, text}` while the info panel is visible, otherwise null.
    pub fn info_panel(&self) -> JsValue {
        match self.panel.state() {
            Some(s) => {
                let obj = interop::new_obj();
                interop::set_kv(&obj, "x", &JsValue::from_f64(s.at.x));
                interop::set_kv(&obj, "y", &JsValue::from_f64(s.at.y));
                interop::set_kv(&obj, "text", &JsValue::from_str(&s.text));
                obj.into()
            }
            None => JsValue::NULL,
        }
    }

    // JSON
    pub fn to_json(&self) -> JsValue {
        interop::to_js(&self.inner.to_json_value())
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => {
                if self.inner.from_json_value(val) {
                    self.editor = Editor::new();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => val,
            Err(e) => return error::err("json_parse", e.to_string(), None),
        };
        match self.inner.from_json_value_strict(val) {
            Ok(()) => {
                self.editor = Editor::new();
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => error::from_graph(&e),
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.editor = Editor::new();
        self.panel.hide();
    }
}

impl Default for TrackGraph {
    fn default() -> Self {
        TrackGraph::new()
    }
}
