use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logger;

pub use logger::init_logging;

#[wasm_bindgen]
pub struct TrackGraph {
    pub(crate) inner: trackgraph::Graph,
    pub(crate) editor: trackgraph::interaction::Editor,
    pub(crate) panel: trackgraph::info_panel::RecordingPanel,
}

impl TrackGraph {
    pub fn rs_wrap(inner: trackgraph::Graph) -> TrackGraph {
        TrackGraph {
            inner,
            editor: trackgraph::interaction::Editor::new(),
            panel: trackgraph::info_panel::RecordingPanel::new(),
        }
    }
}
