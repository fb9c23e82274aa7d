use crate::model::{Point, PointedPart};

/// Floating annotation sink driven by hover hit tests.
pub trait InfoPanel {
    fn show(&mut self, at: Point, info: &PointedPart);
    fn hide(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    pub at: Point,
    /// JSON rendering of the hovered payload.
    pub text: String,
}

/// Panel that only remembers what it would display.
#[derive(Clone, Debug, Default)]
pub struct RecordingPanel {
    state: Option<PanelState>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&PanelState> {
        self.state.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }
}

impl InfoPanel for RecordingPanel {
    fn show(&mut self, at: Point, info: &PointedPart) {
        let text = serde_json::to_string(info).unwrap_or_default();
        self.state = Some(PanelState { at, text });
    }

    fn hide(&mut self) {
        self.state = None;
    }
}
