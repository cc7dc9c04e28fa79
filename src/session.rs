use crate::{Layer, PointId};

/// Transient interaction state.
///
/// Everything here lives beside the pattern, never inside it: nothing in this
/// struct is persisted, and undo never has to reason about it. `layer_now`
/// and `reversed` survive a clear; the selection does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Layer the next stroke will be drawn on
    pub(crate) layer_now: Layer,

    /// Point the user clicked to reuse as the next stroke's endpoint;
    /// consumed by a single connect
    pub(crate) selected: Option<PointId>,

    /// Display-only flag swapping which layer renders as which color
    pub(crate) reversed: bool,

    /// Last known workspace-relative cursor position
    pub(crate) cursor: Option<(f32, f32)>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            layer_now: Layer::Front,
            selected: None,
            reversed: false,
            cursor: None,
        }
    }
}

impl Session {
    /// Create a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer the next stroke will be drawn on
    pub fn layer_now(&self) -> Layer {
        self.layer_now
    }

    /// Currently selected point, if any
    pub fn selected(&self) -> Option<PointId> {
        self.selected
    }

    /// Whether the layer colors are displayed swapped
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Last known cursor position, workspace-relative
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Record the current cursor position (pointer tracker feed)
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Some((x, y));
    }

    /// Forget the cursor position (pointer left the workspace)
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }
}
