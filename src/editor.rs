use crate::{EditorEvent, EventKind, Layer, Pattern, Point, PointId, Session, Stroke};
use anyhow::{anyhow, Result};

/// The editor: a pattern plus the interaction session driving it.
///
/// Every mutation happens synchronously in response to one input event, in
/// the order the host delivers them. The pattern is exclusively owned here;
/// the GUI and the render feed only ever read.
///
/// The active layer alternates with the stroke list: `layer_now` equals
/// `stroke_count mod 2` at all times. Placing the anchor creates no stroke
/// and leaves the layer alone.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    /// The persisted graph
    pattern: Pattern,

    /// Transient interaction state, never persisted
    session: Session,

    /// Event log for history tracking
    events: Vec<EditorEvent>,
}

impl Editor {
    /// Create an editor over an empty pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor over an existing pattern (e.g. a loaded snapshot)
    pub fn from_pattern(pattern: Pattern) -> Self {
        let mut editor = Self::new();
        editor.restore(pattern);
        editor
    }

    /// The current graph
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The current interaction state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The point the next stroke will originate from
    pub fn last_point(&self) -> Option<PointId> {
        self.pattern.last_point()
    }

    // ========== Mutation operations ==========

    /// Handle a click at a workspace-relative coordinate.
    ///
    /// On an empty graph this places the anchor point and draws nothing.
    /// Otherwise it draws exactly one stroke from the last point to either
    /// the currently selected point (consuming the selection) or a new point
    /// created at the cursor, then flips the active layer. Returns the
    /// endpoint the stroke terminated at (or the anchor just placed).
    pub fn connect(&mut self, x: f32, y: f32) -> PointId {
        let Some(u) = self.pattern.last_point() else {
            let id = self.pattern.push_point(Point::new(x, y, 0));
            self.log(EventKind::PointPlaced { id, x, y });
            return id;
        };

        let v = match self.session.selected.take() {
            Some(v) => {
                if let Some(point) = self.pattern.point_mut(v) {
                    point.degree += 1;
                }
                v
            }
            None => {
                let id = self.pattern.push_point(Point::new(x, y, 1));
                self.log(EventKind::PointPlaced { id, x, y });
                id
            }
        };
        if let Some(point) = self.pattern.point_mut(u) {
            point.degree += 1;
        }

        let layer = self.session.layer_now;
        self.pattern.push_stroke(Stroke::new(u, v, layer));
        self.log(EventKind::StrokeDrawn { u, v, layer });
        self.session.layer_now = layer.flipped();
        v
    }

    /// Mark an existing point as the next stroke's endpoint. The selection
    /// is consumed by the next `connect`, which then creates no new point.
    /// Errors if the handle is out of range or tombstoned.
    pub fn select_point(&mut self, id: PointId) -> Result<()> {
        if !self.pattern.is_live(id) {
            return Err(anyhow!("point not found: {}", id));
        }
        self.session.selected = Some(id);
        Ok(())
    }

    /// Reverse the most recent mutation.
    ///
    /// With strokes present, the last stroke is removed and both endpoint
    /// degrees drop; a point whose degree reaches zero is tombstoned, except
    /// that the origin of the very first stroke is kept alive so the graph
    /// returns to the anchor-only state instead of jumping straight to
    /// empty. In the anchor-only state, undo wipes the lone point and resets
    /// the active layer. On an empty graph it is a no-op.
    pub fn undo(&mut self) {
        if self.pattern.slot_count() == 0 {
            return;
        }

        if self.pattern.stroke_count() == 0 {
            // Anchor state: back to fully empty
            self.pattern.clear();
            self.session.layer_now = Layer::Front;
            self.session.selected = None;
            self.log(EventKind::AnchorRemoved);
            return;
        }

        let strokes_before = self.pattern.stroke_count();
        let Some(stroke) = self.pattern.pop_stroke() else {
            return;
        };
        let Stroke { u, v, layer } = stroke;
        self.session.layer_now = self.session.layer_now.flipped();
        self.log(EventKind::StrokeUndone { u, v, layer });

        if let Some(point) = self.pattern.point_mut(u) {
            point.degree -= 1;
        }
        if let Some(point) = self.pattern.point_mut(v) {
            point.degree -= 1;
        }

        // The origin of the very first stroke is never tombstoned: undoing
        // that stroke must return to the anchor-only state, not skip it.
        if self.degree_of(u) == Some(0) && strokes_before != 1 {
            self.pattern.tombstone(u);
            self.log(EventKind::PointRemoved { id: u });
        }
        if self.degree_of(v) == Some(0) {
            self.pattern.tombstone(v);
            self.log(EventKind::PointRemoved { id: v });
        }

        // Drop a selection that now points at a tombstone
        if let Some(selected) = self.session.selected {
            if !self.pattern.is_live(selected) {
                self.session.selected = None;
            }
        }
    }

    /// Discard all points and strokes. The active layer and the reversed
    /// flag are display state and stay as they are; the selection is dropped
    /// with the points it referenced.
    pub fn clear(&mut self) {
        self.pattern.clear();
        self.session.selected = None;
        self.log(EventKind::Cleared);
    }

    /// Flip which layer renders as which color. Display-only.
    pub fn toggle_reversed(&mut self) {
        self.session.reversed = !self.session.reversed;
        let reversed = self.session.reversed;
        self.log(EventKind::ViewReversed { reversed });
    }

    /// Replace the pattern wholesale with a loaded snapshot. The selection
    /// is dropped and the active layer is recomputed from the stroke count
    /// so the alternation invariant holds for the loaded design.
    pub fn restore(&mut self, pattern: Pattern) {
        self.session.selected = None;
        self.session.layer_now = Layer::from_stroke_count(pattern.stroke_count());
        self.log(EventKind::SnapshotRestored {
            points: pattern.live_point_count(),
            strokes: pattern.stroke_count(),
        });
        self.pattern = pattern;
    }

    /// Record the current cursor position (pointer tracker feed)
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.session.set_cursor(x, y);
    }

    /// Forget the cursor position
    pub fn clear_cursor(&mut self) {
        self.session.clear_cursor();
    }

    // ========== Event log ==========

    /// All recorded events
    pub fn events(&self) -> &[EditorEvent] {
        &self.events
    }

    /// Clear the event log
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn log(&mut self, event: EventKind) {
        self.events.push(EditorEvent::new(event));
    }

    fn degree_of(&self, id: PointId) -> Option<u32> {
        self.pattern.point(id).map(|p| p.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_first_click_places_anchor() {
        let mut editor = Editor::new();
        let anchor = editor.connect(10.0, 10.0);

        assert_eq!(anchor, PointId(0));
        assert_eq!(editor.pattern().live_point_count(), 1);
        assert_eq!(editor.pattern().stroke_count(), 0);
        assert_eq!(editor.pattern().point(anchor).unwrap().degree, 0);
        // No stroke was drawn, so the layer stays put
        assert_eq!(editor.session().layer_now(), Layer::Front);
        assert_eq!(editor.last_point(), Some(anchor));
    }

    #[test]
    fn test_connect_creates_one_point_and_one_stroke() {
        let mut editor = Editor::new();
        let a = editor.connect(10.0, 10.0);
        let b = editor.connect(20.0, 10.0);

        assert_eq!(editor.pattern().live_point_count(), 2);
        assert_eq!(editor.pattern().stroke_count(), 1);

        let stroke = editor.pattern().strokes()[0];
        assert_eq!(stroke.u, a);
        assert_eq!(stroke.v, b);
        assert_eq!(stroke.layer, Layer::Front);

        assert_eq!(editor.pattern().point(a).unwrap().degree, 1);
        assert_eq!(editor.pattern().point(b).unwrap().degree, 1);
        assert_eq!(editor.session().layer_now(), Layer::Back);
        assert_eq!(editor.last_point(), Some(b));
    }

    #[test]
    fn test_layer_tracks_stroke_parity() {
        let mut editor = Editor::new();
        for n in 0..6 {
            editor.connect(n as f32 * 10.0, 0.0);
            assert_eq!(
                editor.session().layer_now(),
                Layer::from_stroke_count(editor.pattern().stroke_count())
            );
        }
        // Strokes alternate Front, Back, Front, ...
        for (i, stroke) in editor.pattern().strokes().iter().enumerate() {
            assert_eq!(stroke.layer, Layer::from_stroke_count(i));
        }
    }

    #[test]
    fn test_selected_point_becomes_endpoint() {
        let mut editor = Editor::new();
        let a = editor.connect(0.0, 0.0);
        let b = editor.connect(10.0, 0.0);
        let c = editor.connect(20.0, 0.0);

        editor.select_point(a).unwrap();
        // Click coordinates are ignored while a selection is pending
        let endpoint = editor.connect(99.0, 99.0);

        assert_eq!(endpoint, a);
        assert_eq!(editor.pattern().live_point_count(), 3);
        assert_eq!(editor.pattern().stroke_count(), 3);
        assert_eq!(editor.pattern().point(a).unwrap().degree, 2);
        assert_eq!(editor.pattern().point(b).unwrap().degree, 2);
        assert_eq!(editor.pattern().point(c).unwrap().degree, 2);

        // Selection is consumed by a single connect
        assert_eq!(editor.session().selected(), None);
        let d = editor.connect(30.0, 0.0);
        assert_eq!(d, PointId(3));
    }

    #[test]
    fn test_select_point_rejects_dead_handles() {
        let mut editor = Editor::new();
        editor.connect(0.0, 0.0);

        assert!(editor.select_point(PointId(5)).is_err());

        editor.connect(10.0, 0.0);
        editor.undo(); // tombstones point 1
        assert!(editor.select_point(PointId(1)).is_err());
        assert!(editor.select_point(PointId(0)).is_ok());
    }

    #[test]
    fn test_undo_on_empty_graph_is_noop() {
        let mut editor = Editor::new();
        editor.undo();
        assert!(editor.pattern().is_empty());
        assert_eq!(editor.session().layer_now(), Layer::Front);
        assert!(editor.events().is_empty());
    }

    #[test]
    fn test_undo_first_stroke_returns_to_anchor_state() {
        let mut editor = Editor::new();
        editor.connect(10.0, 10.0);
        editor.connect(20.0, 10.0);

        editor.undo();

        // One anchor point of degree zero, no strokes: not fully empty
        assert_eq!(editor.pattern().live_point_count(), 1);
        assert_eq!(editor.pattern().stroke_count(), 0);
        assert_eq!(editor.pattern().point(PointId(0)).unwrap().degree, 0);
        assert_eq!(editor.session().layer_now(), Layer::Front);
        assert_eq!(editor.last_point(), Some(PointId(0)));

        editor.undo();

        // Second undo clears the anchor too
        assert!(editor.pattern().is_empty());
        assert_eq!(editor.session().layer_now(), Layer::Front);
        assert_matches!(
            editor.events().last().map(|e| &e.event),
            Some(EventKind::AnchorRemoved)
        );
    }

    #[test]
    fn test_undo_tombstones_interior_points() {
        let mut editor = Editor::new();
        editor.connect(0.0, 0.0);
        editor.connect(10.0, 0.0);
        editor.connect(20.0, 0.0);

        editor.undo();

        // Point 2 had degree 1 and is tombstoned; point 1 survives with
        // degree 1 from the remaining stroke
        assert!(!editor.pattern().is_live(PointId(2)));
        assert_eq!(editor.pattern().point(PointId(1)).unwrap().degree, 1);
        assert_eq!(editor.last_point(), Some(PointId(1)));
        assert!(editor.pattern().degrees_consistent());
    }

    #[test]
    fn test_three_connects_two_undos_reach_anchor_state() {
        let mut editor = Editor::new();
        editor.connect(0.0, 0.0);
        editor.connect(10.0, 0.0);
        editor.connect(20.0, 0.0);

        editor.undo();
        editor.undo();

        // Exactly the state after the first connect: the asymmetric
        // tombstone rule fires only at the one-stroke boundary
        assert_eq!(editor.pattern().stroke_count(), 0);
        assert_eq!(editor.pattern().live_point_count(), 1);
        let anchor = editor.pattern().point(PointId(0)).unwrap();
        assert_eq!((anchor.x, anchor.y, anchor.degree), (0.0, 0.0, 0));
        assert_eq!(editor.session().layer_now(), Layer::Front);
    }

    #[test]
    fn test_undo_after_reconnecting_tombstoned_region() {
        let mut editor = Editor::new();
        editor.connect(0.0, 0.0);
        editor.connect(10.0, 0.0);
        editor.undo();

        // Slot 1 stays tombstoned; the next point takes slot 2
        let c = editor.connect(20.0, 0.0);
        assert_eq!(c, PointId(2));
        assert!(!editor.pattern().is_live(PointId(1)));
        assert_eq!(editor.pattern().strokes()[0].u, PointId(0));
        assert_eq!(editor.pattern().strokes()[0].v, PointId(2));
        assert!(editor.pattern().degrees_consistent());
    }

    #[test]
    fn test_undo_drops_selection_of_tombstoned_point() {
        let mut editor = Editor::new();
        editor.connect(0.0, 0.0);
        let b = editor.connect(10.0, 0.0);

        editor.select_point(b).unwrap();
        editor.undo(); // tombstones b

        assert_eq!(editor.session().selected(), None);
    }

    #[test]
    fn test_undo_is_inverse_of_connect_for_degrees() {
        let mut editor = Editor::new();
        for n in 0..5 {
            editor.connect(n as f32 * 7.0, n as f32 * 3.0);
        }
        editor.select_point(PointId(1)).unwrap();
        editor.connect(0.0, 0.0);

        while editor.pattern().stroke_count() > 0 {
            editor.undo();
            assert!(editor.pattern().degrees_consistent());
        }
    }

    #[test]
    fn test_clear_keeps_display_flags() {
        let mut editor = Editor::new();
        editor.connect(0.0, 0.0);
        editor.connect(10.0, 0.0);
        editor.toggle_reversed();
        let layer_before = editor.session().layer_now();

        editor.clear();

        assert!(editor.pattern().is_empty());
        assert_eq!(editor.session().layer_now(), layer_before);
        assert!(editor.session().reversed());
        assert_eq!(editor.session().selected(), None);
    }

    #[test]
    fn test_toggle_reversed() {
        let mut editor = Editor::new();
        assert!(!editor.session().reversed());
        editor.toggle_reversed();
        assert!(editor.session().reversed());
        editor.toggle_reversed();
        assert!(!editor.session().reversed());
    }

    #[test]
    fn test_restore_resets_interaction_state() {
        let mut source = Editor::new();
        source.connect(0.0, 0.0);
        source.connect(10.0, 0.0);
        source.connect(20.0, 0.0);
        let snapshot = source.pattern().clone();

        let mut editor = Editor::new();
        editor.connect(99.0, 99.0);
        editor.select_point(PointId(0)).unwrap();

        editor.restore(snapshot.clone());

        assert_eq!(editor.pattern(), &snapshot);
        assert_eq!(editor.session().selected(), None);
        // Two strokes loaded: the next one goes on the front layer
        assert_eq!(editor.session().layer_now(), Layer::Front);
        assert_matches!(
            editor.events().last().map(|e| &e.event),
            Some(EventKind::SnapshotRestored {
                points: 3,
                strokes: 2
            })
        );
    }

    #[test]
    fn test_event_log_records_mutations() {
        let mut editor = Editor::new();
        editor.connect(0.0, 0.0);
        editor.connect(10.0, 0.0);

        let kinds: Vec<_> = editor.events().iter().map(|e| e.event.clone()).collect();
        assert_eq!(kinds.len(), 3);
        assert_matches!(kinds[0], EventKind::PointPlaced { id: PointId(0), .. });
        assert_matches!(kinds[1], EventKind::PointPlaced { id: PointId(1), .. });
        assert_matches!(
            kinds[2],
            EventKind::StrokeDrawn {
                u: PointId(0),
                v: PointId(1),
                layer: Layer::Front
            }
        );

        editor.clear_events();
        assert!(editor.events().is_empty());
    }
}
