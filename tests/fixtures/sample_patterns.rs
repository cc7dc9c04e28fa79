// Helper functions to build editors in various well-known states

use string_art_editor::{Editor, PointId};

/// One anchor hole at (10, 10), no strokes
pub fn anchor_only() -> Editor {
    let mut editor = Editor::new();
    editor.connect(10.0, 10.0);
    editor
}

/// `clicks` connect calls along a horizontal line, 10px apart, starting
/// at (10, 10). The first click places the anchor, so the result has
/// `clicks` holes and `clicks - 1` strokes.
pub fn chain(clicks: usize) -> Editor {
    let mut editor = Editor::new();
    for i in 0..clicks {
        editor.connect(10.0 + i as f32 * 10.0, 10.0);
    }
    editor
}

/// Three holes threaded into a closed triangle: the last stroke re-selects
/// the anchor, so every hole ends with degree 2
pub fn closed_triangle() -> Editor {
    let mut editor = Editor::new();
    let anchor = editor.connect(10.0, 10.0);
    editor.connect(30.0, 10.0);
    editor.connect(20.0, 30.0);
    editor
        .select_point(anchor)
        .expect("anchor is live");
    editor.connect(0.0, 0.0);
    editor
}

/// A pattern whose arena contains a tombstone: two clicks, an undo (which
/// tombstones slot 1), then a third click landing in slot 2
pub fn with_tombstone() -> Editor {
    let mut editor = Editor::new();
    editor.connect(10.0, 10.0);
    editor.connect(20.0, 10.0);
    editor.undo();
    editor.connect(30.0, 10.0);
    assert!(!editor.pattern().is_live(PointId(1)));
    editor
}
