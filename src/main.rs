use string_art_editor::{Editor, Layer, Palette, PointId, Scene, SnapshotStore, DESIGN_KEY};

fn main() -> anyhow::Result<()> {
    println!("String Art Editor - Core Walkthrough");
    println!("====================================\n");

    // Thread a small pattern: anchor, two strokes, one back through the anchor
    let mut editor = Editor::new();
    editor.connect(100.0, 100.0);
    println!("✓ Placed anchor hole");
    println!("  Holes: {}", editor.pattern().live_point_count());

    editor.connect(200.0, 100.0);
    editor.connect(150.0, 200.0);
    editor.select_point(PointId(0))?;
    editor.connect(0.0, 0.0); // coordinates ignored: the anchor is selected

    println!("\n✓ Drew three strokes, closing back on the anchor");
    println!("  Holes: {}", editor.pattern().live_point_count());
    println!("  Strokes: {}", editor.pattern().stroke_count());
    println!(
        "  Next stroke goes on the {} layer",
        match editor.session().layer_now() {
            Layer::Front => "front",
            Layer::Back => "back",
        }
    );

    // One step of undo and back
    editor.undo();
    println!("\n✓ Undid the last stroke");
    println!("  Strokes: {}", editor.pattern().stroke_count());
    editor.select_point(PointId(0))?;
    editor.connect(0.0, 0.0);

    // The render feed the GUI draws from
    editor.set_cursor(170.0, 140.0);
    let scene = Scene::build(editor.pattern(), editor.session(), &Palette::default());
    println!("\n📊 Render feed:");
    println!("  └─ Markers: {}", scene.points.len());
    println!("  └─ Stroke lines: {}", scene.strokes.len());
    println!("  └─ Pending preview: {}", scene.pending.is_some());

    // Snapshot round trip
    let store_dir = std::env::temp_dir().join("string-art-walkthrough");
    let store = SnapshotStore::open(&store_dir)?;
    store.save(DESIGN_KEY, editor.pattern())?;
    let loaded = store
        .load(DESIGN_KEY)?
        .expect("the design was just saved");
    assert_eq!(&loaded, editor.pattern());

    println!("\n✓ Saved and reloaded the design from {}", store_dir.display());
    println!("  Events logged: {}", editor.events().len());

    println!("\nRun the `gui` binary for the interactive editor.\n");
    Ok(())
}
