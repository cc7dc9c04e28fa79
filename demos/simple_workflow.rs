/// Example: planning a small string-art design end to end
///
/// This example demonstrates:
/// - Placing the anchor hole and drawing strokes
/// - Re-selecting an existing hole as a stroke endpoint
/// - Undoing back through the anchor-only state
/// - Building the render feed
/// - Saving and loading the design snapshot
use anyhow::Result;
use string_art_editor::*;

fn main() -> Result<()> {
    println!("=== String Art Editor: Simple Workflow Example ===\n");

    // Step 1: place the anchor
    println!("Step 1: Placing the anchor hole...");
    let mut editor = Editor::new();
    let anchor = editor.connect(120.0, 120.0);
    println!("  ✓ Anchor at (120, 120), no strokes yet");

    // Step 2: thread a triangle
    println!("\nStep 2: Threading a triangle...");
    editor.connect(240.0, 120.0);
    editor.connect(180.0, 220.0);
    editor.select_point(anchor)?;
    editor.connect(0.0, 0.0); // coordinates ignored while a hole is selected
    println!(
        "  ✓ {} holes, {} strokes",
        editor.pattern().live_point_count(),
        editor.pattern().stroke_count()
    );
    for (i, stroke) in editor.pattern().strokes().iter().enumerate() {
        println!(
            "    stroke {}: {} → {} on layer {:?}",
            i, stroke.u, stroke.v, stroke.layer
        );
    }

    // Step 3: undo everything, one step at a time
    println!("\nStep 3: Undoing the whole design...");
    while !editor.pattern().is_empty() {
        editor.undo();
        println!(
            "  after undo: {} holes, {} strokes",
            editor.pattern().live_point_count(),
            editor.pattern().stroke_count()
        );
    }

    // Step 4: rebuild and inspect the render feed
    println!("\nStep 4: Rebuilding and rendering...");
    editor.connect(100.0, 100.0);
    editor.connect(200.0, 100.0);
    editor.connect(150.0, 180.0);
    editor.set_cursor(160.0, 140.0);

    let scene = Scene::build(editor.pattern(), editor.session(), &Palette::default());
    println!(
        "  ✓ Scene: {} markers, {} stroke lines, preview: {}",
        scene.points.len(),
        scene.strokes.len(),
        scene.pending.is_some()
    );

    // Step 5: snapshot round trip
    println!("\nStep 5: Saving and reloading...");
    let store_dir = std::env::temp_dir().join("string-art-simple-workflow");
    let store = SnapshotStore::open(&store_dir)?;
    store.save(DESIGN_KEY, editor.pattern())?;

    let mut restored = Editor::new();
    if let Some(pattern) = store.load(DESIGN_KEY)? {
        restored.restore(pattern);
    }
    assert_eq!(restored.pattern(), editor.pattern());
    println!("  ✓ Round trip matches: {}", store_dir.display());

    println!("\n=== Done ({} events logged) ===", editor.events().len());
    Ok(())
}
