use eframe::egui;
use string_art_editor::StringArtApp;

fn main() -> eframe::Result<()> {
    let store_dir = std::env::current_dir()
        .map(|dir| dir.join("string-art-design"))
        .unwrap_or_else(|_| "string-art-design".into());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("String Art Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "String Art Editor",
        options,
        Box::new(|_cc| Ok(Box::new(StringArtApp::with_saved_design(store_dir)))),
    )
}
