use crate::{
    render::{Palette, Scene},
    Editor, Layer, SnapshotStore, DESIGN_KEY,
};
use egui::{vec2, Color32, Sense};
use std::path::PathBuf;

/// Hit-test radius for hole markers (pixels)
const HOLE_RADIUS: f32 = 6.0;

/// Main application state
pub struct StringArtApp {
    /// The graph editor core
    editor: Editor,

    /// Stroke colors per layer
    palette: Palette,

    /// Directory the design snapshot is stored in
    store_dir: PathBuf,

    /// Status message (also the save/load confirmation)
    status_message: String,

    /// UI state
    ui_state: UiState,
}

#[derive(Default)]
struct UiState {
    /// Show the alignment crosshair at the cursor
    show_alignment: bool,

    /// Hide hole markers (View menu toggle)
    hide_holes: bool,

    /// Alt is held this frame; hides hole markers while pressed
    alt_held: bool,
}

impl StringArtApp {
    pub fn new(store_dir: PathBuf) -> Self {
        Self {
            editor: Editor::new(),
            palette: Palette::default(),
            store_dir,
            status_message: "Click the canvas to place the first hole.".to_string(),
            ui_state: UiState::default(),
        }
    }

    /// Create the app with a previously saved design already loaded,
    /// starting empty when there is none
    pub fn with_saved_design(store_dir: PathBuf) -> Self {
        let mut app = Self::new(store_dir);
        app.load_design();
        app
    }

    /// Save the current design under the fixed snapshot key
    fn save_design(&mut self) {
        let result = SnapshotStore::open(&self.store_dir)
            .and_then(|store| store.save(DESIGN_KEY, self.editor.pattern()));
        match result {
            Ok(()) => self.status_message = "✓ Design saved".to_string(),
            Err(e) => self.status_message = format!("❌ Save failed: {}", e),
        }
    }

    /// Load the saved design, leaving the current one untouched when there
    /// is nothing usable on disk
    fn load_design(&mut self) {
        let result =
            SnapshotStore::open(&self.store_dir).and_then(|store| store.load(DESIGN_KEY));
        match result {
            Ok(Some(pattern)) => {
                let points = pattern.live_point_count();
                let strokes = pattern.stroke_count();
                self.editor.restore(pattern);
                self.status_message =
                    format!("✓ Loaded design: {} holes, {} strokes", points, strokes);
            }
            Ok(None) => {
                self.status_message = "No saved design found".to_string();
            }
            Err(e) => self.status_message = format!("❌ Load failed: {}", e),
        }
    }

    /// Dispatch a click at workspace-relative coordinates. A click on a
    /// hole marker selects that hole as the next endpoint; any other click
    /// connects at the cursor. The two are mutually exclusive.
    fn handle_click(&mut self, x: f32, y: f32) {
        let hit = self
            .editor
            .pattern()
            .live_points()
            .find(|(_, p)| p.distance_sq(x, y) <= HOLE_RADIUS * HOLE_RADIUS)
            .map(|(id, _)| id);

        if let Some(id) = hit {
            if self.editor.select_point(id).is_ok() {
                self.editor.connect(x, y);
                return;
            }
        }
        self.editor.connect(x, y);
    }

    /// Handle Ctrl+Z / Ctrl+S / Ctrl+L and the Alt hole-hiding modifier
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, save, load, alt) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::Z),
                i.modifiers.ctrl && i.key_pressed(egui::Key::S),
                i.modifiers.ctrl && i.key_pressed(egui::Key::L),
                i.modifiers.alt,
            )
        });

        self.ui_state.alt_held = alt;
        if undo {
            self.editor.undo();
        }
        if save {
            self.save_design();
        }
        if load {
            self.load_design();
        }
    }

    /// Render the entire UI
    fn render_ui(&mut self, ctx: &egui::Context) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save").clicked() {
                        self.save_design();
                        ui.close_menu();
                    }
                    if ui.button("Load").clicked() {
                        self.load_design();
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.ui_state.show_alignment, "Alignment Guides");
                    ui.checkbox(&mut self.ui_state.hide_holes, "Hide Holes");
                });

                ui.menu_button("Help", |ui| {
                    ui.label("Click the canvas to place holes and draw strokes");
                    ui.label("Click a hole to thread back through it");
                    ui.label("Ctrl+Z undo, Ctrl+S save, Ctrl+L load");
                    ui.label("Hold Alt to hide the holes");
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("↩ Undo").clicked() {
                    self.editor.undo();
                }
                if ui.button("🗑 Clear").clicked() {
                    self.editor.clear();
                    self.status_message = "Design cleared".to_string();
                }
                ui.separator();

                if ui.button("⇄ Flip View").clicked() {
                    self.editor.toggle_reversed();
                }
                let side = if self.editor.session().reversed() {
                    "Back side"
                } else {
                    "Front side"
                };
                ui.label(side);

                ui.separator();
                ui.label(format!("Holes: {}", self.editor.pattern().live_point_count()));
                ui.label(format!("Strokes: {}", self.editor.pattern().stroke_count()));
                let next_layer = match self.editor.session().layer_now() {
                    Layer::Front => "front",
                    Layer::Back => "back",
                };
                ui.label(format!("Next stroke: {}", next_layer));
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        // Central panel (canvas)
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_canvas(ui);
        });
    }

    /// Render the workspace canvas with holes, strokes and the preview
    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let canvas_rect = response.rect;
        let origin = canvas_rect.min;

        painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(250));

        // The pointer tracker feed: viewport position resolved to
        // workspace-relative coordinates before the core sees it
        if let Some(pos) = response.hover_pos() {
            self.editor.set_cursor(pos.x - origin.x, pos.y - origin.y);
        } else {
            self.editor.clear_cursor();
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.handle_click(pos.x - origin.x, pos.y - origin.y);
            }
        }

        let scene = Scene::build(self.editor.pattern(), self.editor.session(), &self.palette);

        for line in &scene.strokes {
            painter.line_segment(
                [
                    origin + vec2(line.x1, line.y1),
                    origin + vec2(line.x2, line.y2),
                ],
                egui::Stroke::new(2.0, line.color),
            );
        }

        if let Some(pending) = &scene.pending {
            painter.line_segment(
                [
                    origin + vec2(pending.x1, pending.y1),
                    origin + vec2(pending.x2, pending.y2),
                ],
                egui::Stroke::new(2.0, pending.color),
            );
        }

        let hide_holes = self.ui_state.hide_holes || self.ui_state.alt_held;
        if !hide_holes {
            let selected = self.editor.session().selected();
            for marker in &scene.points {
                let center = origin + vec2(marker.x, marker.y);
                painter.circle_filled(center, HOLE_RADIUS * 0.5, Color32::from_gray(90));
                painter.circle_stroke(
                    center,
                    HOLE_RADIUS,
                    egui::Stroke::new(1.0, Color32::from_gray(160)),
                );
                if selected == Some(marker.id) {
                    painter.circle_stroke(
                        center,
                        HOLE_RADIUS + 2.0,
                        egui::Stroke::new(1.5, Color32::from_rgb(0x2a, 0x6f, 0xdb)),
                    );
                }
            }
        }

        if self.ui_state.show_alignment {
            if let Some((cx, cy)) = self.editor.session().cursor() {
                let guide = egui::Stroke::new(1.0, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.line_segment(
                    [
                        egui::pos2(canvas_rect.left(), origin.y + cy),
                        egui::pos2(canvas_rect.right(), origin.y + cy),
                    ],
                    guide,
                );
                painter.line_segment(
                    [
                        egui::pos2(origin.x + cx, canvas_rect.top()),
                        egui::pos2(origin.x + cx, canvas_rect.bottom()),
                    ],
                    guide,
                );
            }
        }
    }
}

impl eframe::App for StringArtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.render_ui(ctx);
    }
}
