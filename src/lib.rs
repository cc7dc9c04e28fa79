// String Art Editor - Core Library

pub mod editor;
pub mod event;
pub mod pattern;
pub mod point;
pub mod render;
pub mod serialization;
pub mod session;
pub mod stroke;
pub mod ui;

// Re-export main types for convenience
pub use editor::Editor;
pub use event::{EditorEvent, EventKind};
pub use pattern::Pattern;
pub use point::{Point, PointId};
pub use render::{Palette, PointMarker, Scene, StrokeLine};
pub use serialization::{Manifest, PatternBlob, SnapshotStore, DESIGN_KEY};
pub use session::Session;
pub use stroke::{Layer, Stroke};
pub use ui::StringArtApp;
