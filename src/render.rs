use crate::{Layer, Pattern, PointId, Session};
use egui::Color32;

/// Two-entry stroke palette: one color per layer.
///
/// The front layer renders semi-transparent and the back layer opaque so
/// that threads on the far side of the board read as darker. The reversed
/// view swaps the two without touching any stroke data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub colors: [Color32; 2],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                Color32::from_rgba_unmultiplied(0x44, 0x44, 0x44, 0x44),
                Color32::from_rgb(0x44, 0x44, 0x44),
            ],
        }
    }
}

impl Palette {
    /// Color a stroke on `layer` renders with under the given view flag
    pub fn stroke_color(&self, layer: Layer, reversed: bool) -> Color32 {
        let index = if reversed {
            1 - layer.index()
        } else {
            layer.index()
        };
        self.colors[index]
    }
}

/// A live point marker, ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    pub id: PointId,
    pub x: f32,
    pub y: f32,
}

/// A stroke resolved to endpoint coordinates and a concrete color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: Color32,
}

/// Everything the renderer needs for one frame, derived from the pattern
/// and the session. Building a scene never mutates either.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Live point markers in arena order, tombstones skipped
    pub points: Vec<PointMarker>,

    /// Strokes in drawing order
    pub strokes: Vec<StrokeLine>,

    /// Preview stroke from the last point to the cursor; present only while
    /// the graph is non-empty and a cursor position is known
    pub pending: Option<StrokeLine>,
}

impl Scene {
    /// Derive a scene from the current editor state
    pub fn build(pattern: &Pattern, session: &Session, palette: &Palette) -> Self {
        let points = pattern
            .live_points()
            .map(|(id, p)| PointMarker { id, x: p.x, y: p.y })
            .collect();

        let strokes = pattern
            .strokes()
            .iter()
            .filter_map(|stroke| {
                let u = pattern.point(stroke.u)?;
                let v = pattern.point(stroke.v)?;
                Some(StrokeLine {
                    x1: u.x,
                    y1: u.y,
                    x2: v.x,
                    y2: v.y,
                    color: palette.stroke_color(stroke.layer, session.reversed()),
                })
            })
            .collect();

        let pending = match (pattern.last_point(), session.cursor()) {
            (Some(last), Some((cx, cy))) => pattern.point(last).map(|p| StrokeLine {
                x1: p.x,
                y1: p.y,
                x2: cx,
                y2: cy,
                color: palette.stroke_color(session.layer_now(), session.reversed()),
            }),
            _ => None,
        };

        Self {
            points,
            strokes,
            pending,
        }
    }
}
