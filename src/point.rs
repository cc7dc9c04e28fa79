use serde::{Deserialize, Serialize};

/// Stable handle into the point arena.
///
/// Handles are plain slot indices. Slots are append-only and never compacted,
/// so a handle stays valid for the whole session even after other points are
/// removed; a removed point leaves a tombstone behind instead of shifting
/// indices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PointId(pub usize);

impl PointId {
    /// Slot index of this handle
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user-placed anchor point (a "hole" in the board)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// Workspace-relative position (pixels)
    pub x: f32,
    pub y: f32,

    /// Number of live stroke endpoints referencing this point
    pub degree: u32,
}

impl Point {
    /// Create a new point with the given position and degree
    pub fn new(x: f32, y: f32, degree: u32) -> Self {
        Self { x, y, degree }
    }

    /// Squared distance to an arbitrary position (used for marker hit tests)
    pub fn distance_sq(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}
