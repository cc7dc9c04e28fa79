use crate::{Layer, PointId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An editor event with timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorEvent {
    pub timestamp: DateTime<Utc>,
    pub event: EventKind,
}

impl EditorEvent {
    /// Create a new event with the current timestamp
    pub fn new(event: EventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }

    /// Create a new event with a specific timestamp
    pub fn with_timestamp(timestamp: DateTime<Utc>, event: EventKind) -> Self {
        Self { timestamp, event }
    }
}

/// Types of events the editor records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EventKind {
    /// A point was placed (the anchor, or a fresh stroke endpoint)
    PointPlaced { id: PointId, x: f32, y: f32 },

    /// A stroke was drawn
    StrokeDrawn {
        u: PointId,
        v: PointId,
        layer: Layer,
    },

    /// The most recent stroke was undone
    StrokeUndone {
        u: PointId,
        v: PointId,
        layer: Layer,
    },

    /// A point's slot was tombstoned because its degree reached zero
    PointRemoved { id: PointId },

    /// Undo in the anchor-only state wiped the lone point
    AnchorRemoved,

    /// All points and strokes were discarded
    Cleared,

    /// The display layer mapping was flipped
    ViewReversed { reversed: bool },

    /// A loaded snapshot replaced the pattern wholesale
    SnapshotRestored { points: usize, strokes: usize },
}
