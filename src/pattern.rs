use crate::{Point, PointId, Stroke};
use anyhow::{anyhow, Result};

/// The point/stroke graph of one string-art design.
///
/// Points live in an arena of optional slots: placing a point appends a slot,
/// removing one (only ever via undo) leaves a `None` tombstone behind so that
/// the indices stored in strokes stay valid. The arena is never compacted or
/// reindexed during a session. Strokes are append-only; only the most recent
/// one can be removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    /// Point arena; `None` marks a tombstoned slot
    points: Vec<Option<Point>>,

    /// Strokes in drawing order
    strokes: Vec<Stroke>,
}

impl Pattern {
    /// Create a new empty pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a pattern from raw slot and stroke sequences (deserialization)
    pub(crate) fn from_parts(points: Vec<Option<Point>>, strokes: Vec<Stroke>) -> Self {
        Self { points, strokes }
    }

    // ========== Point arena ==========

    /// Append a point, returning its stable handle
    pub fn push_point(&mut self, point: Point) -> PointId {
        let id = PointId(self.points.len());
        self.points.push(Some(point));
        id
    }

    /// Get a live point by handle
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index()).and_then(Option::as_ref)
    }

    /// Get a mutable reference to a live point
    pub fn point_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.points.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Check whether a handle refers to a live (non-tombstoned) point
    pub fn is_live(&self, id: PointId) -> bool {
        self.point(id).is_some()
    }

    /// Tombstone a slot, keeping its index reserved. Returns the removed
    /// point, or `None` if the slot was missing or already tombstoned.
    pub fn tombstone(&mut self, id: PointId) -> Option<Point> {
        self.points.get_mut(id.index()).and_then(Option::take)
    }

    /// Iterate over live points in arena order
    pub fn live_points(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (PointId(i), p)))
    }

    /// Raw slot sequence, tombstones included (serialization)
    pub fn slots(&self) -> &[Option<Point>] {
        &self.points
    }

    /// Number of slots, tombstones included
    pub fn slot_count(&self) -> usize {
        self.points.len()
    }

    /// Number of live points
    pub fn live_point_count(&self) -> usize {
        self.points.iter().filter(|slot| slot.is_some()).count()
    }

    // ========== Strokes ==========

    /// Append a stroke
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove and return the most recent stroke
    pub fn pop_stroke(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// All strokes in drawing order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    // ========== Derived state ==========

    /// The point the next stroke will originate from: the `v` of the most
    /// recent stroke, else the anchor point if one has been placed, else
    /// `None` for an empty graph.
    pub fn last_point(&self) -> Option<PointId> {
        if let Some(stroke) = self.strokes.last() {
            return Some(stroke.v);
        }
        self.live_points().next().map(|(id, _)| id)
    }

    /// True when the graph holds no slots and no strokes at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.strokes.is_empty()
    }

    /// Discard all points and strokes
    pub fn clear(&mut self) {
        self.points.clear();
        self.strokes.clear();
    }

    // ========== Consistency ==========

    /// Recompute per-slot degrees from the stroke list alone. A self-loop
    /// counts twice, matching how connect/undo book-keep degrees.
    pub fn recomputed_degrees(&self) -> Vec<u32> {
        let mut degrees = vec![0u32; self.points.len()];
        for stroke in &self.strokes {
            if let Some(d) = degrees.get_mut(stroke.u.index()) {
                *d += 1;
            }
            if let Some(d) = degrees.get_mut(stroke.v.index()) {
                *d += 1;
            }
        }
        degrees
    }

    /// Check that every live point's stored degree matches a fresh
    /// recomputation from the stroke list
    pub fn degrees_consistent(&self) -> bool {
        let recomputed = self.recomputed_degrees();
        self.live_points()
            .all(|(id, p)| p.degree == recomputed[id.index()])
    }

    /// Verify that every stroke endpoint references a live slot. The
    /// editor's own operations can never violate this; it guards
    /// externally loaded data.
    pub fn validate_references(&self) -> Result<()> {
        for (i, stroke) in self.strokes.iter().enumerate() {
            for id in [stroke.u, stroke.v] {
                if id.index() >= self.points.len() {
                    return Err(anyhow!(
                        "stroke {} references point {} outside the arena ({} slots)",
                        i,
                        id,
                        self.points.len()
                    ));
                }
                if !self.is_live(id) {
                    return Err(anyhow!("stroke {} references tombstoned point {}", i, id));
                }
            }
        }
        Ok(())
    }
}
