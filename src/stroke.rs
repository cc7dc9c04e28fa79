use crate::PointId;
use serde::{Deserialize, Serialize};

/// One of the two logical drawing surfaces of the board.
///
/// The layer alternates automatically with each stroke: the front and the
/// back of the board are threaded in turn. On the wire it is the plain
/// integer `0`/`1` the snapshot blob contract requires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "u8", try_from = "u8")]
pub enum Layer {
    Front = 0,
    Back = 1,
}

impl Layer {
    /// The opposite layer
    pub fn flipped(self) -> Self {
        match self {
            Layer::Front => Layer::Back,
            Layer::Back => Layer::Front,
        }
    }

    /// Palette index of this layer
    pub fn index(self) -> usize {
        self as usize
    }

    /// Layer of the next stroke after `count` strokes have been drawn
    /// from an empty graph
    pub fn from_stroke_count(count: usize) -> Self {
        if count % 2 == 0 {
            Layer::Front
        } else {
            Layer::Back
        }
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> u8 {
        layer as u8
    }
}

impl TryFrom<u8> for Layer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Layer::Front),
            1 => Ok(Layer::Back),
            other => Err(format!("invalid layer value: {}", other)),
        }
    }
}

/// A thread segment connecting two points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Stroke {
    /// Point the stroke originates from (the previously-last point)
    pub u: PointId,

    /// Point the stroke terminates at (newly placed or re-selected)
    pub v: PointId,

    /// Layer the stroke was drawn on
    pub layer: Layer,
}

impl Stroke {
    /// Create a new stroke
    pub fn new(u: PointId, v: PointId, layer: Layer) -> Self {
        Self { u, v, layer }
    }

    /// Check if this stroke references a given point
    pub fn involves(&self, id: PointId) -> bool {
        self.u == id || self.v == id
    }

    /// Number of endpoint references to a given point (2 for a self-loop)
    pub fn endpoint_count(&self, id: PointId) -> u32 {
        (self.u == id) as u32 + (self.v == id) as u32
    }
}
