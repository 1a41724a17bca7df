use crate::geometry::primitives::OutlineKind;
use serde::{Deserialize, Serialize};

/// External representation of a [`Sheet`](crate::entities::Sheet)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheet {
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`PlacedOutline`](crate::entities::PlacedOutline)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    /// Index of the outline in the source drawing
    pub item_id: usize,
    pub layer: String,
    pub kind: OutlineKind,
    /// Rotation in degrees about the centre of the outline's bounding box
    pub rotation: f64,
    /// Translation applied after the rotation
    pub translation: (f64, f64),
    /// Final points of the placed outline
    pub points: Vec<(f64, f64)>,
}

/// External representation of a [`NestSolution`](crate::entities::NestSolution)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub sheet: ExtSheet,
    /// Placed outlines in acceptance order
    pub placements: Vec<ExtPlacement>,
    /// Ids of the items that could not be placed
    pub unplaced: Vec<usize>,
    pub cancelled: bool,
    /// Fraction of the sheet covered by bounding boxes of placed outlines
    pub usage: f64,
    /// Fraction of the sheet covered by the enclosed area of placed outlines
    pub density: f64,
    pub n_candidates: u64,
    pub run_time_ms: u64,
}
