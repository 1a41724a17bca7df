use crate::entities::{Layout, PlacedOutline};
use std::time::Duration;

/// Outcome of a nesting run
#[derive(Clone, Debug)]
pub struct NestSolution {
    /// Accepted outlines in acceptance order, together with the sheet
    pub layout: Layout,
    /// Ids of the items for which no feasible placement was found (or that were never attempted due to cancellation)
    pub unplaced: Vec<usize>,
    /// True if the run was interrupted before every item was attempted
    pub cancelled: bool,
    /// Total number of candidate positions evaluated
    pub n_candidates: u64,
    pub elapsed: Duration,
}

impl NestSolution {
    pub fn placed_outlines(&self) -> &[PlacedOutline] {
        self.layout.placed_outlines()
    }

    pub fn usage(&self) -> f64 {
        self.layout.usage()
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty() && !self.cancelled
    }
}
