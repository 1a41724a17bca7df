use sheet_nest::collision_detection::OverlapTest;
use sheet_nest::entities::{Item, Layout};
use sheet_nest::geometry::DTransformation;
use sheet_nest::geometry::geo_traits::Shape;
use sheet_nest::geometry::primitives::Outline;
use log::{debug, trace};

/// Result of evaluating one rotation angle
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchStep {
    /// A feasible placement, the search is over
    Found(DTransformation),
    /// No feasible candidate for this angle, more angles remain
    Pending,
    /// All angles have been evaluated without finding a feasible candidate
    Exhausted,
}

/// Resumable brute-force search for the first feasible placement of a single item.
///
/// Candidates are enumerated by rotation (`0, s, 2s, ...` while below 360 degrees), then by x, then by y on a grid
/// with spacing `t` anchored at the sheet origin. The first candidate that lies within the sheet
/// and does not overlap any placed outline is accepted.
/// Every call to [`PlacementSearch::step`] evaluates all grid positions of a single rotation.
#[derive(Clone, Debug)]
pub struct PlacementSearch {
    pub item_id: usize,
    outline: Outline,
    rotation_step: f64,
    translation_step: f64,
    next_rotation: u64,
}

impl PlacementSearch {
    pub fn new(item: &Item, rotation_step: f64, translation_step: f64) -> Self {
        debug_assert!(rotation_step > 0.0 && translation_step > 0.0);
        Self {
            item_id: item.id,
            outline: item.outline.clone(),
            rotation_step,
            translation_step,
            next_rotation: 0,
        }
    }

    /// The rotation that will be evaluated by the next call to [`PlacementSearch::step`], if any remain
    pub fn next_rotation(&self) -> Option<f64> {
        let angle = self.next_rotation as f64 * self.rotation_step;
        (angle < 360.0).then_some(angle)
    }

    /// Evaluates all grid positions for the next rotation.
    /// `candidate_counter` is incremented for every position tested.
    pub fn step(
        &mut self,
        layout: &Layout,
        overlap_test: &impl OverlapTest,
        candidate_counter: &mut u64,
    ) -> SearchStep {
        let Some(angle) = self.next_rotation() else {
            return SearchStep::Exhausted;
        };
        self.next_rotation += 1;

        //always rotate the original outline, rotations do not compose
        let rotated = self.outline.rotate(angle);
        let r_bbox = rotated.bbox();
        let x_max = layout.sheet.width() - r_bbox.width();
        let y_max = layout.sheet.height() - r_bbox.height();

        for x in grid(self.translation_step, x_max) {
            for y in grid(self.translation_step, y_max) {
                *candidate_counter += 1;
                let (dx, dy) = (x - r_bbox.x_min, y - r_bbox.y_min);
                //shifting the box is exact, the points are only translated when needed
                let bbox = r_bbox.translate((dx, dy));
                if !layout.fits(&bbox) {
                    trace!("[SEARCH] item {} at r: {angle}, ({x}, {y}) exceeds sheet", self.item_id);
                    continue;
                }
                if !layout.collides(overlap_test, &bbox, || rotated.translate(dx, dy)) {
                    let d_transf = DTransformation::new(angle, (dx, dy));
                    debug!("[SEARCH] item {}: feasible candidate [{d_transf}]", self.item_id);
                    return SearchStep::Found(d_transf);
                }
            }
        }

        match self.next_rotation() {
            Some(_) => SearchStep::Pending,
            None => SearchStep::Exhausted,
        }
    }
}

/// Runs a [`PlacementSearch`] to completion.
/// Returns the transformation of the first feasible candidate, `None` if the item cannot be placed.
pub fn search(
    item: &Item,
    layout: &Layout,
    overlap_test: &impl OverlapTest,
    rotation_step: f64,
    translation_step: f64,
    candidate_counter: &mut u64,
) -> Option<DTransformation> {
    let mut search = PlacementSearch::new(item, rotation_step, translation_step);
    loop {
        match search.step(layout, overlap_test, candidate_counter) {
            SearchStep::Found(d_transf) => return Some(d_transf),
            SearchStep::Pending => continue,
            SearchStep::Exhausted => return None,
        }
    }
}

/// `0, step, 2 * step, ...` up to and including `max`. Empty if `max` is negative.
fn grid(step: f64, max: f64) -> impl Iterator<Item = f64> {
    (0u64..)
        .map(move |i| i as f64 * step)
        .take_while(move |&v| v <= max)
}
