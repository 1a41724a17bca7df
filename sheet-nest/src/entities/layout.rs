use crate::collision_detection::OverlapTest;
use crate::entities::{Item, PlacedOutline, Sheet};
use crate::geometry::DTransformation;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Outline, Rect};
use crate::util::assertions;

/// The outlines accepted on a [`Sheet`] so far, in acceptance order.
/// Outlines can only be added, never moved or removed.
#[derive(Clone, Debug)]
pub struct Layout {
    pub sheet: Sheet,
    placed: Vec<PlacedOutline>,
}

impl Layout {
    pub fn new(sheet: Sheet) -> Self {
        Layout {
            sheet,
            placed: vec![],
        }
    }

    /// Places an item on the sheet by applying a transformation to its outline.
    /// Returns a reference to the newly placed outline.
    pub fn place_item(&mut self, item: &Item, d_transf: DTransformation) -> &PlacedOutline {
        self.placed.push(PlacedOutline::new(item, d_transf));

        debug_assert!(assertions::layout_within_sheet(self));
        debug_assert!(assertions::placed_bboxes_up_to_date(self));

        &self.placed[self.placed.len() - 1]
    }

    pub fn placed_outlines(&self) -> &[PlacedOutline] {
        &self.placed
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// True if a candidate with bounding box `bbox` lies entirely within the sheet (boundary included)
    pub fn fits(&self, bbox: &Rect) -> bool {
        self.sheet.bbox().contains_rect(bbox)
    }

    /// Checks whether a candidate overlaps any placed outline according to `test`.
    ///
    /// `shape` produces the candidate's points and is only invoked if `test` is shape-aware
    /// and at least one placed bounding box collides with `bbox`.
    pub fn collides<T: OverlapTest>(
        &self,
        test: &T,
        bbox: &Rect,
        shape: impl FnOnce() -> Outline,
    ) -> bool {
        let mut bbox_hits = self
            .placed
            .iter()
            .filter(|p| p.bbox.collides_with(bbox))
            .peekable();

        match (bbox_hits.peek().is_some(), T::SHAPE_AWARE) {
            (false, _) => false,
            (true, false) => true,
            (true, true) => {
                let candidate = shape();
                bbox_hits.any(|p| test.refine(&candidate, &p.outline))
            }
        }
    }

    /// The sum of the bounding-box areas of all placed outlines
    pub fn placed_bbox_area(&self) -> f64 {
        self.placed.iter().map(|p| p.bbox.area()).sum()
    }

    /// Fraction of the sheet covered by the bounding boxes of the placed outlines
    pub fn usage(&self) -> f64 {
        self.placed_bbox_area() / self.sheet.area()
    }

    /// Fraction of the sheet covered by the enclosed area of the placed outlines
    pub fn density(&self) -> f64 {
        let placed_area = self.placed.iter().map(|p| p.outline.area()).sum::<f64>();
        placed_area / self.sheet.area()
    }
}
