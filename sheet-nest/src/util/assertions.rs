use crate::entities::{Item, Layout};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

pub fn instance_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

/// Every placed outline lies within the sheet, boundary included
pub fn layout_within_sheet(layout: &Layout) -> bool {
    let sheet_bbox = layout.sheet.bbox();
    for p in layout.placed_outlines() {
        if !sheet_bbox.contains_rect(&p.bbox) {
            error!(
                "item {} placed outside the sheet: {:?} not in {:?}",
                p.item_id, p.bbox, sheet_bbox
            );
            return false;
        }
    }
    true
}

/// No two placed outlines have colliding bounding boxes (touching counts as colliding)
pub fn no_pairwise_bbox_overlap(layout: &Layout) -> bool {
    for (a, b) in layout.placed_outlines().iter().tuple_combinations() {
        if a.bbox.collides_with(&b.bbox) {
            error!(
                "bounding boxes of items {} and {} overlap: {:?}, {:?}",
                a.item_id, b.item_id, a.bbox, b.bbox
            );
            return false;
        }
    }
    true
}

/// The stored bounding box of every placed outline matches the one of its points
pub fn placed_bboxes_up_to_date(layout: &Layout) -> bool {
    layout
        .placed_outlines()
        .iter()
        .all(|p| p.bbox == p.outline.bbox())
}
