use itertools::Itertools;
use ordered_float::OrderedFloat;
use sheet_nest::entities::Instance;
use std::cmp::Reverse;

/// Order in which the items are attempted: descending by the area of the bounding box of the unrotated outline.
/// Items with equal area keep their input order.
pub fn item_placement_order(instance: &Instance) -> Vec<usize> {
    instance
        .items()
        .iter()
        .map(|item| item.id)
        .sorted_by_cached_key(|&id| Reverse(OrderedFloat(instance.item(id).bbox_area())))
        .collect_vec()
}
