use crate::entities::Item;
use crate::geometry::DTransformation;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Outline, Rect};

/// An [`Item`] that has been accepted on the sheet. Immutable once created.
#[derive(Clone, Debug)]
pub struct PlacedOutline {
    pub item_id: usize,
    /// Rotation about the bounding-box centre of the item's outline, followed by a translation
    pub d_transf: DTransformation,
    /// The item's outline after applying `d_transf`
    pub outline: Outline,
    /// Bounding box of `outline`, stored since the points never change
    pub bbox: Rect,
}

impl PlacedOutline {
    pub fn new(item: &Item, d_transf: DTransformation) -> Self {
        let outline = item.outline.transform(&d_transf);
        let bbox = outline.bbox();
        PlacedOutline {
            item_id: item.id,
            d_transf,
            outline,
            bbox,
        }
    }
}
