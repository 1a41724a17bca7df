use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Outline;

/// Outline to be placed on the sheet, as imported from the drawing. Never mutated after import.
#[derive(Clone, Debug)]
pub struct Item {
    /// Index of the outline in the source drawing
    pub id: usize,
    pub outline: Outline,
    /// Layer of the source entity, written back on export
    pub layer: String,
}

impl Item {
    pub fn new(id: usize, outline: Outline, layer: impl Into<String>) -> Self {
        Item {
            id,
            outline,
            layer: layer.into(),
        }
    }

    /// Area of the bounding box of the unrotated outline
    pub fn bbox_area(&self) -> f64 {
        self.outline.bbox().area()
    }
}
