use crate::entities::{Instance, Item};
use crate::geometry::primitives::Outline;
use crate::io::dxf::{Dxf, DxfError, Entity};
use log::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("malformed input: {0}")]
    Malformed(#[from] DxfError),
    #[error("degenerate outline: entity {entity_index} has {n_points} point(s), at least 2 are required")]
    DegenerateOutline { entity_index: usize, n_points: usize },
    #[error("invalid outline for entity {entity_index}: {reason}")]
    InvalidOutline { entity_index: usize, reason: String },
}

/// Converts the entities of a drawing into an [`Instance`].
///
/// Every `LINE` becomes an open segment and every `LWPOLYLINE` a closed polyline, regardless of its closed flag.
/// Other entity kinds are skipped. Item ids follow the order of the outlines in the drawing.
pub fn import_instance(dxf: &Dxf) -> Result<Instance, ImportError> {
    let mut items = vec![];
    for (entity_index, entity) in dxf.entities.iter().enumerate() {
        let id = items.len();
        match import_item(id, entity_index, entity)? {
            Some(item) => items.push(item),
            None => debug!("[IMPORT] skipping entity {entity_index}: {entity:?}"),
        }
    }
    info!(
        "[IMPORT] {} outlines imported from {} entities",
        items.len(),
        dxf.entities.len()
    );
    Ok(Instance::new(items))
}

/// Parses DXF text and converts it into an [`Instance`]
pub fn parse_instance(dxf_text: &str) -> Result<Instance, ImportError> {
    let dxf = Dxf::parse_str(dxf_text)?;
    import_instance(&dxf)
}

/// Returns `None` for entity kinds that do not describe an outline
pub fn import_item(
    id: usize,
    entity_index: usize,
    entity: &Entity,
) -> Result<Option<Item>, ImportError> {
    match entity {
        Entity::Line(line) => {
            let outline = Outline::open_segment(line.start, line.end);
            Ok(Some(Item::new(id, outline, line.layer.as_str())))
        }
        Entity::LwPolyline(pl) => {
            if pl.vertices.len() < 2 {
                return Err(ImportError::DegenerateOutline {
                    entity_index,
                    n_points: pl.vertices.len(),
                });
            }
            let outline = Outline::closed_polyline(pl.vertices.clone()).map_err(|e| {
                ImportError::InvalidOutline {
                    entity_index,
                    reason: e.to_string(),
                }
            })?;
            Ok(Some(Item::new(id, outline, pl.layer.as_str())))
        }
        Entity::Unsupported(_) => Ok(None),
    }
}
