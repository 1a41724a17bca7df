use crate::entities::{Instance, NestSolution, PlacedOutline};
use crate::geometry::primitives::OutlineKind;
use crate::io::dxf::{Dxf, Entity, Line, LwPolyline};
use crate::io::ext_repr::{ExtPlacement, ExtSheet, ExtSolution};
use itertools::Itertools;

/// Builds a drawing from the placed outlines of a [`NestSolution`].
///
/// Outlines are emitted in the original input order (ascending item id), each on the layer of its source entity.
/// Items that were not placed are absent from the drawing.
pub fn export_dxf(solution: &NestSolution, instance: &Instance) -> Dxf {
    let entities = solution
        .placed_outlines()
        .iter()
        .sorted_by_key(|p| p.item_id)
        .map(|p| export_entity(p, &instance.item(p.item_id).layer))
        .collect_vec();

    Dxf { entities }
}

pub fn export_entity(placed: &PlacedOutline, layer: &str) -> Entity {
    let points = placed.outline.points();
    match placed.outline.kind() {
        OutlineKind::OpenSegment => Entity::Line(Line {
            layer: layer.to_string(),
            start: points[0],
            end: points[1],
        }),
        OutlineKind::ClosedPolyline => Entity::LwPolyline(LwPolyline {
            layer: layer.to_string(),
            vertices: points.to_vec(),
            flags: 1,
        }),
    }
}

/// Composes the serializable summary of a [`NestSolution`]
pub fn export_solution(solution: &NestSolution, instance: &Instance) -> ExtSolution {
    let placements = solution
        .placed_outlines()
        .iter()
        .map(|p| {
            let (dx, dy) = p.d_transf.translation();
            ExtPlacement {
                item_id: p.item_id,
                layer: instance.item(p.item_id).layer.clone(),
                kind: p.outline.kind(),
                rotation: p.d_transf.rotation(),
                translation: (dx, dy),
                points: p.outline.points().iter().map(|&pt| pt.into()).collect(),
            }
        })
        .collect_vec();

    ExtSolution {
        sheet: ExtSheet {
            width: solution.layout.sheet.width(),
            height: solution.layout.sheet.height(),
        },
        placements,
        unplaced: solution.unplaced.clone(),
        cancelled: solution.cancelled,
        usage: solution.usage(),
        density: solution.layout.density(),
        n_candidates: solution.n_candidates,
        run_time_ms: solution.elapsed.as_millis() as u64,
    }
}
