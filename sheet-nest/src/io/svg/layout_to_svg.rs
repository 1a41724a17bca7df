use crate::entities::{Instance, Layout};
use crate::geometry::geo_traits::Shape;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

pub fn layout_to_svg(
    layout: &Layout,
    instance: &Instance,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let sheet_bbox = layout.sheet.bbox();
    let vbox = sheet_bbox.scale(1.10);
    let theme = &options.theme;

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f64::min(sheet_bbox.width(), sheet_bbox.height()) * 0.025;

    let label = {
        //print some information above the left top of the sheet
        let label_content = format!(
            "width: {:.3} | height: {:.3} | placed: {}/{} | usage: {:.3}% | {}",
            sheet_bbox.width(),
            sheet_bbox.height(),
            layout.placed_outlines().len(),
            instance.n_items(),
            layout.usage() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", sheet_bbox.x_min)
            .set("y", sheet_bbox.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", "sheet")
        .add(svg_util::data_to_path(
            svg_util::aa_rect_data(sheet_bbox),
            &[
                ("fill", &*format!("{}", theme.sheet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "sheet, width: {:.3}, height: {:.3}",
            sheet_bbox.width(),
            sheet_bbox.height()
        )));

    let mut items_group = Group::new().set("id", "items");
    let mut bbox_group = Group::new().set("id", "bounding_boxes");

    for po in layout.placed_outlines() {
        let item = instance.item(po.item_id);
        let style = match po.outline.is_closed() {
            true => vec![
                ("fill", format!("{}", theme.item_fill)),
                ("fill-opacity", "0.5".to_string()),
                ("stroke", "black".to_string()),
                ("stroke-width", format!("{stroke_width}")),
            ],
            false => vec![
                ("fill", "none".to_string()),
                ("stroke", format!("{}", theme.segment_stroke)),
                ("stroke-width", format!("{}", 2.0 * stroke_width)),
                ("stroke-linecap", "round".to_string()),
            ],
        };
        let style = style.iter().map(|(k, v)| (*k, v.as_str())).collect::<Vec<_>>();
        let title = Title::new(format!(
            "item, id: {}, layer: {}, {}, transf: [{}]",
            po.item_id,
            item.layer,
            po.outline.kind(),
            po.d_transf
        ));

        let mut item_group = Group::new()
            .set("id", format!("item_{}", po.item_id))
            .add(svg_util::data_to_path(svg_util::outline_data(&po.outline), &style))
            .add(title);

        if options.item_ids {
            let centroid = po.bbox.centroid();
            item_group = item_group.add(
                Text::new(format!("{}", po.item_id))
                    .set("x", centroid.0)
                    .set("y", centroid.1)
                    .set("font-size", 0.5 * font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
        items_group = items_group.add(item_group);

        if options.bounding_boxes {
            bbox_group = bbox_group.add(svg_util::data_to_path(
                svg_util::aa_rect_data(po.bbox),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.bbox_stroke)),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    ("stroke-opacity", "0.6"),
                    (
                        "stroke-dasharray",
                        &*format!("{} {}", 1.0 * stroke_width, 2.0 * stroke_width),
                    ),
                ],
            ));
        }
    }

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(sheet_group)
        .add(items_group)
        .add(bbox_group)
        .add(label)
}
