#[cfg(test)]
mod tests {
    use sheet_nest::entities::{Instance, Item, Layout, NestSolution, Sheet};
    use sheet_nest::geometry::DTransformation;
    use sheet_nest::geometry::primitives::{Outline, OutlineKind, Point};
    use sheet_nest::io::dxf::{Dxf, DxfError, Entity, Line, LwPolyline};
    use sheet_nest::io::export;
    use sheet_nest::io::import::{self, ImportError};
    use std::time::Duration;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn doc(entities: &str) -> String {
        format!("0\nSECTION\n2\nHEADER\n0\nENDSEC\n0\nSECTION\n2\nENTITIES\n{entities}0\nENDSEC\n0\nEOF\n")
    }

    const LINE: &str = "0\nLINE\n8\ncut\n10\n0\n20\n0\n11\n10\n21\n0\n";
    const SQUARE: &str =
        "0\nLWPOLYLINE\n8\n0\n90\n4\n70\n1\n10\n0\n20\n0\n10\n5\n20\n0\n10\n5\n20\n5\n10\n0\n20\n5\n";

    #[test]
    fn import_line_and_polyline() {
        init_logger();
        let instance = import::parse_instance(&doc(&format!("{LINE}{SQUARE}"))).unwrap();
        assert_eq!(instance.n_items(), 2);

        let line = instance.item(0);
        assert_eq!(line.outline.kind(), OutlineKind::OpenSegment);
        assert_eq!(line.outline.points(), &[Point(0.0, 0.0), Point(10.0, 0.0)]);
        assert_eq!(line.layer, "cut");

        let square = instance.item(1);
        assert_eq!(square.outline.kind(), OutlineKind::ClosedPolyline);
        assert_eq!(
            square.outline.points(),
            &[Point(0.0, 0.0), Point(5.0, 0.0), Point(5.0, 5.0), Point(0.0, 5.0)]
        );
        assert_eq!(square.layer, "0");
    }

    #[test]
    fn open_lwpolyline_is_imported_as_closed() {
        let open = "0\nLWPOLYLINE\n90\n3\n70\n0\n10\n0\n20\n0\n10\n5\n20\n0\n10\n5\n20\n5\n";
        let dxf = Dxf::parse_str(&doc(open)).unwrap();
        match &dxf.entities[0] {
            Entity::LwPolyline(pl) => assert_eq!(pl.flags, 0),
            other => panic!("unexpected entity {other:?}"),
        }
        let instance = import::import_instance(&dxf).unwrap();
        assert!(instance.item(0).outline.is_closed());
    }

    #[test]
    fn unsupported_entities_are_skipped() {
        init_logger();
        let circle = "0\nCIRCLE\n8\n0\n10\n5\n20\n5\n40\n2\n";
        let instance = import::parse_instance(&doc(&format!("{circle}{LINE}{circle}{SQUARE}"))).unwrap();
        assert_eq!(instance.n_items(), 2);
        assert_eq!(instance.item(0).id, 0);
        assert_eq!(instance.item(1).id, 1);
        assert_eq!(instance.item(1).outline.kind(), OutlineKind::ClosedPolyline);
    }

    #[test]
    fn empty_entities_section() {
        let instance = import::parse_instance(&doc("")).unwrap();
        assert!(instance.is_empty());
    }

    #[test]
    fn degenerate_polyline_is_rejected() {
        let single = "0\nLWPOLYLINE\n90\n1\n70\n1\n10\n3\n20\n4\n";
        let err = import::parse_instance(&doc(&format!("{LINE}{single}"))).unwrap_err();
        assert!(matches!(
            err,
            ImportError::DegenerateOutline {
                entity_index: 1,
                n_points: 1
            }
        ));
    }

    #[test_case("0\nSECTION\n2\n", "even number of lines"; "odd lines")]
    #[test_case("zero\nSECTION\n", "invalid group code"; "non-integer code")]
    #[test_case("0\nSECTION\n2\nHEADER\n0\nENDSEC\n0\nEOF\n", "missing ENTITIES"; "no entities section")]
    fn malformed_documents(input: &str, message: &str) {
        let err = import::parse_instance(input).unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
        assert!(err.to_string().contains(message), "{err}");
    }

    #[test_case("\n"; "trailing blank line")]
    #[test_case("999\nnot a group\n0\n"; "trailing garbage")]
    #[test_case("0\nSECTION\n2\nENTITIES\n0\nLINE\n"; "second document")]
    fn content_after_eof_is_ignored(trailer: &str) {
        let input = format!("{}{trailer}", doc(&format!("{LINE}{SQUARE}")));
        let instance = import::parse_instance(&input).unwrap();
        assert_eq!(instance.n_items(), 2);
    }

    #[test]
    fn blank_line_after_last_pair_without_eof() {
        let input = format!("0\nSECTION\n2\nENTITIES\n{LINE}0\nENDSEC\n\n");
        let instance = import::parse_instance(&input).unwrap();
        assert_eq!(instance.n_items(), 1);
    }

    #[test]
    fn non_integer_flags_are_rejected() {
        let pl = "0\nLWPOLYLINE\n90\n2\n70\nclosed\n10\n0\n20\n0\n10\n5\n20\n0\n";
        let err = Dxf::parse_str(&doc(pl)).unwrap_err();
        assert!(
            matches!(err, DxfError::InvalidInteger { entity: "LWPOLYLINE", code: 70, .. }),
            "{err}"
        );
    }

    #[test]
    fn vertex_count_must_match_declared_count() {
        let pl = "0\nLWPOLYLINE\n90\n3\n70\n1\n10\n0\n20\n0\n10\n5\n20\n0\n";
        let err = Dxf::parse_str(&doc(pl)).unwrap_err();
        assert!(matches!(
            err,
            DxfError::VertexCountMismatch {
                entity: "LWPOLYLINE",
                declared: 3,
                found: 2
            }
        ));
        let err = import::parse_instance(&doc(pl)).unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)), "{err}");
    }

    #[test_case("0\nLINE\n10\n0\n20\n0\n11\n10\n"; "missing end y")]
    #[test_case("0\nLINE\n10\nabc\n20\n0\n11\n10\n21\n0\n"; "non-numeric start x")]
    #[test_case("0\nLINE\n10\ninf\n20\n0\n11\n10\n21\n0\n"; "infinite start x")]
    #[test_case("0\nLWPOLYLINE\n90\n2\n10\n0\n20\n0\n10\n5\n"; "vertex without y")]
    #[test_case("0\nLWPOLYLINE\n90\n2\n10\n0\n20\nNaN\n10\n5\n20\n1\n"; "nan vertex")]
    fn malformed_entities(entity: &str) {
        let err = import::parse_instance(&doc(entity)).unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)), "{err}");
    }

    #[test]
    fn missing_group_is_reported() {
        let err = Dxf::parse_str(&doc("0\nLINE\n10\n0\n20\n0\n11\n10\n")).unwrap_err();
        assert!(matches!(
            err,
            DxfError::MissingRequiredGroup {
                entity: "LINE",
                code: 21
            }
        ));
    }

    #[test]
    fn write_then_parse_round_trip() {
        let dxf = Dxf {
            entities: vec![
                Entity::Line(Line {
                    layer: "0".into(),
                    start: Point(0.0, 0.0),
                    end: Point(10.0, 0.0),
                }),
                Entity::LwPolyline(LwPolyline {
                    layer: "parts".into(),
                    vertices: vec![
                        Point(0.0, 0.0),
                        Point(5.0, 0.0),
                        Point(5.0, 5.0),
                        Point(0.0, 5.0),
                    ],
                    flags: 1,
                }),
            ],
        };
        let text = dxf.to_dxf_string();
        assert!(text.starts_with("0\nSECTION\n2\nENTITIES\n"));
        assert!(text.ends_with("0\nENDSEC\n0\nEOF\n"));
        assert_eq!(Dxf::parse_str(&text).unwrap(), dxf);
    }

    #[test]
    fn floats_survive_round_trip_exactly() {
        let start = Point(0.1 + 0.2, -1.0 / 3.0);
        let end = Point(1e-7, 123456.789);
        let dxf = Dxf {
            entities: vec![Entity::Line(Line {
                layer: "0".into(),
                start,
                end,
            })],
        };
        let instance = import::parse_instance(&dxf.to_dxf_string()).unwrap();
        assert_eq!(instance.item(0).outline.points(), &[start, end]);
    }

    #[test]
    fn export_writes_original_order_and_layers() {
        let items = vec![
            Item::new(0, Outline::open_segment(Point(0.0, 0.0), Point(10.0, 0.0)), "cut"),
            Item::new(
                1,
                Outline::closed_polyline(vec![
                    Point(0.0, 0.0),
                    Point(5.0, 0.0),
                    Point(5.0, 5.0),
                    Point(0.0, 5.0),
                ])
                .unwrap(),
                "parts",
            ),
            Item::new(2, Outline::open_segment(Point(0.0, 0.0), Point(0.0, 3.0)), "0"),
        ];
        let instance = Instance::new(items);

        //accept the polyline first, leave the last item unplaced
        let mut layout = Layout::new(Sheet::try_new(100.0, 100.0).unwrap());
        layout.place_item(instance.item(1), DTransformation::new(0.0, (0.0, 0.0)));
        layout.place_item(instance.item(0), DTransformation::new(0.0, (0.0, 20.0)));
        let solution = NestSolution {
            layout,
            unplaced: vec![2],
            cancelled: false,
            n_candidates: 2,
            elapsed: Duration::ZERO,
        };

        let dxf = export::export_dxf(&solution, &instance);
        assert_eq!(dxf.entities.len(), 2);
        match &dxf.entities[0] {
            Entity::Line(line) => {
                assert_eq!(line.layer, "cut");
                assert_eq!(line.start, Point(0.0, 20.0));
                assert_eq!(line.end, Point(10.0, 20.0));
            }
            other => panic!("expected the line first, got {other:?}"),
        }
        match &dxf.entities[1] {
            Entity::LwPolyline(pl) => {
                assert_eq!(pl.layer, "parts");
                assert_eq!(pl.flags, 1);
                assert_eq!(pl.vertices.len(), 4);
            }
            other => panic!("expected the polyline second, got {other:?}"),
        }

        let reimported = import::parse_instance(&dxf.to_dxf_string()).unwrap();
        assert_eq!(reimported.n_items(), 2);
        assert_eq!(
            reimported.item(1).outline.points(),
            solution.placed_outlines()[0].outline.points()
        );
    }
}
