#[cfg(test)]
mod tests {
    use sheet_nest::geometry::convex_hull::convex_hull_from_points;
    use sheet_nest::geometry::geo_traits::{CollidesWith, Shape};
    use sheet_nest::geometry::primitives::{Outline, OutlineKind, Point, Rect};
    use sheet_nest::geometry::{DTransformation, rotate_point};
    use sheet_nest::util::FPA;
    use test_case::test_case;

    fn square(x: f64, y: f64, size: f64) -> Outline {
        Outline::closed_polyline(vec![
            Point(x, y),
            Point(x + size, y),
            Point(x + size, y + size),
            Point(x, y + size),
        ])
        .unwrap()
    }

    fn triangle() -> Outline {
        Outline::closed_polyline(vec![Point(0.0, 0.0), Point(10.0, 0.0), Point(0.0, 10.0)]).unwrap()
    }

    #[test]
    fn rotate_point_quarter_turn() {
        let (x, y) = rotate_point(2.0, 1.0, 90.0, 1.0, 1.0);
        assert_eq!(FPA(x), FPA(1.0));
        assert_eq!(FPA(y), FPA(2.0));
    }

    #[test]
    fn closed_polyline_requires_two_points() {
        assert!(Outline::closed_polyline(vec![Point(1.0, 1.0)]).is_err());
        assert!(Outline::closed_polyline(vec![]).is_err());
        assert!(Outline::closed_polyline(vec![Point(0.0, 0.0), Point(1.0, 1.0)]).is_ok());
    }

    #[test]
    fn open_segment_requires_exactly_two_points() {
        let three = vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)];
        assert!(Outline::try_new(OutlineKind::OpenSegment, three).is_err());
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let points = vec![Point(0.0, 0.0), Point(f64::NAN, 1.0)];
        assert!(Outline::closed_polyline(points).is_err());
    }

    #[test]
    fn bbox_of_outline() {
        let outline = Outline::closed_polyline(vec![
            Point(3.0, -1.0),
            Point(7.0, 2.0),
            Point(-2.0, 5.0),
        ])
        .unwrap();
        let bbox = outline.bbox();
        assert_eq!(bbox, Rect::try_new(-2.0, -1.0, 7.0, 5.0).unwrap());
        assert_eq!(outline.centroid(), Point(2.5, 2.0));
    }

    #[test]
    fn bbox_of_horizontal_segment_is_degenerate() {
        let segment = Outline::open_segment(Point(0.0, 0.0), Point(10.0, 0.0));
        let bbox = segment.bbox();
        assert_eq!(bbox.height(), 0.0);
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(segment.area(), 0.0);
    }

    #[test]
    fn edges_include_closing_edge() {
        let sq = square(0.0, 0.0, 1.0);
        assert_eq!(sq.edges().count(), 4);
        assert_eq!(sq.edges().last(), Some((Point(0.0, 1.0), Point(0.0, 0.0))));

        let segment = Outline::open_segment(Point(0.0, 0.0), Point(1.0, 0.0));
        assert_eq!(segment.edges().count(), 1);
    }

    #[test]
    fn shoelace_area() {
        assert_eq!(FPA(square(3.0, 4.0, 10.0).area()), FPA(100.0));
        assert_eq!(FPA(triangle().area()), FPA(50.0));
    }

    #[test_case(square(0.0, 0.0, 10.0); "square")]
    #[test_case(triangle(); "triangle")]
    #[test_case(Outline::open_segment(Point(0.1, 0.7), Point(3.3, -2.9)); "segment")]
    fn rotate_zero_is_identity(outline: Outline) {
        assert!(outline.rotate(0.0).almost_eq(&outline));
    }

    #[test_case(37.0; "37 degrees")]
    #[test_case(90.0; "90 degrees")]
    #[test_case(181.0; "181 degrees")]
    fn rotate_and_back_restores_square(angle: f64) {
        let sq = square(0.0, 0.0, 10.0);
        let restored = sq.rotate(angle).rotate(-angle);
        assert!(restored.almost_eq(&sq));
    }

    #[test]
    fn rotating_back_about_moved_centre_does_not_restore() {
        let tri = triangle();
        let rotated = tri.rotate(45.0);

        //the bounding-box centre moves under rotation
        let centre_before = tri.bbox().centroid();
        let centre_after = rotated.bbox().centroid();
        assert_ne!(FPA(centre_before.1), FPA(centre_after.1));

        assert!(!rotated.rotate(-45.0).almost_eq(&tri));
        assert!(rotated.rotate_about(-45.0, centre_before).almost_eq(&tri));
    }

    #[test]
    fn rotation_preserves_point_order_and_count() {
        let tri = triangle();
        let rotated = tri.rotate(90.0);
        assert_eq!(rotated.n_points(), 3);
        assert_eq!(rotated.kind(), OutlineKind::ClosedPolyline);
        //(0,0) -> (10,0) for a quarter turn about (5,5)
        assert_eq!(FPA(rotated.points()[0].0), FPA(10.0));
        assert_eq!(FPA(rotated.points()[0].1), FPA(0.0));
    }

    #[test]
    fn translated_bbox_matches_shifted_bbox() {
        let rotated = triangle().rotate(33.0);
        let (dx, dy) = (120.0 - rotated.bbox().x_min, 70.0 - rotated.bbox().y_min);
        let translated = rotated.translate(dx, dy);
        assert_eq!(translated.bbox(), rotated.bbox().translate((dx, dy)));
    }

    #[test]
    fn transform_is_rotate_then_translate() {
        let tri = triangle();
        let dt = DTransformation::new(30.0, (5.0, -2.0));
        assert_eq!(tri.transform(&dt), tri.rotate(30.0).translate(5.0, -2.0));
    }

    #[test]
    fn touching_rects_collide() {
        let a = Rect::try_new(0.0, 0.0, 100.0, 100.0).unwrap();
        let b = Rect::try_new(0.0, 100.0, 100.0, 200.0).unwrap();
        let c = Rect::try_new(0.0, 110.0, 100.0, 210.0).unwrap();
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
        assert!(!a.collides_with(&c));
        let corner = Rect::try_new(100.0, 100.0, 150.0, 150.0).unwrap();
        assert!(a.collides_with(&corner));
    }

    #[test]
    fn rect_containment_is_inclusive() {
        let sheet = Rect::try_new(0.0, 0.0, 1000.0, 1000.0).unwrap();
        assert!(sheet.contains_rect(&sheet));
        assert!(sheet.contains_rect(&Rect::try_new(900.0, 900.0, 1000.0, 1000.0).unwrap()));
        assert!(!sheet.contains_rect(&Rect::try_new(901.0, 0.0, 1001.0, 100.0).unwrap()));
        assert!(Rect::try_new(1.0, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn convex_hull_drops_interior_points() {
        let points = vec![
            Point(0.0, 0.0),
            Point(2.0, 1.0),
            Point(4.0, 0.0),
            Point(4.0, 4.0),
            Point(1.0, 2.0),
            Point(0.0, 4.0),
        ];
        let hull = convex_hull_from_points(points);
        assert_eq!(hull.len(), 4);
        for corner in [Point(0.0, 0.0), Point(4.0, 0.0), Point(4.0, 4.0), Point(0.0, 4.0)] {
            assert!(hull.contains(&corner));
        }
    }
}
