use super::*;

#[test]
fn normalize_clamps_into_canvas_and_is_idempotent() {
    let samples = [
        Point::new(-50.0, -1.0),
        Point::new(0.0, 0.0),
        Point::new(960.0, 540.0),
        Point::new(1920.0, 1080.0),
        Point::new(5000.0, 2000.0),
        Point::new(f64::INFINITY, f64::NEG_INFINITY),
        Point::new(f64::NAN, 300.0),
    ];
    for p in samples {
        let once = normalize_position(p);
        assert_eq!(normalize_position(once), once);
        assert!((0.0..=VIRTUAL_WIDTH).contains(&once.x), "{p:?} -> {once:?}");
        assert!((0.0..=VIRTUAL_HEIGHT).contains(&once.y), "{p:?} -> {once:?}");
    }
    assert_eq!(
        normalize_position(Point::new(5000.0, -3.0)),
        Point::new(1920.0, 0.0)
    );
    assert_eq!(normalize_position(Point::new(f64::NAN, 300.0)), Point::new(0.0, 300.0));
}

#[test]
fn legacy_conversion_hits_center_and_corners() {
    assert_eq!(
        legacy_to_virtual(Some(Point::new(50.0, 50.0))),
        Some(Point::new(960.0, 540.0))
    );
    assert_eq!(
        legacy_to_virtual(Some(Point::new(0.0, 0.0))),
        Some(Point::new(0.0, 0.0))
    );
    assert_eq!(
        legacy_to_virtual(Some(Point::new(100.0, 100.0))),
        Some(Point::new(1920.0, 1080.0))
    );
    assert_eq!(legacy_to_virtual(None), None);
}

#[test]
fn legacy_conversion_does_not_clamp() {
    assert_eq!(
        legacy_to_virtual(Some(Point::new(-10.0, 150.0))),
        Some(Point::new(-192.0, 1620.0))
    );
}

#[test]
fn scale_is_width_over_virtual_width() {
    assert_eq!(compute_scale(1920.0), 1.0);
    assert_eq!(compute_scale(960.0), 0.5);
    assert_eq!(compute_scale(0.0), 0.0);
    assert_eq!(compute_scale(f64::NAN), 0.0);
    assert_eq!(compute_scale(-10.0), 0.0);
}

#[test]
fn size_normalization_rounds_and_enforces_minimum() {
    assert_eq!(normalize_size(12.0, 3.0), (40.0, 40.0));
    assert_eq!(normalize_size(100.4, 200.6), (100.0, 201.0));
    assert_eq!(normalize_size(9000.0, 9000.0), (1920.0, 1080.0));
    assert_eq!(normalize_size(f64::NAN, 50.0), (40.0, 50.0));
}
