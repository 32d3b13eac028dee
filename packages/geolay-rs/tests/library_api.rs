//! Integration tests for the geolay-rs library API

#[test]
fn test_prelude_imports() {
    use geolay_rs::prelude::*;

    let point = extract_geo_point("28.6139, 77.2090").unwrap();
    assert_eq!(point.latitude, 28.6139);
    assert_eq!(point.longitude, 77.2090);

    let geometry = DisplayGeometry::new(1000, 1000, 500, 500);
    let region = project_detection(&BoundingBox::new(100.0, 100.0, 200.0, 200.0), &geometry);
    assert_eq!(
        region,
        Some(ProjectedRegion {
            left: 50,
            top: 50,
            width: 50,
            height: 50
        })
    );
}

#[test]
fn test_decimal_pairs_round_trip() {
    use geolay_rs::extract_geo_point;

    for (lat, lng) in [(0.5, 0.25), (-89.999, 179.5), (12.0001, -0.75), (45.123456, 100.654321)] {
        let text = format!("{}, {}", lat, lng);
        let point = extract_geo_point(text.as_str()).unwrap();
        assert_eq!((point.latitude, point.longitude), (lat, lng), "input: {}", text);
    }
}

#[test]
fn test_absent_text() {
    use geolay_rs::extract_geo_point;

    let missing: Option<&str> = None;
    assert!(extract_geo_point(missing).is_none());
    assert!(extract_geo_point(Some("")).is_none());
}

#[test]
fn test_suppressed_projection() {
    use geolay_rs::{classify_projection, BoundingBox, DisplayGeometry, Projection};

    let geometry = DisplayGeometry::new(1000, 1000, 500, 500);
    let projection = classify_projection(&BoundingBox::new(100.0, 100.0, 110.0, 110.0), &geometry);
    assert_eq!(projection, Projection::Suppressed);
}

#[test]
fn test_plan_from_parsed_analysis() {
    use geolay_rs::{plan_overlay, DisplayGeometry, JsonDetectionSource, OverlayOptions};

    let analysis = JsonDetectionSource::parse(
        br#"{"status": "completed", "results": [
            {"type": "water_body", "bbox": [0, 0, 300, 300], "confidence": 0.42},
            {"type": "mystery", "bbox": [300, 300, 600, 600], "confidence": 1.0}
        ]}"#,
    )
    .unwrap();

    let plan = plan_overlay(&analysis.detections, &DisplayGeometry::new(600, 600, 300, 300), &OverlayOptions::default());
    assert_eq!(plan.items.len(), 2);
    assert_eq!(plan.items[0].label_text(), "💧 Water Body (42%)");
    assert_eq!(plan.items[1].style.label, "Unknown");
    assert_eq!(plan.legend.len(), 2);
}

#[test]
fn test_module_paths_are_public() {
    use geolay_rs::coordinate_extractor::GeoPoint;
    use geolay_rs::feature_catalog::feature_style;

    let p = GeoPoint {
        latitude: 1.5,
        longitude: 2.5,
    };
    assert_eq!(p.to_string(), "1.5, 2.5");
    assert_eq!(feature_style("homestead").label, "Homestead");
}
