use anyhow::Result;
use geolay_rs::prelude::*;
use geolay_rs::JsonDetectionSource;

fn main() -> Result<()> {
    // A typical analysis response for a 1024x768 satellite tile
    let analysis = JsonDetectionSource::parse(
        br#"{"filename": "tile.png", "status": "completed", "results": [
            {"type": "forest_cover", "bbox": [40, 60, 420, 380], "confidence": 0.91},
            {"type": "water_body", "bbox": [600, 120, 880, 300], "confidence": 0.77},
            {"type": "homestead", "bbox": [700, 500, 712, 514], "confidence": 0.64}
        ]}"#,
    )?;

    if let Some(point) = extract_geo_point("Tile centre: 21.1458° N, 79.0882° E") {
        println!("Tile centre: {}", point);
    }
    println!();

    // Replay a few layout changes, as a window resize would
    for (width, height) in [(1024, 768), (640, 480), (256, 192)] {
        let geometry = DisplayGeometry::new(1024, 768, width, height);
        let plan = plan_overlay(&analysis.detections, &geometry, &OverlayOptions::default());

        println!("Rendered at {}x{}:", width, height);
        println!("{}", "=".repeat(40));
        for item in &plan.items {
            println!(
                "  {} at ({}, {}) size {}x{}",
                item.label_text(),
                item.region.left,
                item.region.top,
                item.region.width,
                item.region.height
            );
        }
        println!("  {} suppressed", plan.suppressed);
        println!();
    }

    Ok(())
}
