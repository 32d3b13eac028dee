//! # geolay-rs
//!
//! Small, pure building blocks for map and imagery dashboards: finding a coordinate pair in
//! free-form text, and placing detection overlays on an image that is displayed at a size
//! other than its natural one.
//!
//! ## Features
//!
//! - **Coordinate Extraction**: Decimal pairs (`28.6139, 77.2090`), direction suffixes
//!   (`11.2342° N, 78.8807° E`) and direction prefixes (`N 11.2342, E 78.8807`)
//! - **Overlay Projection**: Scale detection boxes from natural to rendered pixels, dropping
//!   boxes too small to read (re-exported from `geolay-overlay`)
//! - **Overlay Planning**: Category styles, land-cover filters, label placement and legends
//! - **Batch Reports**: Plan overlays for a directory of saved analysis results
//!
//! ## Quick Start
//!
//! ```
//! use geolay_rs::prelude::*;
//!
//! let point = extract_geo_point("11.2342° S, 78.8807° W").unwrap();
//! assert_eq!(point.latitude, -11.2342);
//!
//! let geometry = DisplayGeometry::new(1000, 1000, 500, 500);
//! let region = project_detection(&BoundingBox::new(100.0, 100.0, 200.0, 200.0), &geometry).unwrap();
//! assert_eq!((region.left, region.width), (50, 50));
//! ```

pub mod coordinate_extractor;
pub mod feature_catalog;
pub mod overlay_planner;
pub mod overlay_report;

// Re-export commonly used types at the root level
pub use coordinate_extractor::{extract_geo_point, GeoPoint};
pub use feature_catalog::{feature_style, legend_entries, FeatureStyle, UNKNOWN_FEATURE};
pub use geolay_overlay::{
    classify_projection, project_all, project_detection, AnalysisResult, BoundingBox, Detection, DetectionInput,
    DetectionSource, DisplayGeometry, JsonDetectionSource, OverlayError, ProjectedRegion, Projection, MIN_VISIBLE_SIZE,
};
pub use overlay_planner::{plan_overlay, LandCoverFilters, OverlayItem, OverlayOptions, OverlayPlan};
pub use overlay_report::{ImageOverlay, OverlayReport, OverlayReportGenerator, OverlayReportOptions, SkippedFile};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```
/// use geolay_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        classify_projection, extract_geo_point, feature_style, legend_entries, plan_overlay, project_all,
        project_detection, BoundingBox, Detection, DisplayGeometry, FeatureStyle, GeoPoint, LandCoverFilters,
        OverlayItem, OverlayOptions, OverlayPlan, OverlayReport, OverlayReportGenerator, OverlayReportOptions,
        ProjectedRegion, Projection,
    };
}
