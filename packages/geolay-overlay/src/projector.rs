//! Maps detection boxes from natural image pixels into rendered pixels.
//!
//! Every corner is scaled and rounded on its own (`f64::round`, ties away from
//! zero) before width and height are taken, so boxes that share an edge in the
//! source image still share it on screen.

use serde::{Deserialize, Serialize};

use crate::region::{BoundingBox, Detection, DisplayGeometry, ProjectedRegion};

/// Regions narrower or shorter than this many rendered pixels are not drawn.
pub const MIN_VISIBLE_SIZE: i64 = 15;

/// Scaled corners must stay within this many pixels of the origin.
///
/// Keeps every derived value (widths, right/bottom edges, label offsets) far
/// inside `i64`.
const MAX_CORNER: f64 = i32::MAX as f64;

/// Outcome of projecting one bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Projection {
    Drawable(ProjectedRegion),
    /// Below [`MIN_VISIBLE_SIZE`] in either dimension, or too far off-screen to place.
    Suppressed,
    /// The image has no layout yet; try again on the next layout pass.
    NotRenderable,
}

impl Projection {
    pub fn region(self) -> Option<ProjectedRegion> {
        match self {
            Projection::Drawable(region) => Some(region),
            Projection::Suppressed | Projection::NotRenderable => None,
        }
    }
}

/// Projects `bbox` and reports why nothing should be drawn when that is the case.
pub fn classify_projection(bbox: &BoundingBox, geometry: &DisplayGeometry) -> Projection {
    let Some((scale_x, scale_y)) = geometry.scale() else {
        return Projection::NotRenderable;
    };
    if !bbox.is_finite() {
        return Projection::Suppressed;
    }

    let corners = (
        scale_corner(bbox.x1, scale_x),
        scale_corner(bbox.y1, scale_y),
        scale_corner(bbox.x2, scale_x),
        scale_corner(bbox.y2, scale_y),
    );
    let (Some(left), Some(top), Some(right), Some(bottom)) = corners else {
        return Projection::Suppressed;
    };

    let width = right - left;
    let height = bottom - top;
    if width < MIN_VISIBLE_SIZE || height < MIN_VISIBLE_SIZE {
        return Projection::Suppressed;
    }

    Projection::Drawable(ProjectedRegion {
        left,
        top,
        width,
        height,
    })
}

/// Drawable region for `bbox`, or `None` when it is suppressed or not yet renderable.
pub fn project_detection(bbox: &BoundingBox, geometry: &DisplayGeometry) -> Option<ProjectedRegion> {
    classify_projection(bbox, geometry).region()
}

/// Projects each detection independently, returning the drawable ones with their input index.
pub fn project_all(detections: &[Detection], geometry: &DisplayGeometry) -> Vec<(usize, ProjectedRegion)> {
    detections
        .iter()
        .enumerate()
        .filter_map(|(index, detection)| project_detection(&detection.bbox, geometry).map(|region| (index, region)))
        .collect()
}

/// Scaled and rounded corner, `None` when it lies outside [`MAX_CORNER`].
fn scale_corner(value: f64, scale: f64) -> Option<i64> {
    let scaled = (value * scale).round();
    (scaled.abs() <= MAX_CORNER).then_some(scaled as i64)
}
