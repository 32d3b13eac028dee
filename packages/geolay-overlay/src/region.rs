use serde::{Deserialize, Serialize};

/// Axis-aligned box in source image pixels, serialised as `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// A single feature reported by the image analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "type")]
    pub category: String,
    pub bbox: BoundingBox,
    pub confidence: f32,
}

/// How an image of a given natural size is currently laid out on screen.
///
/// A zero dimension means the image has not been laid out yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    pub original_width: u32,
    pub original_height: u32,
    pub rendered_width: u32,
    pub rendered_height: u32,
}

impl DisplayGeometry {
    pub fn new(original_width: u32, original_height: u32, rendered_width: u32, rendered_height: u32) -> Self {
        Self {
            original_width,
            original_height,
            rendered_width,
            rendered_height,
        }
    }

    pub fn is_renderable(&self) -> bool {
        self.original_width > 0 && self.original_height > 0 && self.rendered_width > 0 && self.rendered_height > 0
    }

    /// Horizontal and vertical rendered-to-original ratios, `None` until laid out.
    pub fn scale(&self) -> Option<(f64, f64)> {
        if !self.is_renderable() {
            return None;
        }
        Some((
            f64::from(self.rendered_width) / f64::from(self.original_width),
            f64::from(self.rendered_height) / f64::from(self.original_height),
        ))
    }
}

/// On-screen rectangle in rendered pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectedRegion {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl ProjectedRegion {
    pub fn right(&self) -> i64 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.top.saturating_add(self.height)
    }
}
