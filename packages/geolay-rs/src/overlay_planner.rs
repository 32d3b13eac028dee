//! Turns a detection set into the list of boxes and labels to draw over an image.
//!
//! Projection itself lives in `geolay_overlay`; this layer adds the presentation
//! choices made on top of it: category filters, styles, label placement and the legend.
use crate::feature_catalog::{feature_style, legend_entries, FeatureStyle};
use geolay_overlay::{project_detection, Detection, DisplayGeometry, ProjectedRegion};
use serde::Serialize;

/// Labels sit this far above their box...
const LABEL_OFFSET: i64 = 30;
/// ...but never closer to the top edge than this.
const LABEL_MIN_TOP: i64 = 2;

/// Toggles for the land-cover categories. Every other category is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandCoverFilters {
    pub show_forest_cover: bool,
    pub show_agricultural_land: bool,
    pub show_bare_soil: bool,
}

impl Default for LandCoverFilters {
    fn default() -> Self {
        Self {
            show_forest_cover: true,
            show_agricultural_land: true,
            show_bare_soil: true,
        }
    }
}

impl LandCoverFilters {
    pub fn allows(&self, category: &str) -> bool {
        match category {
            "forest_cover" => self.show_forest_cover,
            "agricultural_land" => self.show_agricultural_land,
            "bare_soil" => self.show_bare_soil,
            _ => true,
        }
    }
}

/// What the overlay layer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayOptions {
    pub show_overlay: bool,
    pub show_heatmap: bool,
    pub show_labels: bool,
    pub land_cover_filters: Option<LandCoverFilters>,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            show_overlay: true,
            show_heatmap: false,
            show_labels: true,
            land_cover_filters: None,
        }
    }
}

/// A detection that made it onto the screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayItem {
    /// Position in the input detection list
    pub index: usize,
    pub category: String,
    pub style: FeatureStyle,
    pub region: ProjectedRegion,
    pub confidence_percent: u32,
    /// `None` unless outlines and labels are both on
    pub label_top: Option<i64>,
}

impl OverlayItem {
    pub fn label_text(&self) -> String {
        format!("{} {} ({}%)", self.style.icon, self.style.label, self.confidence_percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayPlan {
    /// False while the image has no layout; nothing is drawn until it does
    pub renderable: bool,
    /// Draw a bordered box for each item
    pub outline: bool,
    /// Draw a translucent fill for each item
    pub heatmap: bool,
    pub items: Vec<OverlayItem>,
    pub legend: Vec<FeatureStyle>,
    /// Projected below the minimum visible size
    pub suppressed: usize,
    /// Hidden by the land-cover filters
    pub filtered_out: usize,
}

impl OverlayPlan {
    fn empty(renderable: bool, options: &OverlayOptions) -> Self {
        Self {
            renderable,
            outline: options.show_overlay,
            heatmap: options.show_heatmap,
            items: Vec::new(),
            legend: Vec::new(),
            suppressed: 0,
            filtered_out: 0,
        }
    }
}

/// Builds the overlay for `detections` on an image displayed at `geometry`.
///
/// Pure; call again whenever the detections or the layout change.
pub fn plan_overlay(detections: &[Detection], geometry: &DisplayGeometry, options: &OverlayOptions) -> OverlayPlan {
    let renderable = geometry.is_renderable();
    let mut plan = OverlayPlan::empty(renderable, options);
    if (!options.show_overlay && !options.show_heatmap) || detections.is_empty() || !renderable {
        return plan;
    }

    let filters = options.land_cover_filters.unwrap_or_default();
    let visible: Vec<(usize, &Detection)> = detections
        .iter()
        .enumerate()
        .filter(|(_, d)| filters.allows(&d.category))
        .collect();
    plan.filtered_out = detections.len() - visible.len();

    let show_labels = options.show_overlay && options.show_labels;
    for (index, detection) in &visible {
        // renderable was checked above, so `None` here means suppressed
        let Some(region) = project_detection(&detection.bbox, geometry) else {
            plan.suppressed += 1;
            continue;
        };
        plan.items.push(OverlayItem {
            index: *index,
            category: detection.category.clone(),
            style: feature_style(&detection.category),
            region,
            confidence_percent: confidence_percent(detection.confidence),
            label_top: show_labels.then(|| region.top.saturating_sub(LABEL_OFFSET).max(LABEL_MIN_TOP)),
        });
    }

    let shown: Vec<Detection> = visible.into_iter().map(|(_, d)| d.clone()).collect();
    plan.legend = legend_entries(&shown);
    plan
}

fn confidence_percent(confidence: f32) -> u32 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u32
}
