//! Display styles for detection categories and the legend built from them.
use geolay_overlay::Detection;
use serde::Serialize;
use std::collections::BTreeSet;

/// How a detection category is presented on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureStyle {
    pub icon: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

/// Style used for categories missing from [`FEATURE_STYLES`]
pub const UNKNOWN_FEATURE: FeatureStyle = FeatureStyle {
    icon: "📍",
    color: "#F44336",
    label: "Unknown",
};

/// Known detection categories and their styles
const FEATURE_STYLES: &[(&str, FeatureStyle)] = &[
    ("water_body", FeatureStyle { icon: "💧", color: "#2196F3", label: "Water Body" }),
    ("forest_cover", FeatureStyle { icon: "🌲", color: "#4CAF50", label: "Forest" }),
    ("agricultural_land", FeatureStyle { icon: "🌾", color: "#8BC34A", label: "Agriculture" }),
    ("homestead", FeatureStyle { icon: "🏠", color: "#FF5722", label: "Homestead" }),
    ("urban_area", FeatureStyle { icon: "🏙️", color: "#9E9E9E", label: "Urban Area" }),
    ("bare_soil", FeatureStyle { icon: "🟫", color: "#795548", label: "Bare Soil" }),
    ("road", FeatureStyle { icon: "🛣️", color: "#607D8B", label: "Road" }),
    ("road_infrastructure", FeatureStyle { icon: "🛣️", color: "#607D8B", label: "Roads" }),
    ("building_infrastructure", FeatureStyle { icon: "🏢", color: "#FF9800", label: "Buildings" }),
];

/// Looks up the style for a category, falling back to [`UNKNOWN_FEATURE`]
pub fn feature_style(category: &str) -> FeatureStyle {
    FEATURE_STYLES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, style)| *style)
        .unwrap_or(UNKNOWN_FEATURE)
}

/// One legend row per distinct style among `detections`, sorted by label
pub fn legend_entries(detections: &[Detection]) -> Vec<FeatureStyle> {
    let categories: BTreeSet<&str> = detections.iter().map(|d| d.category.as_str()).collect();

    let mut entries: Vec<FeatureStyle> = categories.into_iter().map(feature_style).collect();
    entries.sort_by(|a, b| a.label.cmp(b.label));
    // several unrecognised categories all collapse into one "Unknown" row
    entries.dedup_by(|a, b| a.label == b.label);
    entries
}
