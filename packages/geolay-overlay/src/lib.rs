pub mod projector;
pub mod region;
pub mod source;

pub use projector::{classify_projection, project_all, project_detection, Projection, MIN_VISIBLE_SIZE};
pub use region::{BoundingBox, Detection, DisplayGeometry, ProjectedRegion};
pub use source::{AnalysisResult, DetectionInput, DetectionSource, JsonDetectionSource, OverlayError};
