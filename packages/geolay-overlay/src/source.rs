use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::Detection;

#[derive(Debug, Clone)]
pub enum DetectionInput {
    FilePath(PathBuf),
    Bytes(Vec<u8>),
}

/// Analysis response for one uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(rename = "results", default)]
    pub detections: Vec<Detection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_status() -> String {
    "completed".to_string()
}

impl AnalysisResult {
    pub fn from_detections(detections: Vec<Detection>) -> Self {
        Self {
            filename: None,
            status: default_status(),
            detections,
            error: None,
        }
    }
}

/// Either the full response object or just its `results` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalysisPayload {
    Response(AnalysisResult),
    Detections(Vec<Detection>),
}

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}

#[async_trait]
pub trait DetectionSource: Send + Sync {
    async fn load(&self, input: &DetectionInput) -> Result<AnalysisResult, OverlayError>;
}

/// Reads analysis results serialised as JSON.
pub struct JsonDetectionSource;

impl JsonDetectionSource {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(data: &[u8]) -> Result<AnalysisResult, OverlayError> {
        let payload: AnalysisPayload =
            serde_json::from_slice(data).map_err(|e| OverlayError::InvalidInput(e.to_string()))?;

        let result = match payload {
            AnalysisPayload::Response(result) => result,
            AnalysisPayload::Detections(detections) => AnalysisResult::from_detections(detections),
        };

        if result.status == "error" {
            let message = result.error.unwrap_or_else(|| "no error message".to_string());
            return Err(OverlayError::AnalysisFailed(message));
        }
        Ok(result)
    }
}

impl Default for JsonDetectionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DetectionSource for JsonDetectionSource {
    async fn load(&self, input: &DetectionInput) -> Result<AnalysisResult, OverlayError> {
        match input {
            DetectionInput::FilePath(path) => {
                let data = tokio::fs::read(path).await.map_err(|source| OverlayError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::parse(&data)
            }
            DetectionInput::Bytes(data) => Self::parse(data),
        }
    }
}
