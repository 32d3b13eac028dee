//! Batch overlay planning over a file or directory of saved analysis results.
use crate::overlay_planner::{plan_overlay, OverlayOptions, OverlayPlan};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use geolay_overlay::{DetectionInput, DetectionSource, DisplayGeometry, JsonDetectionSource};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use walkdir::WalkDir;

const REPORT_VERSION: &str = "1.0";

/// Options for overlay report generation
#[derive(Debug, Clone)]
pub struct OverlayReportOptions {
    /// An analysis JSON file, or a directory searched recursively for `*.json`
    pub input: PathBuf,
    /// Where to write the report; `None` leaves writing to the caller
    pub output_file_path: Option<PathBuf>,
    pub geometry: DisplayGeometry,
    pub overlay: OverlayOptions,
    /// Maximum number of files to load concurrently
    pub max_concurrent_files: usize,
}

impl Default for OverlayReportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            output_file_path: None,
            geometry: DisplayGeometry::new(0, 0, 0, 0),
            overlay: OverlayOptions::default(),
            max_concurrent_files: 4,
        }
    }
}

/// Overlay for one analysed image
#[derive(Debug, Clone, Serialize)]
pub struct ImageOverlay {
    pub file: String,
    pub filename: Option<String>,
    pub total_detections: usize,
    pub plan: OverlayPlan,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverlayReport {
    pub version: String,
    pub generated_at: String,
    pub geometry: DisplayGeometry,
    pub total_files: usize,
    pub images: Vec<ImageOverlay>,
    pub skipped_files: Vec<SkippedFile>,
}

/// Loads every analysis result under the input path and plans its overlay
pub struct OverlayReportGenerator {
    options: OverlayReportOptions,
    source: Arc<dyn DetectionSource>,
}

impl OverlayReportGenerator {
    pub fn new(options: OverlayReportOptions) -> Self {
        Self::with_source(options, Arc::new(JsonDetectionSource::new()))
    }

    pub fn with_source(options: OverlayReportOptions, source: Arc<dyn DetectionSource>) -> Self {
        Self { options, source }
    }

    /// Lists the analysis files to process, in a stable order
    fn find_analysis_files(&self) -> Result<Vec<PathBuf>> {
        let input = &self.options.input;
        if !input.exists() {
            return Err(anyhow!("Input path does not exist: {}", input.display()));
        }
        if input.is_file() {
            return Ok(vec![input.clone()]);
        }

        let files: Vec<PathBuf> = WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
            .collect();

        info!("Found {} analysis files under {}", files.len(), input.display());
        Ok(files)
    }

    fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.options.input)
            .ok()
            .filter(|relative| !relative.as_os_str().is_empty())
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Builds the report and writes it when an output path is configured
    pub async fn generate_report(&self) -> Result<OverlayReport> {
        let files = self.find_analysis_files()?;
        let semaphore = Arc::new(Semaphore::new(self.options.max_concurrent_files.max(1)));

        let mut tasks = Vec::new();
        for path in &files {
            let semaphore = semaphore.clone();
            let source = self.source.clone();
            let input = DetectionInput::FilePath(path.clone());
            let name = self.display_name(path);

            tasks.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await?;
                debug!("Loading {}", name);
                let result = source.load(&input).await;
                Ok::<_, anyhow::Error>((name, result))
            }));
        }

        let mut images = Vec::new();
        let mut skipped_files = Vec::new();

        for task in tasks {
            let (file, result) = task.await.context("Analysis loading task failed")??;
            match result {
                Ok(analysis) => {
                    let plan = plan_overlay(&analysis.detections, &self.options.geometry, &self.options.overlay);
                    info!(
                        "{}: {} of {} detections drawable, {} suppressed",
                        file,
                        plan.items.len(),
                        analysis.detections.len(),
                        plan.suppressed
                    );
                    images.push(ImageOverlay {
                        file,
                        filename: analysis.filename,
                        total_detections: analysis.detections.len(),
                        plan,
                    });
                }
                Err(e) => {
                    warn!("Skipping {}: {}", file, e);
                    skipped_files.push(SkippedFile {
                        file,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let report = OverlayReport {
            version: REPORT_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            geometry: self.options.geometry,
            total_files: files.len(),
            images,
            skipped_files,
        };

        if let Some(output) = &self.options.output_file_path {
            let json = serde_json::to_string_pretty(&report)?;
            fs::write(output, json)
                .await
                .with_context(|| format!("Failed to write report to {}", output.display()))?;
            info!("Overlay report written to {}", output.display());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOREST: &str = r#"{"filename": "a.png", "status": "completed", "results": [
        {"type": "forest_cover", "bbox": [0, 0, 400, 400], "confidence": 0.9},
        {"type": "homestead", "bbox": [10, 10, 20, 20], "confidence": 0.4}
    ]}"#;

    fn options(input: PathBuf) -> OverlayReportOptions {
        OverlayReportOptions {
            input,
            geometry: DisplayGeometry::new(1000, 1000, 500, 500),
            ..OverlayReportOptions::default()
        }
    }

    #[tokio::test]
    async fn test_directory_report() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), FOREST).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(
            dir.path().join("nested").join("b.json"),
            r#"[{"type": "water_body", "bbox": [100, 100, 300, 300], "confidence": 0.5}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not an analysis").unwrap();

        let report = OverlayReportGenerator::new(options(dir.path().to_path_buf()))
            .generate_report()
            .await
            .unwrap();

        assert_eq!(report.total_files, 2);
        assert_eq!(report.images.len(), 2);
        assert_eq!(report.images[0].file, "a.json");
        assert_eq!(report.images[0].plan.items.len(), 1);
        assert_eq!(report.images[0].plan.suppressed, 1);
        assert_eq!(report.images[1].plan.items[0].category, "water_body");
        assert!(report.skipped_files.is_empty());
    }

    #[tokio::test]
    async fn test_failed_analysis_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), FOREST).unwrap();
        std::fs::write(
            dir.path().join("b.json"),
            r#"{"filename": "b.png", "status": "error", "error": "corrupt image", "results": []}"#,
        )
        .unwrap();

        let report = OverlayReportGenerator::new(options(dir.path().to_path_buf()))
            .generate_report()
            .await
            .unwrap();

        assert_eq!(report.images.len(), 1);
        assert_eq!(report.skipped_files.len(), 1);
        assert_eq!(report.skipped_files[0].file, "b.json");
        assert!(report.skipped_files[0].reason.contains("corrupt image"));
    }

    #[tokio::test]
    async fn test_single_file_written_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.json");
        let output = dir.path().join("report.json");
        std::fs::write(&input, FOREST).unwrap();

        let opts = OverlayReportOptions {
            output_file_path: Some(output.clone()),
            ..options(input)
        };
        let report = OverlayReportGenerator::new(opts).generate_report().await.unwrap();
        assert_eq!(report.images.len(), 1);

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(written["version"], "1.0");
        assert_eq!(written["images"][0]["plan"]["items"][0]["region"]["width"], 200);
    }

    #[tokio::test]
    async fn test_missing_input_is_an_error() {
        let result = OverlayReportGenerator::new(options(PathBuf::from("/nonexistent/analyses")))
            .generate_report()
            .await;
        assert!(result.is_err());
    }
}
