//! Command line arguments backing the `geolay` binary.
use clap::{Args as ClapArgs, Parser, Subcommand};
use geolay_overlay::{BoundingBox, DisplayGeometry};
use std::path::PathBuf;

use geolay_rs::{LandCoverFilters, OverlayOptions};

#[derive(Parser, Debug)]
#[command(
  name = "geolay",
  about = "Extract coordinates from text and project detection overlays onto rendered images",
  version
)]
pub struct Args {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Extract a latitude/longitude pair from text
  Extract {
    /// Text to search; read from stdin when omitted
    text: Vec<String>,
  },
  /// Project one bounding box onto a rendered image
  Project {
    /// Bounding box in original image pixels
    #[arg(long, value_name = "X1,Y1,X2,Y2", value_parser = parse_bbox, allow_hyphen_values = true)]
    bbox: BoundingBox,

    #[command(flatten)]
    display: DisplayArgs,
  },
  /// Plan overlays for saved analysis results and emit a JSON report
  Overlay {
    /// Analysis JSON file, or a directory of them
    input: PathBuf,

    #[command(flatten)]
    display: DisplayArgs,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o')]
    output_file_path: Option<PathBuf>,

    /// Mark the plan for translucent heatmap fills
    #[arg(long)]
    heatmap: bool,

    /// Leave out box outlines; labels go with them
    #[arg(long)]
    no_outline: bool,

    /// Leave out feature labels
    #[arg(long)]
    no_labels: bool,

    /// Hide forest cover detections
    #[arg(long)]
    hide_forest: bool,

    /// Hide agricultural land detections
    #[arg(long)]
    hide_agriculture: bool,

    /// Hide bare soil detections
    #[arg(long)]
    hide_bare_soil: bool,

    /// Number of analysis files loaded at once
    #[arg(long, default_value = "4")]
    concurrency: usize,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
  },
}

/// Natural and on-screen size of the image
#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct DisplayArgs {
  /// Natural image size in pixels
  #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_dimensions)]
  pub original: (u32, u32),

  /// Rendered image size in pixels
  #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_dimensions)]
  pub rendered: (u32, u32),
}

impl DisplayArgs {
  pub fn geometry(&self) -> DisplayGeometry {
    DisplayGeometry::new(self.original.0, self.original.1, self.rendered.0, self.rendered.1)
  }
}

impl Commands {
  /// Overlay options implied by the `overlay` flags
  pub fn overlay_options(&self) -> OverlayOptions {
    match self {
      Commands::Overlay {
        heatmap,
        no_outline,
        no_labels,
        hide_forest,
        hide_agriculture,
        hide_bare_soil,
        ..
      } => {
        let filters = LandCoverFilters {
          show_forest_cover: !hide_forest,
          show_agricultural_land: !hide_agriculture,
          show_bare_soil: !hide_bare_soil,
        };
        OverlayOptions {
          show_overlay: !no_outline,
          show_heatmap: *heatmap,
          show_labels: !no_labels,
          land_cover_filters: (filters != LandCoverFilters::default()).then_some(filters),
        }
      }
      _ => OverlayOptions::default(),
    }
  }
}

fn parse_dimensions(s: &str) -> Result<(u32, u32), String> {
  let (width, height) = s
    .split_once(['x', 'X'])
    .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
  let width = width.trim().parse().map_err(|e| format!("invalid width '{}': {}", width, e))?;
  let height = height.trim().parse().map_err(|e| format!("invalid height '{}': {}", height, e))?;
  Ok((width, height))
}

fn parse_bbox(s: &str) -> Result<BoundingBox, String> {
  let values = s
    .split(',')
    .map(|part| part.trim().parse::<f64>().map_err(|e| format!("invalid coordinate '{}': {}", part, e)))
    .collect::<Result<Vec<_>, _>>()?;
  let coords: [f64; 4] = values
    .try_into()
    .map_err(|v: Vec<f64>| format!("expected 4 coordinates, got {}", v.len()))?;
  Ok(BoundingBox::from(coords))
}
