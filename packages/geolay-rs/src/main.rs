mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Commands};
use geolay_rs::{classify_projection, extract_geo_point, OverlayReportGenerator, OverlayReportOptions};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
  let args = Args::parse();

  let default_level = match &args.command {
    Commands::Overlay { quiet: true, .. } => "warn",
    Commands::Overlay { .. } => "info",
    _ => "warn",
  };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

  if let Err(e) = run(args).await {
    eprintln!("Error: {:#}", e);
    std::process::exit(1);
  }
}

async fn run(args: Args) -> Result<()> {
  let overlay = args.command.overlay_options();

  match args.command {
    Commands::Version => {
      println!("geolay {}", env!("CARGO_PKG_VERSION"));
    }
    Commands::Extract { text } => {
      let text = if text.is_empty() {
        let mut buffer = String::new();
        tokio::io::stdin()
          .read_to_string(&mut buffer)
          .await
          .context("Failed to read text from stdin")?;
        buffer
      } else {
        text.join(" ")
      };

      let point = extract_geo_point(text.as_str());
      if point.is_none() {
        log::info!("No coordinates found in input");
      }
      println!("{}", serde_json::to_string(&point)?);
    }
    Commands::Project { bbox, display } => {
      let projection = classify_projection(&bbox, &display.geometry());
      println!("{}", serde_json::to_string(&projection)?);
    }
    Commands::Overlay {
      input,
      display,
      output_file_path,
      concurrency,
      ..
    } => {
      let to_stdout = output_file_path.is_none();
      let options = OverlayReportOptions {
        input,
        output_file_path,
        geometry: display.geometry(),
        overlay,
        max_concurrent_files: concurrency,
      };

      let report = OverlayReportGenerator::new(options).generate_report().await?;
      if to_stdout {
        println!("{}", serde_json::to_string_pretty(&report)?);
      }
    }
  }

  Ok(())
}
