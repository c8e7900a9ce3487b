use edge_detector::edges::{detect_edges_timed, threshold_magnitude};
use edge_detector::image::io::{load_grayscale_image, save_mask_png, write_json_file};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeMapConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub edge: EdgeParamsConfig,
    pub output: EdgeMapOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EdgeParamsConfig {
    /// Low hysteresis threshold in linear intensity units; the high
    /// threshold is fixed at three times this value.
    pub low_threshold: f32,
    /// Use Sobel gradients for the threshold mask instead of raw central
    /// differences. The hysteresis pipeline always uses Sobel.
    pub denoise: bool,
}

impl Default for EdgeParamsConfig {
    fn default() -> Self {
        Self {
            low_threshold: 15.0,
            denoise: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EdgeMapOutputConfig {
    #[serde(rename = "threshold_image")]
    pub threshold_image: Option<PathBuf>,
    #[serde(rename = "canny_image")]
    pub canny_image: PathBuf,
    #[serde(rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeMapConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let img = gray.as_view();

    if let Some(path) = &config.output.threshold_image {
        let mask = threshold_magnitude(&img, config.edge.low_threshold, config.edge.denoise);
        save_mask_png(&mask, path)?;
        println!(
            "Saved threshold mask to {} ({} pixels above {})",
            path.display(),
            mask.count_marked(),
            config.edge.low_threshold
        );
    }

    let result = detect_edges_timed(&img, config.edge.low_threshold);
    let summary = result.summary();
    save_mask_png(&result.edges, &config.output.canny_image)?;
    println!(
        "Saved edge mask to {} ({} edge pixels from {} seeds)",
        config.output.canny_image.display(),
        summary.edge_count,
        summary.seed_count
    );

    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &summary)?;
        println!("Saved run summary to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <config.json>".to_string()
}
