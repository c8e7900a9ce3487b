#![doc = include_str!("../README.md")]

pub mod edges;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry points: full pipeline + diagnostic threshold.
pub use crate::edges::{detect_edges, detect_edges_timed, threshold_magnitude};
pub use crate::edges::{CannyResult, CannySummary, GradientKernel};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let mask = detect_edges(&img, 15.0);
/// println!("edge pixels: {}", mask.count_marked());
/// # }
/// ```
pub mod prelude {
    pub use crate::edges::{detect_edges, threshold_magnitude};
    pub use crate::image::{ImageU8, MaskU8};
}
