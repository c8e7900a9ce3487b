//! Edge detection: gradients, thresholding, suppression, hysteresis.
//!
//! The building blocks of the classical Canny pipeline, each a pure function
//! allocating its own output:
//!
//! - Gradient computation (central difference or Sobel) returning `ix`,
//!   `iy`, and the squared magnitude `g2`.
//! - A standalone magnitude threshold for quick gradient inspection.
//! - Non-maximum suppression with a 4-bin direction quantization, producing
//!   a candidate mask and a seed list.
//! - Seeded hysteresis propagation producing the final edge mask.
//!
//! Design notes
//! - Magnitudes stay squared across all stages; thresholds are squared once
//!   where they enter.
//! - Borders are zeroed rather than clamped, so the one-pixel frame never
//!   produces maxima.
//! - Stages hand over owned values; nothing is mutated after handoff.

pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod nms;
pub mod threshold;

/// Full pipeline entry points with and without stage diagnostics.
pub use canny::{detect_edges, detect_edges_timed, CannyResult, CannySummary};
/// Per-pixel gradients with squared magnitude.
pub use grad::{central_gradients, image_gradients, sobel_gradients, Grad, GradientKernel};
/// Seeded connected expansion through the candidate mask.
pub use hysteresis::propagate_seeds;
/// Candidate/seed classification along the quantized gradient direction.
pub use nms::{suppress_non_maxima, Candidates, HIGH_LOW_RATIO};
/// Diagnostic gradient-magnitude mask.
pub use threshold::threshold_magnitude;
