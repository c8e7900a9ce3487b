//! Canny detector: Sobel gradients, non-maximum suppression, hysteresis.
//!
//! The stages run in a fixed order, each consuming the previous output:
//! intensity → gradient field → (candidate mask, seeds) → final mask. The
//! high threshold is fixed at three times the low one and applied to the
//! squared magnitude inside the suppression pass. Stage outputs and
//! wall-clock timings are retained in [`CannyResult`] for tooling.
use super::grad::{sobel_gradients, Grad};
use super::hysteresis::propagate_seeds;
use super::nms::{suppress_non_maxima, Candidates, HIGH_LOW_RATIO};
use crate::image::{ImageU8, MaskU8};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Per-stage outcome of a detector run.
pub struct CannyResult {
    /// Final edge mask after hysteresis.
    pub edges: MaskU8,
    /// Local-maxima mask and seed list from the suppression pass.
    pub candidates: Candidates,
    /// Gradient buffers fed to the suppression pass.
    pub grad: Grad,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
}

impl CannyResult {
    /// Compact serializable view of the run.
    pub fn summary(&self) -> CannySummary {
        CannySummary {
            width: self.edges.w,
            height: self.edges.h,
            candidate_count: self.candidates.maxima.count_marked(),
            seed_count: self.candidates.seeds.len(),
            edge_count: self.edges.count_marked(),
            gradient_ms: self.gradient_ms,
            nms_ms: self.nms_ms,
            hysteresis_ms: self.hysteresis_ms,
        }
    }
}

/// Counts and timings of a detector run, suitable for JSON output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannySummary {
    pub width: usize,
    pub height: usize,
    pub candidate_count: usize,
    pub seed_count: usize,
    pub edge_count: usize,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
}

/// Detect edges with hysteresis; `low_threshold` is in linear units, the
/// high threshold is three times larger.
pub fn detect_edges(gray: &ImageU8<'_>, low_threshold: f32) -> MaskU8 {
    detect_edges_timed(gray, low_threshold).edges
}

/// As [`detect_edges`], additionally returning stage outputs and timings.
pub fn detect_edges_timed(gray: &ImageU8<'_>, low_threshold: f32) -> CannyResult {
    debug!(
        "canny start w={} h={} low={} high={}",
        gray.w,
        gray.h,
        low_threshold,
        HIGH_LOW_RATIO * low_threshold
    );

    let gradient_start = Instant::now();
    let grad = sobel_gradients(gray);
    let gradient_ms = gradient_start.elapsed().as_secs_f64() * 1000.0;

    let nms_start = Instant::now();
    let candidates = suppress_non_maxima(&grad, low_threshold);
    let nms_ms = nms_start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "canny nms candidates={} seeds={}",
        candidates.maxima.count_marked(),
        candidates.seeds.len()
    );

    let hysteresis_start = Instant::now();
    let edges = propagate_seeds(&candidates);
    let hysteresis_ms = hysteresis_start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "canny done edges={} gradient_ms={:.3} nms_ms={:.3} hysteresis_ms={:.3}",
        edges.count_marked(),
        gradient_ms,
        nms_ms,
        hysteresis_ms
    );

    CannyResult {
        edges,
        candidates,
        grad,
        gradient_ms,
        nms_ms,
        hysteresis_ms,
    }
}
