//! Non-maximum suppression over the squared gradient magnitude.
//!
//! For each pixel above the low threshold the gradient direction is
//! quantized to one of four orientation bins, and the pixel survives only if
//! its squared magnitude strictly exceeds both neighbors along that
//! direction. Survivors whose magnitude also beats the high threshold
//! (three times the low one) double as seeds for hysteresis propagation.
//!
//! The outermost one-pixel frame is never a maximum, which also keeps the
//! neighbor lookups in bounds.
use super::grad::Grad;
use crate::image::{ImageView, MaskU8};

/// Slopes bounding the four orientation bins (tan 22.5°, tan 67.5°).
const TAN_22_5: f32 = 0.414;
const TAN_67_5: f32 = 2.414;

/// Ratio of the seed (high) threshold to the low threshold.
pub const HIGH_LOW_RATIO: f32 = 3.0;

/// Local-maxima mask plus the seed subset above the high threshold.
#[derive(Clone, Debug)]
pub struct Candidates {
    /// Pixels that are strict local maxima along their gradient direction.
    pub maxima: MaskU8,
    /// `(x, y)` of maxima whose squared magnitude beats the high threshold,
    /// in row-major scan order.
    pub seeds: Vec<(u32, u32)>,
}

/// Classify local maxima and seeds; `low_threshold` is in linear units and
/// squared internally.
pub fn suppress_non_maxima(grad: &Grad, low_threshold: f32) -> Candidates {
    let w = grad.width();
    let h = grad.height();
    let s1 = low_threshold * low_threshold;
    let high = HIGH_LOW_RATIO * low_threshold;
    let s2 = high * high;

    let mut maxima = MaskU8::new(w, h);
    let mut seeds = Vec::new();
    if w < 3 || h < 3 {
        return Candidates { maxima, seeds };
    }

    for y in 1..h - 1 {
        let g2_north = grad.g2.row(y - 1);
        let g2_row = grad.g2.row(y);
        let g2_south = grad.g2.row(y + 1);
        let ix_row = grad.ix.row(y);
        let iy_row = grad.iy.row(y);

        for x in 1..w - 1 {
            let g0 = g2_row[x];
            if g0 <= s1 {
                continue;
            }

            let mut ix = ix_row[x];
            let mut iy = iy_row[x];
            // Opposite gradient directions share the same comparison pair,
            // so fold the left half-plane onto the right one.
            if ix < 0.0 {
                ix = -ix;
                iy = -iy;
            }

            let (ga, gb) = if iy > TAN_67_5 * ix || iy < -TAN_67_5 * ix {
                (g2_south[x], g2_north[x])
            } else if iy > TAN_22_5 * ix {
                (g2_south[x + 1], g2_north[x - 1])
            } else if iy > -TAN_22_5 * ix {
                (g2_row[x + 1], g2_row[x - 1])
            } else {
                (g2_south[x - 1], g2_north[x + 1])
            };

            // Strict on both sides: plateau ties are suppressed.
            if g0 > ga && g0 > gb {
                maxima.mark(x, y);
                if g0 > s2 {
                    seeds.push((x as u32, y as u32));
                }
            }
        }
    }

    Candidates { maxima, seeds }
}
