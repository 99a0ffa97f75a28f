//! Per-pixel statistical gradient masks.
//!
//! A band of height `h` maps row `y` to the amplitude `yidx = 1 - y / (h/2)`: `+1` at the top,
//! `0` at the centre, `-1` at the bottom. Each column's statistics are broadcast down its rows
//! and shaped into two masks:
//!
//! - the *outer* mask is 1 between `[min, max]` and ramps linearly to 0 across the gap between
//!   the extremes and the one-standard-deviation band;
//! - the *inner* mask is a `tanh` ramp concentrated on the one-standard-deviation band,
//!   sharpened by the column's crest factor.
//!
//! Masks are flat row-major `f64` buffers of `columns * height` values.

use std::f64::consts::PI;

use rayon::prelude::*;

use crate::foundation::error::{WaveError, WaveResult};
use crate::foundation::math::EPSILON;
use crate::overview::ColumnStats;
use crate::render::mask::CoverageMask;

/// Weight of each horizontal neighbour in the anti-aliasing pass.
pub const NEIGHBOUR_WEIGHT: f64 = 0.18;

/// Per-column quantities shared by every row of that column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnShape {
    /// Column minimum.
    pub min: f64,
    /// Column maximum.
    pub max: f64,
    /// `mean - std`.
    pub lo_std: f64,
    /// `mean + std`.
    pub hi_std: f64,
    /// `max(mean - min, max - mean) / (std + ε)`.
    pub crest: f64,
}

impl ColumnShape {
    /// Derive the shape of one column.
    pub fn new(s: &ColumnStats) -> Self {
        let lo_peak = s.mean - s.min;
        let hi_peak = s.max - s.mean;
        let peak = if lo_peak >= hi_peak { lo_peak } else { hi_peak };
        Self {
            min: s.min,
            max: s.max,
            lo_std: s.mean - s.std,
            hi_std: s.mean + s.std,
            crest: peak / (s.std + EPSILON),
        }
    }

    /// Outer ramp value at amplitude `yidx`, before anti-aliasing and the power curve.
    pub fn outer(&self, yidx: f64) -> f64 {
        let lo = if yidx < self.min {
            0.0
        } else {
            ((yidx - self.min) / (self.lo_std - self.min + EPSILON)).clamp(0.0, 1.0)
        };
        let hi = if yidx > self.max {
            0.0
        } else {
            ((self.max - yidx) / (self.max - self.hi_std + EPSILON)).clamp(0.0, 1.0)
        };
        lo * hi
    }

    /// Inner highlight at amplitude `yidx`, before density scaling.
    pub fn inner(&self, yidx: f64) -> f64 {
        let lo = if yidx <= self.min {
            0.0
        } else {
            (((yidx - self.lo_std) / (self.lo_std - self.min + EPSILON) * PI).tanh() + 1.0) / 2.0
        };
        let hi = if yidx >= self.max {
            0.0
        } else {
            (((self.hi_std - yidx) / (self.max - self.hi_std + EPSILON) * PI).tanh() + 1.0) / 2.0
        };
        let body = lo * hi;
        // `0^0` would light up silent columns (crest 0) across the whole band.
        if body <= 0.0 { 0.0 } else { body.powf(self.crest) }
    }
}

/// Amplitude represented by row `y` of a band `band_height` rows tall.
pub fn row_amplitude(y: u32, band_height: u32) -> f64 {
    1.0 - f64::from(y) / (f64::from(band_height) / 2.0)
}

/// Strength of the inner highlight at `density`: `1 - 1/ln(density)`.
///
/// Fails for `density <= 1`, where the logarithm is zero or negative.
pub fn highlight_scale(density: f64) -> WaveResult<f64> {
    if !density.is_finite() || density <= 1.0 {
        return Err(WaveError::domain(format!(
            "inner highlight needs a finite density > 1 (got {density})"
        )));
    }
    Ok(1.0 - 1.0 / density.ln())
}

fn shapes(columns: &[ColumnStats]) -> Vec<ColumnShape> {
    columns.iter().map(ColumnShape::new).collect()
}

fn fill_rows(
    shapes: &[ColumnShape],
    band_height: u32,
    f: impl Fn(&ColumnShape, f64) -> f64 + Sync,
) -> Vec<f64> {
    let width = shapes.len();
    let mut mask = vec![0.0; width * band_height as usize];
    if width == 0 {
        return mask;
    }
    mask.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let yidx = row_amplitude(y as u32, band_height);
            for (v, shape) in row.iter_mut().zip(shapes) {
                *v = f(shape, yidx);
            }
        });
    mask
}

/// Blend every interior column with [`NEIGHBOUR_WEIGHT`] of each original neighbour, then
/// renormalize the whole row by `1 + 2 * NEIGHBOUR_WEIGHT`.
pub fn antialias_rows(mask: &mut [f64], width: usize) {
    if width == 0 {
        return;
    }
    let norm = 1.0 + 2.0 * NEIGHBOUR_WEIGHT;
    let mut orig = vec![0.0; width];
    for row in mask.chunks_exact_mut(width) {
        orig.copy_from_slice(row);
        for x in 1..width.saturating_sub(1) {
            row[x] += (orig[x - 1] + orig[x + 1]) * NEIGHBOUR_WEIGHT;
        }
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

/// Outer mask: ramp, horizontal anti-aliasing, then a square-root power curve.
pub fn outer_mask(columns: &[ColumnStats], band_height: u32) -> Vec<f64> {
    let shapes = shapes(columns);
    let mut mask = fill_rows(&shapes, band_height, ColumnShape::outer);
    antialias_rows(&mut mask, shapes.len());
    for v in &mut mask {
        *v = v.sqrt();
    }
    mask
}

/// Inner highlight mask scaled by [`highlight_scale`].
pub fn inner_mask(
    columns: &[ColumnStats],
    band_height: u32,
    density: f64,
) -> WaveResult<Vec<f64>> {
    let scale = highlight_scale(density)?;
    let shapes = shapes(columns);
    Ok(fill_rows(&shapes, band_height, move |s, yidx| s.inner(yidx) * scale))
}

/// Both gradient masks of one band, quantized for painting.
#[derive(Clone, Debug, PartialEq)]
pub struct BandMasks {
    /// Painted with the main color.
    pub outer: CoverageMask,
    /// Painted with the highlight color.
    pub inner: CoverageMask,
}

impl BandMasks {
    /// Compute and quantize both masks for one band.
    pub fn compute(columns: &[ColumnStats], band_height: u32, density: f64) -> WaveResult<Self> {
        let width: u32 = columns
            .len()
            .try_into()
            .map_err(|_| WaveError::invalid_view("too many columns for a coverage mask"))?;
        let inner = inner_mask(columns, band_height, density)?;
        let outer = outer_mask(columns, band_height);
        Ok(Self {
            outer: CoverageMask::from_unit(width, band_height, &outer)?,
            inner: CoverageMask::from_unit(width, band_height, &inner)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/gradient.rs"]
mod tests;
