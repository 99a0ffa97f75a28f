use rayon::prelude::*;

use crate::foundation::error::{WaveError, WaveResult};
use crate::overview::{Aggregator, ColumnStats};

/// In-memory [`Aggregator`] over planar sample buffers.
///
/// Column `i` of a window covers samples `[start + floor(i*d), start + floor((i+1)*d))`, widened
/// to at least one sample so that `density < 1` repeats samples across columns. Samples outside
/// the buffer are ignored; a column with no samples reports all-zero statistics.
#[derive(Clone, Debug)]
pub struct SampleOverview {
    channels: Vec<Vec<f32>>,
    frames: usize,
}

impl SampleOverview {
    /// Wrap planar channels. All channels must have the same length.
    pub fn new(channels: Vec<Vec<f32>>) -> WaveResult<Self> {
        let frames = channels.first().map_or(0, Vec::len);
        if channels.iter().any(|c| c.len() != frames) {
            return Err(WaveError::validation(
                "all channels must have the same number of samples",
            ));
        }
        Ok(Self { channels, frames })
    }

    /// Split interleaved frames into planar channels.
    pub fn from_interleaved(samples: &[f32], channels: usize) -> WaveResult<Self> {
        if channels == 0 {
            return Err(WaveError::validation("channel count must be > 0"));
        }
        if !samples.len().is_multiple_of(channels) {
            return Err(WaveError::validation(
                "interleaved sample count is not a multiple of the channel count",
            ));
        }
        let frames = samples.len() / channels;
        let mut planar = vec![Vec::with_capacity(frames); channels];
        for frame in samples.chunks_exact(channels) {
            for (c, &s) in frame.iter().enumerate() {
                planar[c].push(s);
            }
        }
        Self::new(planar)
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Density that fits the whole buffer into `width` columns.
    pub fn fit_density(&self, width: i64) -> f64 {
        if width <= 0 || self.frames == 0 {
            return 1.0;
        }
        self.frames as f64 / width as f64
    }

    fn column_range(&self, start: i64, col: i64, density: f64) -> (usize, usize) {
        let lo = start.saturating_add((col as f64 * density).floor() as i64);
        let hi = start
            .saturating_add(((col + 1) as f64 * density).floor() as i64)
            .max(lo.saturating_add(1));
        let frames = self.frames as i64;
        (lo.clamp(0, frames) as usize, hi.clamp(0, frames) as usize)
    }
}

/// Two-pass statistics of a sample slice; an empty slice is all zeros.
pub(crate) fn column_stats(samples: &[f32]) -> ColumnStats {
    if samples.is_empty() {
        return ColumnStats::default();
    }
    let n = samples.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &s in samples {
        let s = f64::from(s);
        min = min.min(s);
        max = max.max(s);
        sum += s;
    }
    let mean = sum / n;
    let var = samples
        .iter()
        .map(|&s| {
            let d = f64::from(s) - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    ColumnStats::new(min, max, mean, var.max(0.0).sqrt())
}

impl Aggregator for SampleOverview {
    fn overview(
        &self,
        start: i64,
        width: i64,
        density: f64,
    ) -> WaveResult<Vec<Vec<ColumnStats>>> {
        if width <= 0 {
            return Err(WaveError::invalid_view(format!(
                "overview width must be > 0 (got {width})"
            )));
        }
        if !density.is_finite() || density <= 0.0 {
            return Err(WaveError::invalid_view(format!(
                "overview density must be finite and > 0 (got {density})"
            )));
        }

        let out = self
            .channels
            .iter()
            .map(|samples| {
                (0..width)
                    .into_par_iter()
                    .map(|col| {
                        let (lo, hi) = self.column_range(start, col, density);
                        column_stats(&samples[lo..hi])
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overview/samples.rs"]
mod tests;
