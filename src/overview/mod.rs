//! Per-column amplitude statistics and the sources that produce them.

pub(crate) mod samples;
pub mod tone;

use crate::foundation::error::WaveResult;

/// Summary of all samples mapped to one output pixel column.
///
/// Values are normalized amplitudes, nominally in `[-1, 1]`. `min <= mean <= max` and
/// `std >= 0` are expected but not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnStats {
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
}

impl ColumnStats {
    /// Construct from the four statistics.
    pub const fn new(min: f64, max: f64, mean: f64, std: f64) -> Self {
        Self {
            min,
            max,
            mean,
            std,
        }
    }

    /// Statistics of a single sample.
    pub const fn point(v: f64) -> Self {
        Self::new(v, v, v, 0.0)
    }
}

/// Source of per-column statistics for a view window.
///
/// Returns one entry per channel, each holding exactly `width` columns covering
/// `density` samples apiece starting at sample `start`.
pub trait Aggregator {
    /// Summarize the window `(start, width, density)`.
    fn overview(&self, start: i64, width: i64, density: f64)
    -> WaveResult<Vec<Vec<ColumnStats>>>;
}

impl<F> Aggregator for F
where
    F: Fn(i64, i64, f64) -> WaveResult<Vec<Vec<ColumnStats>>>,
{
    fn overview(
        &self,
        start: i64,
        width: i64,
        density: f64,
    ) -> WaveResult<Vec<Vec<ColumnStats>>> {
        self(start, width, density)
    }
}
