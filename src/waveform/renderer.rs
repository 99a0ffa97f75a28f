use rayon::prelude::*;

use crate::foundation::error::{WaveError, WaveResult};
use crate::overview::{Aggregator, ColumnStats};
use crate::render::surface::Surface;
use crate::style::config::{LayerThresholds, RenderConfig};
use crate::style::palette::ColorSet;
use crate::waveform::gradient::BandMasks;
use crate::waveform::layers::LayerPlan;
use crate::waveform::layout::{Band, bands};
use crate::waveform::view::ViewState;

/// Offset keeping the two halves of the envelope outline from overlapping at the seam.
const ENVELOPE_SEAM: f64 = 0.5;

/// Summary of one [`WaveformRenderer::draw`] call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawStats {
    /// View the statistics were fetched for.
    pub view: ViewState,
    /// Layers drawn in every band.
    pub plan: LayerPlan,
    /// Band assigned to each channel, top to bottom.
    pub bands: Vec<Band>,
}

/// Draws a multi-channel waveform for the current view window.
///
/// Each call re-fetches statistics from the aggregator; nothing is cached between draws.
pub struct WaveformRenderer<A> {
    aggregator: A,
    colors: ColorSet,
    thresholds: LayerThresholds,
    view: ViewState,
}

impl<A: Aggregator> WaveformRenderer<A> {
    /// Renderer with the default palette and thresholds.
    pub fn new(aggregator: A) -> Self {
        let cfg = RenderConfig::default();
        Self {
            aggregator,
            colors: cfg.palette(),
            thresholds: cfg.thresholds,
            view: ViewState::default(),
        }
    }

    /// Renderer configured from a validated [`RenderConfig`].
    pub fn with_config(aggregator: A, cfg: &RenderConfig) -> WaveResult<Self> {
        cfg.validate()?;
        Ok(Self {
            aggregator,
            colors: cfg.palette(),
            thresholds: cfg.thresholds,
            view: ViewState::default(),
        })
    }

    /// Store the view window. `start` and `width` are truncated; nothing is validated until
    /// the next draw.
    pub fn set_view(&mut self, start: f64, width: f64, density: f64) {
        self.view = ViewState::new(start, width, density);
    }

    /// The stored view window.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The palette fixed at construction.
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Layer cutoffs fixed at construction.
    pub fn thresholds(&self) -> &LayerThresholds {
        &self.thresholds
    }

    /// The statistics source.
    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Layers that would be drawn at the stored density.
    pub fn plan(&self) -> LayerPlan {
        LayerPlan::for_density(self.view.density, &self.thresholds)
    }

    /// Fetch statistics for the stored view and draw every channel into `width x height`,
    /// stacking channels top to bottom. The surface transform is restored before returning,
    /// also on error.
    #[tracing::instrument(skip(self, surface))]
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        width: u32,
        height: u32,
    ) -> WaveResult<DrawStats> {
        let view = self.view;
        view.validate()?;
        if width == 0 || height == 0 {
            return Err(WaveError::invalid_view(format!(
                "target size must be non-zero (got {width}x{height})"
            )));
        }

        let data = self
            .aggregator
            .overview(view.start, view.width, view.density)?;
        for (i, channel) in data.iter().enumerate() {
            if channel.len() as i64 != view.width {
                return Err(WaveError::invalid_view(format!(
                    "channel {i} has {} columns, view requested {}",
                    channel.len(),
                    view.width
                )));
            }
        }

        let bands = bands(height, data.len())?;
        let plan = self.plan();
        tracing::debug!(?view, ?plan, channels = data.len(), "drawing waveform");

        let masks = match plan.gradient_alpha {
            Some(_) => Some(
                data.par_iter()
                    .zip(bands.par_iter())
                    .map(|(columns, band)| BandMasks::compute(columns, band.height, view.density))
                    .collect::<WaveResult<Vec<_>>>()?,
            ),
            None => None,
        };

        surface.save();
        let res = self.draw_bands(
            surface,
            &data,
            &bands,
            &plan,
            masks.as_deref(),
            f64::from(width),
        );
        surface.restore()?;
        res?;

        Ok(DrawStats { view, plan, bands })
    }

    fn draw_bands<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        data: &[Vec<ColumnStats>],
        bands: &[Band],
        plan: &LayerPlan,
        masks: Option<&[BandMasks]>,
        width: f64,
    ) -> WaveResult<()> {
        for (columns, band) in data.iter().zip(bands) {
            tracing::trace!(channel = band.channel, y = band.y, height = band.height, "band");
            let band_masks = masks.and_then(|m| m.get(band.channel));
            self.paint_channel(surface, columns, width, band.height, plan, band_masks)?;
            surface.translate(0.0, f64::from(band.height));
        }
        Ok(())
    }

    /// Draw one channel into a `width x band_height` region at the current origin.
    pub fn draw_channel<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        columns: &[ColumnStats],
        width: f64,
        band_height: u32,
    ) -> WaveResult<()> {
        let plan = self.plan();
        let masks = match plan.gradient_alpha {
            Some(_) => Some(BandMasks::compute(columns, band_height, self.view.density)?),
            None => None,
        };
        self.paint_channel(surface, columns, width, band_height, &plan, masks.as_ref())
    }

    fn paint_channel<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        columns: &[ColumnStats],
        width: f64,
        band_height: u32,
        plan: &LayerPlan,
        masks: Option<&BandMasks>,
    ) -> WaveResult<()> {
        let h = f64::from(band_height);
        self.draw_origin(surface, width, h)?;
        if let Some(alpha) = plan.envelope_alpha {
            self.draw_envelope(surface, columns, h, alpha)?;
        }
        if let (Some(alpha), Some(masks)) = (plan.gradient_alpha, masks) {
            surface.mask_paint(&masks.outer, self.colors.main, alpha)?;
            surface.mask_paint(&masks.inner, self.colors.fore, alpha)?;
        }
        if plan.mean_line {
            self.draw_mean_line(surface, columns, h)?;
        }
        Ok(())
    }

    fn draw_origin<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        width: f64,
        h: f64,
    ) -> WaveResult<()> {
        surface.set_line_width(1.0);
        surface.set_source_rgb(self.colors.grid);
        surface.move_to(0.0, h / 2.0);
        surface.line_to(width, h / 2.0);
        surface.stroke()
    }

    /// Run `f` in amplitude space: origin at the band centre, `+1` at the top edge.
    fn in_amplitude_space<S: Surface + ?Sized>(
        surface: &mut S,
        h: f64,
        f: impl FnOnce(&mut S, f64) -> WaveResult<()>,
    ) -> WaveResult<()> {
        let half = h / 2.0;
        surface.save();
        surface.translate(0.0, half);
        surface.scale(1.0, -1.0);
        let res = f(&mut *surface, half);
        surface.restore()?;
        res
    }

    fn draw_envelope<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        columns: &[ColumnStats],
        h: f64,
        alpha: f64,
    ) -> WaveResult<()> {
        let Some(first) = columns.first() else {
            return Ok(());
        };
        let color = self.colors.main;
        Self::in_amplitude_space(surface, h, |s, half| {
            s.set_source_rgba(color, alpha);
            s.move_to(0.0, first.min * half - ENVELOPE_SEAM);
            for (i, c) in columns.iter().enumerate().skip(1) {
                s.line_to(i as f64, c.min * half - ENVELOPE_SEAM);
            }
            for (i, c) in columns.iter().enumerate().rev() {
                s.line_to(i as f64, c.max * half + ENVELOPE_SEAM);
            }
            s.close_path();
            s.fill()
        })
    }

    fn draw_mean_line<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        columns: &[ColumnStats],
        h: f64,
    ) -> WaveResult<()> {
        let Some(first) = columns.first() else {
            return Ok(());
        };
        let color = self.colors.main;
        Self::in_amplitude_space(surface, h, |s, half| {
            s.set_line_width(1.0);
            s.set_source_rgb(color);
            s.move_to(0.0, first.mean * half);
            for (i, c) in columns.iter().enumerate().skip(1) {
                s.line_to(i as f64, c.mean * half);
            }
            s.stroke()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/renderer.rs"]
mod tests;
