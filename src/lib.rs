//! waveview renders zoomable audio waveforms from per-column amplitude statistics.
//!
//! - An [`Aggregator`] summarizes a view window into [`ColumnStats`] per output column.
//! - A [`WaveformRenderer`] blends a mean line, a filled envelope and a statistical
//!   gradient according to zoom density, drawing through any [`Surface`].
//! - [`CpuSurface`] rasterizes to premultiplied RGBA8; [`RecordingSurface`] records calls.
#![forbid(unsafe_code)]

mod effects;
mod foundation;
mod overview;
mod render;
mod style;
mod waveform;

pub use crate::effects::composite::{MaskPaint, blend_over, composite_over, mask_over_in_place};
pub use crate::foundation::core::{Affine, Point, Rgb, Rgba8Premul};
pub use crate::foundation::error::{WaveError, WaveResult};
pub use crate::foundation::math::EPSILON;
pub use crate::overview::samples::SampleOverview;
pub use crate::overview::tone;
pub use crate::overview::{Aggregator, ColumnStats};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::mask::CoverageMask;
pub use crate::render::record::{RecordingSurface, SurfaceOp};
pub use crate::render::surface::Surface;
pub use crate::style::config::{LayerThresholds, RenderConfig};
pub use crate::style::palette::{ColorSet, DEFAULT_HUE};
pub use crate::waveform::gradient::{
    BandMasks, ColumnShape, antialias_rows, highlight_scale, inner_mask, outer_mask,
    row_amplitude,
};
pub use crate::waveform::layers::{LayerPlan, envelope_alpha, gradient_alpha};
pub use crate::waveform::layout::{Band, bands};
pub use crate::waveform::renderer::{DrawStats, WaveformRenderer};
pub use crate::waveform::view::ViewState;
