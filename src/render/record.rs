use crate::foundation::core::{Affine, Point, Rgb};
use crate::foundation::error::{WaveError, WaveResult};
use crate::render::mask::CoverageMask;
use crate::render::surface::Surface;

/// One call made against a [`RecordingSurface`].
///
/// Points are stored in device space, i.e. after the transform current at the time of the call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    SetLineWidth(f64),
    SetSource { color: Rgb, alpha: f64 },
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    Stroke,
    Fill,
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    MaskPaint {
        origin: Point,
        mask: CoverageMask,
        color: Rgb,
        alpha: f64,
    },
}

/// [`Surface`] that draws nothing and records every call.
#[derive(Debug)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    transform: Affine,
    stack: Vec<Affine>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Empty recorder with an identity transform.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            transform: Affine::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// Calls in the order they were made.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Number of fills.
    pub fn fills(&self) -> usize {
        self.count(|op| matches!(op, SurfaceOp::Fill))
    }

    /// Number of strokes.
    pub fn strokes(&self) -> usize {
        self.count(|op| matches!(op, SurfaceOp::Stroke))
    }

    /// All mask paints, in order.
    pub fn mask_paints(&self) -> Vec<&SurfaceOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::MaskPaint { .. }))
            .collect()
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget recorded calls; the transform state is kept.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::SetLineWidth(width));
    }

    fn set_source_rgba(&mut self, color: Rgb, alpha: f64) {
        self.ops.push(SurfaceOp::SetSource { color, alpha });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.transform * Point::new(x, y);
        self.ops.push(SurfaceOp::MoveTo(p));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.transform * Point::new(x, y);
        self.ops.push(SurfaceOp::LineTo(p));
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn stroke(&mut self) -> WaveResult<()> {
        self.ops.push(SurfaceOp::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> WaveResult<()> {
        self.ops.push(SurfaceOp::Fill);
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) -> WaveResult<()> {
        self.transform = self
            .stack
            .pop()
            .ok_or_else(|| WaveError::validation("restore without matching save"))?;
        self.ops.push(SurfaceOp::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * Affine::translate((dx, dy));
        self.ops.push(SurfaceOp::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform * Affine::scale_non_uniform(sx, sy);
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn mask_paint(&mut self, mask: &CoverageMask, color: Rgb, alpha: f64) -> WaveResult<()> {
        self.ops.push(SurfaceOp::MaskPaint {
            origin: self.transform * Point::ORIGIN,
            mask: mask.clone(),
            color,
            alpha,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;
