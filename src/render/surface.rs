use crate::foundation::core::Rgb;
use crate::foundation::error::WaveResult;
use crate::render::mask::CoverageMask;

/// Immediate-mode 2D drawing target.
///
/// Path coordinates are in user space and mapped through the current transform when they
/// are added. `stroke` and `fill` consume the current path. `save`/`restore` push and pop the
/// transform, line width and source color.
pub trait Surface {
    /// Stroke width in user units.
    fn set_line_width(&mut self, width: f64);

    /// Flat source color with the given alpha.
    fn set_source_rgba(&mut self, color: Rgb, alpha: f64);

    /// Flat opaque source color.
    fn set_source_rgb(&mut self, color: Rgb) {
        self.set_source_rgba(color, 1.0);
    }

    /// Begin a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current subpath to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Stroke and clear the current path.
    fn stroke(&mut self) -> WaveResult<()>;

    /// Fill (non-zero winding) and clear the current path.
    fn fill(&mut self) -> WaveResult<()>;

    /// Push the graphics state.
    fn save(&mut self);

    /// Pop the graphics state. Fails when there is nothing to pop.
    fn restore(&mut self) -> WaveResult<()>;

    /// Prepend a translation to the current transform.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Prepend a scale to the current transform.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Paint `color` through `mask`, placed with its top-left corner at the user-space origin.
    ///
    /// Per-pixel coverage comes from the mask; `alpha` fades the whole paint.
    fn mask_paint(&mut self, mask: &CoverageMask, color: Rgb, alpha: f64) -> WaveResult<()>;
}
