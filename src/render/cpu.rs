use kurbo::{BezPath, PathEl};

use crate::effects::composite::{
    MaskPaint, composite_over, mask_over_in_place, unpremultiply_in_place,
};
use crate::foundation::core::{Affine, Point, Rgb, Rgba8Premul};
use crate::foundation::error::{WaveError, WaveResult};
use crate::foundation::math::unit_to_u8;
use crate::render::mask::CoverageMask;
use crate::render::surface::Surface;

/// A rendered image as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Convert to straight alpha (no-op when already straight).
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct GraphicsState {
    transform: Affine,
    line_width: f64,
    source: [u8; 4],
}

/// Raster [`Surface`] backed by `vello_cpu`.
///
/// Paths are rasterized by `vello_cpu` into a scratch pixmap and composited over the
/// accumulated image whenever a mask paint or readback needs the pixels to be current.
/// Mask paints are blended directly into the accumulated buffer.
pub struct CpuSurface {
    width: u16,
    height: u16,
    data: Vec<u8>,
    ctx: vello_cpu::RenderContext,
    scratch: vello_cpu::Pixmap,
    pending: bool,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    path: BezPath,
}

impl CpuSurface {
    /// Allocate a `width x height` surface, optionally cleared to a straight RGBA8 color.
    pub fn new(width: u32, height: u32, clear_rgba: Option<[u8; 4]>) -> WaveResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| WaveError::validation("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| WaveError::validation("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(WaveError::validation("surface size must be non-zero"));
        }

        let premul = clear_rgba
            .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a).to_array())
            .unwrap_or([0, 0, 0, 0]);
        let data = premul.repeat(usize::from(width_u16) * usize::from(height_u16));

        Ok(Self {
            width: width_u16,
            height: height_u16,
            data,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            scratch: vello_cpu::Pixmap::new(width_u16, height_u16),
            pending: false,
            state: GraphicsState {
                transform: Affine::IDENTITY,
                line_width: 1.0,
                source: [0, 0, 0, 255],
            },
            stack: Vec::new(),
            path: BezPath::new(),
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Composite outstanding vector work and copy the image out (premultiplied).
    pub fn snapshot(&mut self) -> WaveResult<FrameRGBA> {
        self.flush_pending()?;
        Ok(FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.data.clone(),
            premultiplied: true,
        })
    }

    /// Composite outstanding vector work and hand over the image (premultiplied).
    pub fn finish(mut self) -> WaveResult<FrameRGBA> {
        self.flush_pending()?;
        Ok(FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.data,
            premultiplied: true,
        })
    }

    fn flush_pending(&mut self) -> WaveResult<()> {
        if !self.pending {
            return Ok(());
        }
        // `vello_cpu` renders into a fresh buffer; composite it over what is already there.
        self.scratch.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.scratch);
        composite_over(&mut self.data, self.scratch.data_as_u8_slice())?;
        self.ctx.reset();
        self.pending = false;
        Ok(())
    }

    fn prepare_paint(&mut self) {
        let [r, g, b, a] = self.state.source;
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }

    fn take_path(&mut self) -> Option<vello_cpu::kurbo::BezPath> {
        let path = std::mem::take(&mut self.path);
        if path.elements().is_empty() {
            return None;
        }
        Some(bezpath_to_cpu(&path))
    }
}

impl Surface for CpuSurface {
    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width.max(0.0);
    }

    fn set_source_rgba(&mut self, color: Rgb, alpha: f64) {
        let [r, g, b] = color.to_rgb8();
        self.state.source = [r, g, b, unit_to_u8(alpha)];
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.state.transform * Point::new(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.state.transform * Point::new(x, y);
        if self.path.elements().is_empty() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
    }

    fn close_path(&mut self) {
        if !self.path.elements().is_empty() {
            self.path.close_path();
        }
    }

    fn stroke(&mut self) -> WaveResult<()> {
        let Some(path) = self.take_path() else {
            return Ok(());
        };
        // Stroke width is specified in user space.
        let scale = self.state.transform.determinant().abs().sqrt();
        let device_width = self.state.line_width * scale;
        self.prepare_paint();
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(device_width));
        self.ctx.stroke_path(&path);
        self.pending = true;
        Ok(())
    }

    fn fill(&mut self) -> WaveResult<()> {
        let Some(path) = self.take_path() else {
            return Ok(());
        };
        self.prepare_paint();
        self.ctx.fill_path(&path);
        self.pending = true;
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) -> WaveResult<()> {
        self.state = self
            .stack
            .pop()
            .ok_or_else(|| WaveError::validation("restore without matching save"))?;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform * Affine::translate((dx, dy));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform * Affine::scale_non_uniform(sx, sy);
    }

    fn mask_paint(&mut self, mask: &CoverageMask, color: Rgb, alpha: f64) -> WaveResult<()> {
        self.flush_pending()?;
        let origin = self.state.transform * Point::ORIGIN;
        let (width, height) = (self.width(), self.height());
        mask_over_in_place(
            &mut self.data,
            mask,
            MaskPaint {
                width,
                height,
                x0: origin.x.round() as i64,
                y0: origin.y.round() as i64,
                rgb: color.to_rgb8(),
                alpha,
            },
        )
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
