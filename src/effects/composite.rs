use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{WaveError, WaveResult};
use crate::foundation::math::{mul_div255_u16, unit_to_u8};
use crate::render::mask::CoverageMask;

/// Blend one premultiplied source pixel over the 4-byte destination pixel `px`.
pub fn blend_over(px: &mut [u8], src: [u8; 4]) {
    let keep = 255 - u16::from(src[3]);
    if keep == 255 {
        return;
    }
    for (d, s) in px.iter_mut().zip(src) {
        let kept = mul_div255_u16(u16::from(*d), keep);
        *d = (u16::from(s) + kept).min(255) as u8;
    }
}

/// Composite a premultiplied RGBA8 layer over an equally sized premultiplied buffer.
pub fn composite_over(dst: &mut [u8], layer: &[u8]) -> WaveResult<()> {
    if dst.len() != layer.len() || !dst.len().is_multiple_of(4) {
        return Err(WaveError::validation(format!(
            "cannot composite a {}-byte layer over a {}-byte buffer",
            layer.len(),
            dst.len()
        )));
    }
    for (px, src) in dst.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
        if src[3] != 0 {
            blend_over(px, [src[0], src[1], src[2], src[3]]);
        }
    }
    Ok(())
}

/// Placement and paint for [`mask_over_in_place`].
#[derive(Clone, Copy, Debug)]
pub struct MaskPaint {
    /// Destination buffer width in pixels.
    pub width: u32,
    /// Destination buffer height in pixels.
    pub height: u32,
    /// Device column of the mask's left edge.
    pub x0: i64,
    /// Device row of the mask's top edge.
    pub y0: i64,
    /// Straight RGB8 paint color.
    pub rgb: [u8; 3],
    /// Global alpha applied on top of the per-pixel coverage.
    pub alpha: f64,
}

/// Paint a flat color through a coverage mask onto a premultiplied RGBA8 buffer.
///
/// Per-pixel source alpha is `coverage * alpha`. Mask pixels falling outside the
/// destination are clipped.
pub fn mask_over_in_place(
    dst: &mut [u8],
    mask: &CoverageMask,
    params: MaskPaint,
) -> WaveResult<()> {
    let MaskPaint {
        width,
        height,
        x0,
        y0,
        rgb,
        alpha,
    } = params;
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| WaveError::validation("mask paint buffer size overflow"))?;
    if dst.len() != expected_len {
        return Err(WaveError::validation(
            "mask_over_in_place expects a buffer matching width*height*4",
        ));
    }

    let alpha = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if alpha <= 0.0 {
        return Ok(());
    }

    for my in 0..mask.height() {
        let dy = y0 + i64::from(my);
        if dy < 0 || dy >= i64::from(height) {
            continue;
        }
        for mx in 0..mask.width() {
            let dx = x0 + i64::from(mx);
            if dx < 0 || dx >= i64::from(width) {
                continue;
            }
            let cov = mask.get(mx, my);
            if cov == 0 {
                continue;
            }
            let a = unit_to_u8(f64::from(cov) / 255.0 * alpha);
            if a == 0 {
                continue;
            }
            let src = Rgba8Premul::from_straight_rgba(rgb[0], rgb[1], rgb[2], a).to_array();
            let idx = ((dy as usize) * (width as usize) + (dx as usize)) * 4;
            blend_over(&mut dst[idx..idx + 4], src);
        }
    }
    Ok(())
}

/// Undo premultiplication, e.g. before encoding to a straight-alpha image format.
pub fn unpremultiply_in_place(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
