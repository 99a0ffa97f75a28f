use crate::foundation::error::{WaveError, WaveResult};
use crate::foundation::math::clamp01;

/// Single-channel 8-bit coverage buffer, row-major, `width * height` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CoverageMask {
    /// A fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap existing coverage bytes.
    pub fn from_bytes(width: u32, height: u32, data: Vec<u8>) -> WaveResult<Self> {
        if data.len() != width as usize * height as usize {
            return Err(WaveError::validation(format!(
                "coverage mask expects {} bytes for {width}x{height}, got {}",
                width as usize * height as usize,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Quantize unit-range values to coverage bytes.
    ///
    /// Values are clamped to `[0, 1]` and truncated (`v * 255` rounded toward zero);
    /// NaN becomes 0.
    pub fn from_unit(width: u32, height: u32, values: &[f64]) -> WaveResult<Self> {
        if values.len() != width as usize * height as usize {
            return Err(WaveError::validation(format!(
                "coverage mask expects {} values for {width}x{height}, got {}",
                width as usize * height as usize,
                values.len()
            )));
        }
        let data = values.iter().map(|&v| (clamp01(v) * 255.0) as u8).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw coverage bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Coverage at `(x, y)`; out-of-bounds reads are 0.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Sum of all coverage bytes.
    pub fn total(&self) -> u64 {
        self.data.iter().map(|&v| u64::from(v)).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
