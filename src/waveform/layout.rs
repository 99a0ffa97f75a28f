use crate::foundation::error::{WaveError, WaveResult};

/// Vertical slice of the target assigned to one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Band {
    /// Channel index.
    pub channel: usize,
    /// First device row.
    pub y: u32,
    /// Height in rows.
    pub height: u32,
}

/// Split `height` rows among `channels` bands.
///
/// Band `i` spans rows `[floor(i*height/n), floor((i+1)*height/n))`, so bands are
/// pixel-aligned, tile the full height, and differ in height by at most one row.
pub fn bands(height: u32, channels: usize) -> WaveResult<Vec<Band>> {
    if channels == 0 {
        return Ok(Vec::new());
    }
    if (height as usize) < channels {
        return Err(WaveError::invalid_view(format!(
            "{channels} channels do not fit in {height} rows"
        )));
    }
    let h = u64::from(height);
    let n = channels as u64;
    let edge = |i: u64| (i * h / n) as u32;
    Ok((0..n)
        .map(|i| Band {
            channel: i as usize,
            y: edge(i),
            height: edge(i + 1) - edge(i),
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/layout.rs"]
mod tests;
