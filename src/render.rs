#[cfg(test)]
#[path = "./render_test.rs"]
mod render_test;

use std::fs;
use std::ops::Range;
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::color::iteration_color;
use crate::def::Arithmetic;
use crate::mandel::escape_time;
use crate::viewport::Viewport;

pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>, // 3 bytes per pixel, row-major
    pub bailouts: usize,
}

pub struct Band {
    pub rows: Range<usize>,
    pub rgb: Vec<u8>,
    pub bailouts: usize,
}

impl Frame {
    /// Returns `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 3;
        let px = self.rgb.get(offset..offset + 3)?;
        Some([px[0], px[1], px[2]])
    }
}

/// Number of RGB bytes for a `width` x `height` frame, `None` if it
/// cannot be allocated.
pub fn frame_len(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .filter(|&n| n <= isize::MAX as usize)
}

#[cfg_attr(feature = "tracing", instrument(skip_all, fields(start = rows.start, end = rows.end)))]
pub fn render_rows(vp: &Viewport, arith: Arithmetic, rows: Range<usize>) -> Band {
    let x_step = vp.x_step();
    let y_step = vp.y_step();
    let mut rgb = Vec::with_capacity(rows.len() * vp.screen_width * 3);
    let mut bailouts = 0;
    for py in rows.clone() {
        let y0 = vp.y_max - py as f64 * y_step;
        for px in 0..vp.screen_width {
            let x0 = vp.x_min + px as f64 * x_step;
            let escape = escape_time(arith, x0, y0, vp.max_iter);
            if escape.bailout {
                bailouts += 1;
            }
            rgb.extend_from_slice(&iteration_color(escape.iteration, vp.max_iter));
        }
    }
    Band {
        rows,
        rgb,
        bailouts,
    }
}

pub fn band_ranges(height: usize, bands: usize) -> Vec<Range<usize>> {
    let rows_per_band = height.div_ceil(bands.max(1)).max(1);
    (0..height)
        .step_by(rows_per_band)
        .map(|start| start..(start + rows_per_band).min(height))
        .collect()
}

/// Renders the viewport with one blocking task per row band.
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(bands = bands)))]
pub async fn render(vp: Viewport, arith: Arithmetic, bands: usize) -> Result<Frame, String> {
    let len = frame_len(vp.screen_width, vp.screen_height).ok_or_else(|| {
        format!(
            "frame {}x{} too large",
            vp.screen_width, vp.screen_height
        )
    })?;

    let ranges = band_ranges(vp.screen_height, bands);
    let mut handles = Vec::with_capacity(ranges.len());
    for rows in ranges {
        handles.push(tokio::task::spawn_blocking(move || {
            render_rows(&vp, arith, rows)
        }));
    }

    let mut rgb = Vec::with_capacity(len);
    let mut bailouts = 0;
    for handle in handles {
        let band = handle.await.map_err(|e| e.to_string())?;
        rgb.extend_from_slice(&band.rgb);
        bailouts += band.bailouts;
    }
    Ok(Frame {
        width: vp.screen_width,
        height: vp.screen_height,
        rgb,
        bailouts,
    })
}

pub fn encode_ppm(frame: &Frame) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", frame.width, frame.height);
    let mut data = Vec::with_capacity(header.len() + frame.rgb.len());
    data.extend_from_slice(header.as_bytes());
    data.extend_from_slice(&frame.rgb);
    data
}

pub fn write_ppm(frame: &Frame, path: &Path) -> Result<(), String> {
    fs::write(path, encode_ppm(frame)).map_err(|e| e.to_string())
}
