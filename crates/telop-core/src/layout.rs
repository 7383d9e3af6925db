use crate::{Error, LineRole, Result, TextLine, BOTTOM_MARGIN, LINE_GAP};

/// Baseline Y coordinate of each caption line, top line first.
///
/// Kept fractional: the canvas is fitted with real-valued scaling and only
/// the pixel buffer is truncated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baselines(pub [f64; 3]);

impl Baselines {
    pub fn get(&self, role: LineRole) -> f64 {
        self.0[role.index()]
    }
}

/// Stacks the three lines upwards from the bottom margin.
///
/// Each line sits a fixed gap above the one below it, sized by the font of
/// the line below, then shifted by its own offset. Nothing is clamped, so a
/// large offset can push text outside the canvas.
pub fn compute_baselines(canvas_height: f64, lines: &[TextLine; 3]) -> Baselines {
    let bottom = canvas_height - f64::from(BOTTOM_MARGIN);
    let line3 = bottom + f64::from(lines[2].offset);
    let line2 = line3 - f64::from(lines[2].font_size + LINE_GAP) + f64::from(lines[1].offset);
    let line1 = line2 - f64::from(lines[1].font_size + LINE_GAP) + f64::from(lines[0].offset);
    Baselines([line1, line2, line3])
}

/// Shrinks `width`×`height` into the box, keeping the aspect ratio.
///
/// Width is fitted first, then height. Images already inside the box keep
/// their size. The result is not rounded; see [`fit_within`] for pixels.
pub fn fit_within_exact(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(f64, f64)> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput(format!(
            "image has no pixels ({width}x{height})"
        )));
    }
    if max_width == 0 || max_height == 0 {
        return Err(Error::InvalidInput(format!(
            "invalid canvas bounds {max_width}x{max_height}"
        )));
    }
    let mut w = f64::from(width);
    let mut h = f64::from(height);
    let max_w = f64::from(max_width);
    let max_h = f64::from(max_height);
    if w > max_w {
        h *= max_w / w;
        w = max_w;
    }
    if h > max_h {
        w *= max_h / h;
        h = max_h;
    }
    Ok((w, h))
}

/// Pixel size of the fitted canvas: truncated, never below 1.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> Result<(u32, u32)> {
    let (w, h) = fit_within_exact(width, height, max_width, max_height)?;
    Ok(((w as u32).max(1), (h as u32).max(1)))
}
