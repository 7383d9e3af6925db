use crate::{Error, PngOptions, PngStrip, Result, MAX_PNG_OPT_LEVEL};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Truecolor PNG of the composited canvas, losslessly recompressed when
/// `png.optimize` is on.
pub(crate) fn encode_pixmap(pixmap: &tiny_skia::Pixmap, options: &PngOptions) -> Result<Vec<u8>> {
    let png = pixmap
        .encode_png()
        .map_err(|err| Error::Render(format!("png encode: {err}")))?;
    if !options.optimize {
        return Ok(png);
    }
    let before = png.len();
    let png = optimize_png(&png, options)?;
    log::debug!("optimized png {before} -> {} bytes", png.len());
    Ok(png)
}

/// Lossless PNG of a decoded source, used to inline the backdrop.
pub(crate) fn encode_raster_png(raster: &DynamicImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    raster
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|err| Error::Render(format!("png encode: {err}")))?;
    Ok(out.into_inner())
}

fn optimize_png(png: &[u8], options: &PngOptions) -> Result<Vec<u8>> {
    let mut oxi = oxipng::Options::from_preset(options.level.min(MAX_PNG_OPT_LEVEL));
    oxi.strip = match options.strip {
        PngStrip::None => oxipng::StripChunks::None,
        PngStrip::Safe => oxipng::StripChunks::Safe,
        PngStrip::All => oxipng::StripChunks::All,
    };
    oxipng::optimize_from_memory(png, &oxi).map_err(|err| Error::Render(format!("png optimize: {err}")))
}
