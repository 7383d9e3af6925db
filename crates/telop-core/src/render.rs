use crate::fonts::{
    build_font_plan, build_fontdb, collect_font_fallback_needs, ensure_fonts_available,
    load_app_font_families, resolve_cjk_region, FontPlan,
};
use crate::input::data_uri;
use crate::png::{encode_pixmap, encode_raster_png};
use crate::svg::build_svg;
use crate::{compute_baselines, fit_within_exact, Config, Error, Result, SourceImage};
use image::imageops::FilterType;

/// A composited caption image, always PNG encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl RenderedImage {
    pub fn to_data_uri(&self) -> String {
        data_uri("image/png", &self.png)
    }
}

pub fn render(source: &SourceImage, config: &Config) -> Result<RenderedImage> {
    let composed = compose_svg(source, config)?;
    let pixmap = rasterize_svg(composed.svg.as_bytes(), config, &composed.font_plan)?;
    let png = encode_pixmap(&pixmap, &config.png)?;
    Ok(RenderedImage {
        width: composed.width,
        height: composed.height,
        png,
    })
}

pub fn render_png(source: &SourceImage, config: &Config) -> Result<Vec<u8>> {
    Ok(render(source, config)?.png)
}

/// The caption document before rasterization.
pub fn render_svg(source: &SourceImage, config: &Config) -> Result<String> {
    Ok(compose_svg(source, config)?.svg)
}

struct ComposedSvg {
    svg: String,
    width: u32,
    height: u32,
    font_plan: FontPlan,
}

fn compose_svg(source: &SourceImage, config: &Config) -> Result<ComposedSvg> {
    let params = &config.params;
    params.validate()?;

    let (exact_width, exact_height) = fit_within_exact(
        source.width(),
        source.height(),
        config.canvas.max_width,
        config.canvas.max_height,
    )?;
    let width = (exact_width as u32).max(1);
    let height = (exact_height as u32).max(1);
    let backdrop = if (width, height) == (source.width(), source.height()) {
        encode_raster_png(source.raster())?
    } else {
        log::debug!(
            "scaling source {}x{} to {width}x{height}",
            source.width(),
            source.height()
        );
        encode_raster_png(&source.raster().resize_exact(width, height, FilterType::Triangle))?
    };

    let needs = collect_font_fallback_needs(params);
    if let Err(err) = ensure_fonts_available(config, &needs) {
        log::warn!("font setup failed: {err}");
    }
    let app_families = load_app_font_families(config).unwrap_or_default();
    let font_plan = build_font_plan(config, &needs, &app_families);
    let baselines = compute_baselines(exact_height, &params.lines);
    let svg = build_svg(
        &data_uri("image/png", &backdrop),
        (width, height),
        exact_width / 2.0,
        params,
        &baselines,
        &font_plan.font_family,
        resolve_cjk_region(config),
    )?;
    Ok(ComposedSvg {
        svg,
        width,
        height,
        font_plan,
    })
}

fn rasterize_svg(svg: &[u8], config: &Config, font_plan: &FontPlan) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    *opt.fontdb_mut() = build_fontdb(config, font_plan.needs_system_fonts)?;

    let tree = usvg::Tree::from_data(svg, &opt)
        .map_err(|err| Error::Render(format!("usvg parse: {err}")))?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Render(format!("invalid pixmap size {width}x{height}")))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}
