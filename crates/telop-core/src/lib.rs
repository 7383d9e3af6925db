const DEFAULT_MAX_WIDTH: u32 = 800;
const DEFAULT_MAX_HEIGHT: u32 = 600;
const BOTTOM_MARGIN: i32 = 30;
const LINE_GAP: i32 = 3;
const SHADOW_OPACITY: f32 = 0.7;
const HEAVY_FONT_WEIGHT: u16 = 900;
const BOLD_FONT_WEIGHT: u16 = 700;
const MIN_FONT_SIZE: i32 = 8;
const MAX_FONT_SIZE: i32 = 80;
const MAX_LINE_OFFSET: i32 = 50;
const MAX_SHADOW_OFFSET: f32 = 5.0;
const MAX_SHADOW_BLUR: f32 = 10.0;
const DEFAULT_PNG_OPT_LEVEL: u8 = 0;
const MAX_PNG_OPT_LEVEL: u8 = 6;

/// File name used when exporting a rendered image.
pub const DEFAULT_OUTPUT_NAME: &str = "movie-trailer-image.png";

mod config;
mod export;
mod fonts;
mod input;
mod layout;
mod params;
mod png;
mod render;
mod session;
mod svg;
mod types;
pub use config::{
    CanvasOptions, CjkRegion, Config, Font, FontSystemFallback, PngOptions, PngStrip,
};
pub use export::{export_png, export_png_to, png_data_uri};
pub use fonts::invalidate_font_caches;
pub use input::{load_image, ImageInput, SourceImage};
pub use layout::{compute_baselines, fit_within, fit_within_exact, Baselines};
pub use params::{parse_hex_color, LineRole, RenderParameters, Shadow, TextLine};
pub use render::{render, render_png, render_svg, RenderedImage};
pub use session::Session;
pub use types::{Error, Result};
