use crate::parse::parse_choice;
use clap::Parser;
use telop_core::{CjkRegion, FontSystemFallback, PngStrip};

#[derive(Parser, Debug)]
#[command(
    name = "telop",
    about = "Overlay movie-trailer style credit captions on an image.",
    version
)]
pub(crate) struct Args {
    /// Image file path. Use "-" to read image bytes from stdin.
    pub(crate) image: Option<String>,

    /// Output PNG path.
    /// If omitted, writes to stdout (or movie-trailer-image.png when stdout is a TTY).
    #[arg(short, long)]
    pub(crate) output: Option<std::path::PathBuf>,

    /// JSON config file path (default/base/user or custom file).
    #[arg(short, long)]
    pub(crate) config: Option<String>,

    /// Edit the caption interactively.
    #[arg(short, long)]
    pub(crate) interactive: bool,

    /// Top line text (e.g. the credit label).
    #[arg(long)]
    pub(crate) line1: Option<String>,

    /// Top line font size (8-80).
    #[arg(long)]
    pub(crate) size1: Option<i32>,

    /// Top line vertical offset (-50 to 50).
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) offset1: Option<i32>,

    /// Middle line text (e.g. the author name).
    #[arg(long)]
    pub(crate) line2: Option<String>,

    /// Middle line font size (8-80).
    #[arg(long)]
    pub(crate) size2: Option<i32>,

    /// Middle line vertical offset (-50 to 50).
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) offset2: Option<i32>,

    /// Bottom line text (e.g. the work title).
    #[arg(long)]
    pub(crate) line3: Option<String>,

    /// Bottom line font size (8-80).
    #[arg(long)]
    pub(crate) size3: Option<i32>,

    /// Bottom line vertical offset (-50 to 50).
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) offset3: Option<i32>,

    /// Shadow offset in pixels (0-5).
    #[arg(long = "shadow.offset")]
    pub(crate) shadow_offset: Option<f32>,

    /// Shadow blur (0-10).
    #[arg(long = "shadow.blur")]
    pub(crate) shadow_blur: Option<f32>,

    /// Color of the top and middle lines (#RRGGBB).
    #[arg(long = "author-color")]
    pub(crate) author_color: Option<String>,

    /// Color of the bottom line (#RRGGBB).
    #[arg(long = "title-color")]
    pub(crate) title_color: Option<String>,

    /// Largest canvas width; wider images are scaled down.
    #[arg(long = "canvas.max-width")]
    pub(crate) canvas_max_width: Option<u32>,

    /// Largest canvas height; taller images are scaled down.
    #[arg(long = "canvas.max-height")]
    pub(crate) canvas_max_height: Option<u32>,

    /// Font family.
    #[arg(long = "font.family")]
    pub(crate) font_family: Option<String>,

    /// Font file path.
    #[arg(long = "font.file")]
    pub(crate) font_file: Option<String>,

    /// Font fallback families (comma-separated).
    #[arg(long = "font.fallbacks", value_name = "LIST")]
    pub(crate) font_fallbacks: Option<String>,

    /// Font directories (comma-separated). Defaults to ~/.telop/fonts.
    #[arg(long = "font.dirs", value_name = "LIST")]
    pub(crate) font_dirs: Option<String>,

    /// CJK region preference (auto, sc, tc, hk, jp, kr).
    #[arg(
        long = "font.cjk-region",
        alias = "font.cjk.region",
        value_parser = parse_choice::<CjkRegion>
    )]
    pub(crate) font_cjk_region: Option<CjkRegion>,

    /// Auto-download missing CJK and emoji fonts.
    #[arg(
        long = "font.auto-download",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub(crate) font_auto_download: Option<bool>,

    /// Revalidate downloaded fonts even when present.
    #[arg(
        long = "font.force-update",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub(crate) font_force_update: Option<bool>,

    /// System font fallback mode (auto, always, never).
    #[arg(
        long = "font.system-fallback",
        alias = "font.system_fallback",
        value_parser = parse_choice::<FontSystemFallback>
    )]
    pub(crate) font_system_fallback: Option<FontSystemFallback>,

    /// Optimize PNG output (lossless).
    #[arg(
        long = "png-opt",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub(crate) png_opt: Option<bool>,

    /// PNG optimization preset (0-6).
    #[arg(long = "png-opt-level")]
    pub(crate) png_opt_level: Option<u8>,

    /// PNG metadata strip mode (none, safe, all).
    #[arg(long = "png-strip", value_parser = parse_choice::<PngStrip>)]
    pub(crate) png_strip: Option<PngStrip>,

    /// Also write the composed SVG document to this path.
    #[arg(long, value_name = "PATH")]
    pub(crate) svg: Option<std::path::PathBuf>,

    /// Print the result as a data:image/png;base64 URI instead of writing a file.
    #[arg(long = "data-uri")]
    pub(crate) data_uri: bool,
}
