use crate::args::Args;
use crate::config::{load_config, save_user_config};
use crate::interactive::run_interactive;
use crate::io::{print_wrote, read_stdin_with, write_output_with_tty};
use crate::parse::{parse_color, parse_font_dirs, parse_font_fallbacks};
use clap::{CommandFactory, Parser};
use std::error::Error;
use std::path::{Path, PathBuf};
use telop_core::{export_png_to, load_image, render_svg, Config, ImageInput, LineRole, Session};

pub(crate) fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    run_with(
        args,
        atty::is(atty::Stream::Stdin),
        atty::is(atty::Stream::Stdout),
        None,
    )
}

pub(crate) fn run_with(
    args: Args,
    stdin_is_tty: bool,
    stdout_is_tty: bool,
    stdin_override: Option<&[u8]>,
) -> Result<(), Box<dyn Error>> {
    let (mut config, is_default_config) = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args)?;

    if args.interactive {
        if !stdin_is_tty {
            return Err("interactive mode requires a TTY".into());
        }
        let mut session = Session::new(config)?;
        run_interactive(&mut session, args.image.as_deref(), Path::new("."))?;
        if is_default_config {
            let path = save_user_config(session.config())?;
            log::info!("saved settings to {}", path.display());
        }
        if let (Some(output), Some(rendered)) = (args.output.as_ref(), session.rendered()) {
            let path = export_png_to(rendered, output)?;
            print_wrote(&path);
        }
        return Ok(());
    }

    let input = match args.image.as_deref() {
        Some("-") => ImageInput::Bytes(read_stdin_with(stdin_override)?),
        Some(path) => ImageInput::File(PathBuf::from(path)),
        None if !stdin_is_tty => ImageInput::Bytes(read_stdin_with(stdin_override)?),
        None => {
            let mut cmd = Args::command();
            cmd.print_help()?;
            println!();
            return Ok(());
        }
    };
    let source = load_image(&input)?;

    if let Some(path) = args.svg.as_ref() {
        let svg = render_svg(&source, &config)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)?;
        if stdout_is_tty {
            print_wrote(path);
        }
    }

    let mut session = Session::new(config)?;
    session.select_image(Some(source))?;
    let rendered = session
        .rendered()
        .ok_or("image produced no output")?;

    if args.data_uri {
        println!("{}", rendered.to_data_uri());
        return Ok(());
    }

    write_output_with_tty(rendered, args.output.as_ref(), stdout_is_tty)
}

fn apply_overrides(config: &mut Config, args: &Args) -> Result<(), Box<dyn Error>> {
    let lines = [
        (LineRole::Label, &args.line1, args.size1, args.offset1),
        (LineRole::Author, &args.line2, args.size2, args.offset2),
        (LineRole::Title, &args.line3, args.size3, args.offset3),
    ];
    for (role, text, size, offset) in lines {
        let line = &mut config.params.lines[role.index()];
        if let Some(text) = text {
            line.text = text.clone();
        }
        if let Some(size) = size {
            line.font_size = size;
        }
        if let Some(offset) = offset {
            line.offset = offset;
        }
    }
    if let Some(offset) = args.shadow_offset {
        config.params.shadow.offset = offset;
    }
    if let Some(blur) = args.shadow_blur {
        config.params.shadow.blur = blur;
    }
    if let Some(color) = args.author_color.as_deref() {
        config.params.author_color = parse_color(color)?;
    }
    if let Some(color) = args.title_color.as_deref() {
        config.params.title_color = parse_color(color)?;
    }
    if let Some(width) = args.canvas_max_width {
        config.canvas.max_width = width;
    }
    if let Some(height) = args.canvas_max_height {
        config.canvas.max_height = height;
    }
    if let Some(family) = args.font_family.as_ref() {
        config.font.family = family.clone();
    }
    if let Some(file) = args.font_file.as_ref() {
        config.font.file = Some(file.clone());
    }
    if let Some(fallbacks) = args.font_fallbacks.as_deref() {
        config.font.fallbacks = parse_font_fallbacks(fallbacks)?;
    }
    if let Some(dirs) = args.font_dirs.as_deref() {
        config.font.dirs = parse_font_dirs(dirs)?;
    }
    if let Some(region) = args.font_cjk_region {
        config.font.cjk_region = region;
    }
    if let Some(auto_download) = args.font_auto_download {
        config.font.auto_download = auto_download;
    }
    if let Some(force_update) = args.font_force_update {
        config.font.force_update = force_update;
    }
    if let Some(mode) = args.font_system_fallback {
        config.font.system_fallback = mode;
    }

    if let Some(optimize) = args.png_opt {
        config.png.optimize = optimize;
    }
    if let Some(level) = args.png_opt_level {
        config.png.level = level;
    }
    if let Some(strip) = args.png_strip {
        config.png.strip = strip;
    }
    Ok(())
}
