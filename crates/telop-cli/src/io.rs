use std::error::Error;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use telop_core::{export_png, export_png_to, RenderedImage};

pub(crate) fn write_output_with_tty(
    rendered: &RenderedImage,
    output: Option<&PathBuf>,
    stdout_is_tty: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(path) = output {
        let path = export_png_to(rendered, path)?;
        if stdout_is_tty {
            print_wrote(&path);
        }
        return Ok(());
    }

    if stdout_is_tty {
        let path = export_png(rendered, Path::new("."))?;
        print_wrote(&path);
        return Ok(());
    }

    let mut stdout = io::stdout();
    stdout.write_all(&rendered.png)?;
    Ok(())
}

pub(crate) fn print_wrote(path: &Path) {
    println!("WROTE {}", path.display());
}

pub(crate) fn read_stdin() -> Result<Vec<u8>, io::Error> {
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    Ok(buffer)
}

pub(crate) fn read_stdin_with(stdin_override: Option<&[u8]>) -> Result<Vec<u8>, io::Error> {
    if let Some(value) = stdin_override {
        return Ok(value.to_vec());
    }
    read_stdin()
}
