use crate::io::print_wrote;
use dialoguer::{Confirm, Input, Select};
use std::error::Error;
use std::path::{Path, PathBuf};
use telop_core::{export_png_to, load_image, ImageInput, LineRole, Session};

const PREVIEW_NAME: &str = "telop-preview.png";

pub(crate) fn run_interactive(
    session: &mut Session,
    image: Option<&str>,
    download_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let prompter = DialoguerPrompter;
    let preview = std::env::temp_dir().join(PREVIEW_NAME);
    run_interactive_with(&prompter, session, image, &preview, download_dir)
}

pub(crate) trait Prompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize)
        -> Result<usize, Box<dyn Error>>;
    fn input_string(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String, Box<dyn Error>>;
    fn input_i32(&self, prompt: &str, default: i32) -> Result<i32, Box<dyn Error>>;
    fn input_f32(&self, prompt: &str, default: f32) -> Result<f32, Box<dyn Error>>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, Box<dyn Error>>;
}

struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(
        &self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, Box<dyn Error>> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn input_string(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String, Box<dyn Error>> {
        let mut input = Input::new().with_prompt(prompt).allow_empty(allow_empty);
        if let Some(value) = default {
            input = input.default(value.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn input_i32(&self, prompt: &str, default: i32) -> Result<i32, Box<dyn Error>> {
        Ok(Input::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()?)
    }

    fn input_f32(&self, prompt: &str, default: f32) -> Result<f32, Box<dyn Error>> {
        Ok(Input::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, Box<dyn Error>> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Text(LineRole),
    Size(LineRole),
    Offset(LineRole),
    ShadowOffset,
    ShadowBlur,
    AuthorColor,
    TitleColor,
    Image,
    Download,
    Quit,
}

impl MenuItem {
    fn all() -> Vec<MenuItem> {
        let mut items = Vec::new();
        for role in LineRole::ALL {
            items.push(MenuItem::Text(role));
            items.push(MenuItem::Size(role));
            items.push(MenuItem::Offset(role));
        }
        items.extend([
            MenuItem::ShadowOffset,
            MenuItem::ShadowBlur,
            MenuItem::AuthorColor,
            MenuItem::TitleColor,
            MenuItem::Image,
            MenuItem::Download,
            MenuItem::Quit,
        ]);
        items
    }

    fn label(self) -> String {
        match self {
            MenuItem::Text(role) => format!("Line {} text", role.index() + 1),
            MenuItem::Size(role) => format!("Line {} font size", role.index() + 1),
            MenuItem::Offset(role) => format!("Line {} offset", role.index() + 1),
            MenuItem::ShadowOffset => "Shadow offset".to_string(),
            MenuItem::ShadowBlur => "Shadow blur".to_string(),
            MenuItem::AuthorColor => "Author color".to_string(),
            MenuItem::TitleColor => "Title color".to_string(),
            MenuItem::Image => "Select image".to_string(),
            MenuItem::Download => "Download".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

/// Menu loop over a live session. Each accepted edit re-renders and
/// rewrites `preview`; rejected values are reported and the loop goes on.
pub(crate) fn run_interactive_with(
    prompter: &dyn Prompter,
    session: &mut Session,
    image: Option<&str>,
    preview: &Path,
    download_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let path = match image {
        Some(path) if !path.trim().is_empty() && path != "-" => path.to_string(),
        _ => prompter.input_string("Image file path", None, true)?,
    };
    select_image(session, &path, preview)?;

    let items = MenuItem::all();
    let labels = items.iter().map(|item| item.label()).collect::<Vec<_>>();
    let label_refs = labels.iter().map(String::as_str).collect::<Vec<_>>();
    let mut last = 0;
    let mut downloaded = false;

    loop {
        let choice = prompter.select("Edit caption", &label_refs, last)?;
        let Some(&item) = items.get(choice) else {
            continue;
        };
        last = choice;
        let label = item.label();
        let current = session.params().clone();
        let next = match item {
            MenuItem::Text(role) => {
                let default = current.line(role).text.as_str();
                let text = prompter.input_string(&label, Some(default), true)?;
                current.with_text(role, text)
            }
            MenuItem::Size(role) => {
                let size = prompter.input_i32(&label, current.line(role).font_size)?;
                current.with_font_size(role, size)
            }
            MenuItem::Offset(role) => {
                let offset = prompter.input_i32(&label, current.line(role).offset)?;
                current.with_offset(role, offset)
            }
            MenuItem::ShadowOffset => {
                let offset = prompter.input_f32(&label, current.shadow.offset)?;
                current.with_shadow_offset(offset)
            }
            MenuItem::ShadowBlur => {
                let blur = prompter.input_f32(&label, current.shadow.blur)?;
                current.with_shadow_blur(blur)
            }
            MenuItem::AuthorColor => {
                let default = current.author_color.as_str();
                let color = prompter.input_string(&label, Some(default), false)?;
                current.with_author_color(color.trim())
            }
            MenuItem::TitleColor => {
                let default = current.title_color.as_str();
                let color = prompter.input_string(&label, Some(default), false)?;
                current.with_title_color(color.trim())
            }
            MenuItem::Image => {
                let path = prompter.input_string("Image file path", None, true)?;
                if select_image(session, &path, preview)? {
                    downloaded = false;
                }
                continue;
            }
            MenuItem::Download => {
                match session.download(download_dir)? {
                    Some(path) => {
                        print_wrote(&path);
                        downloaded = true;
                    }
                    None => eprintln!("no image selected"),
                }
                continue;
            }
            MenuItem::Quit => {
                if downloaded
                    || session.rendered().is_none()
                    || prompter.confirm("Quit without downloading?", false)?
                {
                    return Ok(());
                }
                continue;
            }
        };
        match session.set_params(next) {
            Ok(_) => {
                downloaded = false;
                write_preview(session, preview)?;
            }
            Err(err) => eprintln!("{err}"),
        }
    }
}

/// Loads `path` into the session. Returns false when nothing was picked or
/// the file could not be used.
fn select_image(
    session: &mut Session,
    path: &str,
    preview: &Path,
) -> Result<bool, Box<dyn Error>> {
    let path = path.trim();
    if path.is_empty() {
        return Ok(false);
    }
    let source = match load_image(&ImageInput::File(PathBuf::from(path))) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{err}");
            return Ok(false);
        }
    };
    session.select_image(Some(source))?;
    write_preview(session, preview)?;
    Ok(true)
}

fn write_preview(session: &Session, preview: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(rendered) = session.rendered() {
        export_png_to(rendered, preview)?;
        println!("PREVIEW {}", preview.display());
    }
    Ok(())
}
