use base64::Engine;
use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::path::PathBuf;
use telop_core::{Config, ImageInput, RenderedImage};

#[napi(object)]
pub struct RenderOptions {
    pub image: String,
    /// "file" (default), "base64" or "datauri".
    pub image_kind: Option<String>,
    pub config_json: Option<String>,
}

#[napi]
pub fn render(options: RenderOptions) -> Result<Buffer> {
    let rendered = render_options(options)?;
    Ok(Buffer::from(rendered.png))
}

#[napi]
pub fn render_data_uri(options: RenderOptions) -> Result<String> {
    let rendered = render_options(options)?;
    Ok(rendered.to_data_uri())
}

#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn render_options(options: RenderOptions) -> Result<RenderedImage> {
    let config = match options.config_json {
        Some(json) => serde_json::from_str::<Config>(&json)
            .map_err(|err| Error::new(Status::InvalidArg, err.to_string()))?,
        None => Config::default(),
    };

    let input = match options.image_kind.as_deref() {
        None | Some("file") => ImageInput::File(PathBuf::from(options.image)),
        Some("datauri") => ImageInput::DataUri(options.image),
        Some("base64") => {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(options.image.trim())
                .map_err(|err| Error::new(Status::InvalidArg, err.to_string()))?;
            ImageInput::Bytes(bytes)
        }
        Some(other) => {
            return Err(Error::new(
                Status::InvalidArg,
                format!("unknown image kind: {other}"),
            ))
        }
    };

    let source = telop_core::load_image(&input).map_err(core_error)?;
    telop_core::render(&source, &config).map_err(core_error)
}

fn core_error(err: telop_core::Error) -> Error {
    let status = match err {
        telop_core::Error::InvalidInput(_) => Status::InvalidArg,
        _ => Status::GenericFailure,
    };
    Error::new(status, err.to_string())
}
