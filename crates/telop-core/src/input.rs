use base64::Engine;
use image::{DynamicImage, ImageFormat};
use std::path::PathBuf;

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub enum ImageInput {
    File(PathBuf),
    Bytes(Vec<u8>),
    DataUri(String),
}

/// A decoded upload. Never modified after loading; a new upload replaces it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    bytes: Vec<u8>,
    mime: &'static str,
    raster: DynamicImage,
}

impl SourceImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes)
            .map_err(|_| Error::InvalidInput("unsupported image format".to_string()))?;
        let raster = image::load_from_memory_with_format(&bytes, format)
            .map_err(|err| Error::Decode(format!("{}: {err}", format_name(format))))?;
        log::debug!(
            "decoded {} source {}x{}",
            format_name(format),
            raster.width(),
            raster.height()
        );
        Ok(Self {
            bytes,
            mime: format.to_mime_type(),
            raster,
        })
    }

    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let (mime, payload) = split_data_uri(uri)?;
        if !mime.starts_with("image/") {
            return Err(Error::InvalidInput(format!("not an image data uri: {mime}")));
        }
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|err| Error::InvalidInput(format!("data uri base64: {err}")))?;
        Self::from_bytes(bytes)
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn mime(&self) -> &str {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn raster(&self) -> &DynamicImage {
        &self.raster
    }

    /// The upload as it was read, inline-encoded.
    pub fn to_data_uri(&self) -> String {
        data_uri(self.mime, &self.bytes)
    }
}

pub fn load_image(input: &ImageInput) -> Result<SourceImage> {
    match input {
        ImageInput::File(path) => {
            let bytes = std::fs::read(path)?;
            log::info!("loaded {} ({} bytes)", path.display(), bytes.len());
            SourceImage::from_bytes(bytes)
        }
        ImageInput::Bytes(bytes) => SourceImage::from_bytes(bytes.clone()),
        ImageInput::DataUri(uri) => SourceImage::from_data_uri(uri),
    }
}

pub(crate) fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

fn split_data_uri(uri: &str) -> Result<(&str, &str)> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidInput("missing data: prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidInput("data uri without payload".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::InvalidInput("data uri is not base64".to_string()))?;
    Ok((mime, payload))
}

fn format_name(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("image")
}
