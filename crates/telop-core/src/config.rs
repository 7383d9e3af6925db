use serde::{Deserialize, Serialize};

use crate::{RenderParameters, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_PNG_OPT_LEVEL};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub params: RenderParameters,
    pub canvas: CanvasOptions,
    pub font: Font,
    pub png: PngOptions,
}

/// Bounding box the source image is shrunk into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: String,
    pub file: Option<String>,
    pub fallbacks: Vec<String>,
    #[serde(rename = "system_fallback")]
    pub system_fallback: FontSystemFallback,
    #[serde(rename = "auto_download")]
    pub auto_download: bool,
    #[serde(rename = "force_update")]
    pub force_update: bool,
    #[serde(rename = "cjk_region")]
    pub cjk_region: CjkRegion,
    #[serde(rename = "dirs")]
    pub dirs: Vec<String>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Noto Sans JP".to_string(),
            file: None,
            fallbacks: Vec::new(),
            system_fallback: FontSystemFallback::default(),
            auto_download: true,
            force_update: false,
            cjk_region: CjkRegion::default(),
            dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSystemFallback {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CjkRegion {
    #[default]
    Auto,
    Sc,
    Tc,
    Hk,
    Jp,
    Kr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PngStrip {
    None,
    #[default]
    Safe,
    All,
}

/// Lossless output settings; the caption pixels are never altered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PngOptions {
    pub optimize: bool,
    pub level: u8,
    pub strip: PngStrip,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            optimize: true,
            level: DEFAULT_PNG_OPT_LEVEL,
            strip: PngStrip::Safe,
        }
    }
}
