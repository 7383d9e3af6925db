use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, BOLD_FONT_WEIGHT, HEAVY_FONT_WEIGHT, MAX_FONT_SIZE, MAX_LINE_OFFSET,
    MAX_SHADOW_BLUR, MAX_SHADOW_OFFSET, MIN_FONT_SIZE,
};

/// Position of a caption line, top to bottom.
///
/// The role fixes the styling of the line: the label and the author name are
/// drawn heavier and share the author color, the work title is lighter and
/// uses its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    Label,
    Author,
    Title,
}

impl LineRole {
    pub const ALL: [LineRole; 3] = [LineRole::Label, LineRole::Author, LineRole::Title];

    pub fn index(self) -> usize {
        match self {
            LineRole::Label => 0,
            LineRole::Author => 1,
            LineRole::Title => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn font_weight(self) -> u16 {
        match self {
            LineRole::Label | LineRole::Author => HEAVY_FONT_WEIGHT,
            LineRole::Title => BOLD_FONT_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLine {
    pub text: String,
    #[serde(rename = "size")]
    pub font_size: i32,
    pub offset: i32,
}

impl TextLine {
    pub fn new(text: impl Into<String>, font_size: i32, offset: i32) -> Self {
        Self {
            text: text.into(),
            font_size,
            offset,
        }
    }
}

impl Default for TextLine {
    fn default() -> Self {
        Self::new("", 24, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadow {
    pub offset: f32,
    pub blur: f32,
}

impl Shadow {
    pub fn is_visible(&self) -> bool {
        self.offset != 0.0 || self.blur > 0.0
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset: 2.0,
            blur: 0.0,
        }
    }
}

/// Everything the user can adjust about the caption.
///
/// Values are never edited in place: each `with_*` method consumes the
/// parameters and returns the replacement, and every replacement triggers a
/// full re-render in [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParameters {
    pub lines: [TextLine; 3],
    pub shadow: Shadow,
    pub author_color: String,
    pub title_color: String,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            lines: [
                TextLine::new("原 作", 60, 0),
                TextLine::new("山下 一郎", 70, -7),
                TextLine::new("「名探偵タロウ」（星月出版「週刊少年スター」連載中）", 12, 0),
            ],
            shadow: Shadow::default(),
            author_color: "#FFA500".to_string(),
            title_color: "#FFFFFF".to_string(),
        }
    }
}

impl RenderParameters {
    pub fn line(&self, role: LineRole) -> &TextLine {
        &self.lines[role.index()]
    }

    pub fn color_for(&self, role: LineRole) -> &str {
        match role {
            LineRole::Label | LineRole::Author => &self.author_color,
            LineRole::Title => &self.title_color,
        }
    }

    pub fn with_line(mut self, role: LineRole, line: TextLine) -> Self {
        self.lines[role.index()] = line;
        self
    }

    pub fn with_text(mut self, role: LineRole, text: impl Into<String>) -> Self {
        self.lines[role.index()].text = text.into();
        self
    }

    pub fn with_font_size(mut self, role: LineRole, font_size: i32) -> Self {
        self.lines[role.index()].font_size = font_size;
        self
    }

    pub fn with_offset(mut self, role: LineRole, offset: i32) -> Self {
        self.lines[role.index()].offset = offset;
        self
    }

    pub fn with_shadow_offset(mut self, offset: f32) -> Self {
        self.shadow.offset = offset;
        self
    }

    pub fn with_shadow_blur(mut self, blur: f32) -> Self {
        self.shadow.blur = blur;
        self
    }

    pub fn with_author_color(mut self, color: impl Into<String>) -> Self {
        self.author_color = color.into();
        self
    }

    pub fn with_title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = color.into();
        self
    }

    /// Checks the ranges the form controls allow.
    pub fn validate(&self) -> Result<()> {
        for role in LineRole::ALL {
            let line = self.line(role);
            let number = role.index() + 1;
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&line.font_size) {
                return Err(Error::InvalidInput(format!(
                    "line {number} font size {} outside {MIN_FONT_SIZE}..={MAX_FONT_SIZE}",
                    line.font_size
                )));
            }
            if !(-MAX_LINE_OFFSET..=MAX_LINE_OFFSET).contains(&line.offset) {
                return Err(Error::InvalidInput(format!(
                    "line {number} offset {} outside -{MAX_LINE_OFFSET}..={MAX_LINE_OFFSET}",
                    line.offset
                )));
            }
        }
        check_range("shadow offset", self.shadow.offset, MAX_SHADOW_OFFSET)?;
        check_range("shadow blur", self.shadow.blur, MAX_SHADOW_BLUR)?;
        parse_hex_color(&self.author_color)?;
        parse_hex_color(&self.title_color)?;
        Ok(())
    }
}

fn check_range(name: &str, value: f32, max: f32) -> Result<()> {
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(Error::InvalidInput(format!(
            "{name} {value} outside 0..={max}"
        )));
    }
    Ok(())
}

/// Parses `#RGB` or `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(value: &str) -> Result<[u8; 3]> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || Error::InvalidInput(format!("invalid color {value}"));
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (idx, ch) in hex.chars().enumerate() {
                let v = channel(&ch.to_string())?;
                out[idx] = v * 17;
            }
            Ok(out)
        }
        6 => Ok([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        _ => Err(invalid()),
    }
}

pub(crate) fn normalize_hex_color(value: &str) -> Result<String> {
    let [r, g, b] = parse_hex_color(value)?;
    Ok(format!("#{r:02X}{g:02X}{b:02X}"))
}
