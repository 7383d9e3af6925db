use std::collections::HashSet;
use unicode_script::{Script, UnicodeScript};

use crate::fonts::{
    cjk_region_families, is_cjk, is_emoji, push_family, AUTO_FALLBACK_EMOJI,
    AUTO_FALLBACK_GLOBAL,
};
use crate::params::normalize_hex_color;
use crate::{Baselines, CjkRegion, LineRole, RenderParameters, Result, SHADOW_OPACITY};

const SHADOW_FILTER_ID: &str = "shadow";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FontGroup {
    Default,
    Cjk,
    Emoji,
    Unicode,
}

fn font_group_for_char(ch: char, prev: Option<FontGroup>) -> FontGroup {
    if is_emoji(ch) {
        return FontGroup::Emoji;
    }
    if is_cjk(ch) {
        return FontGroup::Cjk;
    }
    // Spaces and punctuation stay with the run they sit in.
    if matches!(
        ch.script(),
        Script::Common | Script::Inherited | Script::Unknown
    ) {
        if let Some(prev) = prev {
            return prev;
        }
    }
    if ch <= '\u{7f}' {
        FontGroup::Default
    } else {
        FontGroup::Unicode
    }
}

fn split_text_by_font_group(text: &str) -> Vec<(FontGroup, String)> {
    let mut out: Vec<(FontGroup, String)> = Vec::new();
    for ch in text.chars() {
        let prev = out.last().map(|(group, _)| *group);
        let group = font_group_for_char(ch, prev);
        match out.last_mut() {
            Some((current, chunk)) if *current == group => chunk.push(ch),
            _ => out.push((group, ch.to_string())),
        }
    }
    out
}

struct FontFamilyVariants {
    default: String,
    cjk: String,
    emoji: String,
    unicode: String,
}

impl FontFamilyVariants {
    fn new(font_family: &str, region: CjkRegion) -> Self {
        let base = font_family
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        Self {
            default: base.join(", "),
            cjk: prefixed_family_list(&base, cjk_region_families(region)),
            emoji: prefixed_family_list(&base, AUTO_FALLBACK_EMOJI),
            unicode: prefixed_family_list(&base, AUTO_FALLBACK_GLOBAL),
        }
    }

    fn for_group(&self, group: FontGroup) -> &str {
        match group {
            FontGroup::Default => &self.default,
            FontGroup::Cjk => &self.cjk,
            FontGroup::Emoji => &self.emoji,
            FontGroup::Unicode => &self.unicode,
        }
    }
}

fn prefixed_family_list(base: &[String], prefix: &[&str]) -> String {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for name in prefix {
        push_family(&mut out, &mut seen, name);
    }
    for name in base {
        push_family(&mut out, &mut seen, name);
    }
    out.join(", ")
}

/// Builds the caption document: the scaled backdrop filling the canvas and
/// up to three centered text lines on top.
///
/// `backdrop_uri` must already be scaled to the pixel `canvas`. Lines are
/// centered on `center_x`, half of the unrounded fitted width.
pub(crate) fn build_svg(
    backdrop_uri: &str,
    canvas: (u32, u32),
    center_x: f64,
    params: &RenderParameters,
    baselines: &Baselines,
    font_family: &str,
    region: CjkRegion,
) -> Result<String> {
    let fonts = FontFamilyVariants::new(font_family, region);
    let shadow = params.shadow;
    let (width, height) = canvas;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    if shadow.is_visible() {
        svg.push_str("<defs>");
        svg.push_str(&shadow_filter(width, height, shadow.offset, shadow.blur));
        svg.push_str("</defs>");
    }
    svg.push_str(&format!(
        r#"<image x="0" y="0" width="{width}" height="{height}" preserveAspectRatio="none" xlink:href="{}"/>"#,
        escape_attr(backdrop_uri)
    ));

    for role in LineRole::ALL {
        let line = params.line(role);
        if line.text.is_empty() {
            continue;
        }
        let color = normalize_hex_color(params.color_for(role))?;
        let mut attrs = format!(
            r#" x="{center_x}" y="{}" text-anchor="middle" font-size="{}" font-weight="{}" fill="{color}""#,
            baselines.get(role),
            line.font_size,
            role.font_weight(),
        );
        if !fonts.default.is_empty() {
            attrs.push_str(&format!(r#" font-family="{}""#, escape_attr(&fonts.default)));
        }
        if shadow.is_visible() {
            attrs.push_str(&format!(r#" filter="url(#{SHADOW_FILTER_ID})""#));
        }
        svg.push_str(&format!(r#"<text xml:space="preserve"{attrs}>"#));
        for (group, chunk) in split_text_by_font_group(&line.text) {
            let family = fonts.for_group(group);
            if group == FontGroup::Default || family.is_empty() {
                svg.push_str(&format!("<tspan>{}</tspan>", escape_text(&chunk)));
            } else {
                svg.push_str(&format!(
                    r#"<tspan font-family="{}">{}</tspan>"#,
                    escape_attr(family),
                    escape_text(&chunk)
                ));
            }
        }
        svg.push_str("</text>");
    }

    svg.push_str("</svg>");
    Ok(svg)
}

/// Drop shadow in user space: the glyph alpha, optionally blurred, shifted
/// down-right by `offset` and tinted black, with the text drawn over it.
///
/// `blur` follows the canvas convention, so the Gaussian sigma is half of it.
fn shadow_filter(width: u32, height: u32, offset: f32, blur: f32) -> String {
    let mut out = format!(
        r#"<filter id="{SHADOW_FILTER_ID}" filterUnits="userSpaceOnUse" x="0" y="0" width="{width}" height="{height}" color-interpolation-filters="sRGB">"#
    );
    let offset_input = if blur > 0.0 {
        out.push_str(&format!(
            r#"<feGaussianBlur in="SourceAlpha" stdDeviation="{}" result="blurred"/>"#,
            blur / 2.0
        ));
        "blurred"
    } else {
        "SourceAlpha"
    };
    out.push_str(&format!(
        r#"<feOffset in="{offset_input}" dx="{offset}" dy="{offset}" result="offsetblur"/>"#
    ));
    out.push_str(&format!(
        r##"<feFlood flood-color="#000000" flood-opacity="{SHADOW_OPACITY}"/>"##
    ));
    out.push_str(r#"<feComposite in2="offsetblur" operator="in"/>"#);
    out.push_str(r#"<feMerge><feMergeNode/><feMergeNode in="SourceGraphic"/></feMerge>"#);
    out.push_str("</filter>");
    out
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
