use super::cjk::{cjk_region_families, collect_cjk_regions};
use super::constants::{
    AUTO_FALLBACK_EMOJI, AUTO_FALLBACK_GLOBAL, AUTO_FALLBACK_SANS, GENERIC_FALLBACK,
};
use super::dirs::resolve_font_dirs;
use super::models::{FontFallbackNeeds, FontPlan};
use crate::{Config, FontSystemFallback, Result};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

// Scanning system fonts is the slowest part of a render; every slider move
// re-renders, so the scan is done once per process.
static SYSTEM_FONTDB: Lazy<Mutex<Option<Arc<usvg::fontdb::Database>>>> =
    Lazy::new(|| Mutex::new(None));

pub(crate) fn push_family(out: &mut Vec<String>, seen: &mut HashSet<String>, name: &str) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return;
    }
    let key = trimmed.to_ascii_lowercase();
    if seen.insert(key) {
        out.push(trimmed.to_string());
    }
}

pub(crate) fn family_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

pub(crate) fn is_generic_family(name: &str) -> bool {
    matches!(
        name.trim().to_ascii_lowercase().as_str(),
        "serif" | "sans-serif" | "sans" | "monospace" | "cursive" | "fantasy"
    )
}

/// Ordered family list for the caption text, always ending in `sans-serif`.
pub(crate) fn build_font_families(config: &Config, needs: &FontFallbackNeeds) -> Vec<String> {
    let mut families = Vec::new();
    let mut seen = HashSet::new();
    push_family(&mut families, &mut seen, &config.font.family);
    for name in &config.font.fallbacks {
        push_family(&mut families, &mut seen, name);
    }
    for region in collect_cjk_regions(config, needs) {
        for name in cjk_region_families(region) {
            push_family(&mut families, &mut seen, name);
        }
    }
    if needs.needs_unicode {
        for name in AUTO_FALLBACK_GLOBAL {
            push_family(&mut families, &mut seen, name);
        }
    }
    if needs.needs_emoji {
        for name in AUTO_FALLBACK_EMOJI {
            push_family(&mut families, &mut seen, name);
        }
    }
    push_family(&mut families, &mut seen, GENERIC_FALLBACK);
    families
}

pub(crate) fn family_requires_system(name: &str, app_families: &HashSet<String>) -> bool {
    if is_generic_family(name) {
        return true;
    }
    !app_families.contains(&family_key(name))
}

pub(crate) fn needs_system_fonts(
    config: &Config,
    app_families: &HashSet<String>,
    families: &[String],
) -> bool {
    match config.font.system_fallback {
        FontSystemFallback::Never => return false,
        FontSystemFallback::Always => return true,
        FontSystemFallback::Auto => {}
    }
    // One resolvable family from the app dirs or the font file is enough.
    let has_file = config.font.file.is_some();
    !families.iter().any(|name| {
        (has_file && name.eq_ignore_ascii_case(&config.font.family))
            || !family_requires_system(name, app_families)
    })
}

pub(crate) fn build_font_plan(
    config: &Config,
    needs: &FontFallbackNeeds,
    app_families: &HashSet<String>,
) -> FontPlan {
    let families = build_font_families(config, needs);
    let needs_system_fonts = needs_system_fonts(config, app_families, &families);
    FontPlan {
        font_family: families.join(", "),
        needs_system_fonts,
    }
}

pub(crate) fn build_fontdb(
    config: &Config,
    needs_system_fonts: bool,
) -> Result<usvg::fontdb::Database> {
    let mut fontdb = if needs_system_fonts {
        (*cached_system_fontdb()).clone()
    } else {
        usvg::fontdb::Database::new()
    };
    if let Some(font_file) = &config.font.file {
        let bytes = std::fs::read(font_file)?;
        fontdb.load_font_data(bytes);
    }
    for dir in resolve_font_dirs(config)? {
        if dir.is_dir() {
            fontdb.load_fonts_dir(dir);
        }
    }
    let sans = resolve_sans_serif(&mut fontdb, config);
    log::debug!(
        "font database ready with {} faces (system fonts: {needs_system_fonts}, sans-serif: {})",
        fontdb.len(),
        sans.as_deref().unwrap_or("none")
    );
    Ok(fontdb)
}

/// Points the generic `sans-serif` family at a face that is loaded.
///
/// fontdb's built-in `sans-serif` is Arial, which many hosts lack. Every
/// caption family list ends in `sans-serif`, so it must resolve to
/// something: the configured families first, then common sans faces, then
/// the first loaded non-emoji family by name. Returns the chosen family.
pub(crate) fn resolve_sans_serif(
    fontdb: &mut usvg::fontdb::Database,
    config: &Config,
) -> Option<String> {
    let mut loaded: HashMap<String, String> = HashMap::new();
    for face in fontdb.faces() {
        for (family, _) in &face.families {
            loaded
                .entry(family_key(family))
                .or_insert_with(|| family.clone());
        }
    }
    let preferred = std::iter::once(config.font.family.as_str())
        .chain(config.font.fallbacks.iter().map(String::as_str))
        .chain(AUTO_FALLBACK_GLOBAL.iter().copied())
        .chain(AUTO_FALLBACK_SANS.iter().copied());
    let picked = preferred
        .filter(|name| !is_generic_family(name))
        .find_map(|name| loaded.get(&family_key(name)).cloned())
        .or_else(|| {
            loaded
                .iter()
                .filter(|(key, _)| !key.contains("emoji"))
                .map(|(_, name)| name)
                .min()
                .cloned()
        })?;
    fontdb.set_sans_serif_family(picked.clone());
    Some(picked)
}

fn cached_system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut guard = match SYSTEM_FONTDB.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(db) = guard.as_ref() {
        return db.clone();
    }
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    log::debug!("loaded {} system font faces", db.len());
    let db = Arc::new(db);
    *guard = Some(db.clone());
    db
}

/// Drops the cached system font scan, e.g. after new fonts were installed.
pub fn invalidate_font_caches() {
    let mut guard = match SYSTEM_FONTDB.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = None;
}

pub(crate) fn collect_font_families(db: &usvg::fontdb::Database) -> HashSet<String> {
    let mut families = HashSet::new();
    for face in db.faces() {
        for (family, _) in &face.families {
            families.insert(family_key(family));
        }
    }
    families
}

pub(crate) fn load_app_font_families(config: &Config) -> Result<HashSet<String>> {
    let mut fontdb = usvg::fontdb::Database::new();
    for dir in resolve_font_dirs(config)? {
        if dir.is_dir() {
            fontdb.load_fonts_dir(dir);
        }
    }
    Ok(collect_font_families(&fontdb))
}

pub(crate) fn load_system_font_families() -> HashSet<String> {
    collect_font_families(&cached_system_fontdb())
}
