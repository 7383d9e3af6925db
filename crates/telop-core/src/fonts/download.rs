use super::cjk::{cjk_region_assets, cjk_region_families, collect_cjk_regions};
use super::constants::{AUTO_FALLBACK_EMOJI, DEFAULT_GITHUB_PROXIES, NOTO_EMOJI};
use super::dirs::resolve_font_dirs;
use super::models::{FontAsset, FontFallbackNeeds};
use super::system::{
    family_key, invalidate_font_caches, load_app_font_families, load_system_font_families,
};
use crate::{Config, Error, FontSystemFallback, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(600))
        .build()
});

// Assets already fetched (or tried) in this process, keyed by target path.
// A session re-renders on every edit; a failing mirror must not be retried
// each time.
static ATTEMPTED_ASSETS: Lazy<Mutex<HashSet<PathBuf>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn env_flag(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    let value = value.trim().to_ascii_lowercase();
    Some(!(value == "0" || value == "false" || value == "no" || value == "off"))
}

pub(crate) fn auto_download_enabled(config: &Config) -> bool {
    env_flag("TELOP_FONT_AUTO_DOWNLOAD").unwrap_or(config.font.auto_download)
}

pub(crate) fn force_update_enabled(config: &Config) -> bool {
    env_flag("TELOP_FONT_FORCE_UPDATE").unwrap_or(config.font.force_update)
}

pub(crate) fn github_proxy_candidates() -> Vec<String> {
    if let Ok(value) = env::var("TELOP_GITHUB_PROXY") {
        let parts = value
            .split(',')
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        if !parts.is_empty() {
            return parts;
        }
    }
    DEFAULT_GITHUB_PROXIES
        .iter()
        .map(|v| v.to_string())
        .collect()
}

pub(crate) fn apply_github_proxy(url: &str, proxy: &str) -> String {
    let mut base = proxy.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    format!("{base}{url}")
}

/// Direct fetch first, then each proxy once.
pub(crate) fn build_github_candidates() -> Vec<Option<String>> {
    let mut seen = HashSet::new();
    let mut candidates = vec![None];
    for proxy in github_proxy_candidates() {
        if seen.insert(proxy.clone()) {
            candidates.push(Some(proxy));
        }
    }
    candidates
}

pub(crate) enum FetchOutcome {
    Ok(Box<ureq::Response>),
    NotModified,
}

pub(crate) fn fetch_with_candidates(url: &str, headers: &[(&str, &str)]) -> Result<FetchOutcome> {
    let mut last_error: Option<String> = None;
    for proxy_opt in build_github_candidates() {
        let via = proxy_opt.as_deref().unwrap_or("direct");
        let target = match &proxy_opt {
            Some(proxy) => apply_github_proxy(url, proxy),
            None => url.to_string(),
        };
        log::debug!("fetching {url} via {via}");
        let mut req = HTTP_AGENT.get(&target).set("User-Agent", "telop/auto-font");
        for (key, value) in headers {
            req = req.set(key, value);
        }
        match req.call() {
            Ok(resp) if resp.status() == 304 => return Ok(FetchOutcome::NotModified),
            Ok(resp) => return Ok(FetchOutcome::Ok(Box::new(resp))),
            Err(ureq::Error::Status(304, _)) => return Ok(FetchOutcome::NotModified),
            Err(err) => {
                log::debug!("fetch failed via {via}: {err}");
                last_error = Some(err.to_string());
            }
        }
    }
    Err(Error::Render(format!(
        "download failed: {}",
        last_error.unwrap_or_else(|| "unknown error".to_string())
    )))
}

/// Downloads `url` into `target`, revalidating with the stored ETag.
///
/// Returns `Ok(false)` when the server reports the cached copy is current.
pub(crate) fn download_url_with_etag(url: &str, target: &Path, force_update: bool) -> Result<bool> {
    let etag_path = target.with_extension(format!(
        "{}.etag",
        target
            .extension()
            .and_then(|v| v.to_str())
            .unwrap_or("font")
    ));
    let etag = if target.exists() && !force_update {
        fs::read_to_string(&etag_path)
            .ok()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
    } else {
        None
    };
    let mut headers: Vec<(&str, &str)> = Vec::new();
    if let Some(tag) = etag.as_deref() {
        headers.push(("If-None-Match", tag));
    }
    match fetch_with_candidates(url, &headers)? {
        FetchOutcome::Ok(resp) => {
            let etag_value = resp.header("ETag").map(|v| v.to_string());
            let temp = target.with_extension("download");
            if let Err(err) = write_body(resp, &temp, target) {
                if let Err(cleanup) = fs::remove_file(&temp) {
                    log::debug!("could not remove {}: {cleanup}", temp.display());
                }
                return Err(err);
            }
            if let Some(etag) = etag_value {
                if let Err(err) = fs::write(&etag_path, etag.as_bytes()) {
                    log::warn!("could not store etag {}: {err}", etag_path.display());
                }
            }
            Ok(true)
        }
        FetchOutcome::NotModified => Ok(false),
    }
}

fn write_body(resp: Box<ureq::Response>, temp: &Path, target: &Path) -> Result<()> {
    let mut reader = resp.into_reader();
    let mut file = fs::File::create(temp)?;
    std::io::copy(&mut reader, &mut file)?;
    file.sync_all()?;
    fs::rename(temp, target)?;
    Ok(())
}

pub(crate) fn download_asset(asset: &FontAsset, dir: &Path, force_update: bool) -> Result<bool> {
    let target = dir.join(asset.filename);
    let mut last_error: Option<Error> = None;
    for url in asset.urls {
        match download_url_with_etag(url, &target, force_update) {
            Ok(downloaded) => return Ok(downloaded),
            Err(err) => {
                log::debug!("download failed from {url}: {err}");
                last_error = Some(err);
            }
        }
    }
    Err(last_error
        .unwrap_or_else(|| Error::Render("font download failed: no available urls".to_string())))
}

/// Like [`download_asset`], but at most once per target path per process.
///
/// Returns `None` when the asset was already fetched or tried.
pub(crate) fn download_asset_once(
    asset: &FontAsset,
    dir: &Path,
    force_update: bool,
) -> Option<Result<bool>> {
    let target = dir.join(asset.filename);
    let first = {
        let mut attempted = match ATTEMPTED_ASSETS.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        attempted.insert(target)
    };
    if !first {
        return None;
    }
    Some(download_asset(asset, dir, force_update))
}

pub(crate) fn any_family_present(families: &[&str], set: &HashSet<String>) -> bool {
    families.iter().any(|name| set.contains(&family_key(name)))
}

/// Decides whether a family group should be fetched into the app font dir.
///
/// A family the system already provides is left alone. A family that is
/// already in the app dir is only refreshed when forced.
pub(crate) fn should_fetch(app_has: bool, system_has: bool, force_update: bool) -> bool {
    if app_has {
        return force_update;
    }
    !system_has
}

/// Fetches the CJK and emoji fonts the caption needs into the app font dir.
///
/// Failures are logged and swallowed so a render can still proceed with
/// whatever fonts are installed.
pub(crate) fn ensure_fonts_available(config: &Config, needs: &FontFallbackNeeds) -> Result<()> {
    if !auto_download_enabled(config) {
        log::debug!("font auto-download disabled");
        return Ok(());
    }
    if !needs.needs_cjk && !needs.needs_emoji {
        log::debug!("no font downloads required");
        return Ok(());
    }
    let force_update = force_update_enabled(config);
    let font_dirs = resolve_font_dirs(config)?;
    let Some(primary_dir) = font_dirs.first() else {
        return Ok(());
    };
    let app_families = load_app_font_families(config).unwrap_or_default();
    let allow_system = !matches!(config.font.system_fallback, FontSystemFallback::Never);
    let system_families = if allow_system {
        load_system_font_families()
    } else {
        HashSet::new()
    };

    let mut wanted: Vec<(String, FontAsset)> = Vec::new();
    for region in collect_cjk_regions(config, needs) {
        let families = cjk_region_families(region);
        let app_has = any_family_present(families, &app_families);
        let system_has = allow_system && any_family_present(families, &system_families);
        if should_fetch(app_has, system_has, force_update) {
            for asset in cjk_region_assets(region) {
                wanted.push((format!("{region:?} CJK"), asset));
            }
        }
    }
    if needs.needs_emoji {
        let app_has = any_family_present(AUTO_FALLBACK_EMOJI, &app_families);
        let system_has = allow_system && any_family_present(AUTO_FALLBACK_EMOJI, &system_families);
        if should_fetch(app_has, system_has, force_update) {
            wanted.push(("emoji".to_string(), NOTO_EMOJI));
        }
    }
    if wanted.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(primary_dir)?;
    let mut downloaded_any = false;
    for (label, asset) in wanted {
        let Some(outcome) = download_asset_once(&asset, primary_dir, force_update) else {
            log::debug!("skipping {}: already attempted", asset.filename);
            continue;
        };
        match outcome {
            Ok(true) => {
                downloaded_any = true;
                log::info!("downloaded font {}", asset.filename);
            }
            Ok(false) => log::debug!("font up-to-date {}", asset.filename),
            Err(err) => log::warn!("font download failed for {label}: {err}"),
        }
    }

    if downloaded_any {
        invalidate_font_caches();
    }
    Ok(())
}

