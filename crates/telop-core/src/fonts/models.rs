use std::collections::HashSet;
use unicode_script::Script;

#[derive(Debug, Default, Clone)]
pub(crate) struct FontFallbackNeeds {
    pub(crate) needs_unicode: bool,
    pub(crate) needs_cjk: bool,
    pub(crate) needs_emoji: bool,
    pub(crate) scripts: HashSet<Script>,
}

#[derive(Debug, Clone)]
pub(crate) struct FontPlan {
    pub(crate) font_family: String,
    pub(crate) needs_system_fonts: bool,
}

/// One weight of a downloadable font, e.g. the Black cut of Noto Sans CJK JP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FontAsset {
    pub(crate) filename: &'static str,
    pub(crate) urls: &'static [&'static str],
}
