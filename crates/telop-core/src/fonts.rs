mod cjk;
mod constants;
pub(crate) mod dirs;
mod download;
mod models;
mod scan;
mod system;

pub(crate) use cjk::*;
pub(crate) use constants::*;
pub(crate) use download::*;
pub(crate) use models::*;
pub(crate) use scan::*;
pub(crate) use system::*;
pub use system::invalidate_font_caches;
