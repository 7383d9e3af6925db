use std::error::Error;
use std::path::PathBuf;
use std::{env, fs};
use telop_core::Config;

const BASE_CONFIG: &str = include_str!("../configurations/base.json");

pub(crate) fn load_config(config_arg: Option<&str>) -> Result<(Config, bool), Box<dyn Error>> {
    let name = config_arg.unwrap_or("default");
    let is_default = name == "default";

    let config = match name {
        "default" | "base" => serde_json::from_str(BASE_CONFIG)?,
        "user" => load_user_config()?,
        _ => {
            let contents = fs::read_to_string(name)?;
            serde_json::from_str(&contents)?
        }
    };
    Ok((config, is_default))
}

pub(crate) fn load_user_config() -> Result<Config, Box<dyn Error>> {
    let path = user_config_path()?;
    if path.exists() {
        let contents = fs::read_to_string(&path)?;
        return Ok(serde_json::from_str(&contents)?);
    }
    log::debug!("no user config at {}, using base", path.display());
    serde_json::from_str(BASE_CONFIG).map_err(|err| err.into())
}

pub(crate) fn save_user_config(config: &Config) -> Result<PathBuf, Box<dyn Error>> {
    let path = user_config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(config)?)?;
    Ok(path)
}

pub(crate) fn user_config_path() -> Result<PathBuf, Box<dyn Error>> {
    if let Ok(path) = env::var("TELOP_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }
    let config_dir = if let Ok(path) = env::var("TELOP_CONFIG_DIR") {
        PathBuf::from(path)
    } else {
        default_app_dir()?.join("config")
    };
    Ok(config_dir.join("user.json"))
}

fn default_app_dir() -> Result<PathBuf, Box<dyn Error>> {
    if let Ok(path) = env::var("TELOP_HOME") {
        return Ok(PathBuf::from(path));
    }
    let home = if cfg!(windows) {
        if let Some(path) = env::var_os("USERPROFILE") {
            PathBuf::from(path)
        } else if let (Some(drive), Some(path)) =
            (env::var_os("HOMEDRIVE"), env::var_os("HOMEPATH"))
        {
            PathBuf::from(drive).join(path)
        } else {
            return Err("unable to resolve home directory".into());
        }
    } else if let Some(path) = env::var_os("HOME") {
        PathBuf::from(path)
    } else {
        return Err("unable to resolve home directory".into());
    };
    Ok(home.join(".telop"))
}
