use serde::de::DeserializeOwned;
use std::error::Error;

fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

pub(crate) fn parse_font_fallbacks(input: &str) -> Result<Vec<String>, Box<dyn Error>> {
    Ok(parse_list(input))
}

pub(crate) fn parse_font_dirs(input: &str) -> Result<Vec<String>, Box<dyn Error>> {
    Ok(parse_list(input))
}

/// Accepts `#RGB`/`#RRGGBB` with or without `#` and returns `#RRGGBB`.
pub(crate) fn parse_color(input: &str) -> Result<String, Box<dyn Error>> {
    let [r, g, b] = telop_core::parse_hex_color(input)?;
    Ok(format!("#{r:02X}{g:02X}{b:02X}"))
}

/// Parses a lowercase config keyword (e.g. `never`, `kr`) into the matching
/// config enum, so flags and JSON accept the same spellings.
pub(crate) fn parse_choice<T: DeserializeOwned>(input: &str) -> Result<T, String> {
    let keyword = input.trim().to_ascii_lowercase();
    serde_json::from_value(serde_json::Value::String(keyword))
        .map_err(|_| format!("unknown value: {input}"))
}
