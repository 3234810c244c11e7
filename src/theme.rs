use crate::error::{AqError, Result};
use colored::Color;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_THEME_FILE: &str = "theme.toml";

// Resolved palette, hex already parsed. Startup fails before any rendering
// if the file is missing or malformed; there is no unstyled fallback.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub heading: Color,
    pub accent: Color,
    pub panel: Color,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    palette: PaletteFile,
}

#[derive(Debug, Deserialize)]
struct PaletteFile {
    heading: String,
    accent: String,
    panel: String,
}

pub fn load_theme(path: &Path) -> Result<Theme> {
    if !path.exists() {
        return Err(AqError::ThemeNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: ThemeFile = toml::from_str(&content)
        .map_err(|e| AqError::ThemeParse(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "theme loaded");

    Ok(Theme {
        heading: parse_hex(&file.palette.heading)?,
        accent: parse_hex(&file.palette.accent)?,
        panel: parse_hex(&file.palette.panel)?,
    })
}

fn parse_hex(value: &str) -> Result<Color> {
    let raw = value.strip_prefix('#').unwrap_or(value);
    if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AqError::ThemeParse(format!(
            "palette entries must be 6-digit hex colors, got: {value}"
        )));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&raw[range], 16)
            .map_err(|e| AqError::ThemeParse(format!("{value}: {e}")))
    };
    Ok(Color::TrueColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
