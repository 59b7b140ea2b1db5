//! Color palette for rendered panels
//!
//! Every color the renderer uses is looked up by token, so previews can be
//! re-themed from a TOML file without touching the geometry.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A palette mapping color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Color mappings: token name -> color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

pub const MATERIAL: &str = "material";
pub const CUT_AWAY: &str = "cut-away";
pub const CUT_LINE: &str = "cut-line";
pub const WARNING: &str = "warning";
pub const HOLE_GUIDE: &str = "hole-guide";
pub const SELECTION: &str = "selection";
pub const ENGRAVING_DISPLAY: &str = "engraving-display";
pub const ENGRAVING_EXPORT: &str = "engraving-export";

/// Default palette
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
# Solid and removed material in the filled preview
material = "black"
cut-away = "white"
cut-line = "black"

# Validation overlays
warning = "blue"
hole-guide = "#CCCCCC"
selection = "red"

# Engraving text: on screen, and in the cut file
engraving-display = "#AAAAAA"
engraving-export = "#FF0000"

# Brick plate: main, shadow, highlight
brick-main = "#C91A09"
brick-shadow = "#720E0F"
brick-highlight = "#E4574A"
plate-main = "#237841"
plate-shadow = "#184632"
plate-highlight = "#4B9F4A"
"##;

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        })
    }

    /// Resolve a color token to a concrete value
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token, falling back to the default palette and
    /// then to black
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        "black".to_string()
    }

    /// Main, shadow and highlight colors of a brick family (`brick`, `plate`)
    pub fn brick_colors(&self, family: &str) -> [String; 3] {
        ["main", "shadow", "highlight"].map(|part| self.resolve_or_default(&format!("{family}-{part}")))
    }
}

impl Default for Palette {
    fn default() -> Self {
        let parsed: TomlPalette =
            toml::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML");
        Palette {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        }
    }
}
