//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` files. Stock
//! defaults are overridden by user config files, and a collection directory's
//! config overrides the one in the directory above it:
//!
//! ```text
//! collections/
//! ├── config.toml                  # Shared (overrides stock defaults)
//! ├── geometria-sacred-patterns/
//! │   ├── config.toml              # Collection (overrides shared)
//! │   ├── collection.toml
//! │   └── ...
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! collection_file = "collection.toml"
//!
//! [colors]
//! background = "#08061a"
//! surface = "#120f2a"
//! text = "#ece9ff"
//! text_muted = "#9c97c4"
//! border = "#2a2550"
//! purple = "#a78bfa"
//! cyan = "#22d3ee"
//! rose = "#fb7185"
//! gold = "#fbbf24"
//!
//! [hero]
//! max_particles = 80          # Hard cap on the population
//! area_per_particle = 12000.0 # One particle per this many square pixels
//! max_speed = 0.15            # Per-axis velocity bound, px per frame
//! radius = [0.5, 2.0]
//! hue = [240.0, 300.0]
//! link_distance = 150.0       # Pairs closer than this get a connecting line
//! link_alpha = 0.15           # Line opacity at distance 0
//! link_hue = 270.0
//! link_width = 0.5
//! snapshot_size = [1600, 640] # Backdrop SVG size
//! snapshot_frames = 120       # Frames simulated before the snapshot
//! # seed = 7                  # Fixed seed for reproducible backdrops
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Collection data file, relative to the collection directory.
    #[serde(default = "default_collection_file")]
    pub collection_file: String,
    /// Page colors, emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Hero particle backdrop.
    pub hero: HeroConfig,
}

fn default_collection_file() -> String {
    "collection.toml".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            collection_file: default_collection_file(),
            colors: ColorConfig::default(),
            hero: HeroConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hero.validate()
    }
}

/// Page color palette. The four accents color the hero stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    /// Card and panel background.
    pub surface: String,
    pub text: String,
    /// Secondary text: subtitles, card descriptions, placeholders.
    pub text_muted: String,
    pub border: String,
    pub purple: String,
    pub cyan: String,
    pub rose: String,
    pub gold: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#08061a".to_string(),
            surface: "#120f2a".to_string(),
            text: "#ece9ff".to_string(),
            text_muted: "#9c97c4".to_string(),
            border: "#2a2550".to_string(),
            purple: "#a78bfa".to_string(),
            cyan: "#22d3ee".to_string(),
            rose: "#fb7185".to_string(),
            gold: "#fbbf24".to_string(),
        }
    }
}

/// Hero particle backdrop settings.
///
/// The population is `min(max_particles, floor(w * h / area_per_particle))`,
/// which bounds the per-frame pairwise work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub max_particles: usize,
    /// Square pixels of canvas per particle.
    pub area_per_particle: f64,
    /// Each velocity component is drawn from `[-max_speed, max_speed]`.
    pub max_speed: f64,
    /// Particle radius range `[min, max]`.
    pub radius: [f64; 2],
    /// Particle hue range `[min, max]`, degrees.
    pub hue: [f64; 2],
    /// Pairs closer than this (px) are joined by a line.
    pub link_distance: f64,
    /// Line opacity at distance zero, falling linearly to 0 at `link_distance`.
    pub link_alpha: f64,
    pub link_hue: f64,
    pub link_width: f64,
    /// Width and height of the rendered backdrop snapshot.
    pub snapshot_size: [u32; 2],
    /// Frames simulated before the snapshot is taken.
    pub snapshot_frames: u32,
    /// Seed for the particle population. Random when absent.
    pub seed: Option<u64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            max_particles: 80,
            area_per_particle: 12000.0,
            max_speed: 0.15,
            radius: [0.5, 2.0],
            hue: [240.0, 300.0],
            link_distance: 150.0,
            link_alpha: 0.15,
            link_hue: 270.0,
            link_width: 0.5,
            snapshot_size: [1600, 640],
            snapshot_frames: 120,
            seed: None,
        }
    }
}

impl HeroConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("area_per_particle", self.area_per_particle),
            ("max_speed", self.max_speed),
            ("radius", self.radius[0]),
            ("radius", self.radius[1]),
            ("hue", self.hue[0]),
            ("hue", self.hue[1]),
            ("link_distance", self.link_distance),
            ("link_alpha", self.link_alpha),
            ("link_hue", self.link_hue),
            ("link_width", self.link_width),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "hero.{field} must be a finite number"
            )));
        }
        if self.area_per_particle <= 0.0 {
            return Err(ConfigError::Validation(
                "hero.area_per_particle must be positive".into(),
            ));
        }
        if self.max_speed < 0.0 {
            return Err(ConfigError::Validation(
                "hero.max_speed must not be negative".into(),
            ));
        }
        if self.radius[0] > self.radius[1] || self.radius[0] < 0.0 {
            return Err(ConfigError::Validation(
                "hero.radius must be [min, max] with 0 <= min <= max".into(),
            ));
        }
        if self.hue[0] > self.hue[1] {
            return Err(ConfigError::Validation(
                "hero.hue must be [min, max] with min <= max".into(),
            ));
        }
        if self.link_distance <= 0.0 {
            return Err(ConfigError::Validation(
                "hero.link_distance must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.link_alpha) {
            return Err(ConfigError::Validation(
                "hero.link_alpha must be 0-1".into(),
            ));
        }
        if self.snapshot_size[0] == 0 || self.snapshot_size[1] == 0 {
            return Err(ConfigError::Validation(
                "hero.snapshot_size values must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge overlays onto a base value in order, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config for a collection directory.
///
/// Layers, lowest priority first: stock defaults, the parent directory's
/// `config.toml`, the collection's own `config.toml`.
pub fn load_config(collection_dir: &Path) -> Result<SiteConfig, ConfigError> {
    let mut overlays = Vec::new();
    if let Some(parent) = collection_dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        overlays.extend(load_raw_config(parent)?);
    }
    overlays.extend(load_raw_config(collection_dir)?);
    resolve_config(stock_defaults_value(), overlays)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Config files can be placed next to a collection and in the directory above:
#   collections/config.toml               -> shared (overrides stock defaults)
#   collections/<collection>/config.toml  -> collection (overrides shared)
#
# Each level only needs the keys it wants to override.
# Unknown keys will cause an error.

# Collection data file (TOML or JSON), relative to the collection directory.
collection_file = "collection.toml"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#08061a"
surface = "#120f2a"      # Cards and panels
text = "#ece9ff"
text_muted = "#9c97c4"   # Subtitles, descriptions
border = "#2a2550"
# Accents, used by the hero stats
purple = "#a78bfa"
cyan = "#22d3ee"
rose = "#fb7185"
gold = "#fbbf24"

# ---------------------------------------------------------------------------
# Hero particle backdrop
# ---------------------------------------------------------------------------
[hero]
# Population = min(max_particles, floor(width * height / area_per_particle)).
max_particles = 80
area_per_particle = 12000.0

# Each velocity component is drawn from [-max_speed, max_speed], px per frame.
max_speed = 0.15

# Particle radius and hue ranges, [min, max].
radius = [0.5, 2.0]
hue = [240.0, 300.0]

# Particles closer than link_distance (px) are joined by a line whose
# opacity falls from link_alpha at distance 0 to nothing at link_distance.
link_distance = 150.0
link_alpha = 0.15
link_hue = 270.0
link_width = 0.5

# The published page shows a snapshot of the simulation.
snapshot_size = [1600, 640]
snapshot_frames = 120

# Fixed seed for a reproducible backdrop. Omit for a fresh one per build.
# seed = 7
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-purple: {purple};
    --color-cyan: {cyan};
    --color-rose: {rose};
    --color-gold: {gold};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        purple = colors.purple,
        cyan = colors.cyan,
        rose = colors.rose,
        gold = colors.gold,
    )
}
