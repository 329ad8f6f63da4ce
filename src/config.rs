// filepath: src/config.rs
//! Configuration handling for gfx-context
//!
//! This file defines the configuration structure and provides
//! functionality to load and save configuration from/to files.
//! `GfxConfig` holds the surface size, the output path of the demo
//! renderer and the drawing state a fresh context starts with.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::color::{to_native, Color};
use crate::context::DrawState;

/// Initial drawing state; unset fields fall back to `DrawState::default()`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DrawDefaults {
    pub antialias: Option<bool>,
    pub color: Option<[u8; 4]>, // RGBA
    pub stroke_width: Option<f32>,
}

impl DrawDefaults {
    /// Resolve into a concrete state
    pub fn resolve(&self) -> DrawState {
        let fallback = DrawState::default();
        DrawState {
            antialias: self.antialias.unwrap_or(fallback.antialias),
            color: self
                .color
                .map(|rgba| to_native(Color::from_rgba(rgba)))
                .unwrap_or(fallback.color),
            stroke_width: self.stroke_width.unwrap_or(fallback.stroke_width),
        }
    }
}

/// Configuration for the drawing surface and context defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GfxConfig {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,

    #[serde(default)]
    pub defaults: DrawDefaults,
}

impl Default for GfxConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            output: PathBuf::from("gfx-context.ppm"),
            defaults: DrawDefaults {
                antialias: Some(false),
                color: Some([0, 0, 0, 255]),
                stroke_width: Some(1.0),
            },
        }
    }
}

impl GfxConfig {
    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("gfx-context")
        } else {
            PathBuf::from(".config/gfx-context")
        };

        config_dir.join("config.toml")
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file, returning default if not found
    pub fn load_from_file() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_path(&Self::get_config_path())
    }

    /// Load configuration from `path`, writing the defaults there if it does not exist
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No configuration at {}, writing defaults", path.display());
                let default_config = Self::default();
                default_config.save_to_path(path)?;
                Ok(default_config)
            }
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to_path(&Self::get_config_path())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // Create the directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !Path::exists(parent) {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Drawing state a new context should start with
    pub fn draw_state(&self) -> DrawState {
        self.defaults.resolve()
    }
}
