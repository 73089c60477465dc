//! Game settings
//!
//! Playfield geometry, movement cadence and RNG seed, loaded from JSON.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in grid units
    pub width: i32,
    /// Playfield height in grid units
    pub height: i32,
    /// Grid cell side length
    pub cell_size: i32,
    /// Seconds between movement ticks
    pub move_interval: f64,
    /// RNG seed for food placement
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            cell_size: CELL_SIZE,
            move_interval: MOVE_INTERVAL,
            seed: 0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        // Contact bodies are `cell_size - 1` wide, so a 1-unit cell never touches anything
        if self.cell_size < 2 {
            return Err(SettingsError::Invalid(format!(
                "cell_size must be at least 2, got {}",
                self.cell_size
            )));
        }
        if self.width > MAX_PLAYFIELD_EXTENT || self.height > MAX_PLAYFIELD_EXTENT {
            return Err(SettingsError::Invalid(format!(
                "playfield {}x{} exceeds the {} unit limit",
                self.width, self.height, MAX_PLAYFIELD_EXTENT
            )));
        }
        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(SettingsError::Invalid(format!(
                "playfield {}x{} is smaller than one cell",
                self.width, self.height
            )));
        }
        if !(self.move_interval.is_finite() && self.move_interval >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "move_interval must be a non-negative number, got {}",
                self.move_interval
            )));
        }
        Ok(())
    }
}
