use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use mazecore::GenerationAlgorithm;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::base_path;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

const DEFAULT_WIDTH: i32 = 35;
const DEFAULT_HEIGHT: i32 = 20;
const DEFAULT_ANIMATION_DELAY_MS: u64 = 30;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_algorithm: Option<GenerationAlgorithm>,
    #[serde(default)]
    pub default_width: Option<i32>,
    #[serde(default)]
    pub default_height: Option<i32>,
    #[serde(default)]
    pub animation_delay_ms: Option<u64>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default_algorithm(mut self, value: GenerationAlgorithm) -> Self {
        self.default_algorithm = Some(value);
        self
    }

    pub fn get_default_algorithm(&self) -> GenerationAlgorithm {
        self.default_algorithm.unwrap_or_default()
    }

    pub fn set_default_width(mut self, value: i32) -> Self {
        self.default_width = Some(value);
        self
    }

    pub fn get_default_width(&self) -> i32 {
        self.default_width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn set_default_height(mut self, value: i32) -> Self {
        self.default_height = Some(value);
        self
    }

    pub fn get_default_height(&self) -> i32 {
        self.default_height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn set_animation_delay_ms(mut self, value: u64) -> Self {
        self.animation_delay_ms = Some(value);
        self
    }

    pub fn get_animation_delay_ms(&self) -> u64 {
        self.animation_delay_ms.unwrap_or(DEFAULT_ANIMATION_DELAY_MS)
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        base_path().join("settings.ron")
    }

    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(text)?)
    }

    /// Reads settings from `path`, a missing file is created with the default settings.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings_string) => Self::from_ron(&settings_string),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::from_ron(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
