//! Game configuration resource.
//!
//! Settings are read from an INI file once at startup. Every key is optional;
//! missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [video]
//! width = 800
//! height = 600
//! fullscreen = false
//! zoom = 2.0
//! target_fps = 60
//!
//! [audio]
//! enabled = true
//!
//! [world]
//! meter_in_pixel = 32
//! gravitation = 9.81
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::errors::GameError;

/// Default safe values for startup
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_ZOOM: f32 = 2.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_AUDIO_ENABLED: bool = true;
const DEFAULT_METER_IN_PIXEL: f32 = 32.0;
const DEFAULT_GRAVITATION: f32 = 9.81;
pub const DEFAULT_CONFIG_PATH: &str = "./default.ini";
/// Largest accepted window side in pixels.
pub const MAX_WINDOW_SIDE: u32 = 16384;

/// Narrow an INI integer, rejecting values that do not fit.
fn to_u32(key: &str, value: u64) -> Result<u32, GameError> {
    u32::try_from(value)
        .map_err(|_| GameError::Config(format!("{} {} is out of range", key, value)))
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    pub fullscreen: bool,
    /// Initial camera zoom; key 1 returns to it.
    pub zoom: f32,
    pub target_fps: u32,
    pub audio_enabled: bool,
    pub meter_in_pixel: f32,
    /// Gravitational acceleration in m/s².
    pub gravitation: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fullscreen: DEFAULT_FULLSCREEN,
            zoom: DEFAULT_ZOOM,
            target_fps: DEFAULT_TARGET_FPS,
            audio_enabled: DEFAULT_AUDIO_ENABLED,
            meter_in_pixel: DEFAULT_METER_IN_PIXEL,
            gravitation: DEFAULT_GRAVITATION,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current (default) values. An unreadable
    /// file is a [`GameError::ResourceLoadFailed`]; values outside their
    /// usable range are a [`GameError::Config`].
    pub fn load_from_file(&mut self) -> Result<(), GameError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| GameError::load_failed("config file", &self.config_path, e))?;
        self.apply(&config)?;

        info!(
            "Loaded config from {:?}: {}x{} window, fullscreen={}, zoom={}, fps={}, audio={}",
            self.config_path,
            self.width,
            self.height,
            self.fullscreen,
            self.zoom,
            self.target_fps,
            self.audio_enabled
        );
        Ok(())
    }

    /// Parse configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), GameError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(GameError::Config)?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), GameError> {
        // [video] section
        if let Some(width) = config.getuint("video", "width").ok().flatten() {
            self.width = to_u32("width", width)?;
        }
        if let Some(height) = config.getuint("video", "height").ok().flatten() {
            self.height = to_u32("height", height)?;
        }
        if let Some(fullscreen) = config.getbool("video", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }
        if let Some(zoom) = config.getfloat("video", "zoom").ok().flatten() {
            self.zoom = zoom as f32;
        }
        if let Some(fps) = config.getuint("video", "target_fps").ok().flatten() {
            self.target_fps = to_u32("target_fps", fps)?;
        }

        // [audio] section
        if let Some(enabled) = config.getbool("audio", "enabled").ok().flatten() {
            self.audio_enabled = enabled;
        }

        // [world] section
        if let Some(meter) = config.getfloat("world", "meter_in_pixel").ok().flatten() {
            self.meter_in_pixel = meter as f32;
        }
        if let Some(g) = config.getfloat("world", "gravitation").ok().flatten() {
            self.gravitation = g as f32;
        }

        self.validate()
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::Config(format!(
                "window size {}x{} must not be zero",
                self.width, self.height
            )));
        }
        if self.width > MAX_WINDOW_SIDE || self.height > MAX_WINDOW_SIDE {
            return Err(GameError::Config(format!(
                "window size {}x{} exceeds {} pixels per side",
                self.width, self.height, MAX_WINDOW_SIDE
            )));
        }
        if !(self.zoom >= 1.0) {
            return Err(GameError::Config(format!(
                "zoom {} must be at least 1",
                self.zoom
            )));
        }
        if !(self.meter_in_pixel > 0.0) {
            return Err(GameError::Config(format!(
                "meter_in_pixel {} must be positive",
                self.meter_in_pixel
            )));
        }
        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
