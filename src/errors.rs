//! Error type shared by loaders and the render path.
//!
//! The simulation itself never fails; everything that can go wrong lives at
//! the edges (reading files, uploading textures, drawing). Those failures are
//! reported as a [`GameError`] and end the frame loop with a failure status.

use std::fmt;
use std::path::{Path, PathBuf};

/// Failure raised while loading assets, parsing configuration or drawing.
#[derive(Debug)]
pub enum GameError {
    /// A map, texture or other asset could not be loaded.
    ResourceLoadFailed {
        /// Short name of the asset kind ("tile map", "texture", ...).
        what: &'static str,
        path: PathBuf,
        reason: String,
    },
    /// Drawing a frame could not be completed.
    RenderFailed(String),
    /// The configuration file exists but holds unusable values.
    Config(String),
}

impl GameError {
    /// Build a [`GameError::ResourceLoadFailed`] from any displayable cause.
    pub fn load_failed(what: &'static str, path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        GameError::ResourceLoadFailed {
            what,
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ResourceLoadFailed { what, path, reason } => {
                write!(f, "failed to load {} '{}': {}", what, path.display(), reason)
            }
            GameError::RenderFailed(reason) => write!(f, "render failed: {}", reason),
            GameError::Config(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}
