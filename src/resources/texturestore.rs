//! GPU textures by key.
//!
//! Textures are uploaded once during setup and looked up by the renderer.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

use crate::errors::GameError;

#[derive(Resource)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    /// Texture that must exist at draw time.
    pub fn require(&self, key: impl AsRef<str>) -> Result<&Texture2D, GameError> {
        let key = key.as_ref();
        self.map
            .get(key)
            .ok_or_else(|| GameError::RenderFailed(format!("texture '{}' is not loaded", key)))
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }
}
