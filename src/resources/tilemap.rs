//! Tile map loaded from a Tiled JSON export.
//!
//! The map is read once at startup and stays immutable. Besides feeding the
//! renderer with tile placements, it answers the one question the simulation
//! asks every tick: is the tile under this pixel of a given type (for example
//! `"floor"`)?
//!
//! Tile types come from the tileset's per-tile `type` (Tiled < 1.9) or
//! `class` (Tiled >= 1.9) attribute.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::debug;
use raylib::prelude::{Color, Rectangle};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::errors::GameError;

/// Mask that strips Tiled's flip/rotation flags from a GID.
pub const FLIP_BITS_REMOVAL: u32 = 0x1FFF_FFFF;

/// Horizontal tile correction applied to type queries.
///
/// Actors are positioned by their sprite's top-left corner, which sits left
/// of the drawn feet; the tile under the feet is looked up one column to the
/// right of the probed pixel.
pub const TILE_X_OFFSET: i64 = 1;

/// Anything the simulation can ask about tile types.
pub trait TileTypeSource {
    /// Whether the tile covering pixel `(x, y)` on any layer has type `tile_type`.
    fn is_tile_of_type(&self, x: f32, y: f32, tile_type: &str) -> bool;
    /// Map size in pixels.
    fn pixel_size(&self) -> (f32, f32);
}

#[derive(Debug, Deserialize)]
struct TiledTile {
    id: u32,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    class: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TiledTileset {
    firstgid: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    columns: u32,
    #[serde(default)]
    tilewidth: u32,
    #[serde(default)]
    tileheight: u32,
    #[serde(default)]
    tiles: Vec<TiledTile>,
}

fn visible_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct TiledLayer {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default = "visible_by_default")]
    visible: bool,
    #[serde(default)]
    data: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct TiledMap {
    width: u32,
    height: u32,
    tilewidth: u32,
    tileheight: u32,
    #[serde(default)]
    backgroundcolor: Option<String>,
    layers: Vec<TiledLayer>,
    #[serde(default)]
    tilesets: Vec<TiledTileset>,
}

/// One tile layer: a row-major grid of GIDs (0 = empty).
#[derive(Debug, Clone)]
pub struct TileLayer {
    pub name: String,
    pub visible: bool,
    pub data: Vec<u32>,
}

impl TileLayer {
    /// Drawn in front of the actors.
    pub fn is_overlay(&self) -> bool {
        self.name.contains("Overlay")
    }
}

/// Tileset image and its grid layout.
#[derive(Debug, Clone)]
pub struct Tileset {
    pub first_gid: u32,
    /// Key under which the tileset texture is stored.
    pub tex_key: String,
    /// Image path, resolved against the map file's directory.
    pub image: PathBuf,
    pub columns: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

#[derive(Resource, Debug, Clone)]
pub struct TileMap {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Size of a tile in pixels.
    pub tile_width: u32,
    pub tile_height: u32,
    pub background: Option<Color>,
    pub layers: Vec<TileLayer>,
    /// Sorted by `first_gid`.
    pub tilesets: Vec<Tileset>,
    types: FxHashMap<u32, String>,
    /// First GIDs of tilesets without a single image; their tiles are not drawn.
    imageless: Vec<u32>,
}

/// Parse Tiled's `#rrggbb` / `#aarrggbb` colour strings.
fn parse_color(text: &str) -> Option<Color> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color::new(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::new(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => None,
    }
}

impl TileMap {
    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GameError::load_failed("tile map", path, e))?;
        Self::from_json_str(&text, path)
    }

    /// Parse a map from JSON text. `map_path` names the source in errors and
    /// anchors relative tileset image paths.
    pub fn from_json_str(json: &str, map_path: impl AsRef<Path>) -> Result<Self, GameError> {
        let map_path = map_path.as_ref();
        let fail = |reason: String| GameError::load_failed("tile map", map_path, reason);

        let raw: TiledMap = serde_json::from_str(json).map_err(|e| fail(e.to_string()))?;
        if raw.tilewidth == 0 || raw.tileheight == 0 {
            return Err(fail("tile size must not be zero".into()));
        }

        let cells = raw.width as usize * raw.height as usize;
        let mut layers = Vec::new();
        for layer in raw.layers.into_iter().filter(|l| l.kind == "tilelayer") {
            if layer.data.len() != cells {
                return Err(fail(format!(
                    "layer '{}' has {} tiles, expected {}",
                    layer.name,
                    layer.data.len(),
                    cells
                )));
            }
            layers.push(TileLayer {
                name: layer.name,
                visible: layer.visible,
                data: layer.data,
            });
        }

        let base_dir = map_path.parent().unwrap_or_else(|| Path::new(""));
        let mut types = FxHashMap::default();
        let mut tilesets = Vec::new();
        let mut imageless = Vec::new();
        for (index, ts) in raw.tilesets.into_iter().enumerate() {
            if let Some(source) = ts.source {
                return Err(fail(format!("external tileset '{}' is not supported", source)));
            }
            for tile in ts.tiles {
                if let Some(kind) = tile.kind.or(tile.class).filter(|k| !k.is_empty()) {
                    types.insert(ts.firstgid + tile.id, kind);
                }
            }
            let Some(image) = ts.image else {
                debug!("tileset '{}' has no single image, skipped for drawing", ts.name);
                imageless.push(ts.firstgid);
                continue;
            };
            let tex_key = if ts.name.is_empty() {
                format!("tileset{}", index)
            } else {
                format!("tileset:{}", ts.name)
            };
            tilesets.push(Tileset {
                first_gid: ts.firstgid,
                tex_key,
                image: base_dir.join(image),
                columns: ts.columns.max(1),
                tile_width: if ts.tilewidth == 0 { raw.tilewidth } else { ts.tilewidth },
                tile_height: if ts.tileheight == 0 { raw.tileheight } else { ts.tileheight },
            });
        }
        tilesets.sort_by_key(|ts| ts.first_gid);

        Ok(TileMap {
            width: raw.width,
            height: raw.height,
            tile_width: raw.tilewidth,
            tile_height: raw.tileheight,
            background: raw.backgroundcolor.as_deref().and_then(parse_color),
            layers,
            tilesets,
            types,
            imageless,
        })
    }

    pub fn pixel_width(&self) -> f32 {
        (self.width * self.tile_width) as f32
    }

    pub fn pixel_height(&self) -> f32 {
        (self.height * self.tile_height) as f32
    }

    /// Registered type of a (possibly flipped) GID.
    pub fn tile_type(&self, gid: u32) -> Option<&str> {
        self.types.get(&(gid & FLIP_BITS_REMOVAL)).map(String::as_str)
    }

    /// Tile grid cell probed for pixel `(x, y)`, or `None` outside the grid.
    pub fn probe_cell(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let tx = (x / self.tile_width as f32).floor() as i64 + TILE_X_OFFSET;
        let ty = (y / self.tile_height as f32).floor() as i64;
        if tx < 0 || ty < 0 || tx >= self.width as i64 || ty >= self.height as i64 {
            return None;
        }
        Some((tx as u32, ty as u32))
    }

    /// Whether the tile under pixel `(x, y)` on any layer is of `tile_type`.
    pub fn coord_is_type(&self, tile_type: &str, x: f32, y: f32) -> bool {
        let Some((tx, ty)) = self.probe_cell(x, y) else {
            return false;
        };
        let index = (ty * self.width + tx) as usize;
        self.layers.iter().any(|layer| {
            layer
                .data
                .get(index)
                .and_then(|&gid| self.tile_type(gid))
                .is_some_and(|kind| kind == tile_type)
        })
    }

    /// Tileset owning `gid` and the tile's source rectangle inside its image.
    pub fn tile_source_rect(&self, gid: u32) -> Option<(&Tileset, Rectangle)> {
        let gid = gid & FLIP_BITS_REMOVAL;
        if gid == 0 {
            return None;
        }
        let tileset = self.tilesets.iter().rev().find(|ts| ts.first_gid <= gid)?;
        if self
            .imageless
            .iter()
            .any(|&first| first > tileset.first_gid && first <= gid)
        {
            return None;
        }
        let local = gid - tileset.first_gid;
        let col = local % tileset.columns;
        let row = local / tileset.columns;
        Some((
            tileset,
            Rectangle {
                x: (col * tileset.tile_width) as f32,
                y: (row * tileset.tile_height) as f32,
                width: tileset.tile_width as f32,
                height: tileset.tile_height as f32,
            },
        ))
    }
}

impl TileTypeSource for TileMap {
    fn is_tile_of_type(&self, x: f32, y: f32, tile_type: &str) -> bool {
        self.coord_is_type(tile_type, x, y)
    }

    fn pixel_size(&self) -> (f32, f32) {
        (self.pixel_width(), self.pixel_height())
    }
}
