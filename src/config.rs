use crate::types::BoundingBox;
use crate::RasterError;

/// Upper-left longitude of the default (Berkeley) map.
pub const ROOT_ULLON: f64 = -122.2998046875;
/// Upper-left latitude of the default map.
pub const ROOT_ULLAT: f64 = 37.8901903534;
/// Lower-right longitude of the default map.
pub const ROOT_LRLON: f64 = -122.2119140625;
/// Lower-right latitude of the default map.
pub const ROOT_LRLAT: f64 = 37.8280796649;
/// Edge length of every tile image, in pixels.
pub const TILE_SIZE: u32 = 256;
/// Finest zoom depth with pre-rendered tiles.
pub const MAX_DEPTH: u8 = 7;

/// Static description of the tiled map: its root extent and tile size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    root: BoundingBox,
    tile_size: u32,
}

impl MapConfig {
    pub fn new(root: BoundingBox, tile_size: u32) -> Result<Self, RasterError> {
        if tile_size == 0 {
            return Err(RasterError::configuration("tile size must be positive"));
        }
        root.validate()
            .map_err(|e| RasterError::configuration(format!("root bounds: {}", e)))?;
        Ok(Self { root, tile_size })
    }

    pub fn root(&self) -> &BoundingBox {
        &self.root
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            root: BoundingBox {
                west: ROOT_ULLON,
                north: ROOT_ULLAT,
                east: ROOT_LRLON,
                south: ROOT_LRLAT,
            },
            tile_size: TILE_SIZE,
        }
    }
}
