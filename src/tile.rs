use std::fmt;

use crate::config::MAX_DEPTH;
use crate::tile_geometry::TileGeometry;
use crate::types::BoundingBox;

/// One pre-rendered tile image, addressed by depth, column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub depth: u8,
    pub x: u32,
    pub y: u32,
}

impl Tile {
    pub fn new(depth: u8, x: u32, y: u32) -> Self {
        Self { depth, x, y }
    }

    /// Name of the image in tile storage, `d<depth>_x<col>_y<row>.png`.
    pub fn file_name(&self) -> String {
        format!("d{}_x{}_y{}.png", self.depth, self.x, self.y)
    }

    /// Parses a name produced by [`Tile::file_name`].
    pub fn from_file_name(name: &str) -> Option<Tile> {
        let rest = name.strip_suffix(".png")?.strip_prefix('d')?;
        let (depth, rest) = rest.split_once("_x")?;
        let (x, y) = rest.split_once("_y")?;

        let tile = Tile {
            depth: depth.parse().ok()?,
            x: x.parse().ok()?,
            y: y.parse().ok()?,
        };
        if tile.depth > MAX_DEPTH {
            return None;
        }
        let count = 1u32 << tile.depth;
        if tile.x >= count || tile.y >= count {
            return None;
        }
        Some(tile)
    }

    /// Geographic cell covered by this tile.
    pub fn bounding_box(&self, geometry: &TileGeometry) -> BoundingBox {
        BoundingBox {
            west: geometry.lon_edge(self.depth, self.x),
            north: geometry.lat_edge(self.depth, self.y),
            east: geometry.lon_edge(self.depth, self.x + 1),
            south: geometry.lat_edge(self.depth, self.y + 1),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
