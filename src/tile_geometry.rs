use crate::config::{MapConfig, MAX_DEPTH};
use crate::types::BoundingBox;

const DEPTHS: usize = MAX_DEPTH as usize + 1;

/// Per-depth tables derived once from the map configuration.
///
/// Depth 0 covers the whole root box with a single tile; every further depth
/// halves the tile edge, so depth `d` has `2^d` tiles along each axis.
#[derive(Debug, Clone)]
pub struct TileGeometry {
    root: BoundingBox,
    lon_dpp: [f64; DEPTHS],
    tile_count: [u32; DEPTHS],
}

impl TileGeometry {
    pub fn new(config: &MapConfig) -> Self {
        let root = *config.root();
        let mut lon_dpp = [0.0; DEPTHS];
        let mut tile_count = [0u32; DEPTHS];

        lon_dpp[0] = root.lon_span() / config.tile_size() as f64;
        tile_count[0] = 1;
        for depth in 1..DEPTHS {
            lon_dpp[depth] = lon_dpp[depth - 1] / 2.0;
            tile_count[depth] = 1u32 << depth;
        }

        Self {
            root,
            lon_dpp,
            tile_count,
        }
    }

    pub fn root(&self) -> &BoundingBox {
        &self.root
    }

    /// Longitude covered by one pixel of a tile at `depth`.
    pub fn lon_dpp(&self, depth: u8) -> f64 {
        self.lon_dpp[Self::index(depth)]
    }

    /// Tiles along either axis at `depth`.
    pub fn tile_count(&self, depth: u8) -> u32 {
        self.tile_count[Self::index(depth)]
    }

    pub fn tile_lon_span(&self, depth: u8) -> f64 {
        self.root.lon_span() / self.tile_count(depth) as f64
    }

    pub fn tile_lat_span(&self, depth: u8) -> f64 {
        self.root.lat_span() / self.tile_count(depth) as f64
    }

    /// Longitude of the western edge of column `col`. Column `2^depth` is the
    /// root's eastern edge, returned exactly.
    pub fn lon_edge(&self, depth: u8, col: u32) -> f64 {
        if col >= self.tile_count(depth) {
            return self.root.east;
        }
        self.root.west + col as f64 * self.tile_lon_span(depth)
    }

    /// Latitude of the northern edge of row `row`, counting down from the root's
    /// north. Row `2^depth` is the root's southern edge, returned exactly.
    pub fn lat_edge(&self, depth: u8, row: u32) -> f64 {
        if row >= self.tile_count(depth) {
            return self.root.south;
        }
        self.root.north - row as f64 * self.tile_lat_span(depth)
    }

    fn index(depth: u8) -> usize {
        (depth.min(MAX_DEPTH)) as usize
    }
}
