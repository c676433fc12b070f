use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::{MapConfig, MAX_DEPTH};
use crate::query_parameters::RasterQuery;
use crate::raster_result::RasterResult;
use crate::tile::Tile;
use crate::tile_geometry::TileGeometry;
use crate::types::BoundingBox;
use crate::RasterError;

/// Tile indices covering a query along one axis, with the outer edges of the
/// first and last covering tile.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisRange {
    start: u32,
    count: u32,
    first_edge: f64,
    last_edge: f64,
}

/// Selects the zoom depth and the grid of tiles covering a query box.
///
/// Holds only tables computed at construction, so a single instance can be
/// shared by any number of callers.
#[derive(Debug, Clone)]
pub struct Rasterer {
    config: MapConfig,
    geometry: TileGeometry,
}

impl Rasterer {
    pub fn new(config: MapConfig) -> Self {
        let geometry = TileGeometry::new(&config);
        Self { config, geometry }
    }

    /// Builds a rasterer over `root`, rejecting boxes without area and a zero
    /// tile size.
    pub fn from_root(root: BoundingBox, tile_size: u32) -> Result<Self, RasterError> {
        Ok(Self::new(MapConfig::new(root, tile_size)?))
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }

    /// Coarsest depth whose tiles resolve at least as much longitude per pixel
    /// as the viewport needs; the finest depth when none does.
    pub fn select_depth(&self, query: &RasterQuery) -> u8 {
        let target = query.lon_dpp();
        let depth = (0..MAX_DEPTH)
            .find(|&depth| self.geometry.lon_dpp(depth) <= target)
            .unwrap_or(MAX_DEPTH);

        debug!("Selected depth {} for target lonDPP {}", depth, target);
        depth
    }

    /// Computes the grid of tiles covering `query` at the selected depth.
    ///
    /// Queries reaching past the root bounds are cut at the root; a query that
    /// misses the root entirely yields an empty grid.
    pub fn compute_raster(&self, query: &RasterQuery) -> RasterResult {
        let depth = self.select_depth(query);
        let bounds = query.bounds();

        let cols = self.column_range(depth, bounds.west, bounds.east);
        let rows = self.row_range(depth, bounds.north, bounds.south);

        let grid = if cols.count == 0 || rows.count == 0 {
            Vec::new()
        } else {
            (rows.start..rows.start + rows.count)
                .map(|y| {
                    (cols.start..cols.start + cols.count)
                        .map(|x| Tile::new(depth, x, y))
                        .collect()
                })
                .collect()
        };

        debug!(
            "Raster at depth {}: {} rows from {}, {} cols from {}",
            depth, rows.count, rows.start, cols.count, cols.start
        );

        RasterResult {
            depth,
            grid,
            raster_ul_lon: cols.first_edge,
            raster_ul_lat: rows.first_edge,
            raster_lr_lon: cols.last_edge,
            raster_lr_lat: rows.last_edge,
            query_success: true,
        }
    }

    /// Evaluates a request given as named parameters. Missing or degenerate
    /// parameters give a result with `query_success == false`.
    pub fn get_map_raster(&self, params: &HashMap<String, f64>) -> RasterResult {
        match RasterQuery::from_params(params) {
            Ok(query) => self.compute_raster(&query),
            Err(e) => {
                warn!("Rejecting raster request: {}", e);
                RasterResult::failed()
            }
        }
    }

    // Skips whole columns while the next edge is still west of the query, then
    // takes columns until one reaches the query's east edge.
    fn column_range(&self, depth: u8, west: f64, east: f64) -> AxisRange {
        let max = self.geometry.tile_count(depth);

        let mut start = 0;
        while start < max && self.geometry.lon_edge(depth, start + 1) < west {
            start += 1;
        }
        let mut end = start;
        while end < max && self.geometry.lon_edge(depth, end) < east {
            end += 1;
        }

        AxisRange {
            start,
            count: end - start,
            first_edge: self.geometry.lon_edge(depth, start),
            last_edge: self.geometry.lon_edge(depth, end),
        }
    }

    // Same walk as `column_range`, southwards from the root's north edge.
    fn row_range(&self, depth: u8, north: f64, south: f64) -> AxisRange {
        let max = self.geometry.tile_count(depth);

        let mut start = 0;
        while start < max && self.geometry.lat_edge(depth, start + 1) > north {
            start += 1;
        }
        let mut end = start;
        while end < max && self.geometry.lat_edge(depth, end) > south {
            end += 1;
        }

        AxisRange {
            start,
            count: end - start,
            first_edge: self.geometry.lat_edge(depth, start),
            last_edge: self.geometry.lat_edge(depth, end),
        }
    }
}
