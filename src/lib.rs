mod config;
mod errors;
mod query_parameters;
mod raster_cache;
mod raster_result;
mod rasterer;
mod tile;
mod tile_geometry;
mod types;

pub use config::{MapConfig, MAX_DEPTH, ROOT_LRLAT, ROOT_LRLON, ROOT_ULLAT, ROOT_ULLON, TILE_SIZE};
pub use errors::RasterError;
pub use query_parameters::RasterQuery;
pub use raster_cache::{RasterCache, DEFAULT_RASTER_CACHE_SIZE};
pub use raster_result::RasterResult;
pub use rasterer::Rasterer;
pub use tile::Tile;
pub use tile_geometry::TileGeometry;
pub use types::BoundingBox;
