use std::collections::HashMap;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::{debug, info};

use crate::query_parameters::RasterQuery;
use crate::raster_result::RasterResult;
use crate::rasterer::Rasterer;

pub const DEFAULT_RASTER_CACHE_SIZE: usize = 64;

/// Bit-exact identity of a query; floats compared by their bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RasterCacheKey {
    west: u64,
    north: u64,
    east: u64,
    south: u64,
    width: u64,
}

impl RasterCacheKey {
    fn new(query: &RasterQuery) -> Self {
        Self {
            west: query.bounds().west.to_bits(),
            north: query.bounds().north.to_bits(),
            east: query.bounds().east.to_bits(),
            south: query.bounds().south.to_bits(),
            width: query.width().to_bits(),
        }
    }
}

/// Remembers recent rasters so repeated viewport requests skip recomputation.
///
/// Viewport height plays no part in a raster, so queries differing only in
/// height share an entry.
pub struct RasterCache {
    rasterer: Rasterer,
    map: LruCache<RasterCacheKey, RasterResult>,
}

impl RasterCache {
    pub fn new(rasterer: Rasterer, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            rasterer,
            map: LruCache::new(capacity),
        }
    }

    pub fn rasterer(&self) -> &Rasterer {
        &self.rasterer
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn compute_raster(&mut self, query: &RasterQuery) -> RasterResult {
        let key = RasterCacheKey::new(query);
        if let Some(result) = self.map.get(&key) {
            debug!("Raster cache hit");
            return result.clone();
        }

        info!("Raster cache miss, {} entries cached", self.map.len());
        let result = self.rasterer.compute_raster(query);
        self.map.put(key, result.clone());
        result
    }

    /// Like [`Rasterer::get_map_raster`]; failed requests are not cached.
    pub fn get_map_raster(&mut self, params: &HashMap<String, f64>) -> RasterResult {
        match RasterQuery::from_params(params) {
            Ok(query) => self.compute_raster(&query),
            Err(_) => self.rasterer.get_map_raster(params),
        }
    }
}
