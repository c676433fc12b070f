use std::fmt;

use crate::tile::Tile;
use crate::types::BoundingBox;

/// Answer to a raster query: the tiles to draw, row by row from the north, and
/// the geographic corners of the image they form.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterResult {
    pub depth: u8,
    pub grid: Vec<Vec<Tile>>,
    pub raster_ul_lon: f64,
    pub raster_ul_lat: f64,
    pub raster_lr_lon: f64,
    pub raster_lr_lat: f64,
    pub query_success: bool,
}

impl RasterResult {
    /// Result for a request that could not be evaluated.
    pub fn failed() -> Self {
        Self {
            depth: 0,
            grid: Vec::new(),
            raster_ul_lon: 0.0,
            raster_ul_lat: 0.0,
            raster_lr_lon: 0.0,
            raster_lr_lat: 0.0,
            query_success: false,
        }
    }

    /// Tile file names, rows outer.
    pub fn render_grid(&self) -> Vec<Vec<String>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(Tile::file_name).collect())
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.grid.iter().flatten()
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox {
            west: self.raster_ul_lon,
            north: self.raster_ul_lat,
            east: self.raster_lr_lon,
            south: self.raster_lr_lat,
        }
    }
}

impl fmt::Display for RasterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "query_success: {}", self.query_success)?;
        writeln!(f, "depth: {}", self.depth)?;
        writeln!(f, "raster_ul_lon: {}", self.raster_ul_lon)?;
        writeln!(f, "raster_ul_lat: {}", self.raster_ul_lat)?;
        writeln!(f, "raster_lr_lon: {}", self.raster_lr_lon)?;
        writeln!(f, "raster_lr_lat: {}", self.raster_lr_lat)?;
        write!(f, "render_grid: {}x{}", self.rows(), self.cols())?;
        for row in &self.grid {
            writeln!(f)?;
            let names: Vec<String> = row.iter().map(Tile::file_name).collect();
            write!(f, "  {}", names.join(" "))?;
        }
        Ok(())
    }
}
