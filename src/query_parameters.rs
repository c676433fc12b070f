use std::collections::HashMap;

use crate::types::BoundingBox;
use crate::RasterError;

/// A validated raster request: the query box and the viewport size in pixels.
///
/// Only constructible through [`RasterQuery::new`] or
/// [`RasterQuery::from_params`], so every instance has positive area and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterQuery {
    bounds: BoundingBox,
    width: f64,
    height: f64,
}

impl RasterQuery {
    pub const ULLON: &'static str = "ullon";
    pub const ULLAT: &'static str = "ullat";
    pub const LRLON: &'static str = "lrlon";
    pub const LRLAT: &'static str = "lrlat";
    pub const WIDTH: &'static str = "w";
    pub const HEIGHT: &'static str = "h";

    pub fn new(bounds: BoundingBox, width: f64, height: f64) -> Result<Self, RasterError> {
        bounds.validate().map_err(RasterError::InvalidQuery)?;
        if !(width.is_finite() && width > 0.0) {
            return Err(RasterError::invalid_query(format!(
                "viewport width must be positive, got {}",
                width
            )));
        }
        if !(height.is_finite() && height >= 0.0) {
            return Err(RasterError::invalid_query(format!(
                "viewport height must not be negative, got {}",
                height
            )));
        }
        Ok(Self {
            bounds,
            width,
            height,
        })
    }

    /// Builds a query from request parameters keyed `ullon`, `ullat`, `lrlon`,
    /// `lrlat`, `w` and `h`.
    pub fn from_params(params: &HashMap<String, f64>) -> Result<Self, RasterError> {
        let get = |key: &str| {
            params
                .get(key)
                .copied()
                .ok_or_else(|| RasterError::invalid_query(format!("missing parameter {}", key)))
        };

        let bounds = BoundingBox::new(
            get(Self::ULLON)?,
            get(Self::ULLAT)?,
            get(Self::LRLON)?,
            get(Self::LRLAT)?,
        )?;
        Self::new(bounds, get(Self::WIDTH)?, get(Self::HEIGHT)?)
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Longitude each viewport pixel has to cover.
    pub fn lon_dpp(&self) -> f64 {
        self.bounds.lon_span() / self.width
    }
}
