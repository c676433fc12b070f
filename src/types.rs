use crate::RasterError;

/// Geographic box in degrees, west/east longitude and north/south latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub south: f64,
}

impl BoundingBox {
    /// Builds a box from its upper-left and lower-right corners.
    pub fn new(west: f64, north: f64, east: f64, south: f64) -> Result<Self, RasterError> {
        let bbox = Self {
            west,
            north,
            east,
            south,
        };
        bbox.validate().map_err(RasterError::InvalidQuery)?;
        Ok(bbox)
    }

    /// Checks that every coordinate is finite and the box has positive area.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(self.west.is_finite()
            && self.north.is_finite()
            && self.east.is_finite()
            && self.south.is_finite())
        {
            return Err("bounding box coordinates must be finite".to_string());
        }
        if self.west >= self.east {
            return Err(format!(
                "west ({}) must be less than east ({})",
                self.west, self.east
            ));
        }
        if self.south >= self.north {
            return Err(format!(
                "south ({}) must be less than north ({})",
                self.south, self.north
            ));
        }
        Ok(())
    }

    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south
            && latitude <= self.north
            && longitude >= self.west
            && longitude <= self.east
    }

    /// True when `other` lies entirely inside this box, edges included.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.west >= self.west
            && other.east <= self.east
            && other.north <= self.north
            && other.south >= self.south
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(other.south > self.north
            || other.north < self.south
            || other.west > self.east
            || other.east < self.west)
    }
}
