//! Grid extents and world/cell conversions.

use glam::{DVec2, IVec2, UVec2};

use super::error::GridError;

/// World-axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Bounds that contain nothing. Expand from here.
    pub fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Returns true if nothing has been included yet. A single point is not empty.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand this bounds to include the point (in place).
    pub fn expand_to_include(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand by a margin in all directions.
    pub fn expand_by(&mut self, margin: f64) {
        self.min -= DVec2::splat(margin);
        self.max += DVec2::splat(margin);
    }

    /// Snap both corners to whole world units, rounding half to even.
    pub fn snapped(&self) -> Self {
        Self {
            min: DVec2::new(self.min.x.round_ties_even(), self.min.y.round_ties_even()),
            max: DVec2::new(self.max.x.round_ties_even(), self.max.y.round_ties_even()),
        }
    }
}

/// Extents, resolution and cell counts of an occupancy grid.
///
/// Cell `(ix, iy)` covers the world point `min + (ix, iy) * resolution`;
/// world points map to cells with round-half-to-even.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub min: DVec2,
    pub max: DVec2,
    /// World units per cell.
    pub resolution: f64,
    pub width: u32,
    pub height: u32,
}

impl GridGeometry {
    /// Derive the geometry from a set of obstacle points.
    ///
    /// The extents cover every point (and the sensor origin when
    /// `enclose_origin` is set), padded by `extend_area / 2` on each side and
    /// snapped to whole world units.
    pub fn from_obstacles(
        points: &[DVec2],
        resolution: f64,
        extend_area: f64,
        enclose_origin: bool,
    ) -> Result<Self, GridError> {
        if points.is_empty() {
            return Err(GridError::EmptyInput);
        }

        let mut bounds = Bounds::empty();
        for p in points {
            bounds.expand_to_include(*p);
        }
        if enclose_origin {
            bounds.expand_to_include(DVec2::ZERO);
        }
        bounds.expand_by(extend_area / 2.0);

        Self::from_bounds(bounds.snapped(), resolution)
    }

    pub fn from_bounds(bounds: Bounds, resolution: f64) -> Result<Self, GridError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GridError::InvalidResolution(resolution));
        }

        let width = cell_count(bounds.max.x - bounds.min.x, resolution);
        let height = cell_count(bounds.max.y - bounds.min.y, resolution);
        if width == 0 || height == 0 {
            return Err(GridError::DegenerateGrid { width, height });
        }

        Ok(Self {
            min: bounds.min,
            max: bounds.max,
            resolution,
            width,
            height,
        })
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Cell index of a world point. The result may lie outside the grid.
    pub fn world_to_cell(&self, p: DVec2) -> IVec2 {
        let map = (p - self.min) / self.resolution;
        IVec2::new(round_index(map.x), round_index(map.y))
    }

    /// World point of a cell index.
    pub fn cell_to_world(&self, cell: IVec2) -> DVec2 {
        self.min + cell.as_dvec2() * self.resolution
    }

    /// Cell containing the sensor origin `(0, 0)`.
    pub fn sensor_cell(&self) -> IVec2 {
        self.world_to_cell(DVec2::ZERO)
    }

    /// equivalent to (0 <= x < width && 0 <= y < height) for signed cells
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    pub fn checked_cell(&self, cell: IVec2) -> Result<UVec2, GridError> {
        if self.contains(cell) {
            Ok(cell.as_uvec2())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }
}

fn cell_count(extent: f64, resolution: f64) -> u32 {
    (extent / resolution).round_ties_even().max(0.0) as u32
}

fn round_index(v: f64) -> i32 {
    v.round_ties_even() as i32
}
