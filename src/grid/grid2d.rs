use glam::{DVec2, IVec2, UVec2};

use crate::types::{GridError, GridGeometry};

/// Dense row-major 2D grid addressed by `(ix, iy)` cell indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d<T> {
    geometry: GridGeometry,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(geometry: GridGeometry, data: Vec<T>) -> Result<Self, GridError> {
        let expected_len = geometry.cell_count();
        if data.len() != expected_len {
            return Err(GridError::InvalidData(format!(
                "data length {} does not match map size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { geometry, data })
    }

    /// Grid with every cell set to `value`.
    pub fn filled(geometry: GridGeometry, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; geometry.cell_count()],
            geometry,
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn resolution(&self) -> f64 {
        self.geometry.resolution
    }

    pub fn get(&self, pos: UVec2) -> Option<&T> {
        if pos.x >= self.geometry.width || pos.y >= self.geometry.height {
            return None;
        }
        let idx = self.index(pos);
        Some(&self.data[idx])
    }

    /// Signed lookup; `None` for cells outside the grid.
    pub fn get_signed(&self, cell: IVec2) -> Option<&T> {
        if !self.geometry.contains(cell) {
            return None;
        }
        self.get(cell.as_uvec2())
    }

    pub fn get_mut(&mut self, pos: UVec2) -> Option<&mut T> {
        if pos.x >= self.geometry.width || pos.y >= self.geometry.height {
            return None;
        }
        let idx = self.index(pos);
        Some(&mut self.data[idx])
    }

    pub fn set(&mut self, pos: UVec2, value: T) -> Result<(), GridError> {
        if pos.x >= self.geometry.width || pos.y >= self.geometry.height {
            return Err(GridError::OutOfBounds {
                cell: pos.as_ivec2(),
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }
        let idx = self.index(pos);
        self.data[idx] = value;
        Ok(())
    }

    /// Like [`Grid2d::set`] for signed cell indices.
    pub fn set_signed(&mut self, cell: IVec2, value: T) -> Result<(), GridError> {
        let pos = self.geometry.checked_cell(cell)?;
        self.set(pos, value)
    }

    fn index(&self, pos: UVec2) -> usize {
        (pos.y as usize) * (self.geometry.width as usize) + (pos.x as usize)
    }

    pub fn map_to_world(&self, cell: IVec2) -> DVec2 {
        self.geometry.cell_to_world(cell)
    }

    /// Cell containing a world point, or `None` if it falls outside the grid.
    pub fn world_to_map(&self, pos: DVec2) -> Option<UVec2> {
        let cell = self.geometry.world_to_cell(pos);
        self.geometry.contains(cell).then(|| cell.as_uvec2())
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Bounds;

    use super::*;

    fn geometry(width: u32, height: u32) -> GridGeometry {
        GridGeometry::from_bounds(
            Bounds {
                min: DVec2::ZERO,
                max: DVec2::new(width as f64, height as f64),
            },
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn rejects_mismatched_data() {
        let err = Grid2d::new(geometry(3, 3), vec![0u8; 8]).unwrap_err();
        assert!(matches!(err, GridError::InvalidData(_)));
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid2d::filled(geometry(4, 3), 0u8);
        grid.set(UVec2::new(3, 2), 7).unwrap();
        assert_eq!(grid.get(UVec2::new(3, 2)), Some(&7));
        assert_eq!(grid.get_signed(IVec2::new(3, 2)), Some(&7));
        assert_eq!(grid.data()[2 * 4 + 3], 7);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut grid = Grid2d::filled(geometry(2, 2), 0u8);
        assert!(grid.get(UVec2::new(2, 0)).is_none());
        assert!(grid.get_signed(IVec2::new(-1, 0)).is_none());
        assert!(matches!(
            grid.set(UVec2::new(0, 2), 1),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.set_signed(IVec2::new(0, -1), 1),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn world_to_map_to_world() {
        let grid = Grid2d::filled(geometry(10, 10), 0u8);
        let cell = grid.world_to_map(DVec2::new(2.2, 3.7)).unwrap();
        assert_eq!(cell, UVec2::new(2, 4));
        assert_eq!(grid.map_to_world(cell.as_ivec2()), DVec2::new(2.0, 4.0));
        assert!(grid.world_to_map(DVec2::new(-0.6, 0.0)).is_none());
    }
}
