use glam::IVec2;

use crate::grid::Grid2d;
use crate::types::{CellState, GridGeometry};

pub type OccupancyGrid = Grid2d<CellState>;

impl Grid2d<CellState> {
    /// Grid with every cell Unknown.
    pub fn unknown(geometry: GridGeometry) -> Self {
        Self::filled(geometry, CellState::Unknown)
    }

    /// State of a signed cell, `None` outside the grid.
    pub fn state(&self, cell: IVec2) -> Option<CellState> {
        self.get_signed(cell).copied()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.data().iter().filter(|&&s| s == state).count()
    }

    /// Cell states as occupancy probabilities, row-major.
    pub fn probabilities(&self) -> Vec<f64> {
        self.data().iter().map(|s| s.probability()).collect()
    }
}
