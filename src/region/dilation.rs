use glam::IVec2;

use crate::grid::OccupancyGrid;
use crate::types::CellState;

/// Offsets of the 2x2 block written for each obstacle.
const BLOCK: [IVec2; 4] = [IVec2::ZERO, IVec2::X, IVec2::Y, IVec2::ONE];

/// Mark each obstacle cell and its 2x2 block Occupied.
///
/// An obstacle is dilated only when `ix < width - 2` and `iy < height - 2`;
/// obstacles near the upper grid edges (or outside the grid) are skipped.
/// Overwrites Free and Unknown. Returns the number of obstacles dilated.
pub fn dilate_obstacles(grid: &mut OccupancyGrid, cells: &[IVec2]) -> usize {
    let x_limit = i64::from(grid.width()) - 2;
    let y_limit = i64::from(grid.height()) - 2;

    let mut dilated = 0;
    for &cell in cells {
        if cell.x < 0
            || cell.y < 0
            || i64::from(cell.x) >= x_limit
            || i64::from(cell.y) >= y_limit
        {
            continue;
        }

        for offset in BLOCK {
            if let Some(state) = grid.get_mut((cell + offset).as_uvec2()) {
                *state = CellState::Occupied;
            }
        }
        dilated += 1;
    }

    dilated
}
