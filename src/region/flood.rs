use std::collections::VecDeque;

use glam::IVec2;

use crate::config::FloodFillMode;
use crate::grid::OccupancyGrid;
use crate::types::{CellState, GridError};

const WEST: IVec2 = IVec2::NEG_X;
const EAST: IVec2 = IVec2::X;
const NORTH: IVec2 = IVec2::NEG_Y;
const SOUTH: IVec2 = IVec2::Y;

/// Propagate Free from `start` through 4-connected Unknown cells.
///
/// Cells that are already Free or Occupied block propagation; `start` itself
/// is always expanded. In [`FloodFillMode::Reference`] an Unknown east
/// neighbour is queued for expansion without being marked, so a cell only
/// ever reached by an eastward step stays Unknown.
///
/// Returns the number of cells turned Free.
pub fn flood_fill(
    start: IVec2,
    grid: &mut OccupancyGrid,
    mode: FloodFillMode,
) -> Result<usize, GridError> {
    grid.geometry().checked_cell(start)?;

    let mut filled = 0;
    let mut fringe = VecDeque::new();
    fringe.push_front(start);

    // Each cell turns Free at most once and unmarked east pushes only move
    // east, so the fringe drains.
    while let Some(cell) = fringe.pop_back() {
        for offset in [WEST, EAST, NORTH, SOUTH] {
            let next = cell + offset;
            let Some(state) = grid.get_signed(next).copied() else {
                continue;
            };
            if !state.is_unknown() {
                continue;
            }
            if offset != EAST || mode == FloodFillMode::Symmetric {
                grid.set_signed(next, CellState::Free)?;
                filled += 1;
            }
            fringe.push_front(next);
        }
    }

    Ok(filled)
}
