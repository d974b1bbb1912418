use glam::IVec2;
use log::warn;

use crate::config::ErrorPolicy;
use crate::grid::OccupancyGrid;
use crate::iterators::rasterize;
use crate::types::{CellState, GridError};

/// Outcome of [`trace_free_space`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    /// Rays traced to completion.
    pub rays: usize,
    /// Cell writes performed, counting repeats.
    pub cells_marked: usize,
    /// First out-of-bounds cell when best-effort tracing stopped early.
    pub stopped_at: Option<IVec2>,
}

/// Mark free space along rays chained through the obstacle cells.
///
/// The first ray starts one cell west of `sensor`; every following ray starts
/// at the previous obstacle, so connector cells between neighbouring hits are
/// marked too. Every rasterized cell is marked Free, endpoints included.
///
/// On a cell outside the grid, [`ErrorPolicy::Strict`] returns the error and
/// [`ErrorPolicy::BestEffort`] stops all tracing, keeping the cells already
/// written.
pub fn trace_free_space(
    grid: &mut OccupancyGrid,
    sensor: IVec2,
    obstacles: &[IVec2],
    policy: ErrorPolicy,
) -> Result<TraceSummary, GridError> {
    let mut summary = TraceSummary::default();
    let mut previous = sensor - IVec2::X;

    for &cell in obstacles {
        for step in rasterize(previous, cell) {
            if let Err(err) = grid.set_signed(step, CellState::Free) {
                match policy {
                    ErrorPolicy::Strict => return Err(err),
                    ErrorPolicy::BestEffort => {
                        warn!(
                            "free-space trace stopped after {} rays: {}",
                            summary.rays, err
                        );
                        summary.stopped_at = Some(step);
                        return Ok(summary);
                    }
                }
            }
            summary.cells_marked += 1;
        }
        summary.rays += 1;
        previous = cell;
    }

    Ok(summary)
}
