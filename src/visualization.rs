use std::path::Path;

use glam::UVec2;
use image::{GrayImage, Luma};

use crate::grid::OccupancyGrid;
use crate::types::{CellState, GridError};

/// Convert an occupancy grid to a grayscale image preview.
///
/// - **Free** becomes white-ish.
/// - **Occupied** becomes black.
/// - **Unknown** becomes mid-gray.
///
/// Columns are `ix`. The grid's `iy = 0` row is written to the **bottom** of
/// the image, matching the usual map orientation.
pub fn occupancy_grid_to_image(grid: &OccupancyGrid) -> GrayImage {
    let width = grid.width();
    let height = grid.height();
    let mut img = GrayImage::new(width, height);

    for y_img in 0..height {
        let y_grid = height - 1 - y_img;
        for x in 0..width {
            let state = grid
                .get(UVec2::new(x, y_grid))
                .copied()
                .unwrap_or_default();
            img.put_pixel(x, y_img, Luma([cell_to_gray(state)]));
        }
    }

    img
}

/// Write the preview as an image file; the format follows the extension.
pub fn save_preview(grid: &OccupancyGrid, path: impl AsRef<Path>) -> Result<(), GridError> {
    occupancy_grid_to_image(grid).save(path.as_ref())?;
    Ok(())
}

fn cell_to_gray(state: CellState) -> u8 {
    // ROS-ish palette: unknown ~205, free white, occupied black.
    match state {
        CellState::Unknown => 205,
        CellState::Free => 254,
        CellState::Occupied => 0,
    }
}
