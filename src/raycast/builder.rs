use glam::IVec2;
use log::{debug, warn};

use crate::config::{ErrorPolicy, GridConfig};
use crate::grid::OccupancyGrid;
use crate::raycast::trace::trace_free_space;
use crate::raycast::utils::obstacle_points;
use crate::region::{dilate_obstacles, flood_fill};
use crate::types::{GridError, GridGeometry};

/// Builds occupancy grids from obstacle coordinates observed by one scan.
///
/// The sensor sits at the world origin. Obstacle `i` is `(xs[i], ys[i])`.
///
/// # Example
///
/// ```
/// use scan_grid::{CellState, GridBuilder, GridConfig};
///
/// let xs = [-5.0, 5.0, 5.0, -5.0];
/// let ys = [-5.0, -5.0, 5.0, 5.0];
/// let grid = GridBuilder::new(GridConfig::default())
///     .generate(&xs, &ys, 1.0)
///     .expect("scan should produce a grid");
///
/// assert_eq!(grid.width(), 12);
/// assert!(grid.count(CellState::Occupied) > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    config: GridConfig,
}

impl GridBuilder {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Size the grid and trace free space; no fill or dilation.
    pub fn build(
        &self,
        xs: &[f64],
        ys: &[f64],
        resolution: f64,
    ) -> Result<OccupancyGrid, GridError> {
        let (grid, _) = self.build_with_cells(xs, ys, resolution)?;
        Ok(grid)
    }

    /// Full pipeline: trace, fill from the sensor cell, dilate obstacles.
    pub fn generate(
        &self,
        xs: &[f64],
        ys: &[f64],
        resolution: f64,
    ) -> Result<OccupancyGrid, GridError> {
        let (mut grid, cells) = self.build_with_cells(xs, ys, resolution)?;

        let sensor = grid.geometry().sensor_cell();
        match flood_fill(sensor, &mut grid, self.config.flood_fill) {
            Ok(filled) => debug!("flood fill from {sensor} marked {filled} cells free"),
            Err(err) if self.config.error_policy == ErrorPolicy::BestEffort => {
                warn!("skipping flood fill: {err}");
            }
            Err(err) => return Err(err),
        }

        let dilated = dilate_obstacles(&mut grid, &cells);
        debug!("dilated {dilated} of {} obstacles", cells.len());

        Ok(grid)
    }

    fn build_with_cells(
        &self,
        xs: &[f64],
        ys: &[f64],
        resolution: f64,
    ) -> Result<(OccupancyGrid, Vec<IVec2>), GridError> {
        self.config.validate()?;
        let points = obstacle_points(xs, ys)?;
        let geometry = GridGeometry::from_obstacles(
            &points,
            resolution,
            self.config.extend_area,
            self.config.enclose_origin,
        )?;
        debug!(
            "grid {}x{} over [{}, {}] at resolution {}",
            geometry.width, geometry.height, geometry.min, geometry.max, geometry.resolution
        );

        let cells: Vec<IVec2> = points.iter().map(|p| geometry.world_to_cell(*p)).collect();
        let mut grid = OccupancyGrid::unknown(geometry);
        let summary = trace_free_space(
            &mut grid,
            geometry.sensor_cell(),
            &cells,
            self.config.error_policy,
        )?;
        debug!(
            "traced {} of {} rays, {} cell writes",
            summary.rays,
            cells.len(),
            summary.cells_marked
        );

        Ok((grid, cells))
    }
}

/// [`GridBuilder::generate`] with the default configuration.
pub fn generate_occupancy_grid(
    xs: &[f64],
    ys: &[f64],
    resolution: f64,
) -> Result<OccupancyGrid, GridError> {
    GridBuilder::default().generate(xs, ys, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloodFillMode;
    use crate::types::CellState;

    fn square_scan() -> (Vec<f64>, Vec<f64>) {
        // Walls of a 10x10 room around the sensor, swept in scan order.
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let walls: [fn(f64) -> (f64, f64); 4] = [
            |t| (t, -5.0),
            |t| (5.0, t),
            |t| (-t, 5.0),
            |t| (-5.0, -t),
        ];
        for wall in walls {
            for i in -5..5 {
                let (x, y) = wall(i as f64);
                xs.push(x);
                ys.push(y);
            }
        }
        (xs, ys)
    }

    #[test]
    fn build_leaves_interior_unknown() {
        let (xs, ys) = square_scan();
        let grid = GridBuilder::default().build(&xs, &ys, 1.0).unwrap();

        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 12);
        assert_eq!(grid.count(CellState::Occupied), 0);
        assert!(grid.count(CellState::Free) > 0);
        assert_eq!(
            grid.state(grid.geometry().sensor_cell()),
            Some(CellState::Unknown)
        );
    }

    #[test]
    fn generate_fills_and_dilates() {
        let (xs, ys) = square_scan();
        let built = GridBuilder::default().build(&xs, &ys, 1.0).unwrap();
        let grid = GridBuilder::default().generate(&xs, &ys, 1.0).unwrap();

        assert!(grid.count(CellState::Free) > built.count(CellState::Free));
        assert!(grid.count(CellState::Occupied) > 0);
        assert_eq!(
            grid.state(grid.geometry().sensor_cell()),
            Some(CellState::Free)
        );
    }

    #[test]
    fn symmetric_fill_frees_at_least_as_much() {
        let (xs, ys) = square_scan();
        let reference = GridBuilder::default().generate(&xs, &ys, 1.0).unwrap();
        let symmetric = GridBuilder::new(GridConfig {
            flood_fill: FloodFillMode::Symmetric,
            ..Default::default()
        })
        .generate(&xs, &ys, 1.0)
        .unwrap();

        assert!(symmetric.count(CellState::Free) >= reference.count(CellState::Free));
        assert_eq!(
            symmetric.count(CellState::Occupied),
            reference.count(CellState::Occupied)
        );
    }

    #[test]
    fn rejects_empty_and_mismatched_input() {
        let builder = GridBuilder::default();
        assert!(matches!(
            builder.generate(&[], &[], 1.0),
            Err(GridError::EmptyInput)
        ));
        assert!(matches!(
            builder.generate(&[1.0, 2.0], &[1.0], 1.0),
            Err(GridError::MismatchedInput { .. })
        ));
    }

    #[test]
    fn strict_mode_reports_obstacle_on_far_edge() {
        // At resolution 4 the far corner rounds onto index `width`.
        let xs = [-10.0, 10.0];
        let ys = [-10.0, 10.0];

        let strict = GridBuilder::new(GridConfig::strict()).generate(&xs, &ys, 4.0);
        assert!(matches!(strict, Err(GridError::OutOfBounds { .. })));

        let relaxed = GridBuilder::default().generate(&xs, &ys, 4.0).unwrap();
        assert_eq!(relaxed.width(), 5);
    }

    #[test]
    fn sensor_outside_grid_skips_fill_or_fails() {
        // Hits all lie west of the sensor; the grid ends at x = 0, so the
        // sensor cell is (6, 4) on a 6x8 grid while every ray stays inside.
        let xs = [-5.0, -5.0, -1.0, -1.0];
        let ys = [-3.0, 3.0, 3.0, -3.0];
        let config = GridConfig {
            extend_area: 2.0,
            ..Default::default()
        };

        let grid = GridBuilder::new(config.clone())
            .generate(&xs, &ys, 1.0)
            .unwrap();
        assert_eq!((grid.width(), grid.height()), (6, 8));
        assert_eq!(grid.geometry().sensor_cell(), IVec2::new(6, 4));
        assert_eq!(grid.count(CellState::Free), 17);
        assert_eq!(grid.count(CellState::Occupied), 4);
        // Inside the traced outline but never filled.
        assert_eq!(grid.state(IVec2::new(3, 5)), Some(CellState::Unknown));

        let strict = GridBuilder::new(GridConfig {
            error_policy: ErrorPolicy::Strict,
            ..config.clone()
        })
        .generate(&xs, &ys, 1.0);
        assert!(matches!(
            strict,
            Err(GridError::OutOfBounds { cell, width: 6, height: 8 }) if cell == IVec2::new(6, 4)
        ));

        let enclosed = GridBuilder::new(GridConfig {
            error_policy: ErrorPolicy::Strict,
            enclose_origin: true,
            ..config
        })
        .generate(&xs, &ys, 1.0)
        .unwrap();
        assert_eq!(enclosed.width(), 7);
        assert!(enclosed.count(CellState::Free) > grid.count(CellState::Free));
    }

    #[test]
    fn rejects_invalid_config() {
        let builder = GridBuilder::new(GridConfig {
            extend_area: f64::NAN,
            ..Default::default()
        });
        assert!(matches!(
            builder.build(&[1.0], &[1.0], 1.0),
            Err(GridError::InvalidConfig(_))
        ));
    }
}
