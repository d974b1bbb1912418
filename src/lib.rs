//! Ray-casting occupancy grids from a single 2D LIDAR scan.
//!
//! Obstacle hits are traced back toward the sensor with integer Bresenham
//! lines, free space is grown from the sensor cell by a region fill, and hits
//! are finally dilated into 2x2 occupied blocks.

pub mod config;
pub mod grid;
pub mod iterators;
pub mod loaders;
pub mod raycast;
pub mod region;
pub mod types;
pub mod visualization;

pub use config::{ErrorPolicy, FloodFillMode, GridConfig, MapperConfig, ScanConfig, load_config};
pub use grid::{Grid2d, OccupancyGrid};
pub use iterators::rasterize;
pub use loaders::scan::{LidarScan, ScanPoint, load_scan};
pub use raycast::{GridBuilder, generate_occupancy_grid};
pub use region::{dilate_obstacles, flood_fill};
pub use types::{CellState, GridError, GridGeometry};
