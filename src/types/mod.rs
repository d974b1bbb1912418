pub mod cell;
pub mod constants;
pub mod error;
pub mod geometry;

pub use cell::CellState;
pub use constants::*;
pub use error::GridError;
pub use geometry::{Bounds, GridGeometry};
