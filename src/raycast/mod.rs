//! Ray-casting occupancy grid construction.
//!
//! [`GridBuilder::build`] sizes the grid from the obstacle set and traces free
//! space along chained rays; [`GridBuilder::generate`] additionally runs the
//! region fill and obstacle dilation.

pub mod builder;
pub mod trace;
mod utils;

pub use builder::{GridBuilder, generate_occupancy_grid};
pub use trace::{TraceSummary, trace_free_space};
