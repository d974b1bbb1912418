//! Region filling applied after free-space tracing.

pub mod dilation;
pub mod flood;

pub use dilation::dilate_obstacles;
pub use flood::flood_fill;
