pub mod line;

pub use line::rasterize;
